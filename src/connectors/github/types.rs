use serde::Serialize;

use crate::connectors::values::{Email, Field, Timestamp, Url};

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Organization login
    pub id: String,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub numeric_id: Field<i64>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub description: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub email: Field<Email>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub blog: Field<Url>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub location: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub avatar_url: Field<Url>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub html_url: Field<Url>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub public_repos: Field<i64>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub created_at: Field<Timestamp>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub updated_at: Field<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User login
    pub id: String,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub numeric_id: Field<i64>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub email: Field<Email>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub company: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub account_type: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub site_admin: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub avatar_url: Field<Url>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub html_url: Field<Url>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub created_at: Field<Timestamp>,
}

/// Organization team, served as the Groups resource
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Team slug
    pub id: String,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub numeric_id: Field<i64>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub description: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub privacy: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub permission: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub members_count: Field<i64>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub html_url: Field<Url>,
}
