use serde::Serialize;

use crate::connectors::values::{Email, Field, Timestamp, Url};

/// Platform account
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub email: Field<Email>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub first_name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub last_name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub status: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub phone_number: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub avatar_url: Field<Url>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub last_login_at: Field<Timestamp>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub created_at: Field<Timestamp>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub updated_at: Field<Timestamp>,
}

/// Named set of users sharing door and schedule permissions
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub description: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub member_count: Field<i64>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub created_at: Field<Timestamp>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub updated_at: Field<Timestamp>,
}
