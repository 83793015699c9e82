use serde::Serialize;

use crate::connectors::values::{Field, Timestamp, Url};

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Avatar {
    pub id: String,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub user_id: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub gender: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub body_type: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub status: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub model_url: Field<Url>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub image_url: Field<Url>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub created_at: Field<Timestamp>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub updated_at: Field<Timestamp>,
}

/// Wearable or cosmetic item an avatar can be equipped with
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub asset_type: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub gender: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub tags: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub icon_url: Field<Url>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub model_url: Field<Url>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub created_at: Field<Timestamp>,
}
