use serde_json::Value;

use super::types::{Asset, Avatar};
use crate::connectors::mapping;

// This vendor already speaks camelCase; only a few keys differ from ours.

pub fn avatar(row: &Value) -> Avatar {
    Avatar {
        id: mapping::id(row, "id"),
        user_id: mapping::string(row, "userId"),
        name: mapping::string(row, "name"),
        gender: mapping::string(row, "gender"),
        body_type: mapping::string(row, "bodyType"),
        status: mapping::string(row, "status"),
        model_url: mapping::url(row, "glbUrl"),
        image_url: mapping::url(row, "renderUrl"),
        created_at: mapping::timestamp(row, "createdAt"),
        updated_at: mapping::timestamp(row, "updatedAt"),
    }
}

pub fn asset(row: &Value) -> Asset {
    Asset {
        id: mapping::id(row, "id"),
        name: mapping::string(row, "name"),
        asset_type: mapping::string(row, "type"),
        gender: mapping::string(row, "gender"),
        tags: mapping::strings(row, "tags"),
        icon_url: mapping::url(row, "iconUrl"),
        model_url: mapping::url(row, "modelUrl"),
        created_at: mapping::timestamp(row, "createdAt"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectors::values::Field;
    use serde_json::json;

    #[test]
    fn avatar_urls_are_renamed() {
        let avatar = avatar(&json!({
            "id": "av_1",
            "userId": "u_1",
            "glbUrl": "https://models.example.com/av_1.glb",
            "renderUrl": "",
            "bodyType": "fullbody",
            "createdAt": 1700000000000_i64
        }));
        assert_eq!(
            avatar.model_url.value().map(|u| u.as_str()),
            Some("https://models.example.com/av_1.glb")
        );
        assert!(avatar.image_url.is_absent());
        assert_eq!(avatar.body_type, Field::Value("fullbody".to_string()));
        assert!(avatar.created_at.value().map(|t| t.is_valid()).unwrap_or(false));
    }

    #[test]
    fn asset_tags_skip_non_strings() {
        let asset = asset(&json!({ "id": 3, "tags": ["hat", 4, "red"], "iconUrl": null }));
        assert_eq!(asset.id, "3");
        assert_eq!(
            asset.tags,
            Field::Value(vec!["hat".to_string(), "red".to_string()])
        );
        assert!(asset.icon_url.is_null());
    }

    #[test]
    fn empty_rows_are_total() {
        assert_eq!(avatar(&json!({})), Avatar::default());
        assert_eq!(asset(&json!({})), Asset::default());
    }
}
