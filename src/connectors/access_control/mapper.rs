use serde_json::Value;

use super::types::{Group, User};
use crate::connectors::mapping;

pub fn user(row: &Value) -> User {
    User {
        id: mapping::id(row, "id"),
        email: mapping::email(row, "email"),
        first_name: mapping::string(row, "first_name"),
        last_name: mapping::string(row, "last_name"),
        status: mapping::string(row, "status"),
        phone_number: mapping::string(row, "phone_number"),
        avatar_url: mapping::url(row, "avatar_url"),
        last_login_at: mapping::timestamp(row, "last_login_at"),
        created_at: mapping::timestamp(row, "created_at"),
        updated_at: mapping::timestamp(row, "updated_at"),
    }
}

pub fn group(row: &Value) -> Group {
    Group {
        id: mapping::id(row, "id"),
        name: mapping::string(row, "name"),
        description: mapping::string(row, "description"),
        member_count: mapping::integer(row, "member_count"),
        created_at: mapping::timestamp(row, "created_at"),
        updated_at: mapping::timestamp(row, "updated_at"),
    }
}
