use serde_json::Value;

use super::types::{Organization, Team, User};
use crate::connectors::mapping;

pub fn organization(row: &Value) -> Organization {
    Organization {
        id: mapping::id(row, "login"),
        numeric_id: mapping::integer(row, "id"),
        name: mapping::string(row, "name"),
        description: mapping::string(row, "description"),
        email: mapping::email(row, "email"),
        blog: mapping::url(row, "blog"),
        location: mapping::string(row, "location"),
        avatar_url: mapping::url(row, "avatar_url"),
        html_url: mapping::url(row, "html_url"),
        public_repos: mapping::integer(row, "public_repos"),
        created_at: mapping::timestamp(row, "created_at"),
        updated_at: mapping::timestamp(row, "updated_at"),
    }
}

pub fn user(row: &Value) -> User {
    User {
        id: mapping::id(row, "login"),
        numeric_id: mapping::integer(row, "id"),
        name: mapping::string(row, "name"),
        email: mapping::email(row, "email"),
        company: mapping::string(row, "company"),
        account_type: mapping::string(row, "type"),
        site_admin: mapping::boolean(row, "site_admin"),
        avatar_url: mapping::url(row, "avatar_url"),
        html_url: mapping::url(row, "html_url"),
        created_at: mapping::timestamp(row, "created_at"),
    }
}

pub fn team(row: &Value) -> Team {
    Team {
        id: mapping::id(row, "slug"),
        numeric_id: mapping::integer(row, "id"),
        name: mapping::string(row, "name"),
        description: mapping::string(row, "description"),
        privacy: mapping::string(row, "privacy"),
        permission: mapping::string(row, "permission"),
        members_count: mapping::integer(row, "members_count"),
        html_url: mapping::url(row, "html_url"),
    }
}
