//! Avatar-generation platform connector.
//!
//! Producers here are built explicitly against a connection and refuse to be
//! constructed while it is closed. The facade builds them the same way.

mod connector;
pub mod mapper;
mod producers;
mod types;

pub use connector::AvatarConnector;
pub use producers::{AssetFilter, AssetsProducer, AvatarFilter, AvatarsProducer};
pub use types::{Asset, Avatar};

use super::error_map::DEFAULT_RULES;
use super::paging::PageStyle;
use super::vendor::{AuthScheme, Envelope, PageTokenSource, ResourceKind, VendorProfile};

pub static VENDOR: VendorProfile = VendorProfile {
    name: "avatar",
    default_base_url: "https://api.avatars.example.com/v1",
    auth: AuthScheme::ApiKeyHeader("x-api-key"),
    envelope: Envelope::Data {
        items: "data",
        total: "totalCount",
    },
    paging: PageStyle::OffsetLimit,
    page_token: PageTokenSource::Header("x-next-page-token"),
    error_rules: DEFAULT_RULES,
    probe_path: None,
    resources: &[ResourceKind::Avatars, ResourceKind::Assets],
};
