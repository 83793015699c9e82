//! Access-control platform connector.
//!
//! Users and groups behind an email/password login. Lists come back as
//! `{ data: [...], totalCount: n }`, single objects either under `data` or bare.

mod connector;
pub mod mapper;
mod producers;
mod types;

pub use connector::AccessControlConnector;
pub use producers::{GroupsProducer, UsersProducer};
pub use types::{Group, User};

use super::error_map::DEFAULT_RULES;
use super::paging::PageStyle;
use super::vendor::{AuthScheme, Envelope, PageTokenSource, ResourceKind, VendorProfile};

pub static VENDOR: VendorProfile = VendorProfile {
    name: "access_control",
    default_base_url: "https://api.accesscontrol.example.com/v1",
    auth: AuthScheme::Login {
        path: "/auth/login",
    },
    envelope: Envelope::Data {
        items: "data",
        total: "totalCount",
    },
    paging: PageStyle::OffsetLimit,
    page_token: PageTokenSource::None,
    error_rules: DEFAULT_RULES,
    probe_path: None,
    resources: &[ResourceKind::Users, ResourceKind::Groups],
};
