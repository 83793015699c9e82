//! GitHub connector: organizations, their members and their teams.
//!
//! GitHub returns bare JSON arrays; the total comes from `x-total-count` when
//! present and the next page from the `Link` header. A 403 whose message
//! mentions rate limiting is throttling, not a permission problem.

mod connector;
pub mod mapper;
mod producers;
mod types;

pub use connector::GitHubConnector;
pub use producers::{OrganizationsProducer, TeamsProducer, UsersProducer};
pub use types::{Organization, Team, User};

use super::error_map::GITHUB_RULES;
use super::paging::PageStyle;
use super::vendor::{AuthScheme, Envelope, PageTokenSource, ResourceKind, VendorProfile};

pub static VENDOR: VendorProfile = VendorProfile {
    name: "github",
    default_base_url: "https://api.github.com",
    auth: AuthScheme::Bearer,
    envelope: Envelope::BareArray {
        total_header: "x-total-count",
    },
    paging: PageStyle::PageNumber { max_per_page: 100 },
    page_token: PageTokenSource::LinkNext,
    error_rules: GITHUB_RULES,
    probe_path: Some("/user"),
    resources: &[
        ResourceKind::Organizations,
        ResourceKind::Users,
        ResourceKind::Groups,
    ],
};
