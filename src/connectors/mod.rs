//! Vendor connectors
//!
//! Each vendor integration translates the shared producer contract (paged
//! list and get, connect/disconnect, typed errors) into calls against one
//! third-party REST API.
//!
//! ## Architecture Pattern
//!
//! 1. Describe the vendor as data in `{vendor}/mod.rs` (`VendorProfile`)
//! 2. Map vendor rows into domain types in `{vendor}/mapper.rs`
//! 3. Expose producers per resource group in `{vendor}/producers.rs`
//! 4. Compose connection and producers in the `{vendor}/connector.rs` facade
//!
//! ## Usage
//!
//! ```ignore
//! let github = GitHubConnector::new();
//! github.connect(ConnectionProfile::token(token)).await?;
//!
//! let mut page = PagedResults::page(1, 50);
//! github.users_api()?.list(&mut page, "octo-org").await?;
//! ```

pub mod access_control;
pub mod avatar;
pub mod client;
pub mod config;
pub mod connector;
pub mod envelope;
pub mod error_map;
pub mod errors;
pub mod github;
pub mod mapping;
pub mod paging;
pub mod producer;
pub mod values;
pub mod vendor;

pub use access_control::AccessControlConnector;
pub use avatar::AvatarConnector;
pub use client::{HttpHandle, RestConnection};
pub use config::{AccessControlConfig, AvatarConfig, ConnectorConfig, GitHubConfig};
pub use connector::{Connector, ConnectorMetadata};
pub use errors::{ConnectorError, ErrorKind};
pub use github::GitHubConnector;
pub use paging::PagedResults;
pub use values::{Email, Field, Timestamp, Url};
pub use vendor::{ConnectionProfile, Credential, ResourceKind};
