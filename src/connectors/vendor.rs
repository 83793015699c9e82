//! Static description of a vendor REST API.
//!
//! A [`VendorProfile`] is plain data: everything that differs between vendors
//! at the transport level (base URL, how credentials become headers, where
//! rows live in a response, which status rules apply) is declared here so the
//! connection and producer code stays shared.

use serde::Serialize;
use std::fmt;

use super::error_map::ErrorRule;
use super::paging::PageStyle;

/// Resource groups a connector may serve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceKind {
    Users,
    Groups,
    Organizations,
    Assets,
    Avatars,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Groups => "groups",
            Self::Organizations => "organizations",
            Self::Assets => "assets",
            Self::Avatars => "avatars",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// Static token sent as `Authorization: Bearer <token>`
    Bearer,
    /// Static key sent in a vendor-specific header
    ApiKeyHeader(&'static str),
    /// Email and password exchanged for a bearer token at `path`
    Login { path: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    /// `{ <items>: [...], <total>: n }` for lists, `{ data: {...} }` or bare for single objects
    Data {
        items: &'static str,
        total: &'static str,
    },
    /// Raw JSON array with the total reported in a header
    BareArray { total_header: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTokenSource {
    None,
    /// URL of the `rel="next"` entry of the `Link` header
    LinkNext,
    Header(&'static str),
}

#[derive(Debug)]
pub struct VendorProfile {
    pub name: &'static str,
    pub default_base_url: &'static str,
    pub auth: AuthScheme,
    pub envelope: Envelope,
    pub paging: PageStyle,
    pub page_token: PageTokenSource,
    pub error_rules: &'static [ErrorRule],
    /// Authenticated GET used to verify a static token on connect
    pub probe_path: Option<&'static str>,
    pub resources: &'static [ResourceKind],
}

#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    Token(String),
    ApiKey(String),
    Password { email: String, password: String },
}

impl Credential {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Token(_) => "token",
            Self::ApiKey(_) => "api key",
            Self::Password { .. } => "email and password",
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(_) => f.write_str("Token(***)"),
            Self::ApiKey(_) => f.write_str("ApiKey(***)"),
            Self::Password { email, .. } => f
                .debug_struct("Password")
                .field("email", email)
                .field("password", &"***")
                .finish(),
        }
    }
}

/// Credential material plus transport overrides, fixed once handed to `connect`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionProfile {
    pub credential: Credential,
    pub base_url: Option<String>,
    /// `None` keeps the HTTP transport's default timeout
    pub timeout_secs: Option<u64>,
}

impl ConnectionProfile {
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            base_url: None,
            timeout_secs: None,
        }
    }

    pub fn token(token: impl Into<String>) -> Self {
        Self::new(Credential::Token(token.into()))
    }

    pub fn api_key(key: impl Into<String>) -> Self {
        Self::new(Credential::ApiKey(key.into()))
    }

    pub fn password(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self::new(Credential::Password {
            email: email.into(),
            password: password.into(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Override wins over the vendor default; trailing slashes are dropped
    pub fn resolve_base_url(&self, vendor: &VendorProfile) -> String {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(vendor.default_base_url)
            .trim_end_matches('/')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectors::error_map::DEFAULT_RULES;

    const TEST_VENDOR: VendorProfile = VendorProfile {
        name: "test",
        default_base_url: "https://api.test.example/v2/",
        auth: AuthScheme::Bearer,
        envelope: Envelope::Data {
            items: "data",
            total: "totalCount",
        },
        paging: PageStyle::OffsetLimit,
        page_token: PageTokenSource::None,
        error_rules: DEFAULT_RULES,
        probe_path: None,
        resources: &[ResourceKind::Users],
    };

    #[test]
    fn base_url_override_takes_precedence() {
        let profile = ConnectionProfile::token("t").with_base_url("http://localhost:9000/");
        assert_eq!(profile.resolve_base_url(&TEST_VENDOR), "http://localhost:9000");

        let profile = ConnectionProfile::token("t");
        assert_eq!(profile.resolve_base_url(&TEST_VENDOR), "https://api.test.example/v2");

        let profile = ConnectionProfile::token("t").with_base_url("  ");
        assert_eq!(profile.resolve_base_url(&TEST_VENDOR), "https://api.test.example/v2");
    }

    #[test]
    fn debug_output_hides_secrets() {
        let rendered = format!("{:?}", ConnectionProfile::password("ops@example.com", "hunter2"));
        assert!(rendered.contains("ops@example.com"));
        assert!(!rendered.contains("hunter2"));
        assert!(!format!("{:?}", Credential::Token("ghp_secret".into())).contains("ghp_secret"));
    }
}
