//! Translation of vendor HTTP failures into [`ConnectorError`].
//!
//! Each vendor carries an ordered list of [`ErrorRule`]s. The first rule whose
//! status (and optional message fragment) matches decides the error kind; a
//! status no rule covers becomes [`ErrorKind::Unexpected`] carrying the code.

use serde_json::Value;

use super::errors::{ConnectorError, ErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorRule {
    pub status: u16,
    /// Case-insensitive fragment the error message must contain
    pub message_contains: Option<&'static str>,
    pub kind: ErrorKind,
}

impl ErrorRule {
    pub const fn status(status: u16, kind: ErrorKind) -> Self {
        Self {
            status,
            message_contains: None,
            kind,
        }
    }

    pub const fn status_with_message(status: u16, fragment: &'static str, kind: ErrorKind) -> Self {
        Self {
            status,
            message_contains: Some(fragment),
            kind,
        }
    }

    fn matches(&self, status: u16, message: &str) -> bool {
        if self.status != status {
            return false;
        }
        match self.message_contains {
            Some(fragment) => message
                .to_lowercase()
                .contains(&fragment.to_lowercase()),
            None => true,
        }
    }
}

/// Status rules shared by every vendor.
///
/// A 403 whose message mentions rate limiting is throttling, not a permission failure.
pub const DEFAULT_RULES: &[ErrorRule] = &[
    ErrorRule::status_with_message(403, "rate limit", ErrorKind::RateLimitExceeded),
    ErrorRule::status(401, ErrorKind::InvalidCredentials),
    ErrorRule::status(403, ErrorKind::Unauthorized),
    ErrorRule::status(404, ErrorKind::NoSuchObject),
    ErrorRule::status(400, ErrorKind::InvalidInput),
    ErrorRule::status(422, ErrorKind::InvalidInput),
    ErrorRule::status(429, ErrorKind::RateLimitExceeded),
];

/// GitHub also throttles with its older abuse detection 403
pub const GITHUB_RULES: &[ErrorRule] = &[
    ErrorRule::status_with_message(403, "rate limit", ErrorKind::RateLimitExceeded),
    ErrorRule::status_with_message(403, "abuse detection", ErrorKind::RateLimitExceeded),
    ErrorRule::status(401, ErrorKind::InvalidCredentials),
    ErrorRule::status(403, ErrorKind::Unauthorized),
    ErrorRule::status(404, ErrorKind::NoSuchObject),
    ErrorRule::status(400, ErrorKind::InvalidInput),
    ErrorRule::status(422, ErrorKind::InvalidInput),
    ErrorRule::status(429, ErrorKind::RateLimitExceeded),
];

pub fn classify(rules: &[ErrorRule], status: u16, message: &str) -> ErrorKind {
    rules
        .iter()
        .find(|rule| rule.matches(status, message))
        .map(|rule| rule.kind)
        .unwrap_or(ErrorKind::Unexpected)
}

/// Map an HTTP failure to a domain error.
///
/// `resource_id` is attached to `NoSuchObject` so callers can tell which id was missing.
pub fn normalize(
    rules: &[ErrorRule],
    status: u16,
    message: &str,
    resource_id: Option<&str>,
) -> ConnectorError {
    let kind = classify(rules, status, message);
    let message = if message.is_empty() {
        format!("vendor returned status {}", status)
    } else {
        message.to_string()
    };
    ConnectorError::from_kind(kind, Some(status), message, resource_id)
}

/// Pull a human readable message out of an error body
pub fn error_message(body: &str) -> String {
    let parsed = serde_json::from_str::<Value>(body).ok();
    parsed
        .as_ref()
        .and_then(|value| {
            ["message", "error", "error_description"]
                .iter()
                .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
                .or_else(|| {
                    value
                        .get("error")
                        .and_then(|e| e.get("message"))
                        .and_then(|m| m.as_str())
                })
        })
        .map(str::to_string)
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_follow_status_table() {
        let cases = [
            (401, ErrorKind::InvalidCredentials),
            (403, ErrorKind::Unauthorized),
            (404, ErrorKind::NoSuchObject),
            (400, ErrorKind::InvalidInput),
            (422, ErrorKind::InvalidInput),
            (429, ErrorKind::RateLimitExceeded),
            (500, ErrorKind::Unexpected),
            (418, ErrorKind::Unexpected),
        ];
        for (status, kind) in cases {
            assert_eq!(classify(DEFAULT_RULES, status, ""), kind, "status {}", status);
        }
    }

    #[test]
    fn default_rules_treat_rate_limit_403_as_throttling() {
        assert_eq!(
            classify(DEFAULT_RULES, 403, "Rate limit exceeded"),
            ErrorKind::RateLimitExceeded
        );
        assert_eq!(
            classify(DEFAULT_RULES, 403, "Insufficient role for this door"),
            ErrorKind::Unauthorized
        );
    }

    #[test]
    fn github_403_depends_on_message() {
        assert_eq!(
            classify(GITHUB_RULES, 403, "API Rate Limit exceeded for user ID 1."),
            ErrorKind::RateLimitExceeded
        );
        assert_eq!(
            classify(GITHUB_RULES, 403, "Resource not accessible by integration"),
            ErrorKind::Unauthorized
        );
        assert_eq!(
            classify(
                GITHUB_RULES,
                403,
                "You have triggered an abuse detection mechanism."
            ),
            ErrorKind::RateLimitExceeded
        );
    }

    #[test]
    fn normalize_keeps_status_for_unexpected() {
        match normalize(DEFAULT_RULES, 503, "down", None) {
            ConnectorError::Unexpected { status, message } => {
                assert_eq!(status, Some(503));
                assert_eq!(message, "down");
            }
            other => panic!("unexpected mapping: {:?}", other),
        }
    }

    #[test]
    fn normalize_attaches_resource_id() {
        match normalize(DEFAULT_RULES, 404, "", Some("grp-9")) {
            ConnectorError::NoSuchObject { id, message } => {
                assert_eq!(id.as_deref(), Some("grp-9"));
                assert_eq!(message, "vendor returned status 404");
            }
            other => panic!("unexpected mapping: {:?}", other),
        }
    }

    #[test]
    fn error_message_prefers_json_fields() {
        assert_eq!(error_message(r#"{"message":"Bad credentials"}"#), "Bad credentials");
        assert_eq!(error_message(r#"{"error":{"message":"nope"}}"#), "nope");
        assert_eq!(error_message(r#"{"error":"invalid_grant"}"#), "invalid_grant");
        assert_eq!(error_message("  plain text \n"), "plain text");
    }
}
