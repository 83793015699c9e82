use serde::{Deserialize, Serialize};

use super::vendor::ConnectionProfile;

/// Configuration for vendor connectors
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectorConfig {
    #[serde(default)]
    pub access_control: Option<AccessControlConfig>,
    #[serde(default)]
    pub github: Option<GitHubConfig>,
    #[serde(default)]
    pub avatar: Option<AvatarConfig>,
}

impl ConnectorConfig {
    /// Fill secrets missing from the file in from the environment
    pub fn with_env_secrets(mut self) -> Self {
        let access = self.access_control.get_or_insert_with(Default::default);
        if access.email.is_none() {
            access.email = std::env::var("ACCESS_CONTROL_EMAIL").ok();
        }
        if access.password.is_none() {
            access.password = std::env::var("ACCESS_CONTROL_PASSWORD").ok();
        }

        let github = self.github.get_or_insert_with(Default::default);
        if github.token.is_none() {
            github.token = std::env::var("GITHUB_TOKEN").ok();
        }

        let avatar = self.avatar.get_or_insert_with(Default::default);
        if avatar.api_key.is_none() {
            avatar.api_key = std::env::var("AVATAR_API_KEY").ok();
        }
        self
    }
}

fn apply_overrides(
    profile: ConnectionProfile,
    base_url: &Option<String>,
    timeout_secs: Option<u64>,
) -> ConnectionProfile {
    let profile = match base_url {
        Some(url) => profile.with_base_url(url.clone()),
        None => profile,
    };
    match timeout_secs {
        Some(secs) => profile.with_timeout_secs(secs),
        None => profile,
    }
}

/// Access-control platform connector configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccessControlConfig {
    /// Base URL override (e.g., http://localhost:8080/v1)
    #[serde(default)]
    pub base_url: Option<String>,
    /// HTTP request timeout in seconds; unset keeps the transport default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Login email (from env: ACCESS_CONTROL_EMAIL)
    #[serde(default)]
    pub email: Option<String>,
    /// Login password (from env: ACCESS_CONTROL_PASSWORD)
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
}

impl AccessControlConfig {
    /// Missing secrets become empty strings so `connect` reports them as invalid credentials
    pub fn profile(&self) -> ConnectionProfile {
        let profile = ConnectionProfile::password(
            self.email.clone().unwrap_or_default(),
            self.password.clone().unwrap_or_default(),
        );
        apply_overrides(profile, &self.base_url, self.timeout_secs)
    }
}

/// GitHub connector configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitHubConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Personal access or installation token (from env: GITHUB_TOKEN)
    #[serde(default, skip_serializing)]
    pub token: Option<String>,
}

impl GitHubConfig {
    pub fn profile(&self) -> ConnectionProfile {
        let profile = ConnectionProfile::token(self.token.clone().unwrap_or_default());
        apply_overrides(profile, &self.base_url, self.timeout_secs)
    }
}

/// Avatar platform connector configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvatarConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Application API key (from env: AVATAR_API_KEY)
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
}

impl AvatarConfig {
    pub fn profile(&self) -> ConnectionProfile {
        let profile = ConnectionProfile::api_key(self.api_key.clone().unwrap_or_default());
        apply_overrides(profile, &self.base_url, self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectors::vendor::Credential;

    #[test]
    fn profile_carries_overrides() {
        let config = GitHubConfig {
            base_url: Some("http://127.0.0.1:9000".to_string()),
            timeout_secs: Some(5),
            token: Some("ghp_x".to_string()),
        };
        let profile = config.profile();
        assert_eq!(profile.base_url.as_deref(), Some("http://127.0.0.1:9000"));
        assert_eq!(profile.timeout_secs, Some(5));
        assert_eq!(profile.credential, Credential::Token("ghp_x".to_string()));
    }

    #[test]
    fn missing_secrets_become_empty_credentials() {
        let profile = AccessControlConfig::default().profile();
        assert_eq!(
            profile.credential,
            Credential::Password {
                email: String::new(),
                password: String::new()
            }
        );
        assert_eq!(profile.base_url, None);
        assert_eq!(profile.timeout_secs, None);
    }

    #[test]
    fn config_deserializes_from_yaml() {
        let yaml = "github:\n  base_url: https://ghe.example.com/api/v3\navatar:\n  timeout_secs: 20\n";
        let config: ConnectorConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            config.github.and_then(|g| g.base_url).as_deref(),
            Some("https://ghe.example.com/api/v3")
        );
        assert_eq!(config.avatar.and_then(|a| a.timeout_secs), Some(20));
        assert!(config.access_control.is_none());
    }
}
