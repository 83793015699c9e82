use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tracing::Instrument;

use super::envelope::{self, RawPage};
use super::error_map;
use super::errors::ConnectorError;
use super::vendor::{AuthScheme, ConnectionProfile, Credential, VendorProfile};

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// Successful vendor response with its body decoded as JSON
#[derive(Debug)]
pub struct VendorResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// HTTP client pre-configured with base URL and auth headers for one session
#[derive(Debug)]
pub struct HttpHandle {
    session_id: u64,
    vendor: &'static VendorProfile,
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpHandle {
    fn build(
        vendor: &'static VendorProfile,
        base_url: String,
        auth: Option<(HeaderName, String)>,
        timeout_secs: Option<u64>,
    ) -> Result<Self, ConnectorError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("vendorlink/", env!("CARGO_PKG_VERSION"))),
        );
        if let Some((name, value)) = auth {
            let mut value = HeaderValue::from_str(&value).map_err(|_| {
                ConnectorError::InvalidCredentials(
                    "credential contains characters not allowed in a header".to_string(),
                )
            })?;
            value.set_sensitive(true);
            headers.insert(name, value);
        }

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs.max(1)));
        }
        let http_client = builder
            .build()
            .map_err(|err| ConnectorError::unexpected(format!("HTTP client error: {}", err)))?;

        Ok(Self {
            session_id: NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed),
            vendor,
            base_url,
            http_client,
        })
    }

    /// Identity of the connect call that produced this handle
    pub fn session_id(&self) -> u64 {
        self.session_id
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn vendor(&self) -> &'static VendorProfile {
        self.vendor
    }

    pub async fn get(
        &self,
        path: &str,
        query: &[(String, String)],
        resource_id: Option<&str>,
    ) -> Result<VendorResponse, ConnectorError> {
        self.send(Method::GET, path, query, None, resource_id).await
    }

    /// Issue exactly one request; every failure is normalized with the vendor's rules
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
        resource_id: Option<&str>,
    ) -> Result<VendorResponse, ConnectorError> {
        let span = tracing::info_span!(
            "vendor_http_request",
            vendor = self.vendor.name,
            method = %method,
            path,
        );

        let mut builder = self
            .http_client
            .request(method, format!("{}{}", self.base_url, path));
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .instrument(span.clone())
            .await
            .map_err(|err| {
                tracing::error!(parent: &span, error = %err, "Vendor request failed");
                ConnectorError::from(err)
            })?;

        let status = response.status();
        let headers = response.headers().clone();
        let text = response
            .text()
            .await
            .map_err(|err| ConnectorError::Unexpected {
                status: Some(status.as_u16()),
                message: format!("Failed to read response body: {}", err),
            })?;

        if !status.is_success() {
            let message = error_map::error_message(&text);
            let error =
                error_map::normalize(self.vendor.error_rules, status.as_u16(), &message, resource_id);
            tracing::warn!(
                parent: &span,
                status = status.as_u16(),
                kind = ?error.kind(),
                "Vendor returned an error"
            );
            return Err(error);
        }

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str::<Value>(&text).map_err(|_| ConnectorError::Unexpected {
                status: Some(status.as_u16()),
                message: format!("Invalid JSON from {}: {}", self.vendor.name, text),
            })?
        };

        Ok(VendorResponse {
            status,
            headers,
            body,
        })
    }

    /// GET a list endpoint and unwrap its envelope
    pub async fn get_page(
        &self,
        path: &str,
        query: &[(String, String)],
        resource_id: Option<&str>,
    ) -> Result<RawPage, ConnectorError> {
        let response = self.get(path, query, resource_id).await?;
        Ok(envelope::list_page(
            self.vendor.envelope,
            self.vendor.page_token,
            &response.headers,
            &response.body,
        ))
    }
}

#[derive(Debug)]
struct Session {
    credential: Credential,
    handle: Arc<HttpHandle>,
}

/// Connection lifecycle for one vendor.
///
/// `handle` exists iff a credential was accepted. Concurrent `connect` and
/// `disconnect` on the same connection are not serialized against each other.
#[derive(Debug)]
pub struct RestConnection {
    vendor: &'static VendorProfile,
    session: RwLock<Option<Session>>,
}

impl RestConnection {
    pub fn new(vendor: &'static VendorProfile) -> Self {
        Self {
            vendor,
            session: RwLock::new(None),
        }
    }

    pub fn vendor(&self) -> &'static VendorProfile {
        self.vendor
    }

    pub async fn connect(&self, profile: ConnectionProfile) -> Result<(), ConnectorError> {
        let base_url = profile.resolve_base_url(self.vendor);
        tracing::info!(vendor = self.vendor.name, base_url = %base_url, "Connecting");

        match self.open_session(&profile, base_url).await {
            Ok(handle) => {
                let handle = Arc::new(handle);
                let mut slot = self.session.write().map_err(|_| poisoned())?;
                *slot = Some(Session {
                    credential: profile.credential,
                    handle,
                });
                tracing::info!(vendor = self.vendor.name, "Connected");
                Ok(())
            }
            Err(err) => {
                self.clear();
                tracing::warn!(vendor = self.vendor.name, error = %err, "Connect failed");
                Err(err)
            }
        }
    }

    async fn open_session(
        &self,
        profile: &ConnectionProfile,
        base_url: String,
    ) -> Result<HttpHandle, ConnectorError> {
        let auth = match (self.vendor.auth, &profile.credential) {
            (AuthScheme::Bearer, Credential::Token(token)) => {
                Some((AUTHORIZATION, format!("Bearer {}", non_empty(token, "token")?)))
            }
            (AuthScheme::ApiKeyHeader(header), Credential::ApiKey(key)) => {
                let name = HeaderName::from_bytes(header.as_bytes()).map_err(|_| {
                    ConnectorError::unexpected(format!("invalid auth header name '{}'", header))
                })?;
                Some((name, non_empty(key, "api key")?.to_string()))
            }
            (AuthScheme::Login { path }, Credential::Password { email, password }) => {
                non_empty(email, "email")?;
                non_empty(password, "password")?;
                let anonymous =
                    HttpHandle::build(self.vendor, base_url.clone(), None, profile.timeout_secs)?;
                let token = login(&anonymous, path, email, password).await?;
                Some((AUTHORIZATION, format!("Bearer {}", token)))
            }
            (_, credential) => {
                return Err(ConnectorError::InvalidCredentials(format!(
                    "{} does not accept {} credentials",
                    self.vendor.name,
                    credential.kind()
                )))
            }
        };

        let handle = HttpHandle::build(self.vendor, base_url, auth, profile.timeout_secs)?;

        if let Some(probe_path) = self.vendor.probe_path {
            handle.get(probe_path, &[], None).await?;
        }

        Ok(handle)
    }

    /// Never fails; a poisoned lock reads as disconnected
    pub fn is_connected(&self) -> bool {
        self.session
            .read()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }

    /// Idempotent; disconnecting an idle connection is a no-op
    pub fn disconnect(&self) -> Result<(), ConnectorError> {
        if let Some(session) = self.clear() {
            tracing::info!(
                vendor = self.vendor.name,
                credential = session.credential.kind(),
                session_id = session.handle.session_id(),
                "Disconnected"
            );
        }
        Ok(())
    }

    fn clear(&self) -> Option<Session> {
        match self.session.write() {
            Ok(mut slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        }
    }

    pub fn http_client(&self) -> Result<Arc<HttpHandle>, ConnectorError> {
        let slot = self.session.read().map_err(|_| poisoned())?;
        slot.as_ref()
            .map(|session| session.handle.clone())
            .ok_or_else(|| {
                ConnectorError::NotConnected(format!("{} connection is not open", self.vendor.name))
            })
    }
}

fn poisoned() -> ConnectorError {
    ConnectorError::unexpected("connection state lock poisoned")
}

fn non_empty<'a>(value: &'a str, what: &str) -> Result<&'a str, ConnectorError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ConnectorError::InvalidCredentials(format!("{} must not be empty", what)))
    } else {
        Ok(trimmed)
    }
}

/// Exchange email and password for a session token.
///
/// Any failure of the login call, transport errors included, is `InvalidCredentials`
/// carrying the normalized error text.
async fn login(
    anonymous: &HttpHandle,
    path: &str,
    email: &str,
    password: &str,
) -> Result<String, ConnectorError> {
    let body = json!({ "email": email, "password": password });
    let response = anonymous
        .send(Method::POST, path, &[], Some(&body), None)
        .await
        .map_err(|err| ConnectorError::InvalidCredentials(format!("Login failed: {}", err)))?;

    response
        .body
        .get("data")
        .and_then(|data| data.get("token"))
        .or_else(|| response.body.get("token"))
        .and_then(|token| token.as_str())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            ConnectorError::InvalidCredentials("login response carried no token".to_string())
        })
}
