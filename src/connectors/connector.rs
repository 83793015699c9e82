use async_trait::async_trait;
use serde::Serialize;
use std::sync::{Arc, Mutex};

use super::client::RestConnection;
use super::errors::ConnectorError;
use super::vendor::{ConnectionProfile, ResourceKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorMetadata {
    pub name: String,
    pub vendor: String,
    pub base_url: String,
    pub resources: Vec<ResourceKind>,
}

/// Lifecycle and discovery surface shared by every vendor facade
#[async_trait]
pub trait Connector: Send + Sync {
    fn metadata(&self) -> ConnectorMetadata;

    fn is_supported(&self, resource: ResourceKind) -> bool {
        self.metadata().resources.contains(&resource)
    }

    fn ensure_supported(&self, resource: ResourceKind) -> Result<(), ConnectorError> {
        if self.is_supported(resource) {
            Ok(())
        } else {
            Err(ConnectorError::unexpected(format!(
                "{} is not supported by {}",
                resource,
                self.metadata().vendor
            )))
        }
    }

    async fn connect(&self, profile: ConnectionProfile) -> Result<(), ConnectorError>;

    fn is_connected(&self) -> bool;

    /// Drops cached producers and closes the connection
    fn disconnect(&self) -> Result<(), ConnectorError>;
}

pub(crate) fn metadata_for(connection: &RestConnection, name: &str) -> ConnectorMetadata {
    let vendor = connection.vendor();
    let base_url = connection
        .http_client()
        .map(|handle| handle.base_url().to_string())
        .unwrap_or_else(|_| vendor.default_base_url.to_string());
    ConnectorMetadata {
        name: name.to_string(),
        vendor: vendor.name.to_string(),
        base_url,
        resources: vendor.resources.to_vec(),
    }
}

/// One producer per open session.
///
/// The entry is keyed by the session id of the connection handle, so a
/// producer created before a reconnect is never handed out afterwards.
#[derive(Debug)]
pub struct ProducerCache<P> {
    slot: Mutex<Option<(u64, Arc<P>)>>,
}

impl<P> Default for ProducerCache<P> {
    fn default() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }
}

impl<P> ProducerCache<P> {
    pub fn get_or_create<F>(&self, session_id: u64, create: F) -> Result<Arc<P>, ConnectorError>
    where
        F: FnOnce() -> Result<P, ConnectorError>,
    {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| ConnectorError::unexpected("producer cache lock poisoned"))?;
        if let Some((cached_session, producer)) = slot.as_ref() {
            if *cached_session == session_id {
                return Ok(producer.clone());
            }
        }
        let producer = Arc::new(create()?);
        *slot = Some((session_id, producer.clone()));
        Ok(producer)
    }

    pub fn invalidate(&self) {
        match self.slot.lock() {
            Ok(mut slot) => *slot = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }
}
