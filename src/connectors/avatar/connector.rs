use async_trait::async_trait;
use std::sync::Arc;

use super::producers::{AssetsProducer, AvatarsProducer};
use super::VENDOR;
use crate::connectors::client::RestConnection;
use crate::connectors::connector::{metadata_for, Connector, ConnectorMetadata, ProducerCache};
use crate::connectors::errors::ConnectorError;
use crate::connectors::vendor::ConnectionProfile;

/// Facade over the avatar platform
#[derive(Debug)]
pub struct AvatarConnector {
    connection: Arc<RestConnection>,
    avatars: ProducerCache<AvatarsProducer>,
    assets: ProducerCache<AssetsProducer>,
}

impl Default for AvatarConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl AvatarConnector {
    pub fn new() -> Self {
        Self {
            connection: Arc::new(RestConnection::new(&VENDOR)),
            avatars: ProducerCache::default(),
            assets: ProducerCache::default(),
        }
    }

    pub fn connection(&self) -> &Arc<RestConnection> {
        &self.connection
    }

    pub fn avatars_api(&self) -> Result<Arc<AvatarsProducer>, ConnectorError> {
        let handle = self.connection.http_client()?;
        self.avatars.get_or_create(handle.session_id(), || {
            AvatarsProducer::new(self.connection.clone())
        })
    }

    pub fn assets_api(&self) -> Result<Arc<AssetsProducer>, ConnectorError> {
        let handle = self.connection.http_client()?;
        self.assets.get_or_create(handle.session_id(), || {
            AssetsProducer::new(self.connection.clone())
        })
    }
}

#[async_trait]
impl Connector for AvatarConnector {
    fn metadata(&self) -> ConnectorMetadata {
        metadata_for(&self.connection, "Avatar Platform")
    }

    async fn connect(&self, profile: ConnectionProfile) -> Result<(), ConnectorError> {
        self.connection.connect(profile).await
    }

    fn is_connected(&self) -> bool {
        self.connection.is_connected()
    }

    fn disconnect(&self) -> Result<(), ConnectorError> {
        self.avatars.invalidate();
        self.assets.invalidate();
        self.connection.disconnect()
    }
}
