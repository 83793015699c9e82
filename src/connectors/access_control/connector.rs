use async_trait::async_trait;
use std::sync::Arc;

use super::producers::{GroupsProducer, UsersProducer};
use super::VENDOR;
use crate::connectors::client::RestConnection;
use crate::connectors::connector::{metadata_for, Connector, ConnectorMetadata, ProducerCache};
use crate::connectors::errors::ConnectorError;
use crate::connectors::vendor::ConnectionProfile;

/// Facade over the access-control platform
#[derive(Debug)]
pub struct AccessControlConnector {
    connection: Arc<RestConnection>,
    users: ProducerCache<UsersProducer>,
    groups: ProducerCache<GroupsProducer>,
}

impl Default for AccessControlConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl AccessControlConnector {
    pub fn new() -> Self {
        Self {
            connection: Arc::new(RestConnection::new(&VENDOR)),
            users: ProducerCache::default(),
            groups: ProducerCache::default(),
        }
    }

    pub fn connection(&self) -> &Arc<RestConnection> {
        &self.connection
    }

    pub fn users_api(&self) -> Result<Arc<UsersProducer>, ConnectorError> {
        let handle = self.connection.http_client()?;
        self.users.get_or_create(handle.session_id(), || {
            Ok(UsersProducer::new(self.connection.clone()))
        })
    }

    pub fn groups_api(&self) -> Result<Arc<GroupsProducer>, ConnectorError> {
        let handle = self.connection.http_client()?;
        self.groups.get_or_create(handle.session_id(), || {
            Ok(GroupsProducer::new(self.connection.clone()))
        })
    }
}

#[async_trait]
impl Connector for AccessControlConnector {
    fn metadata(&self) -> ConnectorMetadata {
        metadata_for(&self.connection, "Access Control")
    }

    async fn connect(&self, profile: ConnectionProfile) -> Result<(), ConnectorError> {
        self.connection.connect(profile).await
    }

    fn is_connected(&self) -> bool {
        self.connection.is_connected()
    }

    fn disconnect(&self) -> Result<(), ConnectorError> {
        self.users.invalidate();
        self.groups.invalidate();
        self.connection.disconnect()
    }
}
