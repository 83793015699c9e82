use async_trait::async_trait;
use std::sync::Arc;

use super::producers::{OrganizationsProducer, TeamsProducer, UsersProducer};
use super::VENDOR;
use crate::connectors::client::RestConnection;
use crate::connectors::connector::{metadata_for, Connector, ConnectorMetadata, ProducerCache};
use crate::connectors::errors::ConnectorError;
use crate::connectors::vendor::ConnectionProfile;

/// Facade over the GitHub REST API
#[derive(Debug)]
pub struct GitHubConnector {
    connection: Arc<RestConnection>,
    organizations: ProducerCache<OrganizationsProducer>,
    users: ProducerCache<UsersProducer>,
    teams: ProducerCache<TeamsProducer>,
}

impl Default for GitHubConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubConnector {
    pub fn new() -> Self {
        Self {
            connection: Arc::new(RestConnection::new(&VENDOR)),
            organizations: ProducerCache::default(),
            users: ProducerCache::default(),
            teams: ProducerCache::default(),
        }
    }

    pub fn connection(&self) -> &Arc<RestConnection> {
        &self.connection
    }

    pub fn organizations_api(&self) -> Result<Arc<OrganizationsProducer>, ConnectorError> {
        let handle = self.connection.http_client()?;
        self.organizations.get_or_create(handle.session_id(), || {
            Ok(OrganizationsProducer::new(self.connection.clone()))
        })
    }

    pub fn users_api(&self) -> Result<Arc<UsersProducer>, ConnectorError> {
        let handle = self.connection.http_client()?;
        self.users.get_or_create(handle.session_id(), || {
            Ok(UsersProducer::new(self.connection.clone()))
        })
    }

    /// Teams are served as the Groups resource
    pub fn groups_api(&self) -> Result<Arc<TeamsProducer>, ConnectorError> {
        let handle = self.connection.http_client()?;
        self.teams.get_or_create(handle.session_id(), || {
            Ok(TeamsProducer::new(self.connection.clone()))
        })
    }
}

#[async_trait]
impl Connector for GitHubConnector {
    fn metadata(&self) -> ConnectorMetadata {
        metadata_for(&self.connection, "GitHub")
    }

    async fn connect(&self, profile: ConnectionProfile) -> Result<(), ConnectorError> {
        self.connection.connect(profile).await
    }

    fn is_connected(&self) -> bool {
        self.connection.is_connected()
    }

    fn disconnect(&self) -> Result<(), ConnectorError> {
        self.organizations.invalidate();
        self.users.invalidate();
        self.teams.invalidate();
        self.connection.disconnect()
    }
}
