use std::sync::Arc;

use super::mapper;
use super::types::{Group, User};
use crate::connectors::client::RestConnection;
use crate::connectors::errors::ConnectorError;
use crate::connectors::paging::PagedResults;
use crate::connectors::producer::{self, segment};

#[derive(Debug)]
pub struct UsersProducer {
    connection: Arc<RestConnection>,
}

impl UsersProducer {
    pub(crate) fn new(connection: Arc<RestConnection>) -> Self {
        Self { connection }
    }

    #[tracing::instrument(name = "access_control.users.list", skip(self, results))]
    pub async fn list(&self, results: &mut PagedResults<User>) -> Result<(), ConnectorError> {
        producer::list_into(&self.connection, "/users", Vec::new(), None, results, mapper::user)
            .await
    }

    #[tracing::instrument(name = "access_control.users.get", skip(self))]
    pub async fn get(&self, id: &str) -> Result<User, ConnectorError> {
        let path = format!("/users/{}", segment(id));
        producer::get_one(&self.connection, &path, id, mapper::user).await
    }
}

#[derive(Debug)]
pub struct GroupsProducer {
    connection: Arc<RestConnection>,
}

impl GroupsProducer {
    pub(crate) fn new(connection: Arc<RestConnection>) -> Self {
        Self { connection }
    }

    #[tracing::instrument(name = "access_control.groups.list", skip(self, results))]
    pub async fn list(&self, results: &mut PagedResults<Group>) -> Result<(), ConnectorError> {
        producer::list_into(&self.connection, "/groups", Vec::new(), None, results, mapper::group)
            .await
    }

    #[tracing::instrument(name = "access_control.groups.get", skip(self))]
    pub async fn get(&self, id: &str) -> Result<Group, ConnectorError> {
        let path = format!("/groups/{}", segment(id));
        producer::get_one(&self.connection, &path, id, mapper::group).await
    }

    /// Members of one group; a missing group surfaces as `NoSuchObject`
    #[tracing::instrument(name = "access_control.groups.list_users", skip(self, results))]
    pub async fn list_users(
        &self,
        results: &mut PagedResults<User>,
        group_id: &str,
    ) -> Result<(), ConnectorError> {
        let path = format!("/groups/{}/users", segment(group_id));
        producer::list_into(
            &self.connection,
            &path,
            Vec::new(),
            Some(group_id),
            results,
            mapper::user,
        )
        .await
    }
}
