use std::sync::Arc;

use super::mapper;
use super::types::{Organization, Team, User};
use crate::connectors::client::RestConnection;
use crate::connectors::errors::ConnectorError;
use crate::connectors::paging::PagedResults;
use crate::connectors::producer::{self, segment};

#[derive(Debug)]
pub struct OrganizationsProducer {
    connection: Arc<RestConnection>,
}

impl OrganizationsProducer {
    pub(crate) fn new(connection: Arc<RestConnection>) -> Self {
        Self { connection }
    }

    /// Organizations the authenticated user belongs to
    #[tracing::instrument(name = "github.organizations.list", skip(self, results))]
    pub async fn list(&self, results: &mut PagedResults<Organization>) -> Result<(), ConnectorError> {
        producer::list_into(
            &self.connection,
            "/user/orgs",
            Vec::new(),
            None,
            results,
            mapper::organization,
        )
        .await
    }

    #[tracing::instrument(name = "github.organizations.get", skip(self))]
    pub async fn get(&self, org: &str) -> Result<Organization, ConnectorError> {
        let path = format!("/orgs/{}", segment(org));
        producer::get_one(&self.connection, &path, org, mapper::organization).await
    }
}

#[derive(Debug)]
pub struct UsersProducer {
    connection: Arc<RestConnection>,
}

impl UsersProducer {
    pub(crate) fn new(connection: Arc<RestConnection>) -> Self {
        Self { connection }
    }

    /// Members of an organization
    #[tracing::instrument(name = "github.users.list", skip(self, results))]
    pub async fn list(
        &self,
        results: &mut PagedResults<User>,
        org: &str,
    ) -> Result<(), ConnectorError> {
        let path = format!("/orgs/{}/members", segment(org));
        producer::list_into(&self.connection, &path, Vec::new(), Some(org), results, mapper::user)
            .await
    }

    #[tracing::instrument(name = "github.users.get", skip(self))]
    pub async fn get(&self, login: &str) -> Result<User, ConnectorError> {
        let path = format!("/users/{}", segment(login));
        producer::get_one(&self.connection, &path, login, mapper::user).await
    }
}

#[derive(Debug)]
pub struct TeamsProducer {
    connection: Arc<RestConnection>,
}

impl TeamsProducer {
    pub(crate) fn new(connection: Arc<RestConnection>) -> Self {
        Self { connection }
    }

    #[tracing::instrument(name = "github.teams.list", skip(self, results))]
    pub async fn list(
        &self,
        results: &mut PagedResults<Team>,
        org: &str,
    ) -> Result<(), ConnectorError> {
        let path = format!("/orgs/{}/teams", segment(org));
        producer::list_into(&self.connection, &path, Vec::new(), Some(org), results, mapper::team)
            .await
    }

    #[tracing::instrument(name = "github.teams.get", skip(self))]
    pub async fn get(&self, org: &str, slug: &str) -> Result<Team, ConnectorError> {
        let path = format!("/orgs/{}/teams/{}", segment(org), segment(slug));
        producer::get_one(&self.connection, &path, slug, mapper::team).await
    }

    /// Members of one team; a missing team surfaces as `NoSuchObject`
    #[tracing::instrument(name = "github.teams.list_members", skip(self, results))]
    pub async fn list_members(
        &self,
        results: &mut PagedResults<User>,
        org: &str,
        slug: &str,
    ) -> Result<(), ConnectorError> {
        let path = format!("/orgs/{}/teams/{}/members", segment(org), segment(slug));
        producer::list_into(&self.connection, &path, Vec::new(), Some(slug), results, mapper::user)
            .await
    }
}
