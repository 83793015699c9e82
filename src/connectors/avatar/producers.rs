use std::sync::Arc;

use super::mapper;
use super::types::{Asset, Avatar};
use crate::connectors::client::RestConnection;
use crate::connectors::errors::ConnectorError;
use crate::connectors::paging::PagedResults;
use crate::connectors::producer::{self, require_connected, segment};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvatarFilter {
    pub user_id: Option<String>,
}

impl AvatarFilter {
    fn to_params(&self) -> Vec<(String, String)> {
        self.user_id
            .iter()
            .map(|user_id| ("userId".to_string(), user_id.clone()))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetFilter {
    pub asset_type: Option<String>,
    pub gender: Option<String>,
}

impl AssetFilter {
    fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(asset_type) = &self.asset_type {
            params.push(("type".to_string(), asset_type.clone()));
        }
        if let Some(gender) = &self.gender {
            params.push(("gender".to_string(), gender.clone()));
        }
        params
    }
}

#[derive(Debug)]
pub struct AvatarsProducer {
    connection: Arc<RestConnection>,
}

impl AvatarsProducer {
    /// Fails with `NotConnected` unless `connection` is open
    pub fn new(connection: Arc<RestConnection>) -> Result<Self, ConnectorError> {
        require_connected(&connection)?;
        Ok(Self { connection })
    }

    #[tracing::instrument(name = "avatar.avatars.list", skip(self, results))]
    pub async fn list(
        &self,
        results: &mut PagedResults<Avatar>,
        filter: &AvatarFilter,
    ) -> Result<(), ConnectorError> {
        producer::list_into(
            &self.connection,
            "/avatars",
            filter.to_params(),
            None,
            results,
            mapper::avatar,
        )
        .await
    }

    #[tracing::instrument(name = "avatar.avatars.get", skip(self))]
    pub async fn get(&self, id: &str) -> Result<Avatar, ConnectorError> {
        let path = format!("/avatars/{}", segment(id));
        producer::get_one(&self.connection, &path, id, mapper::avatar).await
    }
}

#[derive(Debug)]
pub struct AssetsProducer {
    connection: Arc<RestConnection>,
}

impl AssetsProducer {
    /// Fails with `NotConnected` unless `connection` is open
    pub fn new(connection: Arc<RestConnection>) -> Result<Self, ConnectorError> {
        require_connected(&connection)?;
        Ok(Self { connection })
    }

    #[tracing::instrument(name = "avatar.assets.list", skip(self, results))]
    pub async fn list(
        &self,
        results: &mut PagedResults<Asset>,
        filter: &AssetFilter,
    ) -> Result<(), ConnectorError> {
        producer::list_into(
            &self.connection,
            "/assets",
            filter.to_params(),
            None,
            results,
            mapper::asset,
        )
        .await
    }

    #[tracing::instrument(name = "avatar.assets.get", skip(self))]
    pub async fn get(&self, id: &str) -> Result<Asset, ConnectorError> {
        let path = format!("/assets/{}", segment(id));
        producer::get_one(&self.connection, &path, id, mapper::asset).await
    }

    /// Assets currently equipped on one avatar
    #[tracing::instrument(name = "avatar.assets.list_equipped", skip(self, results))]
    pub async fn list_equipped(
        &self,
        results: &mut PagedResults<Asset>,
        avatar_id: &str,
    ) -> Result<(), ConnectorError> {
        let path = format!("/avatars/{}/assets", segment(avatar_id));
        producer::list_into(
            &self.connection,
            &path,
            Vec::new(),
            Some(avatar_id),
            results,
            mapper::asset,
        )
        .await
    }
}
