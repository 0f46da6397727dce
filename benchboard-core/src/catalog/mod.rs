//! Asset catalog providers.
//!
//! The catalog service is an external collaborator: one "fetch all assets"
//! call that either yields the full ordered catalog or fails. The page falls
//! back to [`demo::demo_catalog`] on any failure.

pub mod demo;

use crate::asset::ModelAsset;
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

pub use demo::{DEMO_ASSET_IDS, demo_catalog};

/// Source of the model asset catalog.
#[async_trait]
pub trait AssetCatalogProvider: Send + Sync {
    /// Fetch every available asset, in catalog order.
    async fn fetch_assets(&self) -> Result<Vec<ModelAsset>, CatalogError>;
}

/// Wire shapes accepted from the catalog service.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogPayload {
    List(Vec<ModelAsset>),
    Wrapped { data: Vec<ModelAsset> },
}

/// Parse a catalog response body. Accepts either a bare JSON array of assets
/// or an object with a `"data"` array.
pub fn parse_catalog_response(body: &str) -> Result<Vec<ModelAsset>, CatalogError> {
    let payload: CatalogPayload =
        serde_json::from_str(body).map_err(|e| CatalogError::Parse {
            message: format!("Invalid catalog JSON: {e}"),
        })?;
    Ok(match payload {
        CatalogPayload::List(assets) | CatalogPayload::Wrapped { data: assets } => assets,
    })
}

/// Fetches the catalog from an HTTP endpoint.
pub struct HttpCatalogProvider {
    client: reqwest::Client,
    endpoint: Option<String>,
}

impl HttpCatalogProvider {
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| CatalogError::Request {
                message: format!("Failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }
}

#[async_trait]
impl AssetCatalogProvider for HttpCatalogProvider {
    async fn fetch_assets(&self) -> Result<Vec<ModelAsset>, CatalogError> {
        let url = self.endpoint.as_deref().ok_or(CatalogError::NotConfigured)?;

        debug!(url, "Fetching asset catalog");

        let response = self
            .client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| CatalogError::Request {
                message: format!("Failed to fetch assets: {e}"),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| CatalogError::Request {
            message: format!("Failed to read catalog response: {e}"),
        })?;
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let assets = parse_catalog_response(&body)?;
        debug!(count = assets.len(), "Asset catalog fetched");
        Ok(assets)
    }
}

/// Serves a fixed catalog, or a fixed failure. Useful for tests and for
/// hosting the page without a catalog service.
pub struct StaticCatalogProvider {
    outcome: Result<Vec<ModelAsset>, String>,
}

impl StaticCatalogProvider {
    pub fn new(assets: Vec<ModelAsset>) -> Self {
        Self {
            outcome: Ok(assets),
        }
    }

    /// A provider whose every fetch fails with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
        }
    }
}

#[async_trait]
impl AssetCatalogProvider for StaticCatalogProvider {
    async fn fetch_assets(&self) -> Result<Vec<ModelAsset>, CatalogError> {
        match &self.outcome {
            Ok(assets) => Ok(assets.clone()),
            Err(message) => Err(CatalogError::Request {
                message: message.clone(),
            }),
        }
    }
}
