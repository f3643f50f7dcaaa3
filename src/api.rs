//! Catalog sources for the model and template lists.
//!
//! The UI never talks to an endpoint directly; it holds a [`Catalog`] handle
//! which wraps either the in-process [`StaticCatalog`] or an [`HttpCatalog`]
//! pointed at a server exposing `GET /api/models` and `GET /api/templates`.

use crate::catalog::{builtin_models, builtin_templates};
use crate::config::AppConfig;
use crate::types::{AIModel, PromptTemplate};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to fetch {resource}: {source}")]
    Transport {
        resource: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to fetch {resource}: server responded {status}")]
    Status {
        resource: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("Failed to decode {resource}: {message}")]
    Decode {
        resource: &'static str,
        message: String,
    },
}

pub type CatalogResult<T> = Result<T, CatalogError>;

#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn models(&self) -> CatalogResult<Vec<AIModel>>;
    async fn templates(&self) -> CatalogResult<Vec<PromptTemplate>>;
}

/// Serves the built-in catalogs after an artificial delay.
#[derive(Clone, Debug)]
pub struct StaticCatalog {
    latency: Duration,
}

impl StaticCatalog {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn models(&self) -> CatalogResult<Vec<AIModel>> {
        tokio::time::sleep(self.latency).await;
        Ok(builtin_models().to_vec())
    }

    async fn templates(&self) -> CatalogResult<Vec<PromptTemplate>> {
        tokio::time::sleep(self.latency).await;
        Ok(builtin_templates().to_vec())
    }
}

pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    async fn fetch<T: DeserializeOwned>(&self, resource: &'static str) -> CatalogResult<T> {
        let url = self.endpoint(resource);
        tracing::debug!(%url, "fetching catalog");
        let res = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| CatalogError::Transport { resource, source })?;

        let status = res.status();
        if !status.is_success() {
            return Err(CatalogError::Status { resource, status });
        }

        let body = res
            .text()
            .await
            .map_err(|source| CatalogError::Transport { resource, source })?;
        serde_json::from_str(&body).map_err(|err| CatalogError::Decode {
            resource,
            message: err.to_string(),
        })
    }
}

/// Rejects models whose token ceiling would leave the Max Tokens slider
/// with an empty range.
fn check_models(models: Vec<AIModel>) -> CatalogResult<Vec<AIModel>> {
    if let Some(model) = models.iter().find(|model| model.max_tokens == 0) {
        return Err(CatalogError::Decode {
            resource: "models",
            message: format!("model '{}' has maxTokens 0", model.id),
        });
    }
    Ok(models)
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn models(&self) -> CatalogResult<Vec<AIModel>> {
        check_models(self.fetch("models").await?)
    }

    async fn templates(&self) -> CatalogResult<Vec<PromptTemplate>> {
        self.fetch("templates").await
    }
}

/// Cheaply clonable handle shared through the component tree.
#[derive(Clone)]
pub struct Catalog {
    source: Arc<dyn CatalogSource>,
}

impl Catalog {
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        match &config.catalog_url {
            Some(url) => {
                tracing::info!(%url, "using remote catalog");
                Self::new(HttpCatalog::new(url.clone()))
            }
            None => Self::new(StaticCatalog::new(config.catalog_latency)),
        }
    }

    pub async fn models(&self) -> CatalogResult<Vec<AIModel>> {
        self.source.models().await
    }

    pub async fn templates(&self) -> CatalogResult<Vec<PromptTemplate>> {
        self.source.templates().await
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog").finish_non_exhaustive()
    }
}

impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.source, &other.source)
    }
}
