use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::catalog::error::FetchError;
use crate::catalog::product::Product;
use crate::config::CatalogConfig;

/// Read-only access to a product catalog.
///
/// Each call is a single attempt. Retries and timeouts belong to the caller.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// All products, in the order the source returns them.
    async fn list_products(&self) -> Result<Vec<Product>, FetchError>;

    /// One product by id. Accepts numeric ids and raw route segments alike.
    async fn get_product(&self, id: &str) -> Result<Product, FetchError>;

    /// Distinct category labels, in source order.
    async fn list_categories(&self) -> Result<Vec<String>, FetchError>;
}

/// HTTP implementation of [`CatalogSource`].
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .user_agent(config.user_agent.as_str())
            .build()
            .expect("Failed to build catalog client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Base URL with `segments` appended. Each segment is percent-encoded, so
    /// an id containing `/`, `?` or `#` stays inside its own path segment.
    fn endpoint(&self, segments: &[&str], error: FetchError) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            tracing::warn!(base_url = %self.base_url, error = %e, "Invalid catalog base URL");
            error
        })?;
        url.path_segments_mut()
            .map_err(|()| {
                tracing::warn!(base_url = %self.base_url, "Catalog base URL cannot take a path");
                error
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        error: FetchError,
    ) -> Result<T, FetchError> {
        let url = self.endpoint(segments, error)?;
        tracing::debug!(url = %url, "Catalog request");

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Catalog request failed");
            error
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Catalog returned error status");
            return Err(error);
        }

        response.json::<T>().await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Catalog response could not be decoded");
            error
        })
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new(&CatalogConfig::default())
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn list_products(&self) -> Result<Vec<Product>, FetchError> {
        let products: Vec<Product> = self.get_json(&["products"], FetchError::PRODUCTS).await?;

        for product in &products {
            if let Err(e) = product.validate() {
                tracing::warn!(error = %e, "Rejecting product list");
                return Err(FetchError::PRODUCTS);
            }
        }

        Ok(products)
    }

    async fn get_product(&self, id: &str) -> Result<Product, FetchError> {
        let product: Product = self.get_json(&["products", id], FetchError::PRODUCT).await?;

        product.validate().map_err(|e| {
            tracing::warn!(error = %e, "Rejecting product");
            FetchError::PRODUCT
        })?;

        Ok(product)
    }

    async fn list_categories(&self) -> Result<Vec<String>, FetchError> {
        let raw: Vec<String> = self
            .get_json(&["products", "categories"], FetchError::CATEGORIES)
            .await?;

        Ok(dedup_preserving_order(raw))
    }
}

fn dedup_preserving_order(labels: Vec<String>) -> Vec<String> {
    let total = labels.len();
    let mut unique: Vec<String> = Vec::with_capacity(total);
    for label in labels {
        if !unique.contains(&label) {
            unique.push(label);
        }
    }
    if unique.len() != total {
        tracing::debug!(
            dropped = total - unique.len(),
            "Dropped duplicate category labels"
        );
    }
    unique
}
