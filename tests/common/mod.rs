//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use catalog_browser::config::{CatalogConfig, Config};
use catalog_browser::{CatalogClient, CatalogSource, FetchError, Product, Rating};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

// -- Fixtures -----------------------------------------------------------------

pub fn product(id: u64, title: &str, price: f64, category: &str) -> Product {
    Product {
        id,
        title: title.to_string(),
        price,
        description: format!("{} description", title),
        category: category.to_string(),
        image: format!("https://img.example/{}.jpg", id),
        rating: Rating {
            rate: 4.1,
            count: 42,
        },
    }
}

/// Laptop / T-Shirt / Phone, in that order.
pub fn sample_products() -> Vec<Product> {
    vec![
        product(1, "Laptop", 999.0, "electronics"),
        product(2, "T-Shirt", 19.0, "clothing"),
        product(3, "Phone", 599.0, "electronics"),
    ]
}

pub fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).expect("serialize fixture")
}

/// HTTP client pointed at `base_url`.
pub fn client_for(base_url: &str) -> CatalogClient {
    CatalogClient::new(&CatalogConfig {
        base_url: base_url.to_string(),
        connect_timeout_seconds: 1,
        ..CatalogConfig::default()
    })
}

/// Write `content` to a temporary config.toml.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- Scripted source ----------------------------------------------------------

/// One scripted reply: a result, delivered after `delay`.
pub struct Scripted<T> {
    pub result: Result<T, FetchError>,
    pub delay: Duration,
}

impl<T> Scripted<T> {
    pub fn ok(value: T) -> Self {
        Self {
            result: Ok(value),
            delay: Duration::ZERO,
        }
    }

    pub fn err(error: FetchError) -> Self {
        Self {
            result: Err(error),
            delay: Duration::ZERO,
        }
    }

    pub fn after(mut self, ms: u64) -> Self {
        self.delay = Duration::from_millis(ms);
        self
    }
}

/// In-process [`CatalogSource`] replaying queued replies in call order.
/// An empty queue answers with the operation's fetch error.
#[derive(Default)]
pub struct FakeSource {
    products: Mutex<VecDeque<Scripted<Vec<Product>>>>,
    product: Mutex<VecDeque<Scripted<Product>>>,
    categories: Mutex<VecDeque<Scripted<Vec<String>>>>,
    calls: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_products(&self, reply: Scripted<Vec<Product>>) {
        self.products.lock().push_back(reply);
    }

    pub fn push_product(&self, reply: Scripted<Product>) {
        self.product.lock().push_back(reply);
    }

    pub fn push_categories(&self, reply: Scripted<Vec<String>>) {
        self.categories.lock().push_back(reply);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

async fn replay<T>(next: Option<Scripted<T>>, missing: FetchError) -> Result<T, FetchError> {
    match next {
        Some(reply) => {
            if !reply.delay.is_zero() {
                tokio::time::sleep(reply.delay).await;
            }
            reply.result
        }
        None => Err(missing),
    }
}

#[async_trait]
impl CatalogSource for FakeSource {
    async fn list_products(&self) -> Result<Vec<Product>, FetchError> {
        self.calls.lock().push("list_products".to_string());
        let next = self.products.lock().pop_front();
        replay(next, FetchError::PRODUCTS).await
    }

    async fn get_product(&self, id: &str) -> Result<Product, FetchError> {
        self.calls.lock().push(format!("get_product:{}", id));
        let next = self.product.lock().pop_front();
        replay(next, FetchError::PRODUCT).await
    }

    async fn list_categories(&self) -> Result<Vec<String>, FetchError> {
        self.calls.lock().push("list_categories".to_string());
        let next = self.categories.lock().pop_front();
        replay(next, FetchError::CATEGORIES).await
    }
}
