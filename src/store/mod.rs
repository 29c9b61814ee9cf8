//! Storage seam for kittens.
//!
//! Handlers only see [`KittenStore`]; the concrete backend is chosen once at
//! startup by [`from_config`] and shared for the life of the process.

pub mod dynamodb;
pub mod memory;

use std::fmt::Display;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Number;

use crate::config::{Config, StoreBackend};
use crate::models::Kitten;

pub use dynamodb::DynamoDbKittenStore;
pub use memory::InMemoryKittenStore;

/// Errors raised by a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{operation} failed: {message}")]
    Request {
        operation: &'static str,
        message: String,
    },
    #[error("Invalid item: {0}")]
    InvalidItem(String),
}

impl StoreError {
    pub fn request(operation: &'static str, cause: impl Display) -> Self {
        StoreError::Request {
            operation,
            message: cause.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Attributes to overwrite on an existing kitten, leaving the rest untouched
#[derive(Debug, Clone, PartialEq)]
pub struct KittenUpdate {
    pub age: Number,
}

impl KittenUpdate {
    pub fn age(age: Number) -> Self {
        Self { age }
    }

    /// Attribute name and new value for every field this update sets
    pub fn assignments(&self) -> Vec<(&'static str, &Number)> {
        vec![("age", &self.age)]
    }
}

#[async_trait]
pub trait KittenStore: Send + Sync {
    /// Insert or replace the kitten stored under `kitten.name`
    async fn put(&self, kitten: &Kitten) -> Result<()>;

    /// Fetch a single kitten, `None` when nothing is stored under `name`
    async fn get(&self, name: &str) -> Result<Option<Kitten>>;

    /// Every stored kitten, in the order the backend returns them
    async fn scan(&self) -> Result<Vec<Kitten>>;

    /// Apply a partial update. A missing key is created with just `name`
    /// and the updated attributes.
    async fn update(&self, name: &str, update: &KittenUpdate) -> Result<()>;

    /// Remove a kitten. Removing a missing key succeeds.
    async fn delete(&self, name: &str) -> Result<()>;

    /// Cheap round trip to verify the backend is reachable
    async fn health_check(&self) -> Result<()>;
}

/// Build the store selected by the configuration
pub async fn from_config(config: &Config) -> anyhow::Result<Arc<dyn KittenStore>> {
    match config.store_backend {
        StoreBackend::DynamoDb => Ok(Arc::new(DynamoDbKittenStore::from_config(config).await?)),
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store, data will not survive a restart");
            Ok(Arc::new(InMemoryKittenStore::new()))
        }
    }
}
