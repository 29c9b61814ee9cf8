//! In-memory kitten store.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{KittenStore, KittenUpdate, Result};
use crate::models::Kitten;

/// Process-local backend for tests and local runs.
///
/// Kittens are kept in insertion order so scans are deterministic. Updates on
/// a missing key create the kitten, matching DynamoDB's UpdateItem.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKittenStore {
    kittens: Arc<RwLock<Vec<Kitten>>>,
}

impl InMemoryKittenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KittenStore for InMemoryKittenStore {
    async fn put(&self, kitten: &Kitten) -> Result<()> {
        let mut kittens = self.kittens.write().await;
        match kittens.iter_mut().find(|k| k.name == kitten.name) {
            Some(existing) => *existing = kitten.clone(),
            None => kittens.push(kitten.clone()),
        }
        Ok(())
    }

    async fn get(&self, name: &str) -> Result<Option<Kitten>> {
        let kittens = self.kittens.read().await;
        Ok(kittens.iter().find(|k| k.name == name).cloned())
    }

    async fn scan(&self) -> Result<Vec<Kitten>> {
        Ok(self.kittens.read().await.clone())
    }

    async fn update(&self, name: &str, update: &KittenUpdate) -> Result<()> {
        let mut kittens = self.kittens.write().await;
        match kittens.iter_mut().find(|k| k.name == name) {
            Some(existing) => existing.age = update.age.clone(),
            None => kittens.push(Kitten {
                name: name.to_string(),
                age: update.age.clone(),
            }),
        }
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<()> {
        self.kittens.write().await.retain(|k| k.name != name);
        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
