// src/services/registry.rs
// DOCUMENTATION: Storage for uploaded photo metadata
// PURPOSE: Insertion-ordered collection of PhotoRecords behind a swappable trait

use crate::models::PhotoRecord;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Collection of photo records
/// DOCUMENTATION: Iteration order is insertion order
#[async_trait]
pub trait PhotoRegistry: Send + Sync {
    async fn get(&self, id: &str) -> Option<PhotoRecord>;

    async fn list(&self) -> Vec<PhotoRecord>;

    async fn append(&self, record: PhotoRecord);

    /// Remove and return the record with `id`, if any
    async fn remove(&self, id: &str) -> Option<PhotoRecord>;

    async fn len(&self) -> usize;
}

/// Process-local registry
/// DOCUMENTATION: Empty at start, discarded at exit. All access goes through
/// one RwLock so a delete never interleaves with a list.
#[derive(Default)]
pub struct InMemoryPhotoRegistry {
    records: RwLock<Vec<PhotoRecord>>,
}

impl InMemoryPhotoRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PhotoRegistry for InMemoryPhotoRegistry {
    async fn get(&self, id: &str) -> Option<PhotoRecord> {
        let records = self.records.read().await;
        records.iter().find(|r| r.id == id).cloned()
    }

    async fn list(&self) -> Vec<PhotoRecord> {
        self.records.read().await.clone()
    }

    async fn append(&self, record: PhotoRecord) {
        let mut records = self.records.write().await;
        records.push(record);
        log::debug!("Registry append ({} records)", records.len());
    }

    async fn remove(&self, id: &str) -> Option<PhotoRecord> {
        let mut records = self.records.write().await;
        let idx = records.iter().position(|r| r.id == id)?;
        // `remove` rather than `swap_remove` keeps insertion order
        let record = records.remove(idx);
        log::debug!("Registry remove {} ({} records)", id, records.len());
        Some(record)
    }

    async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(id: &str) -> PhotoRecord {
        PhotoRecord {
            id: id.to_string(),
            storage_key: format!("vsco_photos/{}", id),
            original_name: format!("{}.jpg", id),
            url: format!("https://res.cloudinary.com/demo/image/upload/v1/vsco_photos/{}.jpg", id),
            thumbnail_url: String::new(),
            grid_url: String::new(),
            large_url: String::new(),
            uploaded_at: Utc::now(),
            size_bytes: 0,
            width_px: 0,
            height_px: 0,
            format: String::new(),
        }
    }

    fn ids(records: &[PhotoRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_append_preserves_insertion_order() {
        let registry = InMemoryPhotoRegistry::new();
        for id in ["c", "a", "b"] {
            registry.append(record(id)).await;
        }

        assert_eq!(ids(&registry.list().await), vec!["c", "a", "b"]);
        assert_eq!(registry.len().await, 3);
    }

    #[tokio::test]
    async fn test_remove_middle_keeps_order() {
        let registry = InMemoryPhotoRegistry::new();
        for id in ["a", "b", "c"] {
            registry.append(record(id)).await;
        }

        let removed = registry.remove("b").await;
        assert_eq!(removed.map(|r| r.id), Some("b".to_string()));
        assert_eq!(ids(&registry.list().await), vec!["a", "c"]);
    }

    #[tokio::test]
    async fn test_remove_missing_is_noop() {
        let registry = InMemoryPhotoRegistry::new();
        registry.append(record("a")).await;

        assert!(registry.remove("zzz").await.is_none());
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn test_get() {
        let registry = InMemoryPhotoRegistry::new();
        registry.append(record("a")).await;

        assert_eq!(registry.get("a").await.map(|r| r.storage_key), Some("vsco_photos/a".to_string()));
        assert!(registry.get("b").await.is_none());
    }

    #[tokio::test]
    async fn test_concurrent_remove_succeeds_once() {
        let registry = std::sync::Arc::new(InMemoryPhotoRegistry::new());
        registry.append(record("a")).await;

        let r1 = registry.clone();
        let r2 = registry.clone();
        let (first, second) = tokio::join!(
            tokio::spawn(async move { r1.remove("a").await }),
            tokio::spawn(async move { r2.remove("a").await })
        );

        let hits = [first.unwrap(), second.unwrap()]
            .iter()
            .filter(|r| r.is_some())
            .count();
        assert_eq!(hits, 1);
        assert_eq!(registry.len().await, 0);
    }
}
