//! In-process kitten store.
//!
//! Used when `DATABASE_URL` is not set (development) and by tests.
//! Data lives only as long as the process.
use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::repos::{
    error::RepoError,
    kitten_repo::{KittenRepo, KittenRow, NewKitten},
};

#[derive(Debug, Default)]
struct Inner {
    // 最後に払い出した id。削除しても再利用しない (BIGSERIAL と同じ)
    last_id: i64,
    rows: BTreeMap<i64, KittenRow>,
}

#[derive(Debug, Default)]
pub struct MemoryKittenRepo {
    inner: RwLock<Inner>,
}

impl MemoryKittenRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KittenRepo for MemoryKittenRepo {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn create(&self, kitten: NewKitten) -> Result<KittenRow, RepoError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;

        let row = KittenRow {
            kitten_id: inner.last_id,
            name: kitten.name,
            age: kitten.age,
            color: kitten.color,
            owner_id: kitten.owner_id,
            created_at: Utc::now(),
        };
        inner.rows.insert(row.kitten_id, row.clone());

        Ok(row)
    }

    async fn get(&self, kitten_id: i64) -> Result<Option<KittenRow>, RepoError> {
        Ok(self.inner.read().await.rows.get(&kitten_id).cloned())
    }

    async fn delete_owned(&self, kitten_id: i64, owner_id: i64) -> Result<bool, RepoError> {
        let mut inner = self.inner.write().await;
        match inner.rows.get(&kitten_id) {
            Some(row) if row.owner_id == owner_id => {
                inner.rows.remove(&kitten_id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
