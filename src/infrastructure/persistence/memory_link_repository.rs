//! In-memory implementation of [`LinkRepository`].

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Process-local link registry backed by a sharded concurrent map.
///
/// Each key lives in exactly one shard, so check-and-insert through the entry
/// API and click increments through `get_mut` happen under a single shard
/// lock. Concurrent creates can never both claim one code, and concurrent
/// redirects never lose an increment.
///
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    links: DashMap<String, ShortLink>,
}

impl InMemoryLinkRepository {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            links: DashMap::new(),
        }
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.links.contains_key(code))
    }

    async fn save(&self, code: &str, original_url: &str) -> Result<ShortLink, AppError> {
        let link = ShortLink::new(code, original_url);
        self.links.insert(code.to_string(), link.clone());
        Ok(link)
    }

    async fn insert_if_absent(
        &self,
        code: &str,
        original_url: &str,
    ) -> Result<Option<ShortLink>, AppError> {
        match self.links.entry(code.to_string()) {
            Entry::Occupied(_) => Ok(None),
            Entry::Vacant(slot) => {
                let link = ShortLink::new(code, original_url);
                slot.insert(link.clone());
                Ok(Some(link))
            }
        }
    }

    async fn get(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self.links.get(code).map(|link| link.clone()))
    }

    async fn increment_clicks(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self.links.get_mut(code).map(|mut link| {
            link.record_click();
            link.clone()
        }))
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.links.len())
    }
}
