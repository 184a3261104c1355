//! Shared application state.
//!
//! A single [`AppState`] is constructed at startup and shared across all
//! Axum handlers via `Arc`. It holds the CMS client, the optional record
//! client, and the revalidation cache for the insight list.

use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use landing_client::{ContentClient, RecordClient};
use landing_core::preview::InsightPreview;

/// Shared application state passed to all HTTP handlers.
pub struct AppState {
    /// CMS client.
    pub content: ContentClient,
    /// Record store client (`None` if not configured).
    pub records: Option<RecordClient>,
    /// Last fetched insight list.
    pub insights: RevalidationCache<Vec<InsightPreview>>,
}

impl AppState {
    /// Assemble state from already-built clients.
    #[must_use]
    pub fn new(content: ContentClient, records: Option<RecordClient>, revalidate: Duration) -> Self {
        Self {
            content,
            records,
            insights: RevalidationCache::new(revalidate),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

struct CacheEntry<T> {
    value: T,
    expires_at: Instant,
}

/// A single value that is served until its window elapses, then refetched.
///
/// A zero window disables caching: [`fresh`](Self::fresh) always misses.
pub struct RevalidationCache<T> {
    ttl: Duration,
    entry: RwLock<Option<CacheEntry<T>>>,
}

impl<T: Clone> RevalidationCache<T> {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: RwLock::new(None),
        }
    }

    /// Revalidation window.
    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The cached value, if one is stored and still inside its window.
    pub async fn fresh(&self) -> Option<T> {
        let entry = self.entry.read().await;
        entry
            .as_ref()
            .filter(|e| Instant::now() < e.expires_at)
            .map(|e| e.value.clone())
    }

    /// Store `value` for one window. No-op when caching is disabled.
    pub async fn store(&self, value: T) {
        if self.ttl.is_zero() {
            return;
        }
        *self.entry.write().await = Some(CacheEntry {
            value,
            expires_at: Instant::now() + self.ttl,
        });
    }

    /// Drop the cached value.
    pub async fn clear(&self) {
        *self.entry.write().await = None;
    }
}
