use crate::config::CacheConfig;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cache lock error: {0}")]
    LockError(String),
    #[error("Invalid cache key: {0}")]
    InvalidKey(String),
}

#[derive(Debug, Clone)]
struct CachedResponse<T> {
    value: T,
    stored_at: Instant,
    hits: u64,
}

impl<T: Clone> CachedResponse<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            stored_at: Instant::now(),
            hits: 0,
        }
    }

    fn is_stale(&self, ttl: Duration) -> bool {
        self.stored_at.elapsed() > ttl
    }

    fn hit(&mut self) -> T {
        self.hits += 1;
        self.value.clone()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub inserts: u64,
    pub evictions: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        if self.hits + self.misses == 0 {
            0.0
        } else {
            self.hits as f64 / (self.hits + self.misses) as f64
        }
    }
}

/// Expiring in-memory store for upstream responses, keyed by resource URL.
///
/// Many location areas and species share the same parent resources, so one run
/// re-requests the same URLs repeatedly. Entries older than `expiration` seconds
/// count as misses; when `max_size` is reached the oldest, least-hit entry goes.
pub struct ResponseCache<T>
where
    T: Clone + Send + Sync,
{
    store: Mutex<HashMap<String, CachedResponse<T>>>,
    config: CacheConfig,
    stats: Mutex<CacheStats>,
}

impl<T> ResponseCache<T>
where
    T: Clone + Send + Sync,
{
    pub fn new(config: CacheConfig) -> Self {
        tracing::debug!(
            "Initializing response cache with max_size: {}, expiration: {}s",
            config.max_size,
            config.expiration
        );

        Self {
            store: Mutex::new(HashMap::new()),
            config,
            stats: Mutex::new(CacheStats::default()),
        }
    }

    /// Only the `memory` cache type stores anything.
    pub fn is_enabled(&self) -> bool {
        self.config.r#type == "memory"
    }

    fn ttl(&self) -> Duration {
        Duration::from_secs(self.config.expiration as u64)
    }

    fn record(&self, update: impl FnOnce(&mut CacheStats)) {
        if let Ok(mut stats) = self.stats.lock() {
            update(&mut stats);
        }
    }

    fn evict_one(&self, store: &mut HashMap<String, CachedResponse<T>>) {
        let victim = store
            .iter()
            .min_by(|a, b| {
                a.1.stored_at
                    .cmp(&b.1.stored_at)
                    .then_with(|| a.1.hits.cmp(&b.1.hits))
            })
            .map(|(key, _)| key.clone());

        if let Some(key) = victim {
            store.remove(&key);
            tracing::debug!("Evicted cached response: {}", key);
            self.record(|stats| stats.evictions += 1);
        }
    }

    pub fn get(&self, key: &str) -> Option<T> {
        if key.is_empty() || !self.is_enabled() {
            return None;
        }

        let ttl = self.ttl();
        let found = match self.store.lock() {
            Ok(mut store) => match store.get_mut(key) {
                Some(entry) if entry.is_stale(ttl) => {
                    tracing::debug!("Cached response expired: {}", key);
                    store.remove(key);
                    None
                }
                Some(entry) => Some(entry.hit()),
                None => None,
            },
            Err(e) => {
                tracing::error!("Failed to acquire cache lock for {}: {}", key, e);
                return None;
            }
        };

        match found {
            Some(value) => {
                tracing::debug!("Cache hit for {}", key);
                self.record(|stats| stats.hits += 1);
                Some(value)
            }
            None => {
                self.record(|stats| stats.misses += 1);
                None
            }
        }
    }

    pub fn insert(&self, key: String, value: T) -> Result<(), CacheError> {
        if key.is_empty() {
            return Err(CacheError::InvalidKey("Key cannot be empty".to_string()));
        }
        if !self.is_enabled() {
            return Ok(());
        }

        let mut store = self.store.lock().map_err(|e| {
            let error_msg = format!("Failed to acquire cache write lock: {}", e);
            tracing::error!("{}", error_msg);
            CacheError::LockError(error_msg)
        })?;

        if store.len() >= self.config.max_size as usize && !store.contains_key(&key) {
            self.evict_one(&mut store);
        }
        store.insert(key, CachedResponse::new(value));
        self.record(|stats| stats.inserts += 1);

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.store.lock().map(|store| store.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
            .lock()
            .map(|stats| stats.clone())
            .unwrap_or_default()
    }
}
