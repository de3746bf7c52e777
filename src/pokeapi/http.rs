use super::PokeApi;
use crate::cache::{CacheStats, ResponseCache};
use crate::config::Config;
use crate::error::{PipelineError, Result};
use serde::de::DeserializeOwned;

/// PokeAPI over HTTP, with raw response bodies cached per URL.
pub struct HttpClient {
    http: reqwest::Client,
    api_url: String,
    cache: Option<ResponseCache<String>>,
}

impl HttpClient {
    pub fn new(config: &Config) -> Self {
        // Only the in-memory backend exists; any other type means no cache.
        let cache = config
            .pokeapi
            .cache_enabled
            .then(|| ResponseCache::new(config.cache.clone()))
            .filter(ResponseCache::is_enabled);

        Self {
            http: reqwest::Client::new(),
            api_url: config.pokeapi.api_url.trim_end_matches('/').to_string(),
            cache,
        }
    }

    fn resolve(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.api_url, path.trim_start_matches('/'))
        }
    }

    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(ResponseCache::stats)
    }

    async fn fetch_body(&self, url: &str) -> Result<String> {
        tracing::debug!("Fetching resource from URL: {}", url);

        let response = self.http.get(url).send().await.map_err(|e| {
            tracing::error!("Failed to make HTTP request to {}: {}", url, e);
            PipelineError::from(e)
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            tracing::error!("Resource not found: {}", url);
            return Err(PipelineError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            let error_msg = format!("API request to {} failed with status: {}", url, status);
            tracing::error!("{}", error_msg);
            return Err(PipelineError::Network(error_msg));
        }

        Ok(response.text().await?)
    }
}

impl PokeApi for HttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.resolve(path);

        if let Some(body) = self.cache.as_ref().and_then(|cache| cache.get(&url)) {
            return Ok(serde_json::from_str(&body)?);
        }

        let body = self.fetch_body(&url).await?;
        let value = serde_json::from_str::<T>(&body).map_err(|e| {
            tracing::error!("Failed to parse JSON response from {}: {}", url, e);
            PipelineError::from(e)
        })?;

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.insert(url.clone(), body) {
                tracing::warn!("Failed to cache response for {}: {}", url, e);
            }
        }

        Ok(value)
    }
}
