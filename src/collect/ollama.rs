//! Model inventory from the local Ollama API.
//!
//! - `GET /api/ps` lists models resident in VRAM
//! - `GET /api/tags` lists every model on disk

use super::error::CollectError;
use super::types::{round1, CatalogModel, LoadedModel};
use super::ModelSource;
use crate::config::OllamaConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};
use std::time::Duration;

const BYTES_PER_GB: f64 = 1e9;

/// Shared shape of `/api/ps` and `/api/tags`
#[derive(Deserialize)]
struct OllamaModelsResponse {
    #[serde(default)]
    models: Vec<OllamaModel>,
}

#[derive(Deserialize)]
struct OllamaModel {
    name: String,
    #[serde(default)]
    size: u64,
    #[serde(default)]
    size_vram: u64,
    #[serde(default)]
    context_length: u64,
    #[serde(default)]
    details: OllamaDetails,
}

#[derive(Deserialize, Default)]
struct OllamaDetails {
    #[serde(default)]
    quantization_level: Option<String>,
    #[serde(default)]
    parameter_size: Option<String>,
}

fn gigabytes(bytes: u64) -> f64 {
    round1(bytes as f64 / BYTES_PER_GB)
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, CollectError> {
    serde_json::from_str(body).map_err(|e| CollectError::parse(e.to_string()))
}

/// Parse an Ollama `/api/ps` response.
///
/// Missing optional fields default to zero or empty.
pub fn parse_loaded_models(body: &str) -> Result<Vec<LoadedModel>, CollectError> {
    let response: OllamaModelsResponse = parse_body(body)?;

    Ok(response
        .models
        .into_iter()
        .map(|m| LoadedModel {
            name: m.name,
            param_size: m.details.parameter_size.unwrap_or_default(),
            vram_gb: gigabytes(m.size_vram),
            context_length: m.context_length,
            quantization: m.details.quantization_level.unwrap_or_default(),
        })
        .collect())
}

/// Parse an Ollama `/api/tags` response.
pub fn parse_catalog_models(body: &str) -> Result<Vec<CatalogModel>, CollectError> {
    let response: OllamaModelsResponse = parse_body(body)?;

    Ok(response
        .models
        .into_iter()
        .map(|m| CatalogModel {
            name: m.name,
            param_size: m.details.parameter_size.unwrap_or_default(),
            size_gb: gigabytes(m.size),
            quantization: m.details.quantization_level.unwrap_or_default(),
        })
        .collect())
}

/// `ModelSource` backed by the Ollama HTTP API.
pub struct OllamaClient {
    /// Base URL (e.g., "http://localhost:11434")
    base_url: String,
    client: Client,
    timeout_seconds: u64,
}

impl OllamaClient {
    pub fn new(config: &OllamaConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Create with a custom HTTP client (for testing).
    pub fn with_client(config: &OllamaConfig, client: Client) -> Self {
        Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            client,
            timeout_seconds: config.timeout_seconds,
        }
    }

    async fn get(&self, path: &str) -> Result<String, CollectError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(self.timeout_seconds))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CollectError::RequestTimeout(self.timeout_seconds)
                } else {
                    CollectError::ConnectionFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(CollectError::HttpError(response.status().as_u16()));
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                CollectError::RequestTimeout(self.timeout_seconds)
            } else {
                CollectError::ConnectionFailed(e.to_string())
            }
        })
    }

    /// Fetch and parse `/api/ps`, surfacing the error.
    pub async fn fetch_loaded(&self) -> Result<Vec<LoadedModel>, CollectError> {
        let body = self.get("/api/ps").await?;
        parse_loaded_models(&body)
    }

    /// Fetch and parse `/api/tags`, surfacing the error.
    pub async fn fetch_catalog(&self) -> Result<Vec<CatalogModel>, CollectError> {
        let body = self.get("/api/tags").await?;
        parse_catalog_models(&body)
    }
}

#[async_trait]
impl ModelSource for OllamaClient {
    async fn loaded_models(&self) -> Vec<LoadedModel> {
        self.fetch_loaded().await.unwrap_or_else(|e| {
            tracing::debug!(url = %self.base_url, error = %e, "Loaded models unavailable");
            Vec::new()
        })
    }

    async fn catalog_models(&self) -> Vec<CatalogModel> {
        self.fetch_catalog().await.unwrap_or_else(|e| {
            tracing::debug!(url = %self.base_url, error = %e, "Model catalog unavailable");
            Vec::new()
        })
    }
}
