use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::{
    error::ProviderError,
    model::{City, Coordinates, Postcode, PostcodeLookup, UvReading},
};

use super::{ProviderId, UvProvider};

/// Client for the UV index backend API.
#[derive(Debug, Clone)]
pub struct BackendProvider {
    base_url: String,
    http: Client,
}

impl BackendProvider {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ProviderError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ProviderError::Client)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "API request: GET");

        let res = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|source| ProviderError::Http {
                endpoint: path.to_string(),
                source,
            })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| ProviderError::Http {
                endpoint: path.to_string(),
                source,
            })?;

        tracing::debug!(%status, "API response");

        if !status.is_success() {
            return Err(ProviderError::Status {
                endpoint: path.to_string(),
                status,
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|source| ProviderError::Decode {
            endpoint: path.to_string(),
            source,
        })
    }
}

#[async_trait]
impl UvProvider for BackendProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Backend
    }

    async fn all_cities(&self) -> Result<Vec<City>, ProviderError> {
        self.get_json("/cities", &[]).await
    }

    async fn search_cities(&self, name: &str) -> Result<Vec<City>, ProviderError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(Vec::new());
        }
        self.get_json("/cities/search", &[("name", name.to_string())]).await
    }

    async fn all_readings(&self) -> Result<Vec<UvReading>, ProviderError> {
        self.get_json("/uv-index", &[]).await
    }

    async fn by_postcode(&self, postcode: &Postcode) -> Result<PostcodeLookup, ProviderError> {
        let path = format!("/uv-index/postcode/{postcode}");
        self.get_json(&path, &[]).await
    }

    async fn by_coordinates(&self, at: Coordinates) -> Result<UvReading, ProviderError> {
        self.get_json(
            "/uv-index/coordinates",
            &[("lat", at.lat.to_string()), ("lng", at.lng.to_string())],
        )
        .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
