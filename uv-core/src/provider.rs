use crate::{
    City, Config, Coordinates, Postcode, PostcodeLookup, UvReading,
    error::ProviderError,
    provider::{backend::BackendProvider, fallback::FallbackProvider, mock::MockProvider},
};
use async_trait::async_trait;
use std::{convert::TryFrom, fmt::Debug};

pub mod backend;
pub mod fallback;
pub mod mock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    Backend,
    Mock,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Backend => "backend",
            ProviderId::Mock => "mock",
        }
    }

    pub const fn all() -> &'static [ProviderId] {
        &[ProviderId::Backend, ProviderId::Mock]
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProviderId {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "backend" => Ok(ProviderId::Backend),
            "mock" => Ok(ProviderId::Mock),
            _ => Err(anyhow::anyhow!(
                "Unknown provider '{value}'. Supported providers: backend, mock."
            )),
        }
    }
}

/// Source of city and UV index data.
#[async_trait]
pub trait UvProvider: Send + Sync + Debug {
    fn id(&self) -> ProviderId;

    async fn all_cities(&self) -> Result<Vec<City>, ProviderError>;

    async fn search_cities(&self, name: &str) -> Result<Vec<City>, ProviderError>;

    async fn all_readings(&self) -> Result<Vec<UvReading>, ProviderError>;

    async fn by_postcode(&self, postcode: &Postcode) -> Result<PostcodeLookup, ProviderError>;

    /// Reading of the station nearest to `at`, with `distance` filled in.
    async fn by_coordinates(&self, at: Coordinates) -> Result<UvReading, ProviderError>;
}

/// Construct a provider from config and explicit ProviderId.
///
/// The backend provider is wrapped in a mock fallback unless the config turns
/// that off.
pub fn provider_from_config(
    id: ProviderId,
    config: &Config,
) -> anyhow::Result<Box<dyn UvProvider>> {
    let boxed: Box<dyn UvProvider> = match id {
        ProviderId::Mock => Box::new(MockProvider),
        ProviderId::Backend => {
            let backend = BackendProvider::new(config.api_base_url(), config.timeout())?;
            if config.fallback_to_mock {
                Box::new(FallbackProvider::new(backend, MockProvider))
            } else {
                Box::new(backend)
            }
        }
    };

    tracing::debug!(provider = %id, fallback = config.fallback_to_mock, "provider constructed");
    Ok(boxed)
}

/// Construct the default provider from config, using `provider` field.
pub fn default_provider_from_config(config: &Config) -> anyhow::Result<Box<dyn UvProvider>> {
    let id = config.provider_id()?;
    provider_from_config(id, config)
}
