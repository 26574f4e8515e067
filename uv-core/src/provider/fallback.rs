use async_trait::async_trait;

use crate::{
    error::ProviderError,
    model::{City, Coordinates, Postcode, PostcodeLookup, UvReading},
};

use super::{ProviderId, UvProvider};

/// Tries `primary` first and serves the call from `secondary` when it fails.
#[derive(Debug)]
pub struct FallbackProvider<P, S> {
    primary: P,
    secondary: S,
}

impl<P: UvProvider, S: UvProvider> FallbackProvider<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }

    fn log_fallback(&self, operation: &str, err: &ProviderError) {
        tracing::warn!(
            primary = %self.primary.id(),
            secondary = %self.secondary.id(),
            operation,
            error = %err,
            "primary provider failed, using fallback data"
        );
    }
}

#[async_trait]
impl<P: UvProvider, S: UvProvider> UvProvider for FallbackProvider<P, S> {
    fn id(&self) -> ProviderId {
        self.primary.id()
    }

    async fn all_cities(&self) -> Result<Vec<City>, ProviderError> {
        match self.primary.all_cities().await {
            Ok(cities) => Ok(cities),
            Err(err) => {
                self.log_fallback("all_cities", &err);
                self.secondary.all_cities().await
            }
        }
    }

    async fn search_cities(&self, name: &str) -> Result<Vec<City>, ProviderError> {
        match self.primary.search_cities(name).await {
            Ok(cities) => Ok(cities),
            Err(err) => {
                self.log_fallback("search_cities", &err);
                self.secondary.search_cities(name).await
            }
        }
    }

    async fn all_readings(&self) -> Result<Vec<UvReading>, ProviderError> {
        match self.primary.all_readings().await {
            Ok(readings) => Ok(readings),
            Err(err) => {
                self.log_fallback("all_readings", &err);
                self.secondary.all_readings().await
            }
        }
    }

    async fn by_postcode(&self, postcode: &Postcode) -> Result<PostcodeLookup, ProviderError> {
        match self.primary.by_postcode(postcode).await {
            Ok(lookup) => Ok(lookup),
            Err(err) => {
                self.log_fallback("by_postcode", &err);
                self.secondary.by_postcode(postcode).await
            }
        }
    }

    async fn by_coordinates(&self, at: Coordinates) -> Result<UvReading, ProviderError> {
        match self.primary.by_coordinates(at).await {
            Ok(reading) => Ok(reading),
            Err(err) => {
                self.log_fallback("by_coordinates", &err);
                self.secondary.by_coordinates(at).await
            }
        }
    }
}
