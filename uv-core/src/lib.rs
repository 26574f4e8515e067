//! Core library for the `uv` CLI.
//!
//! This crate defines:
//! - UV severity bands and the skin-type scale
//! - The sun-protection recommendation engine
//! - Abstraction over UV data providers (backend API, bundled snapshot)
//! - Configuration handling
//!
//! It is used by `uv-cli`, but can also be reused by other binaries or services.

pub mod band;
pub mod config;
pub mod error;
pub mod mock_data;
pub mod model;
pub mod provider;
pub mod recommend;
pub mod skin;

pub use band::UvBand;
pub use config::Config;
pub use error::{InputError, ProviderError};
pub use model::{City, Coordinates, Postcode, PostcodeLookup, UvReading};
pub use provider::{ProviderId, UvProvider};
pub use recommend::{LowUvPolicy, Recommendation, RecommendationEngine, compute};
pub use skin::{SKIN_TYPES, SkinType, SkinTypeInfo};
