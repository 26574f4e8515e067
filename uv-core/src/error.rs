use thiserror::Error;

/// Rejected engine input. Produced before any advisory is built, so a caller
/// never receives a partial recommendation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("UV index must not be negative, got {0}")]
    NegativeUvIndex(f64),

    #[error("UV index must be a finite number, got {0}")]
    NonFiniteUvIndex(f64),

    #[error("Skin type must be between 1 and 6, got {0}")]
    SkinTypeOutOfRange(i64),

    #[error("Skin value must be a finite number between 1 and 6, got {0}")]
    SkinValueOutOfRange(f64),

    #[error("Please enter a postcode")]
    EmptyPostcode,

    #[error("Please enter a valid 4-digit Australian postcode, got '{0}'")]
    InvalidPostcode(String),

    #[error("Invalid coordinates ({lat}, {lng})")]
    InvalidCoordinates { lat: f64, lng: f64 },
}

/// Failure talking to a UV data provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Failed to send request to {endpoint}: {source}")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} request failed with status {status}: {body}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to parse {endpoint} JSON: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("{0}")]
    NotFound(String),
}
