use crate::GeoPoint;

/// Errors returned by measurements and by the service-response decoders
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid polygon: {0}")]
    InvalidPolygon(#[from] PolygonError),

    #[error("Invalid pitch angle: {0}° (expected 0 <= pitch < 90)")]
    InvalidPitch(f64),

    #[error("Building outline not found")]
    OutlineNotFound,

    #[error("Address not found")]
    AddressNotFound,

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid service URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Reasons a vertex sequence cannot be used as a roof outline
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PolygonError {
    #[error("at least 3 distinct vertices are required (got {distinct})")]
    TooFewVertices { distinct: usize },

    #[error("coordinate out of range: {point:?}")]
    CoordinateOutOfRange { point: GeoPoint },
}

/// Non-fatal issues encountered while decoding service responses
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// A way references a node that is missing from the response, skipped
    MissingNode { way: i64, node: i64 },

    /// The response contains more than one way, only the first is used
    ExtraWays { ignored: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
