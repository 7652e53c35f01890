use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CropwiseError {
    #[error("failed to parse soil sheet: {0}")]
    ParseError(String),

    #[error("failed to load catalog from {path}: {reason}")]
    CatalogLoad { path: PathBuf, reason: String },

    #[error("invalid catalog: {0}")]
    CatalogInvalid(String),

    #[error("failed to load config from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("unknown season '{0}'. Available: kharif, rabi, zaid")]
    UnknownSeason(String),

    #[error("crop '{0}' is not part of this plan or catalog")]
    UnknownCrop(String),

    #[error("crop '{0}' is already part of this plan")]
    DuplicateCrop(String),

    #[error("invalid area: {0}")]
    InvalidArea(String),

    #[error("requested {requested} acres but only {available} acres are available")]
    CapacityExceeded {
        requested: Decimal,
        available: Decimal,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
