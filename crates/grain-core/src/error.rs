//! Configuration errors.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be at least 1, got {value}")]
    InvalidOctaves { field: &'static str, value: i64 },

    #[error("cellular jitter must lie in [0, 1], got {0}")]
    JitterOutOfRange(f32),

    #[error("{field} must lie in [{min}, {max}], got {value}")]
    OutOfRange { field: &'static str, value: f32, min: f32, max: f32 },

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("unknown {kind} \"{value}\"")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
