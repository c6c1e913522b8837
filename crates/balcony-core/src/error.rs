use thiserror::Error;

/// Result type for parameter decoding and layout computation.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Contract violations surfaced by the layout engine.
///
/// All of these are data errors: the computation for that frame is aborted
/// and nothing is retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("support count {0} is not one of 2, 3, 4 or 6")]
    InvalidSupportCount(u32),
    #[error("railing style `{0}` is not recognized")]
    InvalidRailingStyle(String),
    #[error("{kind} material `{tag}` is not recognized")]
    InvalidMaterial { kind: &'static str, tag: String },
    #[error("{name} must be a positive finite length, got {value}")]
    DegenerateDimension { name: &'static str, value: f32 },
    #[error("{name} {value} exceeds the {max} m cap")]
    DimensionTooLarge {
        name: &'static str,
        value: f32,
        max: f32,
    },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("manufacturer `{0}` not found")]
    UnknownManufacturer(String),
    #[error("preset `{0}` not found")]
    UnknownPreset(String),
    #[error("preset `{preset}` is not offered by `{manufacturer}`")]
    PresetNotOffered {
        manufacturer: String,
        preset: String,
    },
    #[error("catalog is inconsistent: {0}")]
    Inconsistent(String),
    #[error("catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
