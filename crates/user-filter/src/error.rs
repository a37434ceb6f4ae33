use thiserror::Error;

/// Failures surfaced by the engine's boundary operations.
///
/// Evaluation itself never fails: unknown operators, missing fields and
/// malformed bounds resolve to `true`. Only decoding input and talking to
/// preset storage can produce one of these.
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record collection must be a JSON array")]
    NotACollection,

    #[error("record at index {0} is not a JSON object")]
    NotARecord(usize),

    #[error("invalid preset name: {0:?}")]
    InvalidPresetName(String),

    #[error("preset not found: {0}")]
    PresetNotFound(String),

    #[error("preset {name:?} could not be saved: {reason}")]
    PresetRejected { name: String, reason: String },

    #[error("preset storage: {0}")]
    PresetStorage(#[from] std::io::Error),
}
