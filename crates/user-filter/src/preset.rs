//! Boundary to whatever stores named filter presets.

use crate::error::FilterError;
use crate::types::AdvancedFilterConfig;
use serde::{Deserialize, Serialize};

/// Receives a filter tree to keep under a name.
///
/// Implemented for any `Fn(&AdvancedFilterConfig, &str) -> Result<(), FilterError>`,
/// so a closure is enough for callers that only need a hook.
pub trait PresetSink {
    fn save(&self, config: &AdvancedFilterConfig, name: &str) -> Result<(), FilterError>;
}

impl<F> PresetSink for F
where
    F: Fn(&AdvancedFilterConfig, &str) -> Result<(), FilterError>,
{
    fn save(&self, config: &AdvancedFilterConfig, name: &str) -> Result<(), FilterError> {
        self(config, name)
    }
}

/// Serializable snapshot of a saved preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterPreset {
    pub name: String,
    pub config: AdvancedFilterConfig,
}

impl FilterPreset {
    pub fn new(name: impl Into<String>, config: AdvancedFilterConfig) -> Self {
        FilterPreset {
            name: name.into(),
            config,
        }
    }
}
