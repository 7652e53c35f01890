use crate::error::CropwiseError;
use crate::model::Season;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which crops qualify for automatic land allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoSelectPolicy {
    /// Crops must score strictly above this.
    pub min_score: u8,
    pub max_crops: usize,
}

impl Default for AutoSelectPolicy {
    fn default() -> Self {
        Self {
            min_score: 60,
            max_crops: 4,
        }
    }
}

/// Engine settings. Every field has a default, so a config file only needs
/// the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub auto_select: AutoSelectPolicy,
    pub default_season: Season,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            auto_select: AutoSelectPolicy::default(),
            default_season: Season::Kharif,
        }
    }
}

/// Load engine settings from a JSON file.
pub fn load_config(path: &Path) -> Result<EngineConfig, CropwiseError> {
    let content = std::fs::read_to_string(path).map_err(|e| CropwiseError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let config: EngineConfig =
        serde_json::from_str(&content).map_err(|e| CropwiseError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    tracing::debug!(?config, path = %path.display(), "loaded engine config");
    Ok(config)
}
