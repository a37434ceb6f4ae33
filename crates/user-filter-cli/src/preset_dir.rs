//! Presets stored as one JSON file per name in a directory.

use regex::Regex;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use user_filter::{AdvancedFilterConfig, FilterError, FilterPreset, PresetSink};

fn preset_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9 _.\-]+$").expect("preset name pattern is valid"))
}

pub struct PresetDir {
    root: PathBuf,
}

impl PresetDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        PresetDir { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing preset `name`. Names that could escape the directory are
    /// rejected.
    pub fn path_for(&self, name: &str) -> Result<PathBuf, FilterError> {
        if name.starts_with('.') || !preset_name_re().is_match(name) {
            return Err(FilterError::InvalidPresetName(name.to_string()));
        }
        Ok(self.root.join(format!("{name}.json")))
    }

    pub fn load(&self, name: &str) -> Result<AdvancedFilterConfig, FilterError> {
        let path = self.path_for(name)?;
        let text = match fs_err::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(FilterError::PresetNotFound(name.to_string()))
            }
            Err(e) => return Err(e.into()),
        };
        let preset: FilterPreset = serde_json::from_str(&text)?;
        log::debug!("loaded preset {name:?} from {}", path.display());
        Ok(preset.config)
    }

    /// Names of all presets in the directory, sorted.
    pub fn list(&self) -> Result<Vec<String>, FilterError> {
        let entries = match fs_err::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let path = entry.path();
                if path.extension()? != "json" {
                    return None;
                }
                path.file_stem()?.to_str().map(str::to_string)
            })
            .collect();
        names.sort();
        Ok(names)
    }
}

impl PresetSink for PresetDir {
    fn save(&self, config: &AdvancedFilterConfig, name: &str) -> Result<(), FilterError> {
        let path = self.path_for(name)?;
        let preset = FilterPreset::new(name, config.clone());
        let json = serde_json::to_string_pretty(&preset)?;
        let rejected = |e: std::io::Error| FilterError::PresetRejected {
            name: name.to_string(),
            reason: e.to_string(),
        };
        fs_err::create_dir_all(&self.root).map_err(rejected)?;
        fs_err::write(&path, json).map_err(rejected)?;
        log::debug!("wrote preset {name:?} to {}", path.display());
        Ok(())
    }
}
