//! Gesture engine configuration

use crate::gesture::error::{GestureError, GestureResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables for the gesture state machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GestureConfig {
    /// Every "down" re-binds the primary position and emits pan-start,
    /// even while a pan is already in progress
    pub reanchor_on_every_down: bool,

    /// Tracks with at least this many samples produce a multi-pointer-move
    /// on every move event
    pub multi_pointer_min_track_len: usize,

    /// Drop a pointer's track when it is cancelled. Turning this off leaves
    /// cancelled tracks (and the pan) open until the next stop.
    pub end_track_on_cancel: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            reanchor_on_every_down: true,
            multi_pointer_min_track_len: 2,
            end_track_on_cancel: true,
        }
    }
}

impl GestureConfig {
    /// Load from a JSON file; missing fields keep their defaults
    pub fn from_path(path: &Path) -> GestureResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: GestureConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Deltas need two samples, so shorter thresholds are rejected
    pub fn validate(&self) -> GestureResult<()> {
        if self.multi_pointer_min_track_len < 2 {
            return Err(GestureError::ConfigurationError(format!(
                "multiPointerMinTrackLen must be at least 2, got {}",
                self.multi_pointer_min_track_len
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_preserve_reference_behavior() {
        let config = GestureConfig::default();
        assert!(config.reanchor_on_every_down);
        assert_eq!(config.multi_pointer_min_track_len, 2);
        assert!(config.end_track_on_cancel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_path_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"reanchorOnEveryDown": false}}"#).unwrap();

        let config = GestureConfig::from_path(file.path()).unwrap();

        assert!(!config.reanchor_on_every_down);
        assert_eq!(config.multi_pointer_min_track_len, 2);
    }

    #[test]
    fn test_from_path_rejects_short_threshold() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"multiPointerMinTrackLen": 1}}"#).unwrap();

        let err = GestureConfig::from_path(file.path()).unwrap_err();
        assert!(matches!(err, GestureError::ConfigurationError(_)));
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GestureConfig::from_path(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, GestureError::IoError(_)));
    }
}
