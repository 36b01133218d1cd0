//! Tunable gesture parameters with TOML preset support.
//!
//! Every rate and clamp that shapes how a gesture feels is consolidated
//! here. Options serialize to/from TOML so hosts can ship tuning presets
//! alongside their assets.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ControlError;

/// Parameters for the distance-stretch family of controls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DistanceOptions {
    /// Base of the exponential scale step. Values below one shrink the
    /// object distance per unit of gesture travel.
    pub scale_base: f32,
    /// Exponent applied per mouse drag step.
    pub drag_rate: f32,
    /// Exponent applied per pinch step.
    pub pinch_rate: f32,
    /// Exponent applied per wheel tick.
    pub wheel_rate: f32,
}

impl Default for DistanceOptions {
    fn default() -> Self {
        Self {
            scale_base: 0.95,
            drag_rate: 2.0,
            pinch_rate: 1.5,
            wheel_rate: 2.0,
        }
    }
}

/// Parameters for the camera zoom control.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ZoomOptions {
    /// Base of the exponential zoom step.
    pub scale_base: f32,
    /// Exponent applied per drag step.
    pub drag_rate: f32,
    /// Lower clamp on the camera zoom factor.
    pub min_zoom: f32,
    /// Upper clamp on the camera zoom factor.
    pub max_zoom: f32,
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            scale_base: 0.95,
            drag_rate: 2.0,
            min_zoom: 0.1,
            max_zoom: 20.0,
        }
    }
}

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[zoom]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ControlOptions {
    /// Distance-stretch gesture parameters.
    pub distance: DistanceOptions,
    /// Camera zoom gesture parameters.
    pub zoom: ZoomOptions,
}

impl ControlOptions {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ControlError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ControlError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = ControlOptions::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: ControlOptions = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[distance]
wheel_rate = 3.0
";
        let opts: ControlOptions = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.distance.wheel_rate, 3.0);
        // Everything else should be default
        assert_eq!(opts.distance.scale_base, 0.95);
        assert_eq!(opts.zoom.max_zoom, 20.0);
    }

    #[test]
    fn save_and_reload_preserves_tuning() {
        let mut opts = ControlOptions::default();
        opts.zoom.min_zoom = 0.25;
        let path = std::env::temp_dir().join("object-controls-options-test.toml");
        opts.save(&path).unwrap();
        let reloaded = ControlOptions::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(reloaded, opts);
    }
}
