//! Centralized carousel options with TOML preset support.
//!
//! All tweakable constants (ring geometry, channel smoothing factors, the
//! nominal frame rate) are consolidated here instead of living as globals,
//! so the engine stays testable in isolation and multiple instances can
//! carry different configurations. Options serialize to/from TOML.

mod layout;
mod tuning;

use std::path::Path;

pub use layout::LayoutOptions;
pub use tuning::{ChannelTuning, TuningOptions};
use serde::{Deserialize, Serialize};

use crate::error::CarouselError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[tuning]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Ring geometry and cosmetic wave parameters.
    pub layout: LayoutOptions,
    /// Channel smoothing constants and nominal frame rate.
    pub tuning: TuningOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CarouselError> {
        let content =
            std::fs::read_to_string(path).map_err(CarouselError::Io)?;
        toml::from_str(&content)
            .map_err(|e| CarouselError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CarouselError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CarouselError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CarouselError::Io)?;
        }
        std::fs::write(path, content).map_err(CarouselError::Io)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, TAU};

    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let parsed: Options =
            toml::from_str("[layout]\nz_offset = 900.0\n").unwrap();
        assert_eq!(parsed.layout.z_offset, 900.0);
        assert_eq!(parsed.layout.y_offset, -30.0);
        assert_eq!(parsed.tuning, TuningOptions::default());
    }

    #[test]
    fn default_tuning_matches_channel_constants() {
        let tuning = TuningOptions::default();
        assert_eq!(tuning.nominal_fps, 60.0);
        assert_eq!(tuning.radius.smooth_factor, 20.0);
        assert_eq!(tuning.radius.stop_threshold, 0.1);
        assert_eq!(tuning.z_offset.smooth_factor, 40.0);
        assert_eq!(tuning.angle_offset.stop_threshold, 1e-4);
        assert_eq!(tuning.active_angle.smooth_factor, 15.0);
        assert_eq!(tuning.z_offset_seed, -5000.0);
        assert_eq!(tuning.angle_offset_seed, -TAU);
        assert!((tuning.frame_interval_ms() - 1000.0 / 60.0).abs() < 1e-4);
    }

    #[test]
    fn default_layout_matches_ring_constants() {
        let layout = LayoutOptions::default();
        assert_eq!(layout.x_offset, 0.0);
        assert_eq!(layout.y_offset, -30.0);
        assert_eq!(layout.z_offset, 700.0);
        assert_eq!(layout.front_angle, FRAC_PI_2);
        assert_eq!(layout.card_height, 100.0);
        assert_eq!(layout.bob_amplitude, 17.0);
        assert_eq!(layout.reflection_gap, 0.5);
        assert_eq!(layout.perspective, 1600.0);
    }
}
