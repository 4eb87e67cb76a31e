use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Smoothing parameters for one channel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChannelTuning {
    /// Reciprocal of the per-frame approach fraction. Must be nonzero.
    pub smooth_factor: f32,
    /// Distance to the target below which the value snaps onto it.
    pub stop_threshold: f32,
}

impl Default for ChannelTuning {
    fn default() -> Self {
        Self {
            smooth_factor: 20.0,
            stop_threshold: 0.1,
        }
    }
}

/// Animation tuning: nominal frame rate plus the four channel constants
/// and their seed values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TuningOptions {
    /// Reference frame rate used to convert elapsed wall-clock time into
    /// nominal frame counts.
    pub nominal_fps: f32,
    /// Radius channel tuning. This channel seeds from
    /// [`CarouselSettings::radius`](crate::engine::CarouselSettings).
    pub radius: ChannelTuning,
    /// Depth-offset channel tuning.
    pub z_offset: ChannelTuning,
    /// Resting-angle channel tuning.
    pub angle_offset: ChannelTuning,
    /// Active-angle channel tuning.
    pub active_angle: ChannelTuning,
    /// Seed for the depth-offset channel (cards fly in from far away).
    pub z_offset_seed: f32,
    /// Seed for the resting-angle channel (one full intro revolution).
    pub angle_offset_seed: f32,
    /// Seed for the active-angle channel.
    pub active_angle_seed: f32,
}

impl Default for TuningOptions {
    fn default() -> Self {
        Self {
            nominal_fps: 60.0,
            radius: ChannelTuning {
                smooth_factor: 20.0,
                stop_threshold: 0.1,
            },
            z_offset: ChannelTuning {
                smooth_factor: 40.0,
                stop_threshold: 0.1,
            },
            angle_offset: ChannelTuning {
                smooth_factor: 40.0,
                stop_threshold: 1e-4,
            },
            active_angle: ChannelTuning {
                smooth_factor: 15.0,
                stop_threshold: 1e-4,
            },
            z_offset_seed: -5000.0,
            angle_offset_seed: -TAU,
            active_angle_seed: 0.0,
        }
    }
}

impl TuningOptions {
    /// Nominal frame interval in milliseconds.
    #[inline]
    #[must_use]
    pub fn frame_interval_ms(&self) -> f32 {
        1000.0 / self.nominal_fps
    }
}
