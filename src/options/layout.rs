use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

/// Geometric layout parameters for the card ring.
///
/// Distances are in the host's rendering units (CSS pixels for a DOM host),
/// angles in radians.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutOptions {
    /// Horizontal offset applied to every card translation.
    pub x_offset: f32,
    /// Vertical offset applied to every card translation.
    pub y_offset: f32,
    /// Resting depth offset of the ring (the z-offset channel target).
    pub z_offset: f32,
    /// Resting angle of the active card (the angle-offset channel target).
    /// π/2 places the active card at the front of the ring.
    pub front_angle: f32,
    /// Card height, used to place the reflection below the card.
    pub card_height: f32,
    /// Amplitude of the sinusoidal vertical bob.
    pub bob_amplitude: f32,
    /// Gap between a card's bottom edge and its reflection.
    pub reflection_gap: f32,
    /// Frequency of the bob and image-wiggle waves (periods per full circle).
    pub wave_frequency: f32,
    /// Amplitude of the inner image's horizontal wiggle.
    pub wiggle_amplitude: f32,
    /// How much nearer cards grow: scale is `1 + sin(angle) * scale_amplitude`.
    pub scale_amplitude: f32,
    /// Opacity bias: opacity is `z / radius + opacity_bias`, clamped by
    /// the consumer.
    pub opacity_bias: f32,
    /// Perspective distance a DOM host should apply to card transforms.
    pub perspective: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            x_offset: 0.0,
            y_offset: -30.0,
            z_offset: 700.0,
            front_angle: FRAC_PI_2,
            card_height: 100.0,
            bob_amplitude: 17.0,
            reflection_gap: 0.5,
            wave_frequency: 3.0,
            wiggle_amplitude: 20.0,
            scale_amplitude: 0.2,
            opacity_bias: 1.1,
            perspective: 1600.0,
        }
    }
}
