//! Shared utilities for the carousel engine.
//!
//! Helpers for circle projection and host-side frame timing.

pub mod circle;
pub mod frame_timing;
