//! Animation primitives for smooth value transitions.

pub mod smooth;
