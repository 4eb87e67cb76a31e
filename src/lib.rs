// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Animation math allowances: casts between float depth and integer stacking
// order are intentional, and a smoothed channel snaps to its target exactly,
// so float equality against the target is well defined.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

//! 3D-style rotating card carousel animation engine.
//!
//! Cardwheel computes the per-frame renderable state of a ring of cards:
//! positions on a circle projected into depth, billboard facing, scale,
//! opacity, and stacking order, all eased toward their targets with
//! frame-rate-independent exponential smoothing.
//!
//! # Key entry points
//!
//! - [`engine::Carousel`] - the carousel engine
//! - [`render::CardRenderer`] / [`render::FrameScheduler`] - the collaborator
//!   traits a host implements
//! - [`options::Options`] - layout and tuning configuration
//! - [`animation::smooth::Smoothed`] - the exponential smoothing channel
//!
//! # Architecture
//!
//! The engine is single-threaded and host-driven: `start()` performs one
//! immediate update and requests the next frame through the host's
//! [`render::FrameScheduler`]; the host invokes
//! [`engine::Carousel::on_frame`] with a monotonically increasing timestamp
//! whenever that request fires. Each frame the engine steps its four
//! smoothing channels, writes one [`render::CardFrame`] per card into a
//! pre-allocated buffer, applies each through the [`render::CardRenderer`],
//! and reschedules.

pub mod animation;
pub mod engine;
pub mod error;
pub mod options;
pub mod render;
pub mod util;
