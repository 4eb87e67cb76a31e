//! Collaborator contracts between the engine and its host.
//!
//! The engine computes renderable state; it never touches elements or the
//! event loop directly. A host implements [`CardRenderer`] to own the card
//! visuals (for a DOM host: a wrapper element with a primary face and a
//! reflection face, both showing the card's image) and [`FrameScheduler`]
//! to bridge the environment's "invoke once before next repaint" primitive.

use glam::Vec3;

/// Identifier for a pending frame request issued by a [`FrameScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRequestId(pub u64);

/// Renderable state of one card for one frame.
///
/// A fixed-shape record updated wholesale each frame and written into a
/// pre-allocated buffer, so steady-state animation performs no allocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardFrame {
    /// Card translation; `z` is depth toward the viewer.
    pub translation: Vec3,
    /// Billboard rotation about the vertical axis, radians.
    pub rotation_y: f32,
    /// Uniform card scale (nearer cards appear larger).
    pub scale: f32,
    /// Opacity before consumer-side clamping; far cards fade out.
    pub opacity: f32,
    /// Stacking order; nearer cards draw on top.
    pub stacking: i32,
    /// Horizontal shift of the inner image (parallax-like secondary motion).
    pub image_offset_x: f32,
    /// Vertical offset of the mirrored reflection face.
    pub reflection_offset_y: f32,
}

impl Default for CardFrame {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation_y: 0.0,
            scale: 1.0,
            opacity: 1.0,
            stacking: 0,
            image_offset_x: 0.0,
            reflection_offset_y: 0.0,
        }
    }
}

/// Host-side card visuals.
///
/// Implementors own one visual element per card, created in order through
/// [`CardRenderer::create_card`] at engine construction. Indices passed to
/// the other methods refer to that creation order.
pub trait CardRenderer {
    /// Create the visual element for the next card, showing `image`.
    ///
    /// The host is also responsible for wiring its selection trigger (e.g.
    /// a click handler) so that selecting card `i` calls
    /// [`Carousel::set_active_index`](crate::engine::Carousel::set_active_index)
    /// exactly once.
    fn create_card(&mut self, image: &str);

    /// Mark card `index` as the active (focal) card or not.
    fn set_active(&mut self, index: usize, active: bool);

    /// Toggle the rendering hint that favors GPU compositing for a card
    /// that is about to animate (`will-change` on a DOM host).
    fn set_render_hint(&mut self, index: usize, hint: bool);

    /// Apply one frame of renderable state to card `index`.
    fn apply(&mut self, index: usize, frame: &CardFrame);
}

/// Host-side frame-timing primitive.
///
/// `request_frame` must arrange for the host to call
/// [`Carousel::on_frame`](crate::engine::Carousel::on_frame) with a
/// monotonically increasing timestamp before the next repaint;
/// `cancel_frame` must prevent a still-pending invocation. Cancellation is
/// not preemptive: a callback already dispatched still executes once.
pub trait FrameScheduler {
    /// Schedule one invocation before the next repaint.
    fn request_frame(&mut self) -> FrameRequestId;

    /// Cancel a pending invocation.
    fn cancel_frame(&mut self, request: FrameRequestId);
}
