//! Read accessors for [`Carousel`] state.

use std::time::Duration;

use super::Carousel;
use crate::options::Options;
use crate::render::{CardFrame, CardRenderer, FrameRequestId, FrameScheduler};

impl<R: CardRenderer, S: FrameScheduler> Carousel<R, S> {
    /// Number of cards in the ring.
    #[inline]
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.card_count
    }

    /// Angular spacing between adjacent cards, radians.
    #[inline]
    #[must_use]
    pub fn angle_per_card(&self) -> f32 {
        self.angle_per_card
    }

    /// Total angular span of the ring (`angle_per_card * card_count`).
    #[inline]
    #[must_use]
    pub fn total_angle(&self) -> f32 {
        self.total_angle
    }

    /// The currently selected card index.
    #[inline]
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// The target ring radius (not the animated value).
    #[inline]
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.target_radius
    }

    /// The renderable state computed for every card in the last frame.
    #[inline]
    #[must_use]
    pub fn frames(&self) -> &[CardFrame] {
        &self.frames
    }

    /// Whether all four smoothing channels reported convergence in the
    /// last frame.
    #[inline]
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// The frame request the engine is waiting on, if any.
    #[inline]
    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameRequestId> {
        self.pending
    }

    /// Timestamp of the last processed frame.
    #[inline]
    #[must_use]
    pub fn last_frame_time(&self) -> Duration {
        self.last_frame_time
    }

    /// The engine's configuration.
    #[inline]
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The host renderer.
    #[inline]
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access to the host renderer.
    #[inline]
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// The host frame scheduler.
    #[inline]
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the host frame scheduler.
    #[inline]
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}
