//! Carousel engine: card state, smoothing channels, per-frame transforms.
//!
//! [`Carousel`] owns its two collaborators (a [`CardRenderer`] for the card
//! visuals and a [`FrameScheduler`] for frame timing) and drives four
//! independent smoothing channels: ring radius, depth offset, resting angle,
//! and the active-card angle. Each frame it projects every card onto the
//! ring, derives depth, bob, scale, facing, opacity, and stacking order,
//! and applies the result through the renderer.

mod accessors;

use std::f32::consts::{FRAC_PI_2, PI, TAU};
use std::time::Duration;

use glam::{Vec2, Vec3};

use crate::animation::smooth::Smoothed;
use crate::options::Options;
use crate::render::{CardFrame, CardRenderer, FrameRequestId, FrameScheduler};
use crate::util::circle::point_on_circle;

/// Angle floor applied when the card count alone would pack cards closer
/// than one seventeenth of the circle.
const DEFAULT_MIN_ANGLE_PER_CARD: f32 = TAU / 17.0;

/// Construction settings supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselSettings {
    /// Target ring radius. Must be positive.
    pub radius: f32,
    /// Optional per-card angle floor; defaults to one seventeenth of the
    /// circle.
    pub min_angle_per_card: Option<f32>,
}

/// The carousel engine.
///
/// # Preconditions
///
/// Degenerate inputs are programmer error, deliberately not checked at
/// runtime: the image sequence must be non-empty and the settings radius
/// positive. `start()` while already started double-schedules (the engine
/// remembers only the newest request id); hosts own lifecycle discipline.
pub struct Carousel<R, S> {
    renderer: R,
    scheduler: S,
    options: Options,

    card_count: usize,
    angle_per_card: f32,
    total_angle: f32,

    target_radius: f32,
    active_index: usize,
    active_angle_offset: f32,

    radius_channel: Smoothed,
    z_offset_channel: Smoothed,
    angle_offset_channel: Smoothed,
    active_angle_channel: Smoothed,

    frames: Vec<CardFrame>,
    pending: Option<FrameRequestId>,
    last_frame_time: Duration,
    settled: bool,
}

impl<R: CardRenderer, S: FrameScheduler> Carousel<R, S> {
    /// Build a carousel over `images` with default [`Options`].
    ///
    /// Creates one card per image through the renderer, in order, and marks
    /// card 0 active immediately (the first activation is not animated from
    /// a prior state).
    pub fn new(
        renderer: R,
        scheduler: S,
        images: &[&str],
        settings: CarouselSettings,
    ) -> Self {
        Self::with_options(
            renderer,
            scheduler,
            images,
            settings,
            Options::default(),
        )
    }

    /// Build a carousel with explicit [`Options`].
    pub fn with_options(
        mut renderer: R,
        scheduler: S,
        images: &[&str],
        settings: CarouselSettings,
        options: Options,
    ) -> Self {
        for image in images {
            renderer.create_card(image);
        }
        let card_count = images.len();

        let angle_per_card = (TAU / card_count as f32).min(
            settings
                .min_angle_per_card
                .unwrap_or(DEFAULT_MIN_ANGLE_PER_CARD),
        );
        let total_angle = angle_per_card * card_count as f32;

        let tuning = &options.tuning;
        let radius_channel = Smoothed::new(
            settings.radius,
            tuning.radius.smooth_factor,
            tuning.radius.stop_threshold,
        );
        let z_offset_channel = Smoothed::new(
            tuning.z_offset_seed,
            tuning.z_offset.smooth_factor,
            tuning.z_offset.stop_threshold,
        );
        let angle_offset_channel = Smoothed::new(
            tuning.angle_offset_seed,
            tuning.angle_offset.smooth_factor,
            tuning.angle_offset.stop_threshold,
        );
        let active_angle_channel = Smoothed::new(
            tuning.active_angle_seed,
            tuning.active_angle.smooth_factor,
            tuning.active_angle.stop_threshold,
        );

        let mut carousel = Self {
            renderer,
            scheduler,
            card_count,
            angle_per_card,
            total_angle,
            target_radius: settings.radius,
            active_index: 0,
            active_angle_offset: 0.0,
            radius_channel,
            z_offset_channel,
            angle_offset_channel,
            active_angle_channel,
            frames: vec![CardFrame::default(); card_count],
            pending: None,
            last_frame_time: Duration::ZERO,
            settled: false,
            options,
        };
        carousel.set_active_index(0);
        carousel
    }

    /// Select card `index` as the new focal card.
    ///
    /// Marks exactly one card active, sets the render hint on the inactive
    /// cards (the ones about to animate), and accumulates the shortest-path
    /// rotation toward the target's base angle. Selecting the already-active
    /// index is a no-op rotation but still re-runs the marking step.
    pub fn set_active_index(&mut self, index: usize) {
        for i in 0..self.card_count {
            let active = i == index;
            self.renderer.set_active(i, active);
            self.renderer.set_render_hint(i, !active);
        }

        let delta = self.rotation_delta(index);
        self.active_angle_offset += delta;
        self.active_index = index;
        log::debug!("active card -> {index} (rotation delta {delta:.4} rad)");
    }

    /// Set the target ring radius. The visual radius approaches it smoothly
    /// over subsequent frames.
    pub fn set_radius(&mut self, radius: f32) {
        self.target_radius = radius;
    }

    /// Begin the frame-callback chain: one immediate update at timestamp
    /// zero, then a request for the next frame.
    ///
    /// Calling `start` twice double-schedules; see the type-level caveat.
    pub fn start(&mut self) {
        self.on_frame(Duration::ZERO);
    }

    /// Cancel the pending frame request.
    ///
    /// Cancellation is not preemptive: a callback the host has already
    /// dispatched still executes once.
    pub fn stop(&mut self) {
        if let Some(request) = self.pending.take() {
            self.scheduler.cancel_frame(request);
        }
    }

    /// Advance one frame. The host calls this when a scheduled frame
    /// request fires, passing a monotonically increasing timestamp.
    pub fn on_frame(&mut self, timestamp: Duration) {
        let elapsed = timestamp.saturating_sub(self.last_frame_time);
        self.update(elapsed);
        self.last_frame_time = timestamp;
        self.pending = Some(self.scheduler.request_frame());
    }

    /// Shortest-path angular delta from the current active card's base angle
    /// to `target_index`'s base angle, normalized into (-π, π].
    fn rotation_delta(&self, target_index: usize) -> f32 {
        let current = (self.active_index as f32 * self.angle_per_card)
            % self.total_angle;
        let target =
            (target_index as f32 * self.angle_per_card) % self.total_angle;

        let mut delta = target - current;
        if delta > PI {
            delta -= TAU;
        } else if delta <= -PI {
            delta += TAU;
        }
        delta
    }

    /// Step all channels by the elapsed wall-clock time and apply the
    /// resulting frame to every card.
    fn update(&mut self, elapsed: Duration) {
        let layout = &self.options.layout;
        let frames = elapsed.as_secs_f32() * 1000.0
            / self.options.tuning.frame_interval_ms();

        let z_offset = self.z_offset_channel.step(layout.z_offset, frames);
        let angle_offset =
            self.angle_offset_channel.step(layout.front_angle, frames);
        let active_angle = self.active_angle_channel.step(
            self.active_angle_offset + angle_offset.value,
            frames,
        );
        let radius = self.radius_channel.step(self.target_radius, frames);

        for index in 0..self.card_count {
            let angle =
                active_angle.value - index as f32 * self.angle_per_card;
            let point = point_on_circle(radius.value, angle, Vec2::ZERO);
            // The circle lives in the horizontal plane: the projected y
            // component is depth toward the viewer.
            let (x, z) = (point.x, point.y);

            let y = layout.y_offset
                - layout.bob_amplitude * (angle * layout.wave_frequency).sin();
            let reflection_offset_y = -layout.y_offset
                - (layout.card_height
                    + layout.bob_amplitude
                    + layout.reflection_gap)
                + y;

            let frame = CardFrame {
                translation: Vec3::new(
                    x + layout.x_offset,
                    y,
                    z + z_offset.value,
                ),
                rotation_y: FRAC_PI_2 - angle,
                scale: 1.0 + angle.sin() * layout.scale_amplitude,
                opacity: z / radius.value + layout.opacity_bias,
                stacking: (radius.value + z).round() as i32,
                image_offset_x: (angle * layout.wave_frequency).cos()
                    * layout.wiggle_amplitude,
                reflection_offset_y,
            };
            self.frames[index] = frame;
            self.renderer.apply(index, &frame);
        }

        let settled = z_offset.done
            && angle_offset.done
            && active_angle.done
            && radius.done;
        if settled {
            if !self.settled {
                log::debug!("carousel motion settled");
            }
            for index in 0..self.card_count {
                self.renderer.set_render_hint(index, false);
            }
        }
        self.settled = settled;
    }
}
