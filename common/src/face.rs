//! The analog watch face widget.
//!
//! A `WatchFace` reads its [`FaceStyle`] once at construction, derives
//! its paints and hub radius from it, and afterwards only ever consumes a
//! [`Layout`] (from the host layout pass) and a [`ClockReading`] (sampled
//! once per render by the host). Draw order per render:
//!
//! 1. background blit, or hub circle plus 12 tick marks
//! 2. hour hand
//! 3. minute hand
//! 4. second hand
//!
//! Hands are plain stroked lines from the hub radius outward, each
//! rotated independently about the center, so later elements never
//! occlude earlier ones.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};

use crate::config::{
    HOUR_HAND_FRACTION,
    HUB_RADIUS_DP,
    MINUTE_HAND_FRACTION,
    REDRAW_PERIOD_MS,
    SECOND_HAND_FRACTION,
    TICK_COUNT,
    dip2px,
};
use crate::dial::{ClockReading, hand_segment, hour_angle, minute_angle, second_angle, tick_segment};
use crate::layout::{Constraints, Layout};
use crate::lifecycle::{RedrawTimer, UpdateLoop};
use crate::style::{FaceStyle, HandPaints};
use crate::view::View;

/// Analog watch face. One instance per view; instances share nothing.
#[derive(Debug)]
pub struct WatchFace<'a> {
    style: FaceStyle<'a>,
    paints: HandPaints,
    hub_radius: u32,
    run: UpdateLoop,
}

impl<'a> WatchFace<'a> {
    /// Build a face from its style and the device density scale factor.
    pub fn new(
        style: FaceStyle<'a>,
        scale: f32,
    ) -> Self {
        let paints = HandPaints::derive(&style, scale);
        let hub_radius = dip2px(HUB_RADIUS_DP, scale).max(1);
        Self {
            style,
            paints,
            hub_radius,
            run: UpdateLoop::new(),
        }
    }

    /// Hub circle radius in pixels.
    pub const fn hub_radius(&self) -> u32 { self.hub_radius }

    /// The style this face was constructed with.
    pub const fn style(&self) -> &FaceStyle<'a> { &self.style }

    /// Whether the face is attached and redrawing.
    pub const fn is_running(&self) -> bool { self.run.is_running() }

    /// Timer callback observation point: `true` means the host should
    /// invalidate the view and keep the timer armed, `false` means the
    /// callback fired after detach and must remove itself.
    pub const fn tick(&self) -> bool { self.run.tick() }

    /// Hub circle plus, when enabled, the 12 tick marks.
    fn draw_dial<D>(
        &self,
        target: &mut D,
        center: Point,
        radius: f32,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        Circle::with_center(center, self.hub_radius * 2)
            .into_styled(self.paints.hub)
            .draw(target)?;
        if self.style.show_ticks {
            for index in 0..TICK_COUNT {
                let (inner, outer) = tick_segment(center, index, radius);
                Line::new(inner, outer).into_styled(self.paints.tick).draw(target)?;
            }
        }
        Ok(())
    }

    /// One hand: a line from the hub radius out to `length` along `angle`.
    fn draw_hand<D>(
        &self,
        target: &mut D,
        center: Point,
        angle_deg: f32,
        length: f32,
        paint: PrimitiveStyle<Rgb565>,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let (tail, tip) = hand_segment(center, angle_deg, self.hub_radius, length);
        Line::new(tail, tip).into_styled(paint).draw(target)
    }
}

impl View for WatchFace<'_> {
    fn on_measure(
        &self,
        constraints: &Constraints,
    ) -> Layout {
        Layout::compute(constraints, self.style.background.as_ref())
    }

    fn on_attach<T: RedrawTimer>(
        &mut self,
        timer: &mut T,
    ) -> Option<T::Handle> {
        if self.run.attach() {
            Some(timer.start(REDRAW_PERIOD_MS))
        } else {
            None
        }
    }

    fn on_detach(&mut self) { self.run.detach(); }

    fn on_render<D>(
        &self,
        target: &mut D,
        layout: &Layout,
        now: ClockReading,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let center = layout.center();
        let radius = layout.radius();

        match (&self.style.background, &layout.background) {
            (Some(bg), Some(rects)) => bg.draw_scaled(target, &rects.src, &rects.dst)?,
            _ => self.draw_dial(target, center, radius)?,
        }

        self.draw_hand(target, center, hour_angle(now), radius * HOUR_HAND_FRACTION, self.paints.hour)?;
        self.draw_hand(target, center, minute_angle(now), radius * MINUTE_HAND_FRACTION, self.paints.minute)?;
        self.draw_hand(target, center, second_angle(now), radius * SECOND_HAND_FRACTION, self.paints.second)?;
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
