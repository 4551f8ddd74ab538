//! Clock readings and dial geometry.
//!
//! Angles are measured in degrees, clockwise from 12 o'clock, matching
//! how a watch is read. All functions here are pure so the hand and tick
//! math is testable without a display:
//!
//! ```text
//! hour angle   = (hour mod 12) * 30 + minute / 2   (creeps between hour marks)
//! minute angle = minute * 6
//! second angle = second * 6
//! ```

use embedded_graphics::prelude::*;
use micromath::F32Ext as _;

use crate::config::{TICK_INNER_FRACTION, TICK_OUTER_FRACTION, TICK_STEP_DEG};

// =============================================================================
// Clock Reading
// =============================================================================

/// One wall-clock sample. Derived fresh for every render; all four drawn
/// elements of a render use the same sample so the hands never tear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    /// Hour of day, 0-23. The dial reduces it to 12-hour form.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
    /// Second, 0-59.
    pub second: u8,
}

impl ClockReading {
    /// Build a reading, wrapping out-of-range components.
    pub const fn new(
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Self {
        Self {
            hour: hour % 24,
            minute: minute % 60,
            second: second % 60,
        }
    }
}

/// Source of wall-clock time. Hosts implement this with whatever clock
/// they have: the system clock on desktop, an RTC on embedded targets.
pub trait TimeSource {
    /// Current local time.
    fn now(&self) -> ClockReading;
}

// =============================================================================
// Hand Angles
// =============================================================================

/// Hour hand angle in degrees. The half-degree-per-minute term makes the
/// hand creep smoothly between hour marks instead of jumping.
pub fn hour_angle(reading: ClockReading) -> f32 {
    f32::from(reading.hour % 12) * 30.0 + f32::from(reading.minute) / 2.0
}

/// Minute hand angle in degrees.
pub fn minute_angle(reading: ClockReading) -> f32 { f32::from(reading.minute) * 6.0 }

/// Second hand angle in degrees.
pub fn second_angle(reading: ClockReading) -> f32 { f32::from(reading.second) * 6.0 }

// =============================================================================
// Dial Geometry
// =============================================================================

/// Point at distance `r` from `center` along `angle_deg`, measured
/// clockwise from 12 o'clock.
pub fn radial_point(
    center: Point,
    angle_deg: f32,
    r: f32,
) -> Point {
    let rad = angle_deg.to_radians();
    let dx = rad.sin() * r;
    let dy = -rad.cos() * r;
    Point::new(center.x + dx.round() as i32, center.y + dy.round() as i32)
}

/// Endpoints of a hand: tail anchored at the hub radius, tip at `length`,
/// both along the same angle. Rotations never accumulate across hands.
pub fn hand_segment(
    center: Point,
    angle_deg: f32,
    hub_radius: u32,
    length: f32,
) -> (Point, Point) {
    (
        radial_point(center, angle_deg, hub_radius as f32),
        radial_point(center, angle_deg, length),
    )
}

/// Endpoints of tick mark `index` (0-11): a short radial segment between
/// 80% and 90% of the face radius, 30 degrees per step.
pub fn tick_segment(
    center: Point,
    index: u32,
    radius: f32,
) -> (Point, Point) {
    let angle = index as f32 * TICK_STEP_DEG;
    (
        radial_point(center, angle, radius * TICK_INNER_FRACTION),
        radial_point(center, angle, radius * TICK_OUTER_FRACTION),
    )
}

// =============================================================================
// Tests
// =============================================================================
