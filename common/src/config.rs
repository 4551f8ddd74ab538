//! Numeric contract of the watch face: hand and tick geometry fractions,
//! density-scaled sizes, and the redraw cadence.
//!
//! All radial sizes are expressed as fractions of the face radius so the
//! dial scales with whatever square the layout pass produces. Physical
//! sizes (hub radius, stroke widths) are expressed in density-independent
//! pixels and converted with [`dip2px`].

// =============================================================================
// Hand Geometry
// =============================================================================

/// Hour hand length as a fraction of the face radius.
pub const HOUR_HAND_FRACTION: f32 = 0.7;

/// Minute hand length as a fraction of the face radius.
pub const MINUTE_HAND_FRACTION: f32 = 0.6;

/// Second hand length as a fraction of the face radius.
pub const SECOND_HAND_FRACTION: f32 = 0.6;

// =============================================================================
// Tick Marks
// =============================================================================

/// Number of tick marks on the dial.
pub const TICK_COUNT: u32 = 12;

/// Angular step between adjacent tick marks, in degrees.
pub const TICK_STEP_DEG: f32 = 30.0;

/// Inner end of a tick mark as a fraction of the face radius.
pub const TICK_INNER_FRACTION: f32 = 0.8;

/// Outer end of a tick mark as a fraction of the face radius.
pub const TICK_OUTER_FRACTION: f32 = 0.9;

// =============================================================================
// Physical Sizes (density-independent pixels)
// =============================================================================

/// Hub circle radius in dp. All hands terminate at this radius instead of
/// the exact center, keeping the hub visible under the hands.
pub const HUB_RADIUS_DP: f32 = 5.0;

/// Stroke width of the three hands, in dp.
pub const HAND_STROKE_DP: f32 = 5.0;

/// Stroke width of the tick marks, in dp.
pub const TICK_STROKE_DP: f32 = 10.0;

// =============================================================================
// Background Image
// =============================================================================

/// Numerator of the background source crop ratio.
pub const BG_CROP_NUMER: u32 = 3;

/// Denominator of the background source crop ratio. The source rectangle
/// covers `3/4` of the image width and height from its top-left corner.
pub const BG_CROP_DENOM: u32 = 4;

// =============================================================================
// Redraw Cadence
// =============================================================================

/// Period of the host redraw timer in milliseconds. Each tick is scheduled
/// relative to the previous redraw, so cumulative drift is expected.
pub const REDRAW_PERIOD_MS: u32 = 1000;

// =============================================================================
// Density Conversion
// =============================================================================

/// Convert a dp value to physical pixels with round-half-up semantics.
///
/// Negative results clamp to zero.
#[inline]
pub fn dip2px(
    dp: f32,
    scale: f32,
) -> u32 {
    let px = dp * scale + 0.5;
    if px <= 0.0 { 0 } else { px as u32 }
}

// =============================================================================
// Tests
// =============================================================================
