//! Face styling and the paints derived from it.
//!
//! [`FaceStyle`] is the configuration bundle read once at construction:
//! four colors, the tick visibility flag, and an optional background
//! image. It is never mutated afterwards; there is no runtime
//! reconfiguration surface.
//!
//! [`HandPaints`] is the drawing state derived 1:1 from a style. Styles
//! are pre-computed once instead of being rebuilt on every redraw, so a
//! render pass only references ready-made `PrimitiveStyle` values.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::PrimitiveStyle;

use crate::background::Background;
use crate::colors::{HOUR_DEFAULT, MINUTE_DEFAULT, SECOND_DEFAULT, TICK_DEFAULT};
use crate::config::{HAND_STROKE_DP, TICK_STROKE_DP, dip2px};

/// Immutable styling configuration for a watch face instance.
#[derive(Debug)]
pub struct FaceStyle<'a> {
    /// Second hand color.
    pub second_color: Rgb565,
    /// Minute hand color.
    pub minute_color: Rgb565,
    /// Hour hand color.
    pub hour_color: Rgb565,
    /// Tick mark and hub color.
    pub tick_color: Rgb565,
    /// Whether the 12 tick marks are drawn. The hub is drawn regardless.
    pub show_ticks: bool,
    /// Optional background image. When present it replaces hub and ticks.
    pub background: Option<Background<'a>>,
}

impl Default for FaceStyle<'_> {
    fn default() -> Self {
        Self {
            second_color: SECOND_DEFAULT,
            minute_color: MINUTE_DEFAULT,
            hour_color: HOUR_DEFAULT,
            tick_color: TICK_DEFAULT,
            show_ticks: true,
            background: None,
        }
    }
}

/// Stroke and fill styles derived from a [`FaceStyle`], one per drawn
/// element. Widths are converted from dp at construction time.
#[derive(Debug, Clone, Copy)]
pub struct HandPaints {
    /// Second hand stroke.
    pub second: PrimitiveStyle<Rgb565>,
    /// Minute hand stroke.
    pub minute: PrimitiveStyle<Rgb565>,
    /// Hour hand stroke.
    pub hour: PrimitiveStyle<Rgb565>,
    /// Tick mark stroke.
    pub tick: PrimitiveStyle<Rgb565>,
    /// Hub circle fill.
    pub hub: PrimitiveStyle<Rgb565>,
}

impl HandPaints {
    /// Derive the paint set from a style and a density scale factor.
    pub fn derive(
        style: &FaceStyle<'_>,
        scale: f32,
    ) -> Self {
        // A stroke width of 0 would draw nothing.
        let hand_width = dip2px(HAND_STROKE_DP, scale).max(1);
        let tick_width = dip2px(TICK_STROKE_DP, scale).max(1);
        Self {
            second: PrimitiveStyle::with_stroke(style.second_color, hand_width),
            minute: PrimitiveStyle::with_stroke(style.minute_color, hand_width),
            hour: PrimitiveStyle::with_stroke(style.hour_color, hand_width),
            tick: PrimitiveStyle::with_stroke(style.tick_color, tick_width),
            hub: PrimitiveStyle::with_fill(style.tick_color),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = FaceStyle::default();
        assert!(style.show_ticks);
        assert!(style.background.is_none());
        assert_eq!(style.second_color, SECOND_DEFAULT);
        assert_eq!(style.tick_color, TICK_DEFAULT);
    }

    #[test]
    fn test_derive_scales_widths() {
        let style = FaceStyle::default();
        let paints = HandPaints::derive(&style, 1.0);
        assert_eq!(paints.second.stroke_width, 5);
        assert_eq!(paints.tick.stroke_width, 10);

        let paints = HandPaints::derive(&style, 2.0);
        assert_eq!(paints.hour.stroke_width, 10);
        assert_eq!(paints.tick.stroke_width, 20);
    }

    #[test]
    fn test_derive_keeps_hands_visible_at_tiny_scale() {
        let style = FaceStyle::default();
        let paints = HandPaints::derive(&style, 0.01);
        assert_eq!(paints.minute.stroke_width, 1);
        assert_eq!(paints.tick.stroke_width, 1);
    }

    #[test]
    fn test_derive_carries_colors() {
        let style = FaceStyle {
            second_color: Rgb565::new(1, 2, 3),
            ..FaceStyle::default()
        };
        let paints = HandPaints::derive(&style, 1.0);
        assert_eq!(paints.second.stroke_color, Some(Rgb565::new(1, 2, 3)));
        assert_eq!(paints.hub.fill_color, Some(TICK_DEFAULT));
    }
}
