//! Square measurement and per-pass layout state.
//!
//! The face always occupies a centered square: each axis loses its own
//! padding, and the smaller remaining extent becomes both width and
//! height. Layout is a value recomputed on every layout pass and threaded
//! into render calls, never cached in mutable fields.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::background::Background;
use crate::config::{BG_CROP_DENOM, BG_CROP_NUMER};

/// Per-edge padding in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Padding {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Padding {
    /// No padding on any edge.
    pub const NONE: Self = Self::uniform(0);

    /// The same padding on all four edges.
    pub const fn uniform(px: u32) -> Self {
        Self {
            left: px,
            right: px,
            top: px,
            bottom: px,
        }
    }
}

/// Size constraints supplied by the host layout pass.
#[derive(Debug, Clone, Copy)]
pub struct Constraints {
    /// Available width in pixels.
    pub width: u32,
    /// Available height in pixels.
    pub height: u32,
    /// Padding to subtract before measuring.
    pub padding: Padding,
}

/// Measure the square side length for the given constraints.
///
/// Each axis loses its own padding (saturating at zero); the result is
/// the smaller of the two remaining extents.
pub fn measure(constraints: &Constraints) -> u32 {
    let width = constraints
        .width
        .saturating_sub(constraints.padding.left)
        .saturating_sub(constraints.padding.right);
    let height = constraints
        .height
        .saturating_sub(constraints.padding.top)
        .saturating_sub(constraints.padding.bottom);
    width.min(height)
}

/// Background blit rectangles. Present only when a background exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BgRects {
    /// Source crop: 3/4 of the image width and height from its top-left.
    pub src: Rectangle,
    /// Destination: the full measured square.
    pub dst: Rectangle,
}

/// Result of one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Side length of the square drawing region.
    pub side: u32,
    /// Blit rectangles, absent without a background image.
    pub background: Option<BgRects>,
}

impl Layout {
    /// Compute the layout for the given constraints and optional
    /// background. Called once per layout pass.
    pub fn compute(
        constraints: &Constraints,
        background: Option<&Background<'_>>,
    ) -> Self {
        let side = measure(constraints);
        let background = background.map(|bg| {
            let image = bg.size();
            BgRects {
                src: Rectangle::new(
                    Point::zero(),
                    Size::new(
                        image.width * BG_CROP_NUMER / BG_CROP_DENOM,
                        image.height * BG_CROP_NUMER / BG_CROP_DENOM,
                    ),
                ),
                dst: Rectangle::new(Point::zero(), Size::new(side, side)),
            }
        });
        Self { side, background }
    }

    /// Face center in pixel coordinates.
    pub const fn center(&self) -> Point {
        let half = (self.side / 2) as i32;
        Point::new(half, half)
    }

    /// Face radius in pixels.
    pub const fn radius(&self) -> f32 { self.side as f32 / 2.0 }
}

// =============================================================================
// Tests
// =============================================================================
