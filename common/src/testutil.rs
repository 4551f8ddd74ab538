//! In-memory draw target for unit tests.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

const SIDE: usize = 64;

/// Square pixel grid used by the drawing tests. Pixels start out unset so
/// tests can distinguish "never painted" from "painted black". Drawing
/// outside the grid is ignored, matching the `DrawTarget` contract.
pub struct TestCanvas {
    pixels: [[Option<Rgb565>; SIDE]; SIDE],
}

impl TestCanvas {
    pub const SIDE: usize = SIDE;

    pub const fn new() -> Self {
        Self {
            pixels: [[None; SIDE]; SIDE],
        }
    }

    /// Pixel at `(x, y)`, or `None` if it was never painted.
    pub fn get(
        &self,
        x: usize,
        y: usize,
    ) -> Option<Rgb565> {
        self.pixels[y][x]
    }

    /// Number of painted pixels.
    pub fn painted_count(&self) -> usize {
        self.pixels.iter().flatten().filter(|p| p.is_some()).count()
    }
}

impl PartialEq for TestCanvas {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.pixels == other.pixels
    }
}

impl OriginDimensions for TestCanvas {
    fn size(&self) -> Size { Size::new(Self::SIDE as u32, Self::SIDE as u32) }
}

impl DrawTarget for TestCanvas {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if (0..Self::SIDE as i32).contains(&point.x) && (0..Self::SIDE as i32).contains(&point.y) {
                self.pixels[point.y as usize][point.x as usize] = Some(color);
            }
        }
        Ok(())
    }
}

/// Fake redraw timer recording starts and cancels.
#[derive(Default)]
pub struct ManualTimer {
    pub started: usize,
    pub canceled: usize,
    pub period_ms: Option<u32>,
}

impl crate::lifecycle::RedrawTimer for ManualTimer {
    type Handle = ();

    fn start(
        &mut self,
        period_ms: u32,
    ) {
        self.started += 1;
        self.period_ms = Some(period_ms);
    }

    fn cancel(
        &mut self,
        _handle: (),
    ) {
        self.canceled += 1;
    }
}

/// Euclidean distance between two points.
pub fn distance(
    a: Point,
    b: Point,
) -> f32 {
    let dx = (a.x - b.x) as f32;
    let dy = (a.y - b.y) as f32;
    (dx * dx + dy * dy).sqrt()
}
