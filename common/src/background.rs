//! Optional background image for the watch face.
//!
//! The image is raw big-endian RGB565 pixel data, the same layout
//! `embedded_graphics::image::ImageRawBE<Rgb565>` uses, so assets can be
//! produced with any tool that emits that format. [`Background::decode`]
//! validates the data against the claimed dimensions; an image that fails
//! validation simply never becomes a `Background` and the face falls back
//! to the hub-and-ticks branch.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Decoded background image borrowing its pixel data.
#[derive(Debug, Clone, Copy)]
pub struct Background<'a> {
    data: &'a [u8],
    size: Size,
}

impl<'a> Background<'a> {
    /// Validate raw RGB565-BE pixel data against the claimed dimensions.
    ///
    /// Returns `None` when either dimension is zero or the byte length
    /// does not match `width * height * 2`.
    pub fn decode(
        data: &'a [u8],
        width: u32,
        height: u32,
    ) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        let expected = (width as usize).checked_mul(height as usize)?.checked_mul(2)?;
        if data.len() != expected {
            return None;
        }
        Some(Self {
            data,
            size: Size::new(width, height),
        })
    }

    /// Image dimensions in pixels.
    pub const fn size(&self) -> Size { self.size }

    /// Pixel at `(x, y)`. Coordinates must be inside the image.
    fn pixel(
        &self,
        x: u32,
        y: u32,
    ) -> Rgb565 {
        let offset = ((y * self.size.width + x) * 2) as usize;
        let raw = u16::from_be_bytes([self.data[offset], self.data[offset + 1]]);
        Rgb565::from(RawU16::new(raw))
    }

    /// Blit the `src` crop of the image into `dst`, stretching with
    /// nearest-neighbor sampling.
    ///
    /// Each destination pixel maps back into the crop; source coordinates
    /// are clamped to the image bounds so an oversized crop cannot read
    /// past the data.
    pub fn draw_scaled<D>(
        &self,
        target: &mut D,
        src: &Rectangle,
        dst: &Rectangle,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if src.size.width == 0 || src.size.height == 0 || dst.size.width == 0 || dst.size.height == 0 {
            return Ok(());
        }

        let src_w = src.size.width as i32;
        let src_h = src.size.height as i32;
        let dst_w = dst.size.width as i32;
        let dst_h = dst.size.height as i32;
        let max_x = self.size.width - 1;
        let max_y = self.size.height - 1;

        let pixels = dst.points().map(|p| {
            let sx = src.top_left.x + (p.x - dst.top_left.x) * src_w / dst_w;
            let sy = src.top_left.y + (p.y - dst.top_left.y) * src_h / dst_h;
            let sx = (sx.max(0) as u32).min(max_x);
            let sy = (sy.max(0) as u32).min(max_y);
            Pixel(p, self.pixel(sx, sy))
        });
        target.draw_iter(pixels)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::TestCanvas;

    /// 2x2 image: red, green / blue, white (RGB565-BE).
    fn sample_2x2() -> [u8; 8] {
        [
            0xF8, 0x00, // red
            0x07, 0xE0, // green
            0x00, 0x1F, // blue
            0xFF, 0xFF, // white
        ]
    }

    #[test]
    fn test_decode_validates_length() {
        let data = sample_2x2();
        assert!(Background::decode(&data, 2, 2).is_some());
        assert!(Background::decode(&data, 2, 1).is_none());
        assert!(Background::decode(&data[..6], 2, 2).is_none());
    }

    #[test]
    fn test_decode_rejects_zero_dimensions() {
        let data = sample_2x2();
        assert!(Background::decode(&data, 0, 2).is_none());
        assert!(Background::decode(&[], 0, 0).is_none());
    }

    #[test]
    fn test_pixel_layout_is_row_major_be() {
        let data = sample_2x2();
        let bg = Background::decode(&data, 2, 2).unwrap();
        assert_eq!(bg.pixel(0, 0), Rgb565::new(31, 0, 0));
        assert_eq!(bg.pixel(1, 0), Rgb565::new(0, 63, 0));
        assert_eq!(bg.pixel(0, 1), Rgb565::new(0, 0, 31));
        assert_eq!(bg.pixel(1, 1), Rgb565::new(31, 63, 31));
    }

    #[test]
    fn test_identity_blit() {
        let data = sample_2x2();
        let bg = Background::decode(&data, 2, 2).unwrap();
        let mut canvas = TestCanvas::new();
        let rect = Rectangle::new(Point::zero(), Size::new(2, 2));
        bg.draw_scaled(&mut canvas, &rect, &rect).unwrap();
        assert_eq!(canvas.get(0, 0), Some(Rgb565::new(31, 0, 0)));
        assert_eq!(canvas.get(1, 1), Some(Rgb565::new(31, 63, 31)));
    }

    #[test]
    fn test_stretch_blit_maps_quadrants() {
        let data = sample_2x2();
        let bg = Background::decode(&data, 2, 2).unwrap();
        let mut canvas = TestCanvas::new();
        let src = Rectangle::new(Point::zero(), Size::new(2, 2));
        let dst = Rectangle::new(Point::zero(), Size::new(4, 4));
        bg.draw_scaled(&mut canvas, &src, &dst).unwrap();
        // Each source pixel covers a 2x2 destination block.
        assert_eq!(canvas.get(0, 0), Some(Rgb565::new(31, 0, 0)));
        assert_eq!(canvas.get(1, 1), Some(Rgb565::new(31, 0, 0)));
        assert_eq!(canvas.get(3, 0), Some(Rgb565::new(0, 63, 0)));
        assert_eq!(canvas.get(0, 3), Some(Rgb565::new(0, 0, 31)));
        assert_eq!(canvas.get(3, 3), Some(Rgb565::new(31, 63, 31)));
    }

    #[test]
    fn test_empty_rectangles_draw_nothing() {
        let data = sample_2x2();
        let bg = Background::decode(&data, 2, 2).unwrap();
        let mut canvas = TestCanvas::new();
        let empty = Rectangle::new(Point::zero(), Size::zero());
        let full = Rectangle::new(Point::zero(), Size::new(2, 2));
        bg.draw_scaled(&mut canvas, &empty, &full).unwrap();
        bg.draw_scaled(&mut canvas, &full, &empty).unwrap();
        assert_eq!(canvas.painted_count(), 0);
    }
}
