//! Default color constants for the watch face.
//!
//! # Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! This format is native to many embedded displays and requires no
//! conversion when writing to the display buffer. The `RgbColor` trait
//! provides pre-defined constants with guaranteed optimal values.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pure black (0, 0, 0). Used to clear the face before each redraw.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31).
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Default second hand color: pure red (31, 0, 0).
pub const SECOND_DEFAULT: Rgb565 = Rgb565::RED;

/// Default minute hand color: pure green (0, 63, 0).
pub const MINUTE_DEFAULT: Rgb565 = Rgb565::GREEN;

/// Default hour hand color: pure blue (0, 0, 31).
pub const HOUR_DEFAULT: Rgb565 = Rgb565::BLUE;

/// Default tick mark and hub color.
pub const TICK_DEFAULT: Rgb565 = WHITE;
