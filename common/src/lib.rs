//! Platform-agnostic analog watch face widget.
//!
//! This crate contains the complete widget core, shared between the
//! desktop simulator and any embedded host:
//!
//! - [`colors`]: default Rgb565 color constants
//! - [`config`]: geometry fractions, dp sizes, redraw cadence, [`config::dip2px`]
//! - [`style`]: immutable face styling and the paints derived from it
//! - [`background`]: optional raw-RGB565 background image with stretch blit
//! - [`layout`]: square measurement and per-pass layout state
//! - [`dial`]: clock readings, hand angles, and dial geometry
//! - [`lifecycle`]: attach/detach state machine and the host redraw timer seam
//! - [`face`]: the [`WatchFace`] widget itself
//! - [`view`]: the four-method capability interface hosts drive
//! - [`logbuf`]: debug log ring buffer
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` compatible and can be used on embedded targets.
//! Drawing is generic over `DrawTarget<Color = Rgb565>`, and trigonometry
//! comes from `micromath` rather than `std`.

#![no_std]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod background;
pub mod colors;
pub mod config;
pub mod dial;
pub mod face;
pub mod layout;
pub mod lifecycle;
pub mod logbuf;
pub mod style;
pub mod view;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export commonly used items
pub use background::Background;
pub use dial::{ClockReading, TimeSource};
pub use face::WatchFace;
pub use layout::{Constraints, Layout, Padding, measure};
pub use lifecycle::{RedrawTimer, RunState, UpdateLoop};
pub use logbuf::DebugLog;
pub use style::{FaceStyle, HandPaints};
pub use view::View;
