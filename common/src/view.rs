//! Host-facing capability interface.
//!
//! A host windowing layer drives a view through four calls: measure it
//! during layout, attach it when it becomes visible, render it whenever
//! it needs repainting (periodic invalidation, exposure after occlusion),
//! and detach it when it leaves the surface. The view holds no reference
//! to the host beyond what each call passes in.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::dial::ClockReading;
use crate::layout::{Constraints, Layout};
use crate::lifecycle::RedrawTimer;

/// Widget lifecycle driven by a host.
pub trait View {
    /// Compute the layout for the given constraints. Called on every
    /// layout pass; the result is threaded back into `on_render`.
    fn on_measure(
        &self,
        constraints: &Constraints,
    ) -> Layout;

    /// Called when the view is attached to a visible surface. Starts the
    /// host's repeating redraw timer and returns its cancel handle, or
    /// `None` when the view was already attached.
    fn on_attach<T: RedrawTimer>(
        &mut self,
        timer: &mut T,
    ) -> Option<T::Handle>;

    /// Called on detach. Must synchronously stop further redraws; the
    /// host cancels the timer handle afterwards.
    fn on_detach(&mut self);

    /// Paint the view. `now` is sampled once by the host per call so all
    /// drawn elements share the same instant.
    fn on_render<D>(
        &self,
        target: &mut D,
        layout: &Layout,
        now: ClockReading,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>;
}
