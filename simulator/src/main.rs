//! Watch face simulator for desktop platforms.
//!
//! Hosts the analog watch face widget in an SDL window using the
//! embedded-graphics-simulator crate: measures it once against the
//! window, attaches it, and drives the one-second redraw cadence through
//! the widget's timer seam. The face repaints only when its timer fires
//! and its running flag agrees; detaching freezes the last frame.
//!
//! Controls:
//! - `D` detaches / re-attaches the active face
//! - `B` switches between the plain dial and the background-image face
//! - close the window to quit

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod assets;
mod clock;
mod timing;

use core::fmt::Write as _;
use std::thread;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use heapless::String;
use profont::PROFONT_14_POINT;
use watchface_common::colors::{BLACK, WHITE};
use watchface_common::{
    Background,
    ClockReading,
    Constraints,
    DebugLog,
    FaceStyle,
    Padding,
    RedrawTimer,
    TimeSource,
    View,
    WatchFace,
};

use crate::assets::{BG_SIZE, generate_dial_background};
use crate::clock::SystemClock;
use crate::timing::{FRAME_TIME, HostTimer, TimerHandle};

/// Window size. Wider than tall so the square clamp is visible.
const SCREEN_WIDTH: u32 = 368;
const SCREEN_HEIGHT: u32 = 288;

/// Padding the host applies around the face.
const FACE_PADDING: u32 = 8;

/// Density scale factor of the simulated display.
const DENSITY_SCALE: f32 = 0.6;

/// Left edge of the caption column, right of the face square. The face
/// side is height-bound at 272px (288 minus padding on both edges).
const CAPTION_X: i32 = 284;

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Watch Face Sim", &output_settings);

    // Generated at startup; leaked so the faces can borrow it for the
    // lifetime of the process.
    let bg_data: &'static [u8] = Box::leak(generate_dial_background().into_boxed_slice());
    let background = Background::decode(bg_data, BG_SIZE, BG_SIZE);

    let constraints = Constraints {
        width: SCREEN_WIDTH,
        height: SCREEN_HEIGHT,
        padding: Padding::uniform(FACE_PADDING),
    };

    let mut plain_face = WatchFace::new(FaceStyle::default(), DENSITY_SCALE);
    let mut image_face = WatchFace::new(
        FaceStyle {
            background,
            ..FaceStyle::default()
        },
        DENSITY_SCALE,
    );
    let plain_layout = plain_face.on_measure(&constraints);
    let image_layout = image_face.on_measure(&constraints);

    let clock = SystemClock;
    let mut timer = HostTimer::new();
    let mut show_image_face = false;
    let mut debug_log = DebugLog::new();

    let mut handle: Option<TimerHandle> = plain_face.on_attach(&mut timer);
    debug_log.push("Attached: plain dial");

    'main: loop {
        let mut toggle_lifecycle = false;
        let mut switch_face = false;
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'main,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::D => toggle_lifecycle = true,
                        Keycode::B => switch_face = true,
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        if switch_face {
            // Styles are fixed per instance, so switching means detaching
            // one face and attaching the other.
            {
                let old = if show_image_face { &mut image_face } else { &mut plain_face };
                old.on_detach();
            }
            if let Some(h) = handle.take() {
                timer.cancel(h);
            }
            show_image_face = !show_image_face;
            let new = if show_image_face { &mut image_face } else { &mut plain_face };
            handle = new.on_attach(&mut timer);
            debug_log.push(if show_image_face { "Face: background image" } else { "Face: plain dial" });
        }

        if toggle_lifecycle {
            let face = if show_image_face { &mut image_face } else { &mut plain_face };
            if face.is_running() {
                face.on_detach();
                if let Some(h) = handle.take() {
                    timer.cancel(h);
                }
                debug_log.push("Detached");
            } else {
                handle = face.on_attach(&mut timer);
                debug_log.push("Attached");
            }
        }

        // Periodic invalidation: the timer fires on the host side and the
        // face observes its running flag before any repaint happens.
        if timer.poll() {
            let (face, layout) = if show_image_face {
                (&image_face, &image_layout)
            } else {
                (&plain_face, &plain_layout)
            };
            if face.tick() {
                let now = clock.now();
                display.clear(BLACK).ok();
                face.on_render(&mut display, layout, now).ok();
                draw_caption(&mut display, now);
                draw_help(&mut display);
            }
        }

        window.update(&display);
        thread::sleep(FRAME_TIME);
    }

    if !debug_log.is_empty() {
        println!("--- session log ---");
        for line in debug_log.iter() {
            println!("{line}");
        }
    }
}

/// The sampled time as `HH:MM:SS`, to the right of the face.
fn draw_caption(
    display: &mut SimulatorDisplay<Rgb565>,
    now: ClockReading,
) {
    let mut text: String<12> = String::new();
    write!(text, "{:02}:{:02}:{:02}", now.hour, now.minute, now.second).ok();
    Text::new(&text, Point::new(CAPTION_X, 40), MonoTextStyle::new(&PROFONT_14_POINT, WHITE))
        .draw(display)
        .ok();
}

/// Key hints under the caption.
fn draw_help(display: &mut SimulatorDisplay<Rgb565>) {
    let style = MonoTextStyle::new(&FONT_6X10, WHITE);
    Text::new("D: detach", Point::new(CAPTION_X, 70), style).draw(display).ok();
    Text::new("B: face", Point::new(CAPTION_X, 84), style).draw(display).ok();
}
