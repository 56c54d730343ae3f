// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe gesture revealing the previous/next album art.
//!
//! The gesture is toolkit-agnostic: it consumes [`TouchEvent`]s and drives
//! any surfaces implementing [`Translate`] and [`BackgroundContainer`]. The
//! Iced binding lives in [`crate::ui::widgets::swipe_cover`].

mod changer;
mod event;
mod surface;

pub use changer::SwipeBackgroundChanger;
pub use event::{TouchAction, TouchEvent};
pub use surface::{BackgroundContainer, FnHandler, SwipeHandler, Translate};

/// Maps a drag distance to how far the foreground is pulled aside.
///
/// The curve is `ln(radians(delta)) * multiplier`: it follows the finger
/// quickly at first and flattens out. It is NaN or negative for short drags,
/// so callers only apply values above 1.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn opening(delta: f32, multiplier: f32) -> f32 {
    (f64::from(delta).to_radians().ln() as f32) * multiplier
}
