// SPDX-License-Identifier: MPL-2.0
pub mod swipe_cover;

pub use swipe_cover::{swipe_cover, SwipeCover};
