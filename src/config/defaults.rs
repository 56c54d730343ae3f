// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gesture**: Commit threshold, opening curve and touch-down offset

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Distance a release has to cover to commit to previous/next.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 250.0;

/// Minimum allowed commit threshold.
pub const MIN_SWIPE_THRESHOLD: f32 = 50.0;

/// Maximum allowed commit threshold.
pub const MAX_SWIPE_THRESHOLD: f32 = 2000.0;

/// Multiplier of the logarithmic opening curve (how far the cover can be pulled).
pub const DEFAULT_OPENING_MULTIPLIER: f32 = 70.0;

/// Minimum allowed opening multiplier.
pub const MIN_OPENING_MULTIPLIER: f32 = 10.0;

/// Maximum allowed opening multiplier.
pub const MAX_OPENING_MULTIPLIER: f32 = 300.0;

/// Offset added to the touch-down coordinate.
pub const DEFAULT_TOUCH_DOWN_OFFSET: f32 = 10.0;

/// Maximum allowed touch-down offset (in either direction).
pub const MAX_TOUCH_DOWN_OFFSET: f32 = 100.0;
