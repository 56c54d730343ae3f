// SPDX-License-Identifier: MPL-2.0
//! Pointer input as seen by the swipe gesture.

/// Kind of a touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchAction {
    /// A finger (or the primary mouse button) went down.
    Down,
    /// The pointer moved while down.
    Move,
    /// The finger was lifted.
    Up,
    /// The platform abandoned the touch sequence.
    Cancel,
    /// Anything else (hover, secondary buttons, ...).
    Other,
}

/// A single touch event, reduced to its horizontal coordinate.
///
/// `x` is relative to the left edge of the view the gesture is attached to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub action: TouchAction,
    pub x: f32,
}

impl TouchEvent {
    #[must_use]
    pub fn new(action: TouchAction, x: f32) -> Self {
        Self { action, x }
    }

    #[must_use]
    pub fn down(x: f32) -> Self {
        Self::new(TouchAction::Down, x)
    }

    #[must_use]
    pub fn moved(x: f32) -> Self {
        Self::new(TouchAction::Move, x)
    }

    #[must_use]
    pub fn up(x: f32) -> Self {
        Self::new(TouchAction::Up, x)
    }

    #[must_use]
    pub fn cancel(x: f32) -> Self {
        Self::new(TouchAction::Cancel, x)
    }
}
