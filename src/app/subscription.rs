// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts mirroring the swipe gesture.

use super::Message;
use iced::keyboard::{self, key};
use iced::{event, Subscription};

/// Maps the arrow keys to cover navigation. Events already captured by a
/// widget are left alone.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => key_message(&key),
            _ => None,
        }
    })
}

fn key_message(key: &keyboard::Key) -> Option<Message> {
    match key {
        keyboard::Key::Named(key::Named::ArrowLeft) => Some(Message::Previous),
        keyboard::Key::Named(key::Named::ArrowRight) => Some(Message::Next),
        _ => None,
    }
}
