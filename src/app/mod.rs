// SPDX-License-Identifier: MPL-2.0
//! Application root state: a cover browser driven by the swipe gesture.
//!
//! The `App` loads the configuration, scans the cover directory once at
//! startup and moves through it whenever the swipe widget (or the keyboard)
//! commits to a previous/next navigation.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, GestureConfig};
use crate::cover_list::CoverList;
use iced::{window, Element, Subscription, Task, Theme};
use std::path::PathBuf;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 520;
pub const WINDOW_DEFAULT_WIDTH: u32 = 520;
pub const MIN_WINDOW_HEIGHT: u32 = 240;
pub const MIN_WINDOW_WIDTH: u32 = 240;

/// Root Iced application state.
#[derive(Debug, Default)]
pub struct App {
    covers: CoverList,
    gesture: GestureConfig,
    warning: Option<String>,
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the config and scans the cover directory named in `flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, mut warning) = config::load_with_override(flags.config_dir.map(PathBuf::from));
        let sort_order = config.library.sort_order.unwrap_or_default();

        let covers = match flags.directory {
            Some(target) => match CoverList::scan_directory(&target, sort_order) {
                Ok(covers) => covers,
                Err(err) => {
                    tracing::warn!(target = %target.display(), %err, "cannot scan covers");
                    warning = Some(err.to_string());
                    CoverList::new()
                }
            },
            None => CoverList::new(),
        };

        tracing::info!(covers = covers.len(), "cover browser ready");

        let app = App {
            covers,
            gesture: config.gesture.sanitized(),
            warning,
        };
        (app, Task::none())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let current = match message {
            Message::Previous => self.covers.retreat(),
            Message::Next => self.covers.advance(),
        };
        if let Some(path) = current {
            tracing::debug!(?message, cover = %path.display(), "navigated");
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            covers: &self.covers,
            gesture: self.gesture,
            warning: self.warning.as_deref(),
        })
    }

    fn title(&self) -> String {
        match self.covers.current().and_then(|path| path.file_name()) {
            Some(name) => format!("{} - Cover Swipe", name.to_string_lossy()),
            None => "Cover Swipe".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }
}
