// SPDX-License-Identifier: MPL-2.0
use cover_swipe::config::{self, Config, GestureConfig, SortOrder};
use cover_swipe::cover_list::CoverList;
use cover_swipe::gesture::{
    opening, BackgroundContainer, FnHandler, SwipeBackgroundChanger, TouchEvent, Translate,
};
use std::cell::Cell;
use tempfile::tempdir;

#[derive(Default)]
struct Foreground {
    translation_x: f32,
}

impl Translate for Foreground {
    fn set_translation_x(&mut self, x: f32) {
        self.translation_x = x;
    }
}

#[derive(Default)]
struct ArtView {
    shown: Option<String>,
    translation_x: f32,
    visible: bool,
}

impl Translate for ArtView {
    fn set_translation_x(&mut self, x: f32) {
        self.translation_x = x;
    }
}

impl BackgroundContainer<String> for ArtView {
    fn set_image(&mut self, image: &String) {
        self.shown = Some(image.clone());
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn width(&self) -> f32 {
        320.0
    }
}

#[test]
fn swipe_through_cover_directory() {
    let dir = tempdir().expect("Failed to create temporary directory");
    for name in ["01.jpg", "02.jpg", "03.jpg"] {
        std::fs::write(dir.path().join(name), b"art").expect("Failed to write cover");
    }
    let covers = std::cell::RefCell::new(
        CoverList::scan_directory(dir.path(), SortOrder::Alphabetical)
            .expect("Failed to scan covers"),
    );

    let mut art = ArtView::default();
    let mut foreground = Foreground::default();
    let handler = FnHandler::new(
        || {
            covers.borrow_mut().retreat();
        },
        || {
            covers.borrow_mut().advance();
        },
    );
    let mut changer = SwipeBackgroundChanger::new(&mut art, handler);
    changer.set_images("03.jpg".to_string(), "02.jpg".to_string());

    // Pull left past the threshold
    changer.on_touch(&mut foreground, TouchEvent::down(300.0));
    changer.on_touch(&mut foreground, TouchEvent::moved(120.0));
    assert!(foreground.translation_x < 0.0);
    changer.on_touch(&mut foreground, TouchEvent::up(20.0));
    assert_eq!(foreground.translation_x, 0.0);

    let current = covers.borrow().current().map(|p| p.to_path_buf());
    assert_eq!(current, Some(dir.path().join("02.jpg")));

    // Track changed: the backdrop keeps showing the "next" slot
    changer.set_images("01.jpg".to_string(), "03.jpg".to_string());
    drop(changer);
    assert_eq!(art.shown.as_deref(), Some("03.jpg"));
    assert!(!art.visible);
}

#[test]
fn configured_gesture_drives_changer() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config = Config {
        gesture: GestureConfig {
            threshold: 100.0,
            opening_multiplier: 140.0,
            touch_down_offset: 0.0,
        },
        ..Config::default()
    };
    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to write config");
    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let previous = Cell::new(0);
    let mut art = ArtView::default();
    let mut foreground = Foreground::default();
    let mut changer = SwipeBackgroundChanger::with_config(
        &mut art,
        FnHandler::new(|| previous.set(previous.get() + 1), || {}),
        loaded.gesture.sanitized(),
    );

    changer.on_touch(&mut foreground, TouchEvent::down(0.0));
    changer.on_touch(&mut foreground, TouchEvent::moved(120.0));
    assert_eq!(foreground.translation_x, opening(120.0, 140.0));
    changer.on_touch(&mut foreground, TouchEvent::up(120.0));

    assert_eq!(previous.get(), 1);
}
