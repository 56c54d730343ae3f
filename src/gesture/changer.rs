// SPDX-License-Identifier: MPL-2.0
//! Swipe-to-reveal state machine.
//!
//! Dragging the foreground to the right slides the "previous" art in from the
//! left edge, dragging to the left slides the "next" art in from the right.
//! Releasing past the configured threshold commits to a navigation through the
//! [`SwipeHandler`]; anything shorter snaps back.

use super::event::{TouchAction, TouchEvent};
use super::opening;
use super::surface::{BackgroundContainer, SwipeHandler, Translate};
use crate::config::GestureConfig;

/// Touch handler that moves a foreground view over a background container
/// showing the neighbouring album art.
///
/// `C` is the background container, `I` the art it displays and `H` receives
/// the commit. The container is usually borrowed (`&mut C` implements
/// [`BackgroundContainer`]) or a thin handle onto a surface the screen owns.
#[derive(Debug, Clone)]
pub struct SwipeBackgroundChanger<C, I, H> {
    container: C,
    handler: H,
    previous: Option<I>,
    next: Option<I>,
    /// Touch-down position including the configured offset.
    down_x: f32,
    /// Whether the container currently shows the "next" art.
    next_shown: bool,
    config: GestureConfig,
}

impl<C, I, H> SwipeBackgroundChanger<C, I, H>
where
    C: BackgroundContainer<I>,
    H: SwipeHandler,
{
    /// Creates a changer with the default gesture constants.
    pub fn new(container: C, handler: H) -> Self {
        Self::with_config(container, handler, GestureConfig::default())
    }

    pub fn with_config(container: C, handler: H, config: GestureConfig) -> Self {
        Self {
            container,
            handler,
            previous: None,
            next: None,
            down_x: 0.0,
            next_shown: false,
            config,
        }
    }

    /// Updates the background arts and redisplays whichever one is active.
    pub fn set_images(&mut self, previous: I, next: I) {
        let shown = if self.next_shown { &next } else { &previous };
        self.container.set_image(shown);
        self.previous = Some(previous);
        self.next = Some(next);
    }

    /// Feeds one touch event. Returns `true` when the event was consumed.
    pub fn on_touch<V>(&mut self, view: &mut V, event: TouchEvent) -> bool
    where
        V: Translate + ?Sized,
    {
        match event.action {
            TouchAction::Down => {
                self.down_x = event.x + self.config.touch_down_offset;
                true
            }
            TouchAction::Move => {
                if self.down_x < event.x {
                    self.show_next(false);
                    let x = opening(event.x - self.down_x, self.config.opening_multiplier);
                    if x > 1.0 {
                        view.set_translation_x(x);
                        let width = self.container.width();
                        self.container.set_translation_x(x - width);
                        self.container.set_visible(true);
                    } else {
                        self.reset(view);
                    }
                } else if self.down_x > event.x {
                    self.show_next(true);
                    let x = opening(self.down_x - event.x, self.config.opening_multiplier);
                    if x > 1.0 {
                        view.set_translation_x(-x);
                        let width = self.container.width();
                        self.container.set_translation_x(width - x);
                        self.container.set_visible(true);
                    } else {
                        self.reset(view);
                    }
                }
                true
            }
            TouchAction::Up => {
                let delta = event.x - self.down_x;
                if delta > self.config.threshold {
                    tracing::debug!(delta, "swipe committed to previous");
                    self.handler.previous();
                } else if -delta > self.config.threshold {
                    tracing::debug!(delta, "swipe committed to next");
                    self.handler.next();
                }
                self.reset(view);
                true
            }
            TouchAction::Cancel | TouchAction::Other => false,
        }
    }

    /// Moves both surfaces back in place and hides the container.
    pub fn reset<V>(&mut self, view: &mut V)
    where
        V: Translate + ?Sized,
    {
        self.container.set_visible(false);
        self.container.set_translation_x(0.0);
        view.set_translation_x(0.0);
    }

    fn show_next(&mut self, next: bool) {
        if self.next_shown == next {
            return;
        }
        let art = if next { &self.next } else { &self.previous };
        if let Some(art) = art {
            self.container.set_image(art);
        }
        self.next_shown = next;
        tracing::trace!(next, "swapped background art");
    }

    /// Whether the container currently shows the "next" art.
    #[must_use]
    pub fn is_next_shown(&self) -> bool {
        self.next_shown
    }

    /// Art revealed by a pull to the right, once `set_images` has run.
    #[must_use]
    pub fn previous_image(&self) -> Option<&I> {
        self.previous.as_ref()
    }

    /// Art revealed by a pull to the left, once `set_images` has run.
    #[must_use]
    pub fn next_image(&self) -> Option<&I> {
        self.next.as_ref()
    }

    /// Recorded touch-down position, offset included.
    #[must_use]
    pub fn down_x(&self) -> f32 {
        self.down_x
    }

    #[must_use]
    pub fn config(&self) -> GestureConfig {
        self.config
    }

    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f32 = 400.0;

    #[derive(Debug, Default)]
    struct View {
        translation_x: f32,
    }

    impl Translate for View {
        fn set_translation_x(&mut self, x: f32) {
            self.translation_x = x;
        }
    }

    #[derive(Debug)]
    struct Container {
        image: Option<&'static str>,
        image_swaps: usize,
        translation_x: f32,
        visible: bool,
    }

    impl Default for Container {
        fn default() -> Self {
            Self {
                image: None,
                image_swaps: 0,
                translation_x: 0.0,
                visible: false,
            }
        }
    }

    impl Translate for Container {
        fn set_translation_x(&mut self, x: f32) {
            self.translation_x = x;
        }
    }

    impl BackgroundContainer<&'static str> for Container {
        fn set_image(&mut self, image: &&'static str) {
            self.image = Some(*image);
            self.image_swaps += 1;
        }

        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
        }

        fn width(&self) -> f32 {
            WIDTH
        }
    }

    #[derive(Debug, Default)]
    struct Commits {
        previous: usize,
        next: usize,
    }

    impl SwipeHandler for Commits {
        fn previous(&mut self) {
            self.previous += 1;
        }

        fn next(&mut self) {
            self.next += 1;
        }
    }

    type Changer = SwipeBackgroundChanger<Container, &'static str, Commits>;

    fn changer() -> Changer {
        let mut changer = SwipeBackgroundChanger::new(Container::default(), Commits::default());
        changer.set_images("prev.png", "next.png");
        changer
    }

    #[test]
    fn down_records_position_with_offset() {
        let mut changer = changer();
        let mut view = View::default();

        assert!(changer.on_touch(&mut view, TouchEvent::down(100.0)));
        assert_eq!(changer.down_x(), 110.0);
        assert!(!changer.container().visible);
    }

    #[test]
    fn set_images_shows_previous_by_default() {
        let changer = changer();
        assert_eq!(changer.container().image, Some("prev.png"));
        assert!(!changer.is_next_shown());
        assert_eq!(changer.previous_image(), Some(&"prev.png"));
        assert_eq!(changer.next_image(), Some(&"next.png"));
    }

    #[test]
    fn pulling_right_reveals_previous_art() {
        let mut changer = changer();
        let mut view = View::default();

        changer.on_touch(&mut view, TouchEvent::down(0.0));
        assert!(changer.on_touch(&mut view, TouchEvent::moved(110.0)));

        let expected = opening(100.0, 70.0);
        assert!(expected > 1.0);
        assert_eq!(view.translation_x, expected);
        assert_eq!(changer.container().translation_x, expected - WIDTH);
        assert!(changer.container().visible);
        assert_eq!(changer.container().image, Some("prev.png"));
    }

    #[test]
    fn pulling_left_reveals_next_art() {
        let mut changer = changer();
        let mut view = View::default();

        changer.on_touch(&mut view, TouchEvent::down(300.0));
        changer.on_touch(&mut view, TouchEvent::moved(210.0));

        let expected = opening(100.0, 70.0);
        assert_eq!(view.translation_x, -expected);
        assert_eq!(changer.container().translation_x, WIDTH - expected);
        assert!(changer.container().visible);
        assert_eq!(changer.container().image, Some("next.png"));
        assert!(changer.is_next_shown());
    }

    #[test]
    fn directions_are_symmetric() {
        let mut right = changer();
        let mut right_view = View::default();
        right.on_touch(&mut right_view, TouchEvent::down(500.0));
        right.on_touch(&mut right_view, TouchEvent::moved(510.0 + 180.0));

        let mut left = changer();
        let mut left_view = View::default();
        left.on_touch(&mut left_view, TouchEvent::down(500.0));
        left.on_touch(&mut left_view, TouchEvent::moved(510.0 - 180.0));

        assert!(right_view.translation_x > 0.0);
        assert_eq!(right_view.translation_x, -left_view.translation_x);
    }

    #[test]
    fn short_drag_keeps_background_hidden() {
        let mut changer = changer();
        let mut view = View::default();

        changer.on_touch(&mut view, TouchEvent::down(0.0));
        changer.on_touch(&mut view, TouchEvent::moved(110.0));
        assert!(changer.container().visible);

        // 30px of travel maps to a negative opening
        changer.on_touch(&mut view, TouchEvent::moved(40.0));
        assert_eq!(view.translation_x, 0.0);
        assert_eq!(changer.container().translation_x, 0.0);
        assert!(!changer.container().visible);
    }

    #[test]
    fn opening_becomes_visible_just_below_sixty_pixels() {
        assert!(opening(58.0, 70.0) <= 1.0);
        assert!(opening(59.0, 70.0) > 1.0);
        assert!((opening(100.0, 70.0) - 38.986).abs() < 0.05);
    }

    #[test]
    fn move_at_down_position_changes_nothing() {
        let mut changer = changer();
        let mut view = View { translation_x: 5.0 };

        changer.on_touch(&mut view, TouchEvent::down(0.0));
        assert!(changer.on_touch(&mut view, TouchEvent::moved(10.0)));
        assert_eq!(view.translation_x, 5.0);
        assert_eq!(changer.container().image_swaps, 1);
    }

    #[test]
    fn art_is_swapped_only_on_direction_change() {
        let mut changer = changer();
        let mut view = View::default();
        changer.on_touch(&mut view, TouchEvent::down(300.0));

        changer.on_touch(&mut view, TouchEvent::moved(200.0));
        changer.on_touch(&mut view, TouchEvent::moved(150.0));
        changer.on_touch(&mut view, TouchEvent::moved(100.0));
        // initial set_images plus one flip to next
        assert_eq!(changer.container().image_swaps, 2);

        changer.on_touch(&mut view, TouchEvent::moved(450.0));
        changer.on_touch(&mut view, TouchEvent::moved(500.0));
        assert_eq!(changer.container().image_swaps, 3);
        assert_eq!(changer.container().image, Some("prev.png"));
    }

    #[test]
    fn set_images_honours_active_flag() {
        let mut changer = changer();
        let mut view = View::default();
        changer.on_touch(&mut view, TouchEvent::down(300.0));
        changer.on_touch(&mut view, TouchEvent::moved(100.0));
        changer.on_touch(&mut view, TouchEvent::up(290.0));
        assert!(changer.is_next_shown());

        changer.set_images("prev-2.png", "next-2.png");
        assert_eq!(changer.container().image, Some("next-2.png"));
    }

    #[test]
    fn release_past_threshold_commits_previous() {
        let mut changer = changer();
        let mut view = View::default();

        changer.on_touch(&mut view, TouchEvent::down(100.0));
        changer.on_touch(&mut view, TouchEvent::moved(400.0));
        assert!(changer.on_touch(&mut view, TouchEvent::up(400.0)));

        assert_eq!(changer.handler().previous, 1);
        assert_eq!(changer.handler().next, 0);
        assert_eq!(view.translation_x, 0.0);
        assert!(!changer.container().visible);
    }

    #[test]
    fn release_past_threshold_commits_next() {
        let mut changer = changer();
        let mut view = View::default();

        changer.on_touch(&mut view, TouchEvent::down(500.0));
        changer.on_touch(&mut view, TouchEvent::up(200.0));

        assert_eq!(changer.handler().previous, 0);
        assert_eq!(changer.handler().next, 1);
    }

    #[test]
    fn release_exactly_at_threshold_does_not_commit() {
        let mut changer = changer();
        let mut view = View::default();

        changer.on_touch(&mut view, TouchEvent::down(100.0));
        changer.on_touch(&mut view, TouchEvent::up(360.0));
        changer.on_touch(&mut view, TouchEvent::down(400.0));
        changer.on_touch(&mut view, TouchEvent::up(160.0));

        assert_eq!(changer.handler().previous, 0);
        assert_eq!(changer.handler().next, 0);

        changer.on_touch(&mut view, TouchEvent::down(100.0));
        changer.on_touch(&mut view, TouchEvent::up(361.0));
        assert_eq!(changer.handler().previous, 1);
    }

    #[test]
    fn down_move_move_up_sequence() {
        let mut changer = changer();
        let mut view = View::default();

        changer.on_touch(&mut view, TouchEvent::down(100.0));
        assert_eq!(changer.down_x(), 110.0);

        changer.on_touch(&mut view, TouchEvent::moved(80.0));
        assert!(changer.is_next_shown());
        assert_eq!(changer.container().visible, opening(30.0, 70.0) > 1.0);

        changer.on_touch(&mut view, TouchEvent::moved(800.0));
        assert!(!changer.is_next_shown());
        assert_eq!(view.translation_x, opening(690.0, 70.0));

        changer.on_touch(&mut view, TouchEvent::up(900.0));
        assert_eq!(changer.handler().previous, 1);
        assert_eq!(changer.handler().next, 0);
    }

    #[test]
    fn move_without_down_measures_from_last_recorded_position() {
        let mut changer = changer();
        let mut view = View::default();

        changer.on_touch(&mut view, TouchEvent::moved(100.0));
        assert_eq!(view.translation_x, opening(100.0, 70.0));
    }

    #[test]
    fn unhandled_actions_return_false() {
        let mut changer = changer();
        let mut view = View::default();
        changer.on_touch(&mut view, TouchEvent::down(50.0));

        assert!(!changer.on_touch(&mut view, TouchEvent::cancel(500.0)));
        assert!(!changer.on_touch(&mut view, TouchEvent::new(TouchAction::Other, 500.0)));
        assert_eq!(changer.down_x(), 60.0);
        assert_eq!(changer.handler().previous, 0);
    }

    #[test]
    fn custom_threshold_is_used_on_release() {
        let config = GestureConfig {
            threshold: 50.0,
            ..GestureConfig::default()
        };
        let mut changer =
            SwipeBackgroundChanger::with_config(Container::default(), Commits::default(), config);
        let mut view = View::default();

        changer.on_touch(&mut view, TouchEvent::down(0.0));
        changer.on_touch(&mut view, TouchEvent::up(70.0));
        assert_eq!(changer.handler().previous, 1);
    }

    #[test]
    fn borrowed_container_stays_with_owner() {
        let mut container = Container::default();
        let mut commits = Commits::default();
        {
            let mut changer = SwipeBackgroundChanger::new(&mut container, &mut commits);
            changer.set_images("a", "b");
            let mut view = View::default();
            changer.on_touch(&mut view, TouchEvent::down(0.0));
            changer.on_touch(&mut view, TouchEvent::moved(-200.0));
        }
        assert_eq!(container.image, Some("b"));
        assert!(container.visible);
    }
}
