// SPDX-License-Identifier: MPL-2.0
//! Album cover that can be pulled sideways to skip tracks.
//!
//! Wraps a foreground element (the current cover) over a backdrop that shows
//! the previous or next cover art. Dragging the foreground with the mouse or a
//! finger slides it aside and reveals the matching neighbour underneath;
//! releasing far enough publishes `on_previous` or `on_next`.

use crate::config::GestureConfig;
use crate::gesture::{
    BackgroundContainer, SwipeBackgroundChanger, SwipeHandler, TouchAction, TouchEvent,
    Translate,
};
use iced::advanced::image;
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{touch, Color, ContentFit, Element, Event, Length, Point, Rectangle, Size, Vector};

/// Navigation decided by the last release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Commit {
    Previous,
    Next,
}

/// Horizontal offset of the foreground.
#[derive(Debug, Clone, Copy, Default)]
struct Layer {
    translation_x: f32,
}

impl Translate for Layer {
    fn set_translation_x(&mut self, x: f32) {
        self.translation_x = x;
    }
}

/// Surface the neighbouring cover is drawn on.
#[derive(Debug, Clone, Default)]
struct Backdrop {
    translation_x: f32,
    visible: bool,
    width: f32,
    art: Option<image::Handle>,
}

impl Translate for Backdrop {
    fn set_translation_x(&mut self, x: f32) {
        self.translation_x = x;
    }
}

impl BackgroundContainer<image::Handle> for Backdrop {
    fn set_image(&mut self, image: &image::Handle) {
        self.art = Some(image.clone());
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn width(&self) -> f32 {
        self.width
    }
}

#[derive(Debug, Default)]
struct PendingCommit(Option<Commit>);

impl PendingCommit {
    fn take(&mut self) -> Option<Commit> {
        self.0.take()
    }
}

impl SwipeHandler for PendingCommit {
    fn previous(&mut self) {
        self.0 = Some(Commit::Previous);
    }

    fn next(&mut self) {
        self.0 = Some(Commit::Next);
    }
}

/// Pointer currently driving the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pointer {
    Mouse,
    Finger(touch::Finger),
}

struct State {
    changer: SwipeBackgroundChanger<Backdrop, image::Handle, PendingCommit>,
    foreground: Layer,
    pointer: Option<Pointer>,
}

impl State {
    fn new(config: GestureConfig, previous: &image::Handle, next: &image::Handle) -> Self {
        let mut changer = SwipeBackgroundChanger::with_config(
            Backdrop::default(),
            PendingCommit::default(),
            config,
        );
        changer.set_images(previous.clone(), next.clone());
        Self {
            changer,
            foreground: Layer::default(),
            pointer: None,
        }
    }

    /// Hands the neighbouring covers to the changer when they differ from the
    /// ones it holds. Returns whether the backdrop was refreshed.
    fn refresh_art(&mut self, previous: &image::Handle, next: &image::Handle) -> bool {
        if self.changer.previous_image() == Some(previous)
            && self.changer.next_image() == Some(next)
        {
            return false;
        }
        self.changer.set_images(previous.clone(), next.clone());
        true
    }

    /// Translates an Iced event into a gesture event for a widget at `bounds`.
    ///
    /// Presses only count inside the bounds. Once a pointer is tracked, only
    /// that pointer's moves and release are reported.
    fn touch_event(
        &self,
        event: &Event,
        cursor: mouse::Cursor,
        bounds: Rectangle,
    ) -> Option<(Pointer, TouchEvent)> {
        let relative = |position: Point| position.x - bounds.x;

        match (event, self.pointer) {
            (Event::Touch(touch::Event::FingerPressed { id, position }), None)
                if bounds.contains(*position) =>
            {
                Some((Pointer::Finger(*id), TouchEvent::down(relative(*position))))
            }
            (Event::Touch(touch::Event::FingerMoved { id, position }), Some(pointer))
                if pointer == Pointer::Finger(*id) =>
            {
                Some((pointer, TouchEvent::moved(relative(*position))))
            }
            (Event::Touch(touch::Event::FingerLifted { id, position }), Some(pointer))
                if pointer == Pointer::Finger(*id) =>
            {
                Some((pointer, TouchEvent::up(relative(*position))))
            }
            (Event::Touch(touch::Event::FingerLost { id, position }), Some(pointer))
                if pointer == Pointer::Finger(*id) =>
            {
                Some((pointer, TouchEvent::cancel(relative(*position))))
            }
            (Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)), None) => cursor
                .position_over(bounds)
                .map(|position| (Pointer::Mouse, TouchEvent::down(relative(position)))),
            (Event::Mouse(mouse::Event::CursorMoved { position }), Some(Pointer::Mouse)) => {
                Some((Pointer::Mouse, TouchEvent::moved(relative(*position))))
            }
            (
                Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
                Some(Pointer::Mouse),
            ) => Some((
                Pointer::Mouse,
                cursor.position().map_or(TouchEvent::cancel(0.0), |position| {
                    TouchEvent::up(relative(position))
                }),
            )),
            (Event::Mouse(mouse::Event::CursorLeft), Some(Pointer::Mouse)) => {
                Some((Pointer::Mouse, TouchEvent::cancel(0.0)))
            }
            _ => None,
        }
    }

    /// Runs one gesture event. Returns whether it was consumed and the
    /// navigation it committed to, if any.
    fn handle(
        &mut self,
        pointer: Pointer,
        event: TouchEvent,
        width: f32,
    ) -> (bool, Option<Commit>) {
        self.changer.container_mut().width = width;
        let handled = self.changer.on_touch(&mut self.foreground, event);

        match event.action {
            TouchAction::Down => self.pointer = Some(pointer),
            TouchAction::Up => self.pointer = None,
            TouchAction::Cancel => {
                self.pointer = None;
                self.changer.reset(&mut self.foreground);
            }
            TouchAction::Move | TouchAction::Other => {}
        }

        (handled, self.changer.handler_mut().take())
    }

    /// Drops the tracked pointer without committing when the foreground
    /// captured its release. Returns whether the gesture was abandoned.
    fn abandon(&mut self, event: &Event, cursor: mouse::Cursor, bounds: Rectangle) -> bool {
        let Some((_, touch)) = self.touch_event(event, cursor, bounds) else {
            return false;
        };
        if !matches!(touch.action, TouchAction::Up | TouchAction::Cancel) {
            return false;
        }

        self.pointer = None;
        self.changer.reset(&mut self.foreground);
        true
    }
}

/// Draws `handle` covering `bounds`, cropped to them.
fn draw_art<Renderer>(renderer: &mut Renderer, handle: &image::Handle, bounds: Rectangle)
where
    Renderer: image::Renderer<Handle = image::Handle>,
{
    renderer.fill_quad(
        renderer::Quad {
            bounds,
            ..renderer::Quad::default()
        },
        Color::BLACK,
    );

    let Some(size) = renderer.measure_image(handle) else {
        return;
    };
    let fitted = ContentFit::Cover.fit(
        Size::new(size.width as f32, size.height as f32),
        bounds.size(),
    );
    let drawing_bounds = Rectangle {
        x: bounds.center_x() - fitted.width / 2.0,
        y: bounds.center_y() - fitted.height / 2.0,
        width: fitted.width,
        height: fitted.height,
    };

    renderer.draw_image(image::Image::new(handle.clone()), drawing_bounds, bounds);
}

/// Swipeable cover with the neighbouring covers underneath.
pub struct SwipeCover<'a, Message, Theme = iced::Theme, Renderer = iced::Renderer> {
    foreground: Element<'a, Message, Theme, Renderer>,
    previous: image::Handle,
    next: image::Handle,
    config: GestureConfig,
    on_previous: Option<Message>,
    on_next: Option<Message>,
    width: Length,
    height: Length,
}

impl<'a, Message, Theme, Renderer> SwipeCover<'a, Message, Theme, Renderer> {
    /// Creates a new `SwipeCover` from the current cover and the art of its
    /// neighbours.
    pub fn new(
        foreground: impl Into<Element<'a, Message, Theme, Renderer>>,
        previous: impl Into<image::Handle>,
        next: impl Into<image::Handle>,
    ) -> Self {
        Self {
            foreground: foreground.into(),
            previous: previous.into(),
            next: next.into(),
            config: GestureConfig::default(),
            on_previous: None,
            on_next: None,
            width: Length::Fill,
            height: Length::Fill,
        }
    }

    /// Message published when the cover is pulled far enough to the right.
    #[must_use]
    pub fn on_previous(mut self, message: Message) -> Self {
        self.on_previous = Some(message);
        self
    }

    /// Message published when the cover is pulled far enough to the left.
    #[must_use]
    pub fn on_next(mut self, message: Message) -> Self {
        self.on_next = Some(message);
        self
    }

    #[must_use]
    pub fn config(mut self, config: GestureConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    #[must_use]
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for SwipeCover<'_, Message, Theme, Renderer>
where
    Message: Clone,
    Renderer: renderer::Renderer + image::Renderer<Handle = image::Handle>,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::new(self.config, &self.previous, &self.next))
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.foreground)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.foreground]);

        let state = tree.state.downcast_mut::<State>();
        state.changer.set_config(self.config);
        if state.refresh_art(&self.previous, &self.next) {
            tracing::trace!("neighbouring covers changed");
        }
    }

    fn size(&self) -> Size<Length> {
        Size::new(self.width, self.height)
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let limits = limits.width(self.width).height(self.height);
        let foreground = self
            .foreground
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, &limits);
        let size = limits.resolve(self.width, self.height, foreground.size());

        layout::Node::with_children(size, vec![foreground])
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_ref::<State>();
        let Some(foreground_layout) = layout.children().next() else {
            return;
        };
        let bounds = layout.bounds();

        renderer.with_layer(bounds, |renderer| {
            let backdrop = state.changer.container();
            if let Some(art) = backdrop.art.as_ref().filter(|_| backdrop.visible) {
                renderer.with_translation(Vector::new(backdrop.translation_x, 0.0), |renderer| {
                    draw_art(renderer, art, bounds);
                });
            }

            renderer.with_translation(
                Vector::new(state.foreground.translation_x, 0.0),
                |renderer| {
                    self.foreground.as_widget().draw(
                        &tree.children[0],
                        renderer,
                        theme,
                        style,
                        foreground_layout,
                        cursor,
                        viewport,
                    );
                },
            );
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if let Some(foreground_layout) = layout.children().next() {
            self.foreground.as_widget_mut().update(
                &mut tree.children[0],
                event,
                foreground_layout,
                cursor,
                renderer,
                clipboard,
                shell,
                viewport,
            );
        }

        let bounds = layout.bounds();
        let state = tree.state.downcast_mut::<State>();

        if shell.is_event_captured() {
            if state.abandon(event, cursor, bounds) {
                shell.request_redraw();
            }
            return;
        }

        let Some((pointer, touch)) = state.touch_event(event, cursor, bounds) else {
            return;
        };

        let (handled, commit) = state.handle(pointer, touch, bounds.width);

        let message = match commit {
            Some(Commit::Previous) => self.on_previous.clone(),
            Some(Commit::Next) => self.on_next.clone(),
            None => None,
        };
        if let Some(message) = message {
            shell.publish(message);
        }

        if handled {
            shell.capture_event();
        }
        shell.request_redraw();
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();
        if state.pointer == Some(Pointer::Mouse) {
            return mouse::Interaction::Grabbing;
        }

        let Some(foreground_layout) = layout.children().next() else {
            return mouse::Interaction::None;
        };
        let interaction = self.foreground.as_widget().mouse_interaction(
            &tree.children[0],
            foreground_layout,
            cursor,
            viewport,
            renderer,
        );

        if interaction == mouse::Interaction::None && cursor.is_over(layout.bounds()) {
            mouse::Interaction::Grab
        } else {
            interaction
        }
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        if let Some(foreground_layout) = layout.children().next() {
            self.foreground.as_widget_mut().operate(
                &mut tree.children[0],
                foreground_layout,
                renderer,
                operation,
            );
        }
    }
}

impl<'a, Message, Theme, Renderer> From<SwipeCover<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + image::Renderer<Handle = image::Handle> + 'a,
{
    fn from(cover: SwipeCover<'a, Message, Theme, Renderer>) -> Self {
        Self::new(cover)
    }
}

/// Helper function to create a [`SwipeCover`].
pub fn swipe_cover<'a, Message, Theme, Renderer>(
    foreground: impl Into<Element<'a, Message, Theme, Renderer>>,
    previous: impl Into<image::Handle>,
    next: impl Into<image::Handle>,
) -> SwipeCover<'a, Message, Theme, Renderer> {
    SwipeCover::new(foreground, previous, next)
}
