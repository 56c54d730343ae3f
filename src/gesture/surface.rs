// SPDX-License-Identifier: MPL-2.0
//! Seams between the gesture and whatever draws it.
//!
//! The gesture never owns pixels. It pushes translations, visibility and the
//! displayed art into these traits, and reports commits through
//! [`SwipeHandler`].

/// Something that can be shifted horizontally.
pub trait Translate {
    fn set_translation_x(&mut self, x: f32);
}

/// The surface behind the foreground that shows the neighbouring art.
pub trait BackgroundContainer<I>: Translate {
    /// Replaces the displayed art.
    fn set_image(&mut self, image: &I);

    fn set_visible(&mut self, visible: bool);

    /// Current width of the surface, in the same units as touch coordinates.
    fn width(&self) -> f32;
}

/// Receives the navigation decision taken at release.
pub trait SwipeHandler {
    /// The user pulled far enough to the right.
    fn previous(&mut self);

    /// The user pulled far enough to the left.
    fn next(&mut self);
}

impl<T: Translate + ?Sized> Translate for &mut T {
    fn set_translation_x(&mut self, x: f32) {
        (**self).set_translation_x(x);
    }
}

impl<I, T: BackgroundContainer<I> + ?Sized> BackgroundContainer<I> for &mut T {
    fn set_image(&mut self, image: &I) {
        (**self).set_image(image);
    }

    fn set_visible(&mut self, visible: bool) {
        (**self).set_visible(visible);
    }

    fn width(&self) -> f32 {
        (**self).width()
    }
}

impl<T: SwipeHandler + ?Sized> SwipeHandler for &mut T {
    fn previous(&mut self) {
        (**self).previous();
    }

    fn next(&mut self) {
        (**self).next();
    }
}

/// Pair of closures acting as a [`SwipeHandler`].
pub struct FnHandler<P, N> {
    on_previous: P,
    on_next: N,
}

impl<P: FnMut(), N: FnMut()> FnHandler<P, N> {
    pub fn new(on_previous: P, on_next: N) -> Self {
        Self {
            on_previous,
            on_next,
        }
    }
}

impl<P: FnMut(), N: FnMut()> SwipeHandler for FnHandler<P, N> {
    fn previous(&mut self) {
        (self.on_previous)();
    }

    fn next(&mut self) {
        (self.on_next)();
    }
}
