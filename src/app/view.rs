// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::config::GestureConfig;
use crate::cover_list::CoverList;
use crate::ui::widgets::swipe_cover;
use iced::widget::{column, container, image, text, Container};
use iced::{ContentFit, Element, Length};
use std::path::Path;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub covers: &'a CoverList,
    pub gesture: GestureConfig,
    pub warning: Option<&'a str>,
}

/// Renders the cover browser.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let body: Element<'_, Message> = match (
        ctx.covers.current(),
        ctx.covers.previous(),
        ctx.covers.next(),
    ) {
        (Some(current), Some(previous), Some(next)) => {
            swipe_cover(cover(current), art(previous), art(next))
                .config(ctx.gesture)
                .on_previous(Message::Previous)
                .on_next(Message::Next)
                .into()
        }
        _ => container(text("No covers found. Pass a directory of album art."))
            .center(Length::Fill)
            .into(),
    };

    let mut layout = column![];
    if let Some(warning) = ctx.warning {
        layout = layout.push(container(text(warning).size(14)).padding(8));
    }
    layout = layout.push(body);

    Container::new(layout.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Art shown underneath while the cover is pulled aside.
fn art(path: &Path) -> image::Handle {
    image::Handle::from_path(path)
}

/// An opaque, full-size cover image.
fn cover(path: &Path) -> Element<'static, Message> {
    container(
        image(image::Handle::from_path(path))
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .style(container::dark)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
