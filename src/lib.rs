// SPDX-License-Identifier: MPL-2.0
//! `cover_swipe` lets users skip tracks by pulling the album cover aside.
//!
//! The [`gesture`] module holds the toolkit-agnostic swipe state machine,
//! [`ui::widgets::swipe_cover`] binds it to Iced, and [`app`] is a small cover
//! browser built on top of both.

pub mod app;
pub mod config;
pub mod cover_list;
pub mod error;
pub mod gesture;
pub mod ui;
