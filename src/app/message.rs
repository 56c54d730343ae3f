// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Skip back to the previous cover (swipe right or left arrow).
    Previous,
    /// Skip forward to the next cover (swipe left or right arrow).
    Next,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Directory of covers, or a cover file to start on.
    pub directory: Option<PathBuf>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `COVER_SWIPE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
