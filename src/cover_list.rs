// SPDX-License-Identifier: MPL-2.0
//! Album-art discovery and wrap-around navigation.
//!
//! Scans a directory for cover images, sorts them according to the configured
//! sort order and keeps track of the cover currently on screen.

use crate::config::SortOrder;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Extensions recognised as cover art (compared case-insensitively).
const COVER_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "bmp"];

/// Ordered list of cover images with a cursor on the current one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoverList {
    covers: Vec<PathBuf>,
    current_index: Option<usize>,
}

impl CoverList {
    /// Creates a new empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from already known paths, positioned on the first one.
    #[must_use]
    pub fn from_paths(covers: Vec<PathBuf>) -> Self {
        let current_index = if covers.is_empty() { None } else { Some(0) };
        Self {
            covers,
            current_index,
        }
    }

    /// Scans for covers.
    ///
    /// `target` may be a directory (the list starts on its first cover) or a
    /// cover file (its siblings are scanned and the list starts on it).
    pub fn scan_directory(target: &Path, sort_order: SortOrder) -> Result<Self> {
        let (directory, selected) = if target.is_dir() {
            (target, None)
        } else {
            let parent = target
                .parent()
                .ok_or_else(|| Error::Library(format!("{} has no parent", target.display())))?;
            (parent, Some(target))
        };

        let mut covers = Vec::new();
        for entry in std::fs::read_dir(directory)? {
            let path = entry?.path();
            if path.is_file() && is_cover(&path) {
                covers.push(path);
            }
        }

        sort_covers(&mut covers, sort_order);

        let current_index = match selected {
            Some(file) => covers.iter().position(|p| p == file),
            None if covers.is_empty() => None,
            None => Some(0),
        };

        tracing::debug!(
            directory = %directory.display(),
            count = covers.len(),
            "scanned cover directory"
        );

        Ok(Self {
            covers,
            current_index,
        })
    }

    /// Returns the current cover.
    #[must_use]
    pub fn current(&self) -> Option<&Path> {
        self.current_index
            .and_then(|idx| self.covers.get(idx))
            .map(PathBuf::as_path)
    }

    /// Returns the next cover, wrapping around to the start.
    #[must_use]
    pub fn next(&self) -> Option<&Path> {
        self.next_index()
            .and_then(|idx| self.covers.get(idx))
            .map(PathBuf::as_path)
    }

    /// Returns the previous cover, wrapping around to the end.
    #[must_use]
    pub fn previous(&self) -> Option<&Path> {
        self.previous_index()
            .and_then(|idx| self.covers.get(idx))
            .map(PathBuf::as_path)
    }

    /// Moves the cursor to the next cover.
    pub fn advance(&mut self) -> Option<&Path> {
        self.current_index = self.next_index();
        self.current()
    }

    /// Moves the cursor to the previous cover.
    pub fn retreat(&mut self) -> Option<&Path> {
        self.current_index = self.previous_index();
        self.current()
    }

    fn next_index(&self) -> Option<usize> {
        let len = self.covers.len();
        if len == 0 {
            return None;
        }
        Some(self.current_index.map_or(0, |idx| (idx + 1) % len))
    }

    fn previous_index(&self) -> Option<usize> {
        let len = self.covers.len();
        if len == 0 {
            return None;
        }
        let idx = self.current_index.unwrap_or(0);
        Some((idx + len - 1) % len)
    }

    /// Returns the total number of covers in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.covers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.covers.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }
}

fn is_cover(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            COVER_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

fn sort_covers(covers: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            covers.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            covers.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
            });
        }
    }
}
