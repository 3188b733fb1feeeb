// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover adapter: derive container and row enter/leave events from per-move hit samples.
//!
//! ## Usage
//!
//! 1) On every pointer move, hit test the menu yourself: is the pointer inside
//!    the container, and over which row (if any)?
//! 2) Call [`RowHover::update`] with that sample to get the transitions.
//! 3) Feed each [`MenuEvent`] to [`MenuAim::handle`](crate::aim::MenuAim::handle).
//!
//! ## Minimal example
//!
//! ```
//! use understory_menu_aim::hover::{MenuEvent, RowHover};
//! let mut h: RowHover<u32> = RowHover::new();
//! assert_eq!(h.update(true, Some(1)), vec![MenuEvent::ContainerEnter, MenuEvent::RowEnter(1)]);
//! assert_eq!(h.update(true, Some(2)), vec![MenuEvent::RowLeave(1), MenuEvent::RowEnter(2)]);
//! assert_eq!(h.update(false, None), vec![MenuEvent::RowLeave(2), MenuEvent::ContainerLeave]);
//! ```

use alloc::vec::Vec;

/// A hover transition for one menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuEvent<R> {
    /// Pointer entered the container.
    ContainerEnter,
    /// Pointer left the container.
    ContainerLeave,
    /// Pointer entered a row.
    RowEnter(R),
    /// Pointer left a row.
    RowLeave(R),
}

/// Tracks whether the pointer is over the container and which row it is on.
///
/// Ordering semantics:
/// - `ContainerEnter` precedes any `RowEnter` from the same update.
/// - `RowLeave` of the old row precedes `RowEnter` of the new one.
/// - `ContainerLeave` follows the final `RowLeave`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowHover<R: Copy + Eq> {
    inside: bool,
    row: Option<R>,
}

impl<R: Copy + Eq> Default for RowHover<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Copy + Eq> RowHover<R> {
    /// Create a state with the pointer outside the container.
    pub fn new() -> Self {
        Self {
            inside: false,
            row: None,
        }
    }

    /// Whether the pointer is inside the container.
    pub fn is_inside(&self) -> bool {
        self.inside
    }

    /// The row under the pointer.
    pub fn current_row(&self) -> Option<R> {
        self.row
    }

    /// Apply a hit sample and return the transitions it causes.
    ///
    /// A row reported while `inside` is `false` is ignored: rows live in the container.
    pub fn update(&mut self, inside: bool, row: Option<R>) -> Vec<MenuEvent<R>> {
        let row = if inside { row } else { None };
        let mut out = Vec::new();

        if inside && !self.inside {
            out.push(MenuEvent::ContainerEnter);
        }
        if self.row != row {
            if let Some(old) = self.row {
                out.push(MenuEvent::RowLeave(old));
            }
            if let Some(new) = row {
                out.push(MenuEvent::RowEnter(new));
            }
        }
        if !inside && self.inside {
            out.push(MenuEvent::ContainerLeave);
        }

        self.inside = inside;
        self.row = row;
        out
    }

    /// Move the pointer out of the container, returning the leave events.
    pub fn clear(&mut self) -> Vec<MenuEvent<R>> {
        self.update(false, None)
    }
}
