// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared pointer tracking: the recent-position history and the leases that switch it on.
//!
//! ## Usage
//!
//! A page has one pointer, so the host owns a single [`PointerTracker`] and
//! lends it to every [`MenuAim`](crate::aim::MenuAim). Feed every pointer move
//! into [`PointerTracker::on_pointer_move`]; moves are only recorded while at
//! least one menu is hovered (holds a lease).
//!
//! ```
//! use kurbo::Point;
//! use understory_menu_aim::pointer::{InputCaps, PointerTracker};
//!
//! let mut pointer = PointerTracker::new();
//! // Nobody is listening yet.
//! pointer.on_pointer_move(Point::new(1.0, 1.0));
//! assert!(pointer.history().is_empty());
//!
//! // Touch-first devices never track.
//! let touch = PointerTracker::with_capabilities(InputCaps::TOUCH_PRIMARY);
//! assert!(!touch.is_listening());
//! ```

use kurbo::Point;

/// Number of recent pointer positions kept in a [`PointerHistory`].
pub const POINTER_HISTORY_LEN: usize = 3;

bitflags::bitflags! {
    /// Capabilities of the host's primary pointing device.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct InputCaps: u8 {
        /// The device can hover without pressing.
        const HOVER         = 0b0000_0001;
        /// The device points precisely (mouse, pen).
        const FINE_POINTER  = 0b0000_0010;
        /// The primary input is touch. Pointer tracking is refused.
        const TOUCH_PRIMARY = 0b0000_0100;
    }
}

impl Default for InputCaps {
    fn default() -> Self {
        Self::HOVER | Self::FINE_POINTER
    }
}

/// The most recent pointer positions, oldest first.
///
/// Holds at most [`POINTER_HISTORY_LEN`] points; pushing past capacity drops the oldest.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerHistory {
    points: [Point; POINTER_HISTORY_LEN],
    len: usize,
}

impl Default for PointerHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerHistory {
    /// Create an empty history.
    pub const fn new() -> Self {
        Self {
            points: [Point::ZERO; POINTER_HISTORY_LEN],
            len: 0,
        }
    }

    /// Record a position, evicting the oldest one when full.
    pub fn push(&mut self, pt: Point) {
        if self.len == POINTER_HISTORY_LEN {
            self.points.copy_within(1.., 0);
            self.len -= 1;
        }
        self.points[self.len] = pt;
        self.len += 1;
    }

    /// Number of recorded positions.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The newest position.
    pub fn latest(&self) -> Option<Point> {
        self.as_slice().last().copied()
    }

    /// The oldest position still held.
    pub fn oldest(&self) -> Option<Point> {
        self.as_slice().first().copied()
    }

    /// Recorded positions, oldest first.
    pub fn as_slice(&self) -> &[Point] {
        &self.points[..self.len]
    }

    /// Forget every position.
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

/// Page-wide pointer tracking shared by every menu.
///
/// Each [`MenuAim`](crate::aim::MenuAim) holds at most one lease while the pointer
/// is over its container. Tracking is on while any lease is held.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    history: PointerHistory,
    leases: u32,
    caps: InputCaps,
}

impl PointerTracker {
    /// Create a tracker for a hover-capable fine pointer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker for a device with the given capabilities.
    pub fn with_capabilities(caps: InputCaps) -> Self {
        Self {
            caps,
            ..Self::default()
        }
    }

    /// Current device capabilities.
    pub fn capabilities(&self) -> InputCaps {
        self.caps
    }

    /// Update device capabilities. Checked the next time a menu asks to track.
    pub fn set_capabilities(&mut self, caps: InputCaps) {
        self.caps = caps;
    }

    /// Whether moves are currently being recorded.
    pub fn is_listening(&self) -> bool {
        self.leases > 0
    }

    /// Number of menus currently holding a tracking lease.
    pub fn lease_count(&self) -> u32 {
        self.leases
    }

    /// Recent positions.
    pub fn history(&self) -> &PointerHistory {
        &self.history
    }

    /// Record a pointer move in page coordinates. Ignored while nobody listens.
    pub fn on_pointer_move(&mut self, pt: Point) {
        if self.is_listening() {
            self.history.push(pt);
        }
    }

    /// Take a lease. Returns `false` (and takes nothing) on touch-first devices.
    pub(crate) fn acquire(&mut self) -> bool {
        if self.caps.contains(InputCaps::TOUCH_PRIMARY) {
            tracing::trace!("touch-primary device, pointer tracking refused");
            return false;
        }
        if self.leases == 0 {
            tracing::trace!("pointer tracking on");
        }
        self.leases += 1;
        true
    }

    /// Return a lease taken with [`acquire`](Self::acquire).
    pub(crate) fn release(&mut self) {
        self.leases = self.leases.saturating_sub(1);
        if self.leases == 0 {
            tracing::trace!("pointer tracking off");
        }
    }
}
