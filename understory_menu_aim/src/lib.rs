// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_menu_aim --heading-base-level=0

//! Understory Menu Aim: a headless, `no_std` hover-intent tracker for dropdown menus.
//!
//! ## Overview
//!
//! A catalog menu opens each category's panel beside the row list. With
//! "Laptops" open, the user moves diagonally toward a link in the laptop panel
//! and clips the "Cameras" row on the way. A plain hover menu would swap to the
//! camera panel just before the pointer gets there.
//!
//! ```text
//!  rows          panel
//! +-----------+----------------+
//! | Phones    |                |
//! | Laptops  *|---->  target   |
//! | Cameras   |  (path crosses |
//! | Audio     |   Cameras)     |
//! +-----------+----------------+
//! ```
//!
//! [`MenuAim`](crate::aim::MenuAim) watches the pointer's recent trajectory
//! instead of relying on a blanket hover delay. If the pointer is converging on
//! the open submenu, activation of the newly entered row is deferred and checked
//! again later; otherwise it happens at once, keeping up-and-down navigation fast.
//!
//! ## Inputs
//!
//! The crate performs no I/O and owns no timers. The host feeds it:
//! - pointer moves, into the page-wide [`PointerTracker`](crate::pointer::PointerTracker);
//! - container and row enter/leave events and row clicks, into each
//!   [`MenuAim`](crate::aim::MenuAim) (or derive them with
//!   [`RowHover`](crate::hover::RowHover));
//! - the container's bounds in page coordinates.
//!
//! ## Outputs
//!
//! - Callbacks on an [`AimHandler`](crate::types::AimHandler): `enter`, `exit`,
//!   `activate`, `deactivate`, and the `exit_menu` policy.
//! - [`Deferral`](crate::types::Deferral) values the host must schedule and hand
//!   back through [`MenuAim::on_deferral_elapsed`](crate::aim::MenuAim::on_deferral_elapsed).
//!
//! ## Guarantees
//!
//! - At most one row is active at a time.
//! - Activating the active row again emits nothing.
//! - `deactivate(old)` is always delivered before `activate(new)`.
//! - Entering a row or leaving the container cancels the outstanding deferral.
//! - A pointer that stops moving resolves the deferral on the next check.
//!
//! ## Workflow
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_menu_aim::aim::MenuAim;
//! use understory_menu_aim::pointer::PointerTracker;
//! use understory_menu_aim::types::{AimConfig, NoopHandler};
//!
//! let mut pointer = PointerTracker::new();
//! let mut aim: MenuAim<&str, NoopHandler> =
//!     MenuAim::new(AimConfig::new().with_active_row("laptops"), NoopHandler);
//! aim.set_container_bounds(Rect::new(0.0, 0.0, 200.0, 100.0));
//! aim.on_container_enter(&mut pointer);
//!
//! // The pointer heads right, toward the open laptop panel, and crosses "cameras".
//! pointer.on_pointer_move(Point::new(100.0, 30.0));
//! pointer.on_pointer_move(Point::new(150.0, 40.0));
//! let deferral = aim.on_row_enter("cameras", &pointer).expect("aiming defers");
//! assert_eq!(aim.active_row(), Some("laptops"));
//!
//! // The host waits `deferral.delay`. The pointer did not move, so cameras wins.
//! assert!(aim.on_deferral_elapsed(deferral.token, &pointer).is_none());
//! assert_eq!(aim.active_row(), Some("cameras"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod aim;
pub mod geometry;
pub mod hover;
pub mod pointer;
pub mod types;
