// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_nav_catalog --heading-base-level=0

//! Understory Nav Catalog: headless state for a site's catalog navigation.
//!
//! ## Overview
//!
//! This crate models the pieces around an aimed dropdown menu:
//! - [`NavCatalog`](crate::catalog::NavCatalog): the flyout opened from a
//!   catalog button, closed from the button or by clicking elsewhere.
//! - [`SubmenuPanels`](crate::submenu::SubmenuPanels): the
//!   [`AimHandler`](understory_menu_aim::types::AimHandler) that reveals a row's
//!   submenu on activation and hides it (collapsing its lists) on deactivation.
//! - [`ExpandableList`](crate::expand::ExpandableList): "show more / show less"
//!   truncation for long sub-lists.
//!
//! Row activation itself is decided by [`understory_menu_aim`].
//!
//! ## Layering
//!
//! Nothing here touches a DOM or a renderer. The host hit tests, forwards
//! events, and reads back visibility flags to style its elements.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod catalog;
pub mod expand;
pub mod submenu;
