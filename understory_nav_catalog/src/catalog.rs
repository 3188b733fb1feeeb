// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The catalog flyout: a button-toggled panel holding an aimed row menu.
//!
//! ## Overview
//!
//! [`NavCatalog`] combines the flyout's open state with a
//! [`MenuAim`] over its rows, whose handler is a [`SubmenuPanels`].
//! The overlay and the button's "open" icon follow the flyout's open state.
//!
//! ## Closing
//!
//! The flyout closes from the button or from a click outside both the panel
//! and the button. Closing puts the submenus back the way the page starts:
//! the configured initial row is shown, any other open row is hidden, and the
//! tracker's active row is reset.

use kurbo::Rect;
use understory_menu_aim::aim::MenuAim;
use understory_menu_aim::types::{AimConfig, AimHandler};

use crate::submenu::SubmenuPanels;

/// Where a document click landed, relative to the flyout.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ClickTarget {
    /// Inside the flyout panel.
    Panel,
    /// On the catalog button.
    Button,
    /// Anywhere else.
    Outside,
}

/// Catalog flyout state and the hover-intent tracker for its rows.
///
/// ```
/// use understory_menu_aim::types::AimConfig;
/// use understory_nav_catalog::catalog::{ClickTarget, NavCatalog};
/// use understory_nav_catalog::submenu::{Submenu, SubmenuId, SubmenuPanels};
///
/// let mut panels = SubmenuPanels::new();
/// panels.add_row(1_u32, Some(SubmenuId(1)));
/// panels.insert_submenu(SubmenuId(1), Submenu::new());
///
/// let mut catalog: NavCatalog<u32> = NavCatalog::new(AimConfig::new().with_active_row(1), panels);
/// assert!(catalog.toggle(64.0));
/// assert_eq!(catalog.top(), 64.0);
/// catalog.on_document_click(ClickTarget::Outside);
/// assert!(!catalog.is_open());
/// ```
#[derive(Debug)]
pub struct NavCatalog<R, E = ()> {
    aim: MenuAim<R, SubmenuPanels<R>, E>,
    open: bool,
    top: f64,
}

impl<R, E> NavCatalog<R, E>
where
    R: Copy + Eq + core::fmt::Debug,
{
    /// Create a closed flyout over `panels`.
    ///
    /// The initial row (`config.active_row`) is treated as already showing, as
    /// the page renders it open.
    pub fn new(config: AimConfig<R>, mut panels: SubmenuPanels<R>) -> Self {
        if let Some(row) = config.active_row {
            panels.show(row);
        }
        Self {
            aim: MenuAim::new(config, panels),
            open: false,
            top: 0.0,
        }
    }

    /// The row tracker.
    pub fn aim(&self) -> &MenuAim<R, SubmenuPanels<R>, E> {
        &self.aim
    }

    /// Mutable access to the row tracker, for forwarding pointer and row events.
    pub fn aim_mut(&mut self) -> &mut MenuAim<R, SubmenuPanels<R>, E> {
        &mut self.aim
    }

    /// The submenu panels.
    pub fn panels(&self) -> &SubmenuPanels<R> {
        self.aim.handler()
    }

    /// Mutable access to the panels, e.g. to toggle an expandable list.
    pub fn panels_mut(&mut self) -> &mut SubmenuPanels<R> {
        self.aim.handler_mut()
    }

    /// Whether the flyout (and with it the overlay and button icon) is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Vertical offset of the flyout, pinned to the navigation bar.
    pub fn top(&self) -> f64 {
        self.top
    }

    /// Update the row container bounds (page coordinates).
    pub fn set_rows_bounds(&mut self, bounds: Rect) {
        self.aim.set_container_bounds(bounds);
    }

    /// Catalog button pressed. `nav_top` is the navigation bar's current top offset.
    ///
    /// Returns the new open state.
    pub fn toggle(&mut self, nav_top: f64) -> bool {
        self.top = nav_top;
        if self.open {
            self.close();
        } else {
            tracing::debug!(top = nav_top, "catalog opened");
            self.open = true;
        }
        self.open
    }

    /// A click anywhere on the document.
    pub fn on_document_click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Outside {
            self.close();
        }
    }

    /// Close the flyout and restore the initial submenu.
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        tracing::debug!("catalog closed");

        self.aim.cancel_pending();
        let initial = self.aim.config().active_row;
        let current = self.aim.active_row();
        if current != initial {
            if let Some(row) = current {
                AimHandler::<R, E>::deactivate(self.aim.handler_mut(), row, None);
            }
            if let Some(row) = initial {
                AimHandler::<R, E>::activate(self.aim.handler_mut(), row, None);
            }
        }
        self.aim.reset_active_row();
    }
}
