// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The hover-intent tracker.
//!
//! ## Overview
//!
//! [`MenuAim`] decides, each time the pointer enters a row, whether to activate
//! that row now or to hold off because the pointer is travelling toward the
//! currently open submenu. Holding off is expressed as a [`Deferral`] that the
//! host schedules; when it elapses the same decision runs again.
//!
//! ## Decision
//!
//! The row activates immediately unless all of these hold:
//! - another row is active and owns a submenu (per the submenu filter);
//! - the pointer has a recorded position, and its oldest recorded position lies
//!   inside the container grown by the tolerance;
//! - the pointer moved since the last deferral;
//! - both slopes toward the submenu-side corners converge (see
//!   [`is_heading_toward`](crate::geometry::is_heading_toward)).
//!
//! ## Cancellation
//!
//! At most one deferral is outstanding per tracker. Entering a row or leaving
//! the container invalidates it; a stale token passed to
//! [`MenuAim::on_deferral_elapsed`] does nothing.

use core::marker::PhantomData;
use core::time::Duration;

use kurbo::{Point, Rect};

use crate::geometry::{self, Corners};
use crate::hover::MenuEvent;
use crate::pointer::PointerTracker;
use crate::types::{AimConfig, AimHandler, Deferral, DeferralToken};

/// Hover-intent tracker for one menu container.
///
/// ## Usage
///
/// - Construct with [`MenuAim::new`], passing an [`AimConfig`] and an [`AimHandler`].
/// - Keep the container bounds current with [`MenuAim::set_container_bounds`].
/// - Forward container and row events (directly, or as [`MenuEvent`]s via [`MenuAim::handle`]).
/// - Schedule every returned [`Deferral`] and report it back with [`MenuAim::on_deferral_elapsed`].
/// - Before dropping a tracker that may still hold a lease, call
///   [`MenuAim::on_container_leave`] or [`MenuAim::detach`]; otherwise the shared
///   [`PointerTracker`] keeps recording.
///
/// ```
/// use kurbo::{Point, Rect};
/// use understory_menu_aim::aim::MenuAim;
/// use understory_menu_aim::pointer::PointerTracker;
/// use understory_menu_aim::types::{AimConfig, NoopHandler};
///
/// let mut pointer = PointerTracker::new();
/// let mut aim: MenuAim<u32, NoopHandler> = MenuAim::new(AimConfig::new(), NoopHandler);
/// aim.set_container_bounds(Rect::new(0.0, 0.0, 200.0, 100.0));
///
/// aim.on_container_enter(&mut pointer);
/// pointer.on_pointer_move(Point::new(20.0, 10.0));
/// // Nothing is open yet, so the first row activates at once.
/// assert!(aim.on_row_enter(1, &pointer).is_none());
/// assert_eq!(aim.active_row(), Some(1));
/// ```
pub struct MenuAim<R, H, E = ()> {
    config: AimConfig<R>,
    handler: H,
    bounds: Rect,
    active_row: Option<R>,
    pending: Option<Deferral<R>>,
    last_delay_loc: Option<Point>,
    next_token: u64,
    tracking: bool,
    _event: PhantomData<fn(&E)>,
}

impl<R: core::fmt::Debug, H, E> core::fmt::Debug for MenuAim<R, H, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MenuAim")
            .field("config", &self.config)
            .field("bounds", &self.bounds)
            .field("active_row", &self.active_row)
            .field("pending", &self.pending)
            .field("tracking", &self.tracking)
            .finish_non_exhaustive()
    }
}

impl<R, H, E> MenuAim<R, H, E>
where
    R: Copy + Eq + core::fmt::Debug,
    H: AimHandler<R, E>,
{
    /// Create a tracker. The active row starts at `config.active_row`.
    pub fn new(config: AimConfig<R>, handler: H) -> Self {
        Self {
            active_row: config.active_row,
            config,
            handler,
            bounds: Rect::ZERO,
            pending: None,
            last_delay_loc: None,
            next_token: 0,
            tracking: false,
            _event: PhantomData,
        }
    }

    /// The configuration this tracker was built with.
    pub fn config(&self) -> &AimConfig<R> {
        &self.config
    }

    /// Shared access to the handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Exclusive access to the handler.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Consume the tracker and return its handler.
    pub fn into_handler(self) -> H {
        self.handler
    }

    /// The currently active row.
    pub fn active_row(&self) -> Option<R> {
        self.active_row
    }

    /// The outstanding deferral, if any.
    pub fn pending(&self) -> Option<&Deferral<R>> {
        self.pending.as_ref()
    }

    /// Whether this tracker holds a pointer tracking lease.
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Container bounds in page coordinates.
    pub fn container_bounds(&self) -> Rect {
        self.bounds
    }

    /// Update the container bounds (page coordinates).
    ///
    /// Call after layout or scroll changes; see [`page_rect`](crate::geometry::page_rect).
    pub fn set_container_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Restore the active row to `config.active_row` without invoking any callback.
    pub fn reset_active_row(&mut self) {
        self.active_row = self.config.active_row;
    }

    /// Drop the outstanding deferral, if any.
    pub fn cancel_pending(&mut self) {
        if let Some(p) = self.pending.take() {
            tracing::trace!(row = ?p.row, "deferral cancelled");
        }
    }

    /// The pointer entered the container: start pointer tracking.
    pub fn on_container_enter(&mut self, pointer: &mut PointerTracker) {
        if !self.tracking {
            self.tracking = pointer.acquire();
        }
    }

    /// The pointer left the container.
    ///
    /// Cancels the pending deferral and stops pointer tracking. If a row is
    /// active and [`AimHandler::exit_menu`] agrees, that row is deactivated.
    pub fn on_container_leave(&mut self, pointer: &mut PointerTracker) {
        self.cancel_pending();

        if let Some(row) = self.active_row
            && self.handler.exit_menu(self.bounds)
        {
            tracing::debug!(?row, "menu exit deactivates row");
            self.handler.deactivate(row, None);
            self.active_row = None;
        }

        self.detach(pointer);
    }

    /// Give up the pointer tracking lease and any pending deferral without
    /// invoking callbacks.
    ///
    /// For hosts tearing a menu down while the pointer may still be inside it.
    pub fn detach(&mut self, pointer: &mut PointerTracker) {
        self.cancel_pending();
        if self.tracking {
            pointer.release();
            self.tracking = false;
        }
    }

    /// The pointer entered `row`.
    ///
    /// Returns a [`Deferral`] when activation is held back; schedule it.
    pub fn on_row_enter(&mut self, row: R, pointer: &PointerTracker) -> Option<Deferral<R>> {
        if !self.config.accepts_row(&row) {
            return None;
        }
        self.cancel_pending();
        self.handler.enter(row);
        self.possibly_activate(row, pointer)
    }

    /// The pointer left `row`. Only notifies the handler.
    pub fn on_row_leave(&mut self, row: R) {
        if self.config.accepts_row(&row) {
            self.handler.exit(row);
        }
    }

    /// `row` was clicked: activate it immediately, skipping the trajectory test.
    ///
    /// A pending deferral is cancelled so it cannot replace the clicked row.
    pub fn on_row_click(&mut self, row: R, event: &E) {
        if self.config.accepts_row(&row) {
            self.cancel_pending();
            self.activate(row, Some(event));
        }
    }

    /// A scheduled deferral elapsed. Re-runs the decision for its row.
    ///
    /// Stale tokens are ignored. May return a fresh deferral.
    pub fn on_deferral_elapsed(
        &mut self,
        token: DeferralToken,
        pointer: &PointerTracker,
    ) -> Option<Deferral<R>> {
        let Some(pending) = self.pending.take_if(|p| p.token == token) else {
            tracing::trace!(?token, "stale deferral ignored");
            return None;
        };
        self.possibly_activate(pending.row, pointer)
    }

    /// Dispatch a hover [`MenuEvent`] to the matching handler method.
    pub fn handle(
        &mut self,
        event: MenuEvent<R>,
        pointer: &mut PointerTracker,
    ) -> Option<Deferral<R>> {
        match event {
            MenuEvent::ContainerEnter => {
                self.on_container_enter(pointer);
                None
            }
            MenuEvent::ContainerLeave => {
                self.on_container_leave(pointer);
                None
            }
            MenuEvent::RowEnter(row) => self.on_row_enter(row, pointer),
            MenuEvent::RowLeave(row) => {
                self.on_row_leave(row);
                None
            }
        }
    }

    /// Make `row` the active row.
    ///
    /// Does nothing if it already is. Otherwise the previous row is deactivated
    /// first, then `row` is activated.
    pub fn activate(&mut self, row: R, event: Option<&E>) {
        if self.active_row == Some(row) {
            return;
        }
        if let Some(prev) = self.active_row {
            tracing::debug!(row = ?prev, "deactivate row");
            self.handler.deactivate(prev, event);
        }
        tracing::debug!(?row, "activate row");
        self.handler.activate(row, event);
        self.active_row = Some(row);
    }

    /// How long to hold off activating a newly entered row.
    ///
    /// [`Duration::ZERO`] means activate now. A non-zero delay is the configured
    /// activation delay and records the current pointer position, so a second
    /// check without movement resolves immediately.
    pub fn activation_delay(&mut self, pointer: &PointerTracker) -> Duration {
        let Some(active) = self.active_row else {
            return Duration::ZERO;
        };
        if !self.config.has_submenu(&active) {
            return Duration::ZERO;
        }

        let corners = Corners::new(self.bounds, self.config.tolerance);
        let history = pointer.history();
        let Some(loc) = history.latest() else {
            return Duration::ZERO;
        };
        let prev_loc = history.oldest().unwrap_or(loc);

        // Came from outside the menu: nothing to disambiguate.
        if !corners.contains(prev_loc) {
            return Duration::ZERO;
        }
        // Pointer stopped since the last deferral.
        if self.last_delay_loc == Some(loc) {
            return Duration::ZERO;
        }

        let (decreasing, increasing) = corners.for_direction(self.config.submenu_direction);
        if geometry::is_heading_toward(loc, prev_loc, decreasing, increasing) {
            tracing::trace!(?loc, ?prev_loc, "pointer aiming at open submenu");
            self.last_delay_loc = Some(loc);
            return self.config.activation_delay;
        }

        self.last_delay_loc = None;
        Duration::ZERO
    }

    fn possibly_activate(&mut self, row: R, pointer: &PointerTracker) -> Option<Deferral<R>> {
        let delay = self.activation_delay(pointer);
        if delay.is_zero() {
            self.activate(row, None);
            return None;
        }
        let deferral = Deferral {
            token: DeferralToken(self.next_token),
            row,
            delay,
        };
        self.next_token = self.next_token.wrapping_add(1);
        self.pending = Some(deferral);
        tracing::trace!(?row, ?delay, "activation deferred");
        Some(deferral)
    }
}
