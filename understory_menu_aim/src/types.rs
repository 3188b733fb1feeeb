// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the tracker: submenu direction, configuration, the handler
//! contract, and deferrals.
//!
//! ## Overview
//!
//! These types describe how a [`MenuAim`](crate::aim::MenuAim) is configured and
//! how it talks back to the host. They are referenced by the [`aim`](crate::aim)
//! module and used by downstream collaborators.

use alloc::string::{String, ToString};
use core::str::FromStr;
use core::time::Duration;

use kurbo::Rect;

/// Default pixel margin added above and below the container when testing the pointer trajectory.
pub const DEFAULT_TOLERANCE: f64 = 75.0;

/// Default delay before re-checking a row while the pointer heads into the open submenu.
pub const DEFAULT_ACTIVATION_DELAY: Duration = Duration::from_millis(300);

/// Side of the menu on which submenu content opens.
///
/// Selects which two container corners bound the target wedge.
/// See [`Corners::for_direction`](crate::geometry::Corners::for_direction).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum SubmenuDirection {
    /// Content opens to the left of the rows.
    Left,
    /// Content opens to the right of the rows.
    #[default]
    Right,
    /// Content opens above the rows.
    Above,
    /// Content opens below the rows.
    Below,
}

impl SubmenuDirection {
    /// Lowercase name, matching what [`FromStr`] accepts.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Above => "above",
            Self::Below => "below",
        }
    }
}

impl core::fmt::Display for SubmenuDirection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`SubmenuDirection`].
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown submenu direction `{input}`, expected one of: left, right, above, below")]
pub struct ParseDirectionError {
    input: String,
}

impl ParseDirectionError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for SubmenuDirection {
    type Err = ParseDirectionError;

    /// Parse `left`, `right`, `above` or `below`, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        [Self::Left, Self::Right, Self::Above, Self::Below]
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseDirectionError {
                input: name.to_string(),
            })
    }
}

/// Per-menu configuration, fixed once the tracker is built.
///
/// Start from [`AimConfig::default`] and override what you need with the
/// `with_*` setters:
///
/// ```
/// use core::time::Duration;
/// use understory_menu_aim::types::{AimConfig, SubmenuDirection};
///
/// let config: AimConfig<u32> = AimConfig::new()
///     .with_direction(SubmenuDirection::Below)
///     .with_tolerance(40.0)
///     .with_activation_delay(Duration::from_millis(150))
///     .with_active_row(1);
/// assert_eq!(config.active_row, Some(1));
/// assert!(config.accepts_row(&7));
/// ```
#[derive(Clone)]
pub struct AimConfig<R> {
    /// Rows the tracker reacts to. `None` accepts every row the host reports
    /// (typically the container's direct children).
    pub row_filter: Option<fn(&R) -> bool>,
    /// Rows that own a submenu worth protecting. `None` treats every row as a submenu row.
    pub submenu_filter: Option<fn(&R) -> bool>,
    /// Side on which submenu content opens.
    pub submenu_direction: SubmenuDirection,
    /// Pixels added above and below the container for the trajectory test.
    pub tolerance: f64,
    /// Delay handed back to the host while the pointer heads into the open submenu.
    pub activation_delay: Duration,
    /// Row considered active at construction and after [`reset_active_row`](crate::aim::MenuAim::reset_active_row).
    pub active_row: Option<R>,
}

impl<R> Default for AimConfig<R> {
    fn default() -> Self {
        Self {
            row_filter: None,
            submenu_filter: None,
            submenu_direction: SubmenuDirection::Right,
            tolerance: DEFAULT_TOLERANCE,
            activation_delay: DEFAULT_ACTIVATION_DELAY,
            active_row: None,
        }
    }
}

impl<R: core::fmt::Debug> core::fmt::Debug for AimConfig<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AimConfig")
            .field("row_filter", &self.row_filter.is_some())
            .field("submenu_filter", &self.submenu_filter.is_some())
            .field("submenu_direction", &self.submenu_direction)
            .field("tolerance", &self.tolerance)
            .field("activation_delay", &self.activation_delay)
            .field("active_row", &self.active_row)
            .finish()
    }
}

impl<R> AimConfig<R> {
    /// Configuration with every documented default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only react to rows accepted by `filter`.
    #[must_use]
    pub fn with_row_filter(mut self, filter: fn(&R) -> bool) -> Self {
        self.row_filter = Some(filter);
        self
    }

    /// Only protect open submenus of rows accepted by `filter`.
    #[must_use]
    pub fn with_submenu_filter(mut self, filter: fn(&R) -> bool) -> Self {
        self.submenu_filter = Some(filter);
        self
    }

    /// Set the side on which submenus open.
    #[must_use]
    pub fn with_direction(mut self, direction: SubmenuDirection) -> Self {
        self.submenu_direction = direction;
        self
    }

    /// Set the vertical tolerance in pixels.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the re-check delay.
    #[must_use]
    pub fn with_activation_delay(mut self, delay: Duration) -> Self {
        self.activation_delay = delay;
        self
    }

    /// Seed the active row.
    #[must_use]
    pub fn with_active_row(mut self, row: R) -> Self {
        self.active_row = Some(row);
        self
    }

    /// Whether the tracker handles events for `row`.
    pub fn accepts_row(&self, row: &R) -> bool {
        self.row_filter.is_none_or(|f| f(row))
    }

    /// Whether `row` owns a submenu that should be protected from accidental deactivation.
    pub fn has_submenu(&self, row: &R) -> bool {
        self.submenu_filter.is_none_or(|f| f(row))
    }
}

/// Callbacks a [`MenuAim`](crate::aim::MenuAim) invokes on its host.
///
/// Every method has a no-op default, so implement only what you need.
/// [`activate`](Self::activate) and [`deactivate`](Self::deactivate) are the only
/// state-changing signals: a submenu panel should be revealed in the former and
/// hidden in the latter. Deactivation of the previous row is always delivered
/// before activation of the next one.
///
/// `E` is the host's click event payload, forwarded on click activations.
pub trait AimHandler<R, E = ()> {
    /// The pointer entered `row`. Informational only; not an activation.
    fn enter(&mut self, _row: R) {}

    /// The pointer left `row`. Does not deactivate anything.
    fn exit(&mut self, _row: R) {}

    /// `row` became the active row.
    fn activate(&mut self, _row: R, _event: Option<&E>) {}

    /// `row` stopped being the active row.
    fn deactivate(&mut self, _row: R, _event: Option<&E>) {}

    /// The pointer left the menu container (bounds given in page coordinates)
    /// while a row was active. Return `true` to deactivate that row.
    fn exit_menu(&mut self, _container: Rect) -> bool {
        false
    }
}

/// A handler that ignores every callback.
///
/// Useful when only [`MenuAim::active_row`](crate::aim::MenuAim::active_row) is read back.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopHandler;

impl<R, E> AimHandler<R, E> for NoopHandler {}

/// Identifies one scheduled re-check.
///
/// A token goes stale as soon as the tracker cancels its deferral, so a host
/// never needs to unschedule timers; late deliveries are ignored.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct DeferralToken(pub(crate) u64);

/// A re-check the host must schedule.
///
/// After `delay`, call [`MenuAim::on_deferral_elapsed`](crate::aim::MenuAim::on_deferral_elapsed)
/// with `token`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Deferral<R> {
    /// Token to hand back when the delay elapses.
    pub token: DeferralToken,
    /// Row whose activation is being held back.
    pub row: R,
    /// How long to wait before re-checking.
    pub delay: Duration,
}
