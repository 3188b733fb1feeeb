// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Submenu panels: the [`AimHandler`] that shows and hides each row's panel.
//!
//! ## Behavior
//!
//! - `activate(row)` highlights the row and reveals its submenu.
//! - `deactivate(row)` removes the highlight, hides the submenu and collapses
//!   every expandable list inside it.
//! - A row without a submenu, or whose submenu was removed, only changes its
//!   highlight; the missing panel is skipped.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use kurbo::Rect;
use understory_menu_aim::types::AimHandler;

use crate::expand::ExpandableList;

/// Identifier of a submenu panel.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SubmenuId(pub u32);

/// One submenu panel and the expandable lists it contains.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Submenu {
    visible: bool,
    lists: Vec<ExpandableList>,
}

impl Submenu {
    /// A hidden panel with no lists.
    pub fn new() -> Self {
        Self::default()
    }

    /// A hidden panel holding `lists`.
    pub fn with_lists(lists: Vec<ExpandableList>) -> Self {
        Self {
            visible: false,
            lists,
        }
    }

    /// Whether the panel is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The panel's lists.
    pub fn lists(&self) -> &[ExpandableList] {
        &self.lists
    }

    /// Mutable access to one list, e.g. to toggle it.
    pub fn list_mut(&mut self, index: usize) -> Option<&mut ExpandableList> {
        self.lists.get_mut(index)
    }

    fn collapse_all(&mut self) {
        for list in &mut self.lists {
            list.collapse();
        }
    }
}

/// What to do with the open submenu when the pointer leaves the row container.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ExitPolicy {
    /// Leave it open; the pointer is probably inside the panel, which lies outside the rows.
    #[default]
    KeepOpen,
    /// Close it.
    Close,
}

#[derive(Clone, Debug)]
struct RowEntry<R> {
    row: R,
    submenu: Option<SubmenuId>,
    highlighted: bool,
}

/// Rows, their submenu panels, and which of them are showing.
#[derive(Clone, Debug)]
pub struct SubmenuPanels<R> {
    rows: Vec<RowEntry<R>>,
    submenus: BTreeMap<SubmenuId, Submenu>,
    exit_policy: ExitPolicy,
}

impl<R> Default for SubmenuPanels<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            submenus: BTreeMap::new(),
            exit_policy: ExitPolicy::KeepOpen,
        }
    }
}

impl<R: Copy + Eq + core::fmt::Debug> SubmenuPanels<R> {
    /// Create an empty set of panels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the policy applied when the pointer leaves the rows.
    #[must_use]
    pub fn with_exit_policy(mut self, policy: ExitPolicy) -> Self {
        self.exit_policy = policy;
        self
    }

    /// The exit policy.
    pub fn exit_policy(&self) -> ExitPolicy {
        self.exit_policy
    }

    /// Register `row`, optionally linked to a submenu. Re-registering replaces the link.
    pub fn add_row(&mut self, row: R, submenu: Option<SubmenuId>) {
        match self.entry_mut(row) {
            Some(e) => e.submenu = submenu,
            None => self.rows.push(RowEntry {
                row,
                submenu,
                highlighted: false,
            }),
        }
    }

    /// Add or replace a submenu panel.
    pub fn insert_submenu(&mut self, id: SubmenuId, submenu: Submenu) {
        self.submenus.insert(id, submenu);
    }

    /// Remove a submenu panel. Rows still pointing at it become no-ops for panel updates.
    pub fn remove_submenu(&mut self, id: SubmenuId) -> Option<Submenu> {
        self.submenus.remove(&id)
    }

    /// Look up a panel.
    pub fn submenu(&self, id: SubmenuId) -> Option<&Submenu> {
        self.submenus.get(&id)
    }

    /// Mutable panel lookup.
    pub fn submenu_mut(&mut self, id: SubmenuId) -> Option<&mut Submenu> {
        self.submenus.get_mut(&id)
    }

    /// The submenu linked to `row`.
    pub fn submenu_of(&self, row: R) -> Option<SubmenuId> {
        self.entry(row).and_then(|e| e.submenu)
    }

    /// Whether `row` is highlighted as the open row.
    pub fn is_highlighted(&self, row: R) -> bool {
        self.entry(row).is_some_and(|e| e.highlighted)
    }

    /// Identifiers of the panels currently shown, in ascending order.
    pub fn visible_submenus(&self) -> impl Iterator<Item = SubmenuId> + '_ {
        self.submenus
            .iter()
            .filter(|(_, s)| s.visible)
            .map(|(&id, _)| id)
    }

    /// Highlight `row` and reveal its submenu.
    pub fn show(&mut self, row: R) {
        let Some(id) = self.set_highlight(row, true) else {
            return;
        };
        if let Some(s) = self.submenus.get_mut(&id) {
            s.visible = true;
        } else {
            tracing::debug!(?row, ?id, "submenu missing, nothing to show");
        }
    }

    /// Remove the highlight from `row`, hide its submenu and collapse its lists.
    pub fn hide(&mut self, row: R) {
        let Some(id) = self.set_highlight(row, false) else {
            return;
        };
        if let Some(s) = self.submenus.get_mut(&id) {
            s.visible = false;
            s.collapse_all();
        } else {
            tracing::debug!(?row, ?id, "submenu missing, nothing to hide");
        }
    }

    // Returns the linked submenu, if the row is known and has one.
    fn set_highlight(&mut self, row: R, on: bool) -> Option<SubmenuId> {
        let Some(entry) = self.entry_mut(row) else {
            tracing::debug!(?row, "unknown row");
            return None;
        };
        entry.highlighted = on;
        entry.submenu
    }

    fn entry(&self, row: R) -> Option<&RowEntry<R>> {
        self.rows.iter().find(|e| e.row == row)
    }

    fn entry_mut(&mut self, row: R) -> Option<&mut RowEntry<R>> {
        self.rows.iter_mut().find(|e| e.row == row)
    }
}

impl<R: Copy + Eq + core::fmt::Debug, E> AimHandler<R, E> for SubmenuPanels<R> {
    fn activate(&mut self, row: R, _event: Option<&E>) {
        self.show(row);
    }

    fn deactivate(&mut self, row: R, _event: Option<&E>) {
        self.hide(row);
    }

    fn exit_menu(&mut self, _container: Rect) -> bool {
        self.exit_policy == ExitPolicy::Close
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn panels() -> SubmenuPanels<u32> {
        let mut p = SubmenuPanels::new();
        p.add_row(1, Some(SubmenuId(10)));
        p.add_row(2, Some(SubmenuId(20)));
        p.add_row(3, None);
        p.insert_submenu(SubmenuId(10), Submenu::new());
        p.insert_submenu(
            SubmenuId(20),
            Submenu::with_lists(vec![ExpandableList::new(8), ExpandableList::new(2)]),
        );
        p
    }

    #[test]
    fn show_reveals_linked_panel() {
        let mut p = panels();
        p.show(2);
        assert!(p.is_highlighted(2));
        assert!(p.submenu(SubmenuId(20)).unwrap().is_visible());
        assert_eq!(p.visible_submenus().collect::<Vec<_>>(), vec![SubmenuId(20)]);
    }

    #[test]
    fn hide_collapses_nested_lists() {
        let mut p = panels();
        p.show(2);
        p.submenu_mut(SubmenuId(20))
            .unwrap()
            .list_mut(0)
            .unwrap()
            .toggle();
        p.hide(2);
        let s = p.submenu(SubmenuId(20)).unwrap();
        assert!(!s.is_visible());
        assert!(!s.lists()[0].is_expanded());
        assert!(!p.is_highlighted(2));
    }

    #[test]
    fn missing_submenu_only_changes_highlight() {
        let mut p = panels();
        p.show(3);
        assert!(p.is_highlighted(3));
        assert_eq!(p.visible_submenus().count(), 0);

        let removed = p.remove_submenu(SubmenuId(10));
        assert!(removed.is_some());
        p.show(1);
        p.hide(1);
        assert!(!p.is_highlighted(1));
        assert_eq!(p.submenu_of(1), Some(SubmenuId(10)));
    }

    #[test]
    fn unknown_rows_are_ignored() {
        let mut p = panels();
        p.show(99);
        assert!(!p.is_highlighted(99));
        assert_eq!(p.visible_submenus().count(), 0);
    }

    #[test]
    fn handler_follows_exit_policy() {
        let mut keep = panels();
        assert!(!AimHandler::<u32>::exit_menu(&mut keep, Rect::ZERO));
        let mut close = panels().with_exit_policy(ExitPolicy::Close);
        assert!(AimHandler::<u32>::exit_menu(&mut close, Rect::ZERO));
    }

    #[test]
    fn re_adding_row_relinks_submenu() {
        let mut p = panels();
        p.add_row(3, Some(SubmenuId(10)));
        p.show(3);
        assert!(p.submenu(SubmenuId(10)).unwrap().is_visible());
    }
}
