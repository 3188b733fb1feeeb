// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! "Show more / show less" truncation for long sub-lists.

/// Items shown while a long list is collapsed.
pub const DEFAULT_VISIBLE_ITEMS: usize = 5;

/// Labels for the expand toggle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExpandLabels {
    /// Shown while collapsed.
    pub more: &'static str,
    /// Shown while expanded.
    pub less: &'static str,
}

impl Default for ExpandLabels {
    fn default() -> Self {
        Self {
            more: "More",
            less: "Less",
        }
    }
}

/// Expansion state of one list.
///
/// Lists longer than the limit get a toggle and start collapsed. Shorter lists
/// are always fully visible and have no toggle.
///
/// ```
/// use understory_nav_catalog::expand::{ExpandLabels, ExpandableList};
///
/// let mut list = ExpandableList::new(8);
/// assert_eq!(list.visible_len(), 5);
/// assert_eq!(list.toggle_label(&ExpandLabels::default()), Some("More"));
/// list.toggle();
/// assert!(list.is_item_visible(7));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExpandableList {
    len: usize,
    limit: usize,
    expanded: bool,
}

impl ExpandableList {
    /// A list of `len` items collapsed to [`DEFAULT_VISIBLE_ITEMS`].
    pub fn new(len: usize) -> Self {
        Self::with_limit(len, DEFAULT_VISIBLE_ITEMS)
    }

    /// A list of `len` items collapsed to `limit`.
    pub fn with_limit(len: usize, limit: usize) -> Self {
        Self {
            len,
            limit,
            expanded: false,
        }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list has no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the list is long enough to need a toggle.
    pub fn has_toggle(&self) -> bool {
        self.len > self.limit
    }

    /// Whether the list is currently expanded.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Number of leading items currently visible.
    pub fn visible_len(&self) -> usize {
        if self.has_toggle() && !self.expanded {
            self.limit
        } else {
            self.len
        }
    }

    /// Whether item `index` is visible.
    pub fn is_item_visible(&self, index: usize) -> bool {
        index < self.visible_len()
    }

    /// Flip between collapsed and expanded. Returns the new expanded state.
    ///
    /// Lists without a toggle stay as they are.
    pub fn toggle(&mut self) -> bool {
        if self.has_toggle() {
            self.expanded = !self.expanded;
        }
        self.expanded
    }

    /// Collapse back to the limit.
    pub fn collapse(&mut self) {
        self.expanded = false;
    }

    /// Current toggle label, or `None` when the list has no toggle.
    pub fn toggle_label(&self, labels: &ExpandLabels) -> Option<&'static str> {
        self.has_toggle()
            .then_some(if self.expanded { labels.less } else { labels.more })
    }
}
