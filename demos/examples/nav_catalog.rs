// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Catalog flyout.
//!
//! Opens the catalog, hovers to another category, expands one of its long
//! lists, then closes the flyout with an outside click and shows that the
//! initial category is restored.
//!
//! Run:
//! - `cargo run -p understory_examples --example nav_catalog`

use kurbo::{Point, Rect};
use understory_menu_aim::pointer::PointerTracker;
use understory_menu_aim::types::AimConfig;
use understory_nav_catalog::catalog::{ClickTarget, NavCatalog};
use understory_nav_catalog::expand::{ExpandLabels, ExpandableList};
use understory_nav_catalog::submenu::{Submenu, SubmenuId, SubmenuPanels};

fn main() {
    let mut panels = SubmenuPanels::new();
    // (row, list lengths in its submenu)
    let categories: [(u32, &[usize]); 3] = [(1, &[4, 9]), (2, &[12]), (3, &[])];
    for (row, lists) in categories {
        panels.add_row(row, Some(SubmenuId(row)));
        let lists = lists.iter().map(|&n| ExpandableList::new(n)).collect();
        panels.insert_submenu(SubmenuId(row), Submenu::with_lists(lists));
    }

    let mut catalog: NavCatalog<u32> =
        NavCatalog::new(AimConfig::new().with_active_row(1), panels);
    catalog.set_rows_bounds(Rect::new(0.0, 80.0, 220.0, 200.0));

    catalog.toggle(64.0);
    println!("open={} top={}", catalog.is_open(), catalog.top());

    let mut pointer = PointerTracker::new();
    catalog.aim_mut().on_container_enter(&mut pointer);
    // Straight down from row 1 to row 2.
    pointer.on_pointer_move(Point::new(30.0, 90.0));
    pointer.on_pointer_move(Point::new(30.0, 130.0));
    assert!(catalog.aim_mut().on_row_enter(2, &pointer).is_none());

    let labels = ExpandLabels::default();
    let list = catalog
        .panels_mut()
        .submenu_mut(SubmenuId(2))
        .and_then(|s| s.list_mut(0))
        .expect("category 2 has a list");
    println!("label before: {:?}", list.toggle_label(&labels));
    list.toggle();
    println!(
        "label after: {:?}, visible {}",
        list.toggle_label(&labels),
        list.visible_len()
    );

    let shown: Vec<_> = catalog.panels().visible_submenus().collect();
    println!("shown while open: {shown:?}");
    assert_eq!(shown, vec![SubmenuId(2)]);

    catalog.on_document_click(ClickTarget::Outside);
    let shown: Vec<_> = catalog.panels().visible_submenus().collect();
    println!("open={} shown after close: {shown:?}", catalog.is_open());
    assert_eq!(shown, vec![SubmenuId(1)]);
    let reopened = catalog.panels().submenu(SubmenuId(2)).expect("exists");
    assert!(!reopened.lists()[0].is_expanded());
}
