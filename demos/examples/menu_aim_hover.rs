// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover-driven menu aim with a simulated clock.
//!
//! Hit tests a pointer path against row rectangles, turns the hits into menu
//! events with `RowHover`, and runs deferrals on a tiny timer queue. The path
//! opens "phones", then cuts diagonally toward its panel across two rows.
//!
//! Run:
//! - `cargo run -p understory_examples --example menu_aim_hover`

use std::time::Duration;

use kurbo::{Point, Rect};
use understory_menu_aim::aim::MenuAim;
use understory_menu_aim::hover::RowHover;
use understory_menu_aim::pointer::PointerTracker;
use understory_menu_aim::types::{AimConfig, Deferral, NoopHandler};

const ROWS: [&str; 4] = ["phones", "laptops", "cameras", "audio"];
const ROW_HEIGHT: f64 = 30.0;
const MENU: Rect = Rect::new(0.0, 0.0, 160.0, 120.0);

fn hit_row(pt: Point) -> Option<&'static str> {
    if !MENU.contains(pt) {
        return None;
    }
    ROWS.get((pt.y / ROW_HEIGHT) as usize).copied()
}

fn main() {
    let mut pointer = PointerTracker::new();
    let mut hover = RowHover::new();
    let mut aim: MenuAim<&str, NoopHandler> = MenuAim::new(AimConfig::new(), NoopHandler);
    aim.set_container_bounds(MENU);

    // (time since start, pointer position)
    let path = [
        (0, Point::new(-20.0, 10.0)),
        (16, Point::new(10.0, 10.0)),
        (32, Point::new(40.0, 12.0)),
        // Diagonal toward the panel on the right, across laptops and cameras.
        (48, Point::new(80.0, 28.0)),
        (64, Point::new(110.0, 45.0)),
        (80, Point::new(140.0, 62.0)),
        (96, Point::new(158.0, 70.0)),
        // Into the panel.
        (112, Point::new(190.0, 75.0)),
    ];

    let mut timer: Option<(u64, Deferral<&str>)> = None;
    for (now, pt) in path {
        if let Some((due, d)) = timer
            && due <= now
        {
            timer = None;
            if let Some(next) = aim.on_deferral_elapsed(d.token, &pointer) {
                timer = Some((now + next.delay.as_millis() as u64, next));
            }
        }

        pointer.on_pointer_move(pt);
        let inside = MENU.contains(pt);
        for event in hover.update(inside, hit_row(pt)) {
            if let Some(d) = aim.handle(event, &mut pointer) {
                println!("  t={now:>3}ms deferred {} by {:?}", d.row, d.delay);
                timer = Some((now + d.delay.as_millis() as u64, d));
            }
        }
        println!(
            "t={now:>3}ms at ({:>5.1}, {:>5.1}) active={:?}",
            pt.x,
            pt.y,
            aim.active_row()
        );
    }

    // Leaving the menu cancelled the pending check, so the panel stays on phones.
    assert_eq!(aim.active_row(), Some("phones"));
    assert!(aim.pending().is_none());
    assert_eq!(aim.config().activation_delay, Duration::from_millis(300));
}
