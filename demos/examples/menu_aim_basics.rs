// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu aim basics.
//!
//! Walks one menu through an immediate activation, a deferred activation that
//! resolves once the pointer stops, and a click.
//!
//! Run:
//! - `RUST_LOG=understory_menu_aim=trace cargo run -p understory_examples --example menu_aim_basics`

use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_menu_aim::aim::MenuAim;
use understory_menu_aim::pointer::PointerTracker;
use understory_menu_aim::types::{AimConfig, AimHandler};

#[derive(Default)]
struct Log(Vec<String>);

impl AimHandler<&'static str> for Log {
    fn activate(&mut self, row: &'static str, event: Option<&()>) {
        let how = if event.is_some() { "click" } else { "hover" };
        self.0.push(format!("activate {row} ({how})"));
    }
    fn deactivate(&mut self, row: &'static str, _event: Option<&()>) {
        self.0.push(format!("deactivate {row}"));
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut pointer = PointerTracker::new();
    let mut aim: MenuAim<&str, Log> = MenuAim::new(AimConfig::new(), Log::default());
    aim.set_container_bounds(Rect::new(0.0, 0.0, 200.0, 120.0));
    aim.on_container_enter(&mut pointer);

    // Enter "phones" from the left edge: nothing open yet, activate now.
    pointer.on_pointer_move(Point::new(5.0, 15.0));
    pointer.on_pointer_move(Point::new(20.0, 15.0));
    assert!(aim.on_row_enter("phones", &pointer).is_none());

    // Head right toward the phone panel, clipping "laptops" on the way.
    pointer.on_pointer_move(Point::new(120.0, 25.0));
    pointer.on_pointer_move(Point::new(160.0, 35.0));
    let deferral = aim
        .on_row_enter("laptops", &pointer)
        .expect("moving toward the open panel defers");
    println!("== Deferred ==\n  {:?} for {:?}", deferral.row, deferral.delay);

    // The pointer rests; when the timer fires the row activates.
    assert!(aim.on_deferral_elapsed(deferral.token, &pointer).is_none());

    // Clicking skips the trajectory test.
    aim.on_row_click("audio", &());
    aim.on_container_leave(&mut pointer);

    let log = aim.into_handler().0;
    tracing::info!(callbacks = log.len(), "menu session finished");
    println!("== Callbacks ==");
    for line in &log {
        println!("  {line}");
    }
    assert_eq!(
        log,
        vec![
            "activate phones (hover)",
            "deactivate phones",
            "activate laptops (hover)",
            "deactivate laptops",
            "activate audio (click)",
        ]
    );
}
