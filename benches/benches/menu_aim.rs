// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_menu_aim::aim::MenuAim;
use understory_menu_aim::pointer::PointerTracker;
use understory_menu_aim::types::{AimConfig, NoopHandler, SubmenuDirection};

const BOUNDS: Rect = Rect::new(0.0, 0.0, 200.0, 400.0);

fn setup(
    direction: SubmenuDirection,
    path: &[Point],
) -> (MenuAim<u32, NoopHandler>, PointerTracker) {
    let mut pointer = PointerTracker::new();
    let config = AimConfig::new().with_direction(direction).with_active_row(0);
    let mut aim = MenuAim::new(config, NoopHandler);
    aim.set_container_bounds(BOUNDS);
    aim.on_container_enter(&mut pointer);
    for &pt in path {
        pointer.on_pointer_move(pt);
    }
    (aim, pointer)
}

fn bench_activation_delay(c: &mut Criterion) {
    let mut group = c.benchmark_group("activation_delay");
    // (name, direction, previous and current pointer location)
    let cases = [
        ("toward_right", SubmenuDirection::Right, (100.0, 30.0), (150.0, 40.0)),
        ("down_the_rows", SubmenuDirection::Right, (30.0, 30.0), (30.0, 70.0)),
        ("toward_below", SubmenuDirection::Below, (100.0, 300.0), (110.0, 360.0)),
        ("outside", SubmenuDirection::Right, (-10.0, 30.0), (-30.0, 30.0)),
    ];
    for (name, direction, prev, loc) in cases {
        let path = [Point::from(prev), Point::from(loc)];
        group.bench_function(name, |b| {
            b.iter_batched(
                || setup(direction, &path),
                |(mut aim, pointer)| black_box(aim.activation_delay(&pointer)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_row_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("row_sweep");
    // A pointer sweeping down 40 rows of 10px each, entering every row.
    let path: Vec<Point> = (0..40_u32)
        .map(|i| Point::new(40.0, f64::from(i) * 10.0 + 5.0))
        .collect();
    group.bench_function("enter_40_rows", |b| {
        b.iter_batched(
            || setup(SubmenuDirection::Right, &[]),
            |(mut aim, mut pointer)| {
                for (row, &pt) in (0_u32..).zip(path.iter()) {
                    pointer.on_pointer_move(pt);
                    black_box(aim.on_row_enter(row, &pointer));
                }
                aim.on_container_leave(&mut pointer);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_activation_delay, bench_row_sweep);
criterion_main!(benches);
