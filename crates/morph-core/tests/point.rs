// File: crates/morph-core/tests/point.rs
// Purpose: Point setters, step deltas and tick interpolation.

mod common;

use common::assert_close;
use morph_core::Point;

#[test]
fn coordinates_are_idempotent() {
    let p = Point::new(12.5, 40.0);
    let first = p.coordinates();
    for _ in 0..5 {
        assert_eq!(p.coordinates(), first);
    }
    assert!(p.target_coordinates().is_none());
    assert!(p.step_delta().is_none());
}

#[test]
fn target_sets_step_delta() {
    let mut p = Point::new(0.0, 0.0);
    p.set_steps(10);
    p.set_target_coordinates(100.0, -50.0);
    assert_close(p.step_delta().unwrap(), (10.0, -5.0));
    assert!(!p.is_settled());
}

#[test]
fn moving_with_pending_target_recomputes_steps() {
    let mut p = Point::new(0.0, 0.0);
    p.set_steps(4);
    p.set_target_coordinates(40.0, 40.0);
    p.set_coordinates(20.0, 0.0);
    assert_close(p.step_delta().unwrap(), (5.0, 10.0));
    for _ in 0..4 {
        p.advance();
    }
    assert_close(p.coordinates(), (40.0, 40.0));
}

#[test]
fn swap_exchanges_position_and_target() {
    let mut p = Point::new(1.0, 2.0);
    p.set_target_coordinates(3.0, 4.0);
    p.swap_coordinates();
    assert_eq!(p.coordinates(), (3.0, 4.0));
    assert_eq!(p.target_coordinates(), Some((1.0, 2.0)));
}

#[test]
fn swap_without_target_is_noop() {
    let mut p = Point::new(1.0, 2.0);
    p.swap_coordinates();
    assert_eq!(p.coordinates(), (1.0, 2.0));
    assert!(p.target_coordinates().is_none());
}

#[test]
fn advance_lands_exactly_on_target() {
    let mut p = Point::transition((0.1, 0.2), (100.3, 7.7), 7);
    for i in 1..=7 {
        p.advance();
        assert_eq!(p.ticks_taken(), i);
    }
    assert_eq!(p.coordinates(), (100.3, 7.7));
    assert!(p.is_settled());

    // extra ticks hold the target
    p.advance();
    assert_eq!(p.coordinates(), (100.3, 7.7));
}

#[test]
fn advance_is_linear() {
    let mut p = Point::transition((0.0, 0.0), (30.0, -30.0), 3);
    p.advance();
    assert_close(p.coordinates(), (10.0, -10.0));
    p.advance();
    assert_close(p.coordinates(), (20.0, -20.0));
}

#[test]
fn advance_without_target_stays_put() {
    let mut p = Point::new(5.0, 5.0);
    p.advance();
    assert_eq!(p.coordinates(), (5.0, 5.0));
    assert!(p.is_settled());
}

#[test]
fn with_steps_sets_tick_count_for_later_targets() {
    let mut p = Point::with_steps(0.0, 0.0, 5);
    assert_eq!(p.steps(), 5);
    p.set_target_coordinates(50.0, 25.0);
    assert_close(p.step_delta().unwrap(), (10.0, 5.0));
    for _ in 0..5 {
        p.advance();
    }
    assert!(p.is_settled());
    assert_close(p.coordinates(), (50.0, 25.0));

    assert_eq!(Point::new(1.0, 1.0).steps(), 30);
    assert_eq!(Point::with_steps(1.0, 1.0, 0).steps(), 1);
}
