//! Tests for the count-up animation state machine.

use std::time::{Duration, Instant};

use lapacho::counter::Counter;

fn at(t0: Instant, ms: u64) -> Instant {
    t0 + Duration::from_millis(ms)
}

#[test]
fn starts_idle_showing_zero() {
    let t0 = Instant::now();
    let mut counter = Counter::new("100");
    assert!(counter.is_idle());
    assert_eq!(counter.display(t0), "0");
    assert!(!counter.is_done());
}

#[test]
fn unparseable_input_is_terminal_passthrough() {
    let t0 = Instant::now();
    let mut counter = Counter::new("N/A");
    assert!(counter.is_done());
    assert_eq!(counter.display(t0), "N/A");

    // Triggering a literal does nothing.
    counter.trigger(t0);
    assert_eq!(counter.display(at(t0, 5000)), "N/A");
}

#[test]
fn halfway_point_applies_cubic_ease_out() {
    let t0 = Instant::now();
    let mut counter = Counter::new("100").with_duration(Duration::from_millis(2000));
    counter.trigger(t0);

    // progress 0.5 -> eased 1 - 0.5^3 = 0.875 -> 87.5, truncated to 87
    assert_eq!(counter.display(at(t0, 1000)), "87");
    assert!(!counter.is_done());
}

#[test]
fn completes_with_canonical_target_text() {
    let t0 = Instant::now();
    let mut counter = Counter::new("$1,200").with_duration(Duration::from_millis(2000));
    counter.trigger(t0);

    assert_eq!(counter.display(at(t0, 2000)), "$1200");
    assert!(counter.is_done());
    // And stays there.
    assert_eq!(counter.display(at(t0, 60_000)), "$1200");
}

#[test]
fn decimal_values_animate_with_two_places() {
    let t0 = Instant::now();
    let mut counter = Counter::new("0.05").with_duration(Duration::from_millis(2000));
    counter.trigger(t0);

    // 0.05 * 0.875 = 0.04375 -> "0.04"
    assert_eq!(counter.display(at(t0, 1000)), "0.04");
    assert_eq!(counter.display(at(t0, 2000)), "0.05");
}

#[test]
fn decorations_are_preserved_every_frame() {
    let t0 = Instant::now();
    let mut counter = Counter::new("25-35%").with_duration(Duration::from_millis(2000));
    counter.trigger(t0);

    let halfway = counter.display(at(t0, 1000));
    assert!(halfway.ends_with("-35%"), "got {:?}", halfway);
    assert_eq!(counter.display(at(t0, 2000)), "25-35%");
}

#[test]
fn trigger_is_idempotent_while_animating() {
    let t0 = Instant::now();
    let mut counter = Counter::new("100").with_duration(Duration::from_millis(2000));
    counter.trigger(t0);
    counter.trigger(at(t0, 500)); // must not restart the clock

    assert_eq!(counter.display(at(t0, 1000)), "87");
}

#[test]
fn trigger_after_completion_does_not_restart() {
    let t0 = Instant::now();
    let mut counter = Counter::new("100").with_duration(Duration::from_millis(2000));
    counter.trigger(t0);
    assert_eq!(counter.display(at(t0, 2000)), "100");

    counter.trigger(at(t0, 3000));
    assert!(counter.is_done());
    assert_eq!(counter.display(at(t0, 3001)), "100");
}

#[test]
fn zero_duration_completes_immediately() {
    let t0 = Instant::now();
    let mut counter = Counter::new("42").with_duration(Duration::ZERO);
    counter.trigger(t0);
    assert_eq!(counter.display(t0), "42");
    assert!(counter.is_done());
}

#[test]
fn displayed_value_never_decreases() {
    let t0 = Instant::now();
    let mut counter = Counter::new("1000").with_duration(Duration::from_millis(2000));
    counter.trigger(t0);

    let mut prev = -1i64;
    for ms in (0..=2000).step_by(50) {
        let text = counter.display(at(t0, ms));
        let value: i64 = text.parse().expect("integer frame");
        assert!(value >= prev, "decreased at {}ms: {} < {}", ms, value, prev);
        prev = value;
    }
    assert_eq!(prev, 1000);
}
