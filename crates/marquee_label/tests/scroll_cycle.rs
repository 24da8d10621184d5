//! End-to-end scroll cycle tests: label + frame clock + gestures.

use std::sync::{Arc, Mutex};

use marquee_core::{FrameClock, PanEvent, Size};
use marquee_label::{DragOutcome, FixedAdvanceMeasure, MarqueeConfig, MarqueeLabel, TextMeasure};

fn measurer() -> Box<dyn TextMeasure> {
    Box::new(FixedAdvanceMeasure {
        advance: 10.0,
        line_height: 24.0,
    })
}

/// Loop width 300 (28 chars * 10 pt + 10 + 10), container 100, speed +50.
fn scrolling_label(clock: &Arc<Mutex<FrameClock>>) -> MarqueeLabel {
    let label = MarqueeLabel::with_padding(10.0, 10.0, clock, measurer());
    label.set_text("x".repeat(28));
    label.set_bounds(Size::new(100.0, 24.0));
    label.set_attached(true);
    label
}

fn tick(clock: &Arc<Mutex<FrameClock>>, timestamp: f64) {
    clock.lock().unwrap().tick(timestamp);
}

#[test]
fn full_cycle_wraps_back_to_canonical_offsets() {
    let clock = Arc::new(Mutex::new(FrameClock::new()));
    let label = scrolling_label(&clock);
    label.start_animating();

    // Baseline tick: establishes the delta origin, moves nothing.
    tick(&clock, 0.0);
    let frames = label.slot_frames();
    assert_eq!(frames[0].x, 10.0);
    assert_eq!(frames[1].x, 310.0);

    // 2 s at +50 pt/s: 100 points leftward, no wrap (210 is past the padding).
    tick(&clock, 2.0);
    let frames = label.slot_frames();
    assert_eq!(frames[0].x, -90.0);
    assert_eq!(frames[1].x, 210.0);

    // A further 4.1 s pushes the trailing slot below the left padding: the
    // pair snaps back to canonical layout with the slot roles swapped.
    tick(&clock, 6.1);
    let frames = label.slot_frames();
    assert_eq!(frames[0].x, 310.0);
    assert_eq!(frames[1].x, 10.0);
}

#[test]
fn pause_rejects_drag_begin_without_touching_state() {
    let clock = Arc::new(Mutex::new(FrameClock::new()));
    let mut label = scrolling_label(&clock);
    // Explicitly paused: the clock is already stopped.
    label.stop_animating();
    let before = label.slot_frames();

    assert_eq!(label.handle_pan(&PanEvent::began()), DragOutcome::Rejected);
    assert_eq!(label.slot_frames(), before);

    // Clock stays paused; a tick still moves nothing.
    tick(&clock, 0.0);
    tick(&clock, 5.0);
    assert_eq!(label.slot_frames(), before);
}

#[test]
fn drag_suspends_scrolling_and_reconciles_on_end() {
    let clock = Arc::new(Mutex::new(FrameClock::new()));
    let mut label = scrolling_label(&clock);
    label.start_animating();
    tick(&clock, 0.0);

    assert_eq!(label.handle_pan(&PanEvent::began()), DragOutcome::Started);

    // Automatic scrolling is suspended for the drag's duration.
    tick(&clock, 1.0);
    let frames = label.slot_frames();
    assert_eq!(frames[0].x, 10.0);

    // Incremental translations move both slots directly.
    assert_eq!(
        label.handle_pan(&PanEvent::changed(-30.0, 0.0)),
        DragOutcome::Updated
    );
    let frames = label.slot_frames();
    assert_eq!(frames[0].x, -20.0);
    assert_eq!(frames[1].x, 280.0);

    // Ending the gesture resumes the clock; the next tick is a baseline, the
    // one after moves from where the drag left the offsets.
    assert_eq!(label.handle_pan(&PanEvent::ended()), DragOutcome::Settled);
    tick(&clock, 2.0);
    assert_eq!(label.slot_frames()[0].x, -20.0);
    tick(&clock, 3.0);
    assert_eq!(label.slot_frames()[0].x, -70.0);
}

#[test]
fn drag_disabled_variant_ignores_gestures() {
    let clock = Arc::new(Mutex::new(FrameClock::new()));
    let config = MarqueeConfig::new(10.0, 10.0).without_drag().running();
    let mut label = MarqueeLabel::new(config, &clock, measurer());
    label.set_text("x".repeat(28));
    label.set_bounds(Size::new(100.0, 24.0));
    label.set_attached(true);

    tick(&clock, 0.0);
    assert_eq!(label.handle_pan(&PanEvent::began()), DragOutcome::Rejected);

    // Scrolling carries on untouched.
    tick(&clock, 1.0);
    assert_eq!(label.slot_frames()[0].x, -40.0);
}

#[test]
fn backgrounded_label_resumes_without_a_spurious_jump() {
    let clock = Arc::new(Mutex::new(FrameClock::new()));
    let label = scrolling_label(&clock);
    label.start_animating();
    tick(&clock, 0.0);
    tick(&clock, 1.0);
    assert_eq!(label.slot_frames()[0].x, -40.0);

    // Detach (backgrounded) for a long time, then reattach. The timing reset
    // makes the first tick after resume a baseline instead of a 100-second
    // delta.
    label.set_attached(false);
    label.set_attached(true);
    tick(&clock, 101.0);
    assert_eq!(label.slot_frames()[0].x, -40.0);
    tick(&clock, 102.0);
    assert_eq!(label.slot_frames()[0].x, -90.0);
}
