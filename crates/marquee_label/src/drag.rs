//! Drag-to-scroll overlay
//!
//! Lets the user drag the loop horizontally with one contact point while the
//! automatic scroll is suspended. Unlike the engine's wrap (which snaps to
//! the canonical layout), a drag wrap relocates the slot that is *not*
//! crossing the boundary by two loop widths, so the content under the finger
//! never jumps.

use marquee_core::events::{GesturePhase, PanEvent};

use crate::offsets::OffsetPair;

/// What the label must do after feeding a pan event through the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Gesture refused (component paused or overlay disabled). No state was
    /// touched; the host should re-arm its recognizer for future gestures.
    Rejected,
    /// Drag accepted: the frame clock must pause for the gesture's duration
    Started,
    /// Offsets were updated in place
    Updated,
    /// Gesture settled: scroll state must be re-evaluated
    Settled,
    /// Event carried no work in the current overlay state
    Ignored,
}

/// Pan gesture handler over the shared offset pair
#[derive(Debug, Clone, Copy)]
pub struct DragOverlay {
    enabled: bool,
    active: bool,
}

impl DragOverlay {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            active: false,
        }
    }

    /// True while a drag gesture is in progress
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Feed one pan event through the overlay.
    ///
    /// `paused` is the component's explicit pause flag: a paused label
    /// rejects new drags outright. `Changed` events are only honored after an
    /// accepted `Began`; translation is consumed incrementally per event.
    pub fn handle(
        &mut self,
        event: &PanEvent,
        paused: bool,
        pair: &mut OffsetPair,
        loop_width: f32,
        left_padding: f32,
    ) -> DragOutcome {
        if !self.enabled {
            return DragOutcome::Rejected;
        }

        match event.phase {
            GesturePhase::Began => {
                if paused {
                    DragOutcome::Rejected
                } else {
                    self.active = true;
                    DragOutcome::Started
                }
            }
            GesturePhase::Changed => {
                if !self.active {
                    return DragOutcome::Ignored;
                }

                pair.shift(event.translation.x);

                if pair.trailing() < left_padding {
                    pair.offset_leading_by(2.0 * loop_width);
                    pair.swap_roles();
                    tracing::trace!("drag wrapped forward (dx={:.2})", event.translation.x);
                } else if pair.leading() > left_padding {
                    pair.offset_trailing_by(-2.0 * loop_width);
                    pair.swap_roles();
                    tracing::trace!("drag wrapped backward (dx={:.2})", event.translation.x);
                }

                DragOutcome::Updated
            }
            GesturePhase::Ended
            | GesturePhase::Cancelled
            | GesturePhase::Failed
            | GesturePhase::Possible => {
                self.active = false;
                DragOutcome::Settled
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOOP_WIDTH: f32 = 300.0;
    const LEFT_PADDING: f32 = 10.0;

    fn canonical() -> OffsetPair {
        let mut pair = OffsetPair::new();
        pair.reset(LOOP_WIDTH, LEFT_PADDING, 50.0);
        pair
    }

    fn drag(
        overlay: &mut DragOverlay,
        pair: &mut OffsetPair,
        event: &PanEvent,
        paused: bool,
    ) -> DragOutcome {
        overlay.handle(event, paused, pair, LOOP_WIDTH, LEFT_PADDING)
    }

    #[test]
    fn test_began_pauses_the_clock() {
        let mut overlay = DragOverlay::new(true);
        let mut pair = canonical();
        let outcome = drag(&mut overlay, &mut pair, &PanEvent::began(), false);
        assert_eq!(outcome, DragOutcome::Started);
        assert!(overlay.is_active());
    }

    #[test]
    fn test_began_rejected_while_paused() {
        let mut overlay = DragOverlay::new(true);
        let mut pair = canonical();
        let before = pair;

        let outcome = drag(&mut overlay, &mut pair, &PanEvent::began(), true);
        assert_eq!(outcome, DragOutcome::Rejected);
        assert!(!overlay.is_active());
        assert_eq!(pair, before);

        // The rejected gesture's updates never touch the offsets either.
        let outcome = drag(&mut overlay, &mut pair, &PanEvent::changed(-30.0, 0.0), true);
        assert_eq!(outcome, DragOutcome::Ignored);
        assert_eq!(pair, before);
    }

    #[test]
    fn test_disabled_overlay_rejects_everything() {
        let mut overlay = DragOverlay::new(false);
        let mut pair = canonical();
        assert_eq!(
            drag(&mut overlay, &mut pair, &PanEvent::began(), false),
            DragOutcome::Rejected
        );
    }

    #[test]
    fn test_changed_shifts_both_offsets() {
        let mut overlay = DragOverlay::new(true);
        let mut pair = canonical();
        drag(&mut overlay, &mut pair, &PanEvent::began(), false);

        let outcome = drag(&mut overlay, &mut pair, &PanEvent::changed(-25.0, 3.0), false);
        assert_eq!(outcome, DragOutcome::Updated);
        // Only the horizontal component applies.
        assert_eq!(pair.leading(), -15.0);
        assert_eq!(pair.trailing(), 285.0);
    }

    #[test]
    fn test_forward_drag_wrap_keeps_continuity() {
        let mut overlay = DragOverlay::new(true);
        let mut pair = canonical();
        drag(&mut overlay, &mut pair, &PanEvent::began(), false);

        // Pull 301 points leftward: the trailing slot crosses the padding
        // boundary, so the leading slot relocates a full loop ahead.
        drag(&mut overlay, &mut pair, &PanEvent::changed(-301.0, 0.0), false);
        assert_eq!(pair.leading(), 9.0);
        assert_eq!(pair.trailing(), 309.0);
        assert_eq!(pair.leading_slot(), 1);
    }

    #[test]
    fn test_backward_drag_wrap_keeps_continuity() {
        let mut overlay = DragOverlay::new(true);
        let mut pair = canonical();
        drag(&mut overlay, &mut pair, &PanEvent::began(), false);

        // Push 2 points rightward: the leading slot leaves the padding
        // boundary, so the trailing slot relocates a full loop behind.
        drag(&mut overlay, &mut pair, &PanEvent::changed(2.0, 0.0), false);
        assert_eq!(pair.leading(), -288.0);
        assert_eq!(pair.trailing(), 12.0);
        assert_eq!(pair.leading_slot(), 1);
        // The dragged slot moved by exactly the translation.
        assert_eq!(pair.slot_offset(0), 12.0);
    }

    #[test]
    fn test_settling_phases_end_the_drag() {
        for phase in [
            GesturePhase::Ended,
            GesturePhase::Cancelled,
            GesturePhase::Failed,
            GesturePhase::Possible,
        ] {
            let mut overlay = DragOverlay::new(true);
            let mut pair = canonical();
            drag(&mut overlay, &mut pair, &PanEvent::began(), false);

            let event = PanEvent::new(phase, marquee_core::Point::ZERO);
            assert_eq!(drag(&mut overlay, &mut pair, &event, false), DragOutcome::Settled);
            assert!(!overlay.is_active());
        }
    }
}
