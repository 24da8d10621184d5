//! Scroll engine
//!
//! Advances the offset pair on every frame tick. The engine owns only the
//! timing state; offsets, speed, and widths are passed in so the same engine
//! survives content and configuration changes unchanged.
//!
//! Per tick: compute `distance = elapsed_seconds * speed`, subtract it from
//! both offsets, and when the boundary slot crosses `left_padding`, swap the
//! slot roles and snap back to the canonical layout. The snap discards the
//! wrap remainder, so a very large delta (e.g. after the app was backgrounded)
//! lands on the resting layout in one visible jump rather than partway
//! through the next cycle.

use crate::offsets::OffsetPair;

/// Result of a single engine tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// First tick after a timing reset: baseline recorded, no movement
    Baseline,
    /// Offsets advanced by the contained distance (positive = leftward)
    Advanced(f32),
    /// A cycle completed: roles swapped, offsets snapped to canonical layout
    Wrapped,
}

/// Per-frame offset advancement with wrap detection
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollEngine {
    /// Timestamp of the previous tick; `None` means no delta is available
    last_timestamp: Option<f64>,
}

impl ScrollEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous timestamp so the next tick is a baseline tick.
    ///
    /// Must be called on every scrolling state transition (pause, resume,
    /// resize, content change); otherwise the first tick after a long pause
    /// would apply the entire pause duration as one huge delta.
    pub fn reset_timing(&mut self) {
        self.last_timestamp = None;
    }

    /// Advance `pair` for the frame at `timestamp` (monotonic seconds).
    ///
    /// The timestamp is recorded even on the baseline tick, so the very next
    /// tick already has a delta to work with.
    pub fn tick(
        &mut self,
        timestamp: f64,
        pair: &mut OffsetPair,
        speed: f32,
        loop_width: f32,
        left_padding: f32,
    ) -> TickOutcome {
        let Some(last) = self.last_timestamp.replace(timestamp) else {
            return TickOutcome::Baseline;
        };

        let elapsed = (timestamp - last) as f32;
        let distance = elapsed * speed;

        if speed >= 0.0 {
            if pair.trailing() - distance < left_padding {
                pair.swap_roles();
                pair.reset(loop_width, left_padding, speed);
                tracing::trace!(
                    "marquee wrapped forward (distance={:.2}, loop_width={:.1})",
                    distance,
                    loop_width
                );
                TickOutcome::Wrapped
            } else {
                pair.shift(-distance);
                TickOutcome::Advanced(distance)
            }
        } else if pair.leading() - distance > left_padding {
            pair.swap_roles();
            pair.reset(loop_width, left_padding, speed);
            tracing::trace!(
                "marquee wrapped backward (distance={:.2}, loop_width={:.1})",
                distance,
                loop_width
            );
            TickOutcome::Wrapped
        } else {
            pair.shift(-distance);
            TickOutcome::Advanced(distance)
        }
    }
}
