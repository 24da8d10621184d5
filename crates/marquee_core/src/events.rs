//! Gesture events
//!
//! The host's gesture recognizer is translated into [`PanEvent`]s at the
//! platform boundary. Raw phase values follow the usual mobile numbering so
//! platform glue can forward recognizer state without a mapping table.

use thiserror::Error;

use crate::geometry::Point;

/// Raw gesture phase values as reported by mobile gesture recognizers
pub mod phase_values {
    pub const POSSIBLE: u32 = 0;
    pub const BEGAN: u32 = 1;
    pub const CHANGED: u32 = 2;
    pub const ENDED: u32 = 3;
    pub const CANCELLED: u32 = 4;
    pub const FAILED: u32 = 5;
}

/// Event decode errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventError {
    #[error("unknown gesture phase value: {0}")]
    UnknownPhase(u32),
}

/// Phase of a continuous pan gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GesturePhase {
    /// Recognizer armed but no gesture recognized yet
    #[default]
    Possible,
    Began,
    Changed,
    Ended,
    Cancelled,
    Failed,
}

impl GesturePhase {
    /// True for phases after which the gesture no longer delivers updates
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            GesturePhase::Possible
                | GesturePhase::Ended
                | GesturePhase::Cancelled
                | GesturePhase::Failed
        )
    }
}

impl TryFrom<u32> for GesturePhase {
    type Error = EventError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            phase_values::POSSIBLE => Ok(GesturePhase::Possible),
            phase_values::BEGAN => Ok(GesturePhase::Began),
            phase_values::CHANGED => Ok(GesturePhase::Changed),
            phase_values::ENDED => Ok(GesturePhase::Ended),
            phase_values::CANCELLED => Ok(GesturePhase::Cancelled),
            phase_values::FAILED => Ok(GesturePhase::Failed),
            other => Err(EventError::UnknownPhase(other)),
        }
    }
}

/// A single pan gesture callback
///
/// `translation` is the incremental movement since the previous callback of
/// the same gesture, not the cumulative movement since it began. Hosts that
/// report cumulative translations must zero their accumulator after each
/// callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanEvent {
    pub phase: GesturePhase,
    pub translation: Point,
}

impl PanEvent {
    pub fn new(phase: GesturePhase, translation: Point) -> Self {
        Self { phase, translation }
    }

    /// A `Began` event (translation is zero by definition)
    pub fn began() -> Self {
        Self::new(GesturePhase::Began, Point::ZERO)
    }

    /// A `Changed` event carrying an incremental translation
    pub fn changed(dx: f32, dy: f32) -> Self {
        Self::new(GesturePhase::Changed, Point::new(dx, dy))
    }

    /// An `Ended` event
    pub fn ended() -> Self {
        Self::new(GesturePhase::Ended, Point::ZERO)
    }
}
