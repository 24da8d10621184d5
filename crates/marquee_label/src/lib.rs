//! Self-scrolling marquee text label
//!
//! When the displayed text is wider than the container, two duplicate label
//! slots scroll horizontally in a seamless loop. The component pauses and
//! resumes based on visibility and user state, and supports drag-to-scroll.
//!
//! # Architecture
//!
//! - [`offsets::OffsetPair`]: the dual-slot offset model (which slot leads,
//!   where each one sits)
//! - [`engine::ScrollEngine`]: per-frame offset advancement and wrap
//! - [`drag::DragOverlay`]: manual drag-to-scroll over the same offsets
//! - [`label::MarqueeLabel`]: the component itself, wiring visibility control,
//!   content mirroring, the clock subscription, and the configuration surface
//!
//! The host owns rendering and text measurement: it feeds gesture events and
//! frame ticks in, and reads [`label::SlotFrame`]s back out to position its
//! two real label views.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::{Arc, Mutex};
//! use marquee_core::FrameClock;
//! use marquee_label::prelude::*;
//!
//! let clock = Arc::new(Mutex::new(FrameClock::new()));
//! let label = MarqueeLabel::with_padding(10.0, 10.0, &clock, measurer);
//! label.set_text("Now playing: an unreasonably long track title");
//! label.set_bounds(Size::new(160.0, 24.0));
//! label.set_attached(true);
//! label.start_animating();
//!
//! // Host vsync callback:
//! clock.lock().unwrap().tick(timestamp);
//! for frame in label.slot_frames() { /* position the two views */ }
//! ```

pub mod config;
pub mod drag;
pub mod engine;
pub mod label;
pub mod offsets;
pub mod text;

pub use config::MarqueeConfig;
pub use drag::{DragOutcome, DragOverlay};
pub use engine::{ScrollEngine, TickOutcome};
pub use label::{MarqueeLabel, SlotFrame};
pub use offsets::OffsetPair;
pub use text::{
    FixedAdvanceMeasure, FontSpec, FontWeight, LabelContent, TextAlignment, TextMeasure, TextSpan,
};

/// Convenience re-exports for hosts
pub mod prelude {
    pub use crate::config::MarqueeConfig;
    pub use crate::drag::DragOutcome;
    pub use crate::label::{MarqueeLabel, SlotFrame};
    pub use crate::text::{FontSpec, LabelContent, TextAlignment, TextMeasure, TextSpan};
    pub use marquee_core::{Color, FrameClock, GesturePhase, PanEvent, Point, Size};
}
