//! Marquee Core Primitives
//!
//! This crate provides the foundational pieces shared by the marquee widgets:
//!
//! - **Geometry**: plain `Point`/`Size`/`Color` value types
//! - **Gesture Events**: pan gesture phases and translation deltas
//! - **Frame Clock**: a vsync-style tick source with weakly-held subscribers
//!
//! Everything here is host-agnostic: the embedding application owns the real
//! display link / vsync callback and forwards timestamps into [`FrameClock`],
//! and translates its native gesture recognizer state into [`PanEvent`]s.

pub mod clock;
pub mod events;
pub mod geometry;

pub use clock::{FrameClock, FrameTick, SubscriptionId};
pub use events::{EventError, GesturePhase, PanEvent};
pub use geometry::{Color, Point, Size};
