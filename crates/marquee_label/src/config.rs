//! Marquee configuration

use serde::{Deserialize, Serialize};

/// Default scrolling speed in points per second
pub const DEFAULT_SCROLLING_SPEED: f32 = 50.0;

/// Faster preset speed in points per second
pub const FAST_SCROLLING_SPEED: f32 = 100.0;

/// Configuration for [`MarqueeLabel`](crate::label::MarqueeLabel)
///
/// Paddings are fixed at construction and have no default: a config cannot be
/// built (or deserialized) without naming them explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarqueeConfig {
    /// Gap kept between the container's left edge and the text, in points
    pub left_padding: f32,
    /// Gap kept after the text before it repeats, in points
    pub right_padding: f32,
    /// Signed scroll speed in points per second. Positive moves content
    /// leftward, negative rightward; zero freezes the loop in place.
    #[serde(default = "default_speed")]
    pub scrolling_speed: f32,
    /// Explicit pause flag. The label starts paused; call
    /// [`start_animating`](crate::label::MarqueeLabel::start_animating) or
    /// [`set_paused`](crate::label::MarqueeLabel::set_paused) to run.
    #[serde(default = "default_paused")]
    pub paused: bool,
    /// Whether the drag-to-scroll overlay accepts gestures
    #[serde(default = "default_drag_enabled")]
    pub drag_enabled: bool,
}

fn default_speed() -> f32 {
    DEFAULT_SCROLLING_SPEED
}

fn default_paused() -> bool {
    true
}

fn default_drag_enabled() -> bool {
    true
}

impl MarqueeConfig {
    /// Create a config with the given paddings and default behavior
    pub fn new(left_padding: f32, right_padding: f32) -> Self {
        Self {
            left_padding,
            right_padding,
            scrolling_speed: DEFAULT_SCROLLING_SPEED,
            paused: true,
            drag_enabled: true,
        }
    }

    /// Create a config using the faster scrolling preset
    pub fn fast(left_padding: f32, right_padding: f32) -> Self {
        Self {
            scrolling_speed: FAST_SCROLLING_SPEED,
            ..Self::new(left_padding, right_padding)
        }
    }

    /// Set the scrolling speed
    pub fn speed(mut self, points_per_second: f32) -> Self {
        self.scrolling_speed = points_per_second;
        self
    }

    /// Start in the running state instead of paused
    pub fn running(mut self) -> Self {
        self.paused = false;
        self
    }

    /// Disable the drag-to-scroll overlay
    pub fn without_drag(mut self) -> Self {
        self.drag_enabled = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let config = MarqueeConfig::new(10.0, 12.0);
        assert_eq!(config.left_padding, 10.0);
        assert_eq!(config.right_padding, 12.0);
        assert_eq!(config.scrolling_speed, DEFAULT_SCROLLING_SPEED);
        assert!(config.paused);
        assert!(config.drag_enabled);
    }

    #[test]
    fn test_fast_preset() {
        let config = MarqueeConfig::fast(4.0, 4.0);
        assert_eq!(config.scrolling_speed, FAST_SCROLLING_SPEED);
    }

    #[test]
    fn test_deserialize_requires_padding() {
        // The generic construction path must fail without explicit padding.
        let err = serde_json::from_str::<MarqueeConfig>("{}");
        assert!(err.is_err());

        let err = serde_json::from_str::<MarqueeConfig>(r#"{"left_padding": 10.0}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_deserialize_with_padding_fills_defaults() {
        let config: MarqueeConfig =
            serde_json::from_str(r#"{"left_padding": 10.0, "right_padding": 8.0}"#).unwrap();
        assert_eq!(config.scrolling_speed, DEFAULT_SCROLLING_SPEED);
        assert!(config.paused);
        assert!(config.drag_enabled);
    }
}
