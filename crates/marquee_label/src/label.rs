//! The marquee label component
//!
//! [`MarqueeLabel`] owns the shared widget state, wires it to the host's
//! [`FrameClock`], and exposes the configuration surface. The host renders
//! two duplicate label views and, after each frame, reads [`SlotFrame`]s to
//! position them.
//!
//! All mutation happens on the host's UI thread: frame ticks and gesture
//! callbacks are serialized by the host and never run concurrently with the
//! property setters.

use std::sync::{Arc, Mutex, Weak};

use marquee_core::clock::{FrameClock, FrameTick, SubscriptionId};
use marquee_core::events::PanEvent;
use marquee_core::geometry::{Color, Size};

use crate::config::MarqueeConfig;
use crate::drag::{DragOutcome, DragOverlay};
use crate::engine::ScrollEngine;
use crate::offsets::OffsetPair;
use crate::text::{FontSpec, LabelContent, TextAlignment, TextMeasure, TextSpan};

/// Per-slot layout output for the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotFrame {
    /// Horizontal offset of the slot's left edge from the container's left edge
    pub x: f32,
    /// Whether the host should hide this slot's view
    pub hidden: bool,
}

/// Mutable widget state, shared with the frame-clock subscription
struct MarqueeState {
    config: MarqueeConfig,
    content: LabelContent,
    measurer: Box<dyn TextMeasure>,
    /// Cached natural size; width includes both paddings
    natural_size: Option<Size>,
    bounds: Size,
    attached: bool,
    pair: OffsetPair,
    engine: ScrollEngine,
    hidden: [bool; 2],
}

impl MarqueeState {
    /// Natural size of the loop: measured text width plus both paddings,
    /// text height unchanged. Cached until the content mutates.
    fn natural_size(&mut self) -> Size {
        if let Some(size) = self.natural_size {
            return size;
        }
        let measured = self.measurer.measure(&self.content);
        let size = Size::new(
            measured.width + self.config.left_padding + self.config.right_padding,
            measured.height,
        );
        self.natural_size = Some(size);
        size
    }

    fn invalidate_natural_size(&mut self) {
        self.natural_size = None;
    }

    fn reset_scroll_offset(&mut self) {
        let loop_width = self.natural_size().width;
        self.pair.reset(
            loop_width,
            self.config.left_padding,
            self.config.scrolling_speed,
        );
    }

    /// Re-evaluate whether scrolling should run. Returns the desired clock
    /// paused state and updates slot visibility.
    ///
    /// Timing state is cleared first so a resume never sees a stale delta.
    fn refresh_scroll_state(&mut self) -> bool {
        self.engine.reset_timing();

        let loop_width = self.natural_size().width;
        let fits = self.bounds.width >= loop_width;

        let paused = if fits {
            // Nothing to scroll. Only the slot resting exactly at the left
            // padding stays visible, covering transient states where both
            // would otherwise render stacked.
            self.hidden = [
                self.pair.slot_offset(0) != self.config.left_padding,
                self.pair.slot_offset(1) != self.config.left_padding,
            ];
            true
        } else {
            self.hidden = [false, false];
            !self.attached || self.config.paused
        };

        tracing::debug!(
            "marquee scroll state: fits={} attached={} paused_flag={} -> clock_paused={}",
            fits,
            self.attached,
            self.config.paused,
            paused
        );
        paused
    }
}

impl FrameTick for MarqueeState {
    fn on_frame(&mut self, timestamp: f64) {
        let loop_width = self.natural_size().width;
        let speed = self.config.scrolling_speed;
        let left_padding = self.config.left_padding;
        self.engine
            .tick(timestamp, &mut self.pair, speed, loop_width, left_padding);
    }
}

/// A self-scrolling text label
///
/// Construct with a [`MarqueeConfig`] (paddings are mandatory and immutable),
/// a shared [`FrameClock`], and the host's [`TextMeasure`]. The label
/// registers its clock subscription immediately (initially paused) and
/// releases it unconditionally when dropped.
pub struct MarqueeLabel {
    state: Arc<Mutex<MarqueeState>>,
    clock: Weak<Mutex<FrameClock>>,
    subscription: SubscriptionId,
    drag: DragOverlay,
}

impl MarqueeLabel {
    pub fn new(
        config: MarqueeConfig,
        clock: &Arc<Mutex<FrameClock>>,
        measurer: Box<dyn TextMeasure>,
    ) -> Self {
        let drag = DragOverlay::new(config.drag_enabled);
        let state = Arc::new(Mutex::new(MarqueeState {
            config,
            content: LabelContent::default(),
            measurer,
            natural_size: None,
            bounds: Size::ZERO,
            attached: false,
            pair: OffsetPair::new(),
            engine: ScrollEngine::new(),
            hidden: [false, false],
        }));
        state.lock().unwrap().reset_scroll_offset();

        let subscription = {
            let target: Arc<Mutex<dyn FrameTick>> = state.clone();
            clock.lock().unwrap().subscribe(Arc::downgrade(&target))
        };

        let label = Self {
            state,
            clock: Arc::downgrade(clock),
            subscription,
            drag,
        };
        label.sync_scroll_state();
        label
    }

    /// Shorthand for `new` with an otherwise-default config
    pub fn with_padding(
        left_padding: f32,
        right_padding: f32,
        clock: &Arc<Mutex<FrameClock>>,
        measurer: Box<dyn TextMeasure>,
    ) -> Self {
        Self::new(MarqueeConfig::new(left_padding, right_padding), clock, measurer)
    }

    // =========================================================================
    // Scrolling controls
    // =========================================================================

    pub fn is_paused(&self) -> bool {
        self.state.lock().unwrap().config.paused
    }

    pub fn set_paused(&self, paused: bool) {
        let changed = {
            let mut state = self.state.lock().unwrap();
            let changed = state.config.paused != paused;
            state.config.paused = paused;
            changed
        };
        if changed {
            self.sync_scroll_state();
        }
    }

    /// Resume automatic scrolling (subject to fit and attachment)
    pub fn start_animating(&self) {
        self.set_paused(false);
    }

    /// Suspend automatic scrolling
    pub fn stop_animating(&self) {
        self.set_paused(true);
    }

    /// Freeze into a static label: canonical offsets, paused, timing cleared
    pub fn transform_to_normal_label(&self) {
        {
            let mut state = self.state.lock().unwrap();
            state.config.paused = true;
            state.reset_scroll_offset();
        }
        self.sync_scroll_state();
    }

    pub fn scrolling_speed(&self) -> f32 {
        self.state.lock().unwrap().config.scrolling_speed
    }

    /// Change the speed (sign encodes direction). Snaps the offsets back to
    /// the canonical layout for the new direction.
    pub fn set_scrolling_speed(&self, points_per_second: f32) {
        {
            let mut state = self.state.lock().unwrap();
            state.config.scrolling_speed = points_per_second;
            state.reset_scroll_offset();
        }
        self.sync_scroll_state();
    }

    pub fn left_padding(&self) -> f32 {
        self.state.lock().unwrap().config.left_padding
    }

    pub fn right_padding(&self) -> f32 {
        self.state.lock().unwrap().config.right_padding
    }

    // =========================================================================
    // Content
    // =========================================================================

    pub fn text(&self) -> String {
        self.state.lock().unwrap().content.text.clone()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.modify_content(|content| {
            content.text = text;
            content.spans.clear();
        });
    }

    /// Set text together with styled runs (the attributed-text analog)
    pub fn set_styled_text(&self, text: impl Into<String>, spans: Vec<TextSpan>) {
        let text = text.into();
        self.modify_content(|content| {
            content.text = text;
            content.spans = spans;
        });
    }

    pub fn font(&self) -> FontSpec {
        self.state.lock().unwrap().content.font.clone()
    }

    pub fn set_font(&self, font: FontSpec) {
        self.modify_content(|content| content.font = font);
    }

    pub fn text_color(&self) -> Color {
        self.state.lock().unwrap().content.color
    }

    pub fn set_text_color(&self, color: Color) {
        self.modify_content(|content| content.color = color);
    }

    pub fn text_alignment(&self) -> TextAlignment {
        self.state.lock().unwrap().content.alignment
    }

    pub fn set_text_alignment(&self, alignment: TextAlignment) {
        self.modify_content(|content| content.alignment = alignment);
    }

    /// Snapshot of the full content, as mirrored onto both slots
    pub fn content(&self) -> LabelContent {
        self.state.lock().unwrap().content.clone()
    }

    // =========================================================================
    // Layout inputs & queries
    // =========================================================================

    /// Inform the label of its container size (host layout pass)
    pub fn set_bounds(&self, bounds: Size) {
        let changed = {
            let mut state = self.state.lock().unwrap();
            let changed = state.bounds != bounds;
            state.bounds = bounds;
            if changed {
                state.reset_scroll_offset();
            }
            changed
        };
        if changed {
            self.sync_scroll_state();
        }
    }

    /// Inform the label whether it is attached to a live display surface
    pub fn set_attached(&self, attached: bool) {
        self.state.lock().unwrap().attached = attached;
        self.sync_scroll_state();
    }

    /// Natural size: measured text width plus both paddings, text height
    pub fn intrinsic_content_size(&self) -> Size {
        self.state.lock().unwrap().natural_size()
    }

    /// Current per-slot layout, indexed by physical slot
    pub fn slot_frames(&self) -> [SlotFrame; 2] {
        let state = self.state.lock().unwrap();
        [
            SlotFrame {
                x: state.pair.slot_offset(0),
                hidden: state.hidden[0],
            },
            SlotFrame {
                x: state.pair.slot_offset(1),
                hidden: state.hidden[1],
            },
        ]
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Feed a pan gesture callback from the host recognizer.
    ///
    /// On [`DragOutcome::Rejected`] the host should re-arm its recognizer so
    /// a future gesture can still be attempted.
    pub fn handle_pan(&mut self, event: &PanEvent) -> DragOutcome {
        let outcome = {
            let mut state = self.state.lock().unwrap();
            let paused = state.config.paused;
            let loop_width = state.natural_size().width;
            let left_padding = state.config.left_padding;
            self.drag
                .handle(event, paused, &mut state.pair, loop_width, left_padding)
        };

        match outcome {
            DragOutcome::Started => self.set_clock_paused(true),
            DragOutcome::Settled => self.sync_scroll_state(),
            DragOutcome::Rejected | DragOutcome::Updated | DragOutcome::Ignored => {}
        }
        outcome
    }

    // =========================================================================
    // Internal
    // =========================================================================

    /// Mirror a content mutation onto both slots atomically, then re-derive
    /// size, offsets, and scroll state.
    fn modify_content(&self, mutate: impl FnOnce(&mut LabelContent)) {
        {
            let mut state = self.state.lock().unwrap();
            mutate(&mut state.content);
            state.invalidate_natural_size();
            state.reset_scroll_offset();
        }
        self.sync_scroll_state();
    }

    fn sync_scroll_state(&self) {
        let paused = self.state.lock().unwrap().refresh_scroll_state();
        self.set_clock_paused(paused);
    }

    fn set_clock_paused(&self, paused: bool) {
        if let Some(clock) = self.clock.upgrade() {
            clock.lock().unwrap().set_paused(self.subscription, paused);
        }
    }
}

impl Drop for MarqueeLabel {
    fn drop(&mut self) {
        // The subscription is released even if the clock is mid-pause; the
        // weak back-reference alone would only clean up on a later tick.
        if let Some(clock) = self.clock.upgrade() {
            clock.lock().unwrap().unsubscribe(self.subscription);
        }
    }
}
