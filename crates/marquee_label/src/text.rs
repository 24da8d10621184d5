//! Label text content and measurement
//!
//! Marquee text is a single line: a plain string, optional styled spans (the
//! attributed-text analog), a font spec, a uniform color, and an alignment.
//! The content is stored once and mirrored onto both label slots by the host.
//!
//! Measurement is delegated to the host's text stack through [`TextMeasure`];
//! this crate never shapes or rasterizes text itself.

use marquee_core::{Color, Size};

/// Text alignment options (horizontal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    Light,
    #[default]
    Normal,
    Medium,
    Bold,
}

/// Font selection for the label
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    /// Family name; `None` selects the host's system font
    pub family: Option<String>,
    /// Point size
    pub size: f32,
    pub weight: FontWeight,
}

impl FontSpec {
    /// System font at the given size
    pub fn system(size: f32) -> Self {
        Self {
            family: None,
            size,
            weight: FontWeight::Normal,
        }
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::system(17.0)
    }
}

/// A styled run within the label text
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    /// Start byte index into the text
    pub start: usize,
    /// End byte index (exclusive)
    pub end: usize,
    pub color: Color,
    pub bold: bool,
}

impl TextSpan {
    pub fn new(start: usize, end: usize, color: Color, bold: bool) -> Self {
        Self {
            start,
            end,
            color,
            bold,
        }
    }

    /// A span with just a color (not bold)
    pub fn colored(start: usize, end: usize, color: Color) -> Self {
        Self::new(start, end, color, false)
    }
}

/// Complete content of the label, duplicated across both slots
#[derive(Debug, Clone, PartialEq)]
pub struct LabelContent {
    pub text: String,
    /// Styled runs; empty means the uniform `color`/`font` apply throughout
    pub spans: Vec<TextSpan>,
    pub font: FontSpec,
    pub color: Color,
    pub alignment: TextAlignment,
}

impl Default for LabelContent {
    fn default() -> Self {
        Self {
            text: String::new(),
            spans: Vec::new(),
            font: FontSpec::default(),
            color: Color::BLACK,
            alignment: TextAlignment::Left,
        }
    }
}

/// Host-provided text measurement
///
/// Returns the natural single-line extent of the content, excluding any
/// marquee padding. Implementations typically wrap the host's shaping engine.
pub trait TextMeasure: Send {
    fn measure(&self, content: &LabelContent) -> Size;
}

/// Fixed-advance measurement: every scalar advances by the same width.
///
/// A monospace-style fallback for hosts without a shaping engine, and the
/// measurer used throughout this crate's tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvanceMeasure {
    pub advance: f32,
    pub line_height: f32,
}

impl TextMeasure for FixedAdvanceMeasure {
    fn measure(&self, content: &LabelContent) -> Size {
        let count = content.text.chars().count() as f32;
        Size::new(count * self.advance, self.line_height)
    }
}
