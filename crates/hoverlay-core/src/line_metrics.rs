#![forbid(unsafe_code)]

//! Line height resolution from computed style.
//!
//! A hover control sits beside the first text line of a paragraph, so the
//! one metric the pipeline needs from style is that line's pixel height.
//! Computed `line-height` arrives as a string in one of three shapes: an
//! absolute pixel value (`"24px"`), the keyword `"normal"`, or a unitless
//! multiplier (`"1.5"`). Only the pixel form is usable directly; every
//! other shape is estimated from font size instead.
//!
//! # Design
//!
//! [`LineHeight`] models exactly the distinction the estimate acts on:
//! absolute pixels versus everything relative. The estimate does not
//! interpret multipliers or measure glyphs; relative shapes all resolve at
//! [`NORMAL_LINE_HEIGHT_FACTOR`].

use core::fmt;

/// Factor applied to font size when `line-height` carries no absolute
/// pixel value. 1.2x font size, the conventional default leading for body
/// text.
pub const NORMAL_LINE_HEIGHT_FACTOR: f64 = 1.2;

/// Computed `line-height`, reduced to the distinction the hover pipeline
/// acts on.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineHeight {
    /// Absolute pixel value, e.g. computed `"24px"`.
    Px(f64),
    /// Any relative shape: the `normal` keyword or a unitless multiplier.
    /// Resolves against font size at [`NORMAL_LINE_HEIGHT_FACTOR`].
    Relative,
}

/// Error from [`LineHeight::from_css`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineHeightParseError {
    /// Empty or whitespace-only input.
    Empty,
    /// Not a pixel value, `normal`, or a unitless number.
    Unrecognized(String),
    /// Parsed to a negative or non-finite number.
    OutOfRange(String),
}

impl fmt::Display for LineHeightParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineHeightParseError::Empty => write!(f, "empty line-height value"),
            LineHeightParseError::Unrecognized(value) => {
                write!(f, "unrecognized line-height value: {value:?}")
            }
            LineHeightParseError::OutOfRange(value) => {
                write!(f, "line-height out of range: {value:?}")
            }
        }
    }
}

impl std::error::Error for LineHeightParseError {}

impl LineHeight {
    /// Parse a computed `line-height` value.
    ///
    /// Accepts `"<number>px"`, the keyword `"normal"` (case-insensitive),
    /// and a bare unitless number; surrounding whitespace is tolerated.
    /// Keyword and multiplier both parse to [`LineHeight::Relative`].
    /// Negative and non-finite numbers are rejected, as is any other unit.
    pub fn from_css(value: &str) -> Result<Self, LineHeightParseError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(LineHeightParseError::Empty);
        }
        if trimmed.eq_ignore_ascii_case("normal") {
            return Ok(Self::Relative);
        }
        if let Some(number) = trimmed.strip_suffix("px") {
            return parse_finite(number, value).map(Self::Px);
        }
        parse_finite(trimmed, value).map(|_| Self::Relative)
    }

    /// Like [`LineHeight::from_css`], but degrades silently: anything
    /// unparseable becomes [`LineHeight::Relative`] and takes the
    /// font-size fallback downstream.
    #[must_use]
    pub fn from_css_lossy(value: &str) -> Self {
        Self::from_css(value).unwrap_or(Self::Relative)
    }
}

fn parse_finite(number: &str, original: &str) -> Result<f64, LineHeightParseError> {
    let parsed: f64 = number
        .trim()
        .parse()
        .map_err(|_| LineHeightParseError::Unrecognized(original.to_string()))?;
    if !parsed.is_finite() || parsed < 0.0 {
        return Err(LineHeightParseError::OutOfRange(original.to_string()));
    }
    Ok(parsed)
}

/// The two computed-style inputs the hover pipeline reads from an element.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextStyle {
    pub line_height: LineHeight,
    /// Computed font size in pixels.
    pub font_size_px: f64,
}

impl TextStyle {
    #[must_use]
    pub const fn new(line_height: LineHeight, font_size_px: f64) -> Self {
        Self {
            line_height,
            font_size_px,
        }
    }

    /// Pixel height of the element's first text line.
    ///
    /// An absolute `line-height` wins outright; every relative shape
    /// resolves as `font_size_px` x [`NORMAL_LINE_HEIGHT_FACTOR`]. Styles
    /// that failed to parse upstream arrive here as
    /// [`LineHeight::Relative`] and take the same path. Never fails.
    #[must_use]
    pub fn first_line_height(&self) -> f64 {
        match self.line_height {
            LineHeight::Px(px) => px,
            LineHeight::Relative => self.font_size_px * NORMAL_LINE_HEIGHT_FACTOR,
        }
    }
}
