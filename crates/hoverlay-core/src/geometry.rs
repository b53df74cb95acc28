#![forbid(unsafe_code)]

//! Geometric primitives for the two hover coordinate spaces.
//!
//! Everything here is pixel-valued (`f64`, y-down). Two spaces exist:
//!
//! - **Viewport space**: origin at the top-left of the visible window.
//!   Pointer events and freshly measured element boxes live here.
//! - **Page space**: origin at the top-left of the whole document, related
//!   to viewport space by the current scroll offset.
//!
//! The spaces are separate types on purpose. Hit testing against a
//! page-space rectangle is wrong the moment the page scrolls; anchoring an
//! overlay to a viewport-space rectangle is wrong the moment it scrolls
//! again. The only bridge is [`ViewportRect::to_page`], so a mixed-space
//! comparison does not typecheck.

/// A point in viewport space, as carried by a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportPoint {
    pub x: f64,
    pub y: f64,
}

impl ViewportPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Window scroll offsets, in pixels.
///
/// `x` grows as the document scrolls right, `y` as it scrolls down. Both
/// are zero for an unscrolled page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollOffset {
    pub x: f64,
    pub y: f64,
}

impl ScrollOffset {
    /// The unscrolled state.
    pub const NONE: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned box in viewport space, as measured for an element.
///
/// `width` and `height` may be zero: a detached element measures as a zero
/// box at the viewport origin. Zero boxes still participate in hit testing
/// (only their origin point hits).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewportRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Left edge (alias for `x`).
    #[must_use]
    pub const fn left(&self) -> f64 {
        self.x
    }

    /// Top edge (alias for `y`).
    #[must_use]
    pub const fn top(&self) -> f64 {
        self.y
    }

    /// Right edge (`x + width`).
    #[must_use]
    pub const fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    #[must_use]
    pub const fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether `point` lies inside this box.
    ///
    /// Inclusive on all four edges: a pointer resting exactly on the
    /// border still counts as inside. Pointer coordinates arrive in
    /// viewport space, so this is the only space a hit test is valid in.
    #[must_use]
    pub const fn contains(&self, point: ViewportPoint) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Translate into page space by the current scroll offset.
    ///
    /// Width and height are unchanged; only the origin moves.
    #[must_use]
    pub const fn to_page(&self, scroll: ScrollOffset) -> PageRect {
        PageRect {
            x: self.x + scroll.x,
            y: self.y + scroll.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// An axis-aligned box in page space.
///
/// Produced by [`ViewportRect::to_page`]. Page coordinates survive
/// scrolling, which makes this the right space for anchoring an overlay.
/// There is deliberately no `contains` here: hit testing happens in
/// viewport space, before conversion.
///
/// `left()`/`top()` are aliases for `x`/`y`, kept as accessors rather than
/// duplicate fields so they cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PageRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Left edge (alias for `x`).
    #[must_use]
    pub const fn left(&self) -> f64 {
        self.x
    }

    /// Top edge (alias for `y`).
    #[must_use]
    pub const fn top(&self) -> f64 {
        self.y
    }

    /// Right edge (`x + width`).
    #[must_use]
    pub const fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    #[must_use]
    pub const fn bottom(&self) -> f64 {
        self.y + self.height
    }
}
