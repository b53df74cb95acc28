#![forbid(unsafe_code)]

//! Core: coordinate spaces, hit testing, and line metrics for hover
//! positioning.
//!
//! # Role in hoverlay
//! `hoverlay-core` is the measurement layer. It owns the two pixel
//! coordinate spaces (viewport and page), the inclusive point-in-box hit
//! test, line-height estimation from computed style, and the pure
//! first-match scan that decides which paragraph is under the pointer.
//!
//! # Primary responsibilities
//! - **Geometry**: `ViewportRect`/`PageRect` with the scroll translation
//!   between them kept explicit and type-checked.
//! - **Line metrics**: `LineHeight` parsing and the font-size fallback
//!   estimate.
//! - **Paragraph**: the element handle trait and `anchor_under`, the
//!   hover decision as a pure function.
//! - **Page**: the host boundary trait (scroll state plus window-level
//!   pointer-move pub/sub).
//!
//! # How it fits in the system
//! The runtime (`hoverlay-runtime`) subscribes to a `Page` and replays
//! every pointer move through `anchor_under`, publishing the result as
//! reactive state. Everything in this crate is synchronous and
//! host-independent, so it tests without any event machinery.

pub mod geometry;
pub mod line_metrics;
pub mod page;
pub mod paragraph;
pub mod pointer;

pub use geometry::{PageRect, ScrollOffset, ViewportPoint, ViewportRect};
pub use line_metrics::{
    LineHeight, LineHeightParseError, NORMAL_LINE_HEIGHT_FACTOR, TextStyle,
};
pub use page::{ListenerId, Page};
pub use paragraph::{HoverAnchor, Paragraph, anchor_under};
pub use pointer::PointerMove;

#[cfg(feature = "test-helpers")]
pub mod fixture;
#[cfg(feature = "test-helpers")]
pub use fixture::{FixturePage, FixtureParagraph};
