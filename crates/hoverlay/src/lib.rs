#![forbid(unsafe_code)]

//! hoverlay public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the measurement types from `hoverlay-core` and the tracker
//! from `hoverlay-runtime`, and offers a lightweight prelude for
//! day-to-day usage.
//!
//! The short version: implement [`Page`] and [`Paragraph`] for your host,
//! hand a page to a [`HoverTracker`], and subscribe to the anchor it
//! publishes.

// --- Core re-exports -------------------------------------------------------

pub use hoverlay_core::geometry::{PageRect, ScrollOffset, ViewportPoint, ViewportRect};
pub use hoverlay_core::line_metrics::{
    LineHeight, LineHeightParseError, NORMAL_LINE_HEIGHT_FACTOR, TextStyle,
};
pub use hoverlay_core::page::{ListenerId, Page};
pub use hoverlay_core::paragraph::{HoverAnchor, Paragraph, anchor_under};
pub use hoverlay_core::pointer::PointerMove;

#[cfg(feature = "test-helpers")]
pub use hoverlay_core::fixture::{FixturePage, FixtureParagraph};

// --- Runtime re-exports ----------------------------------------------------

pub use hoverlay_runtime::observable::{Observable, Subscription};
pub use hoverlay_runtime::tracker::HoverTracker;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        HoverAnchor, HoverTracker, LineHeight, Observable, Page, Paragraph, PointerMove,
        ScrollOffset, Subscription, TextStyle, ViewportPoint, ViewportRect,
    };

    pub use crate::{core, runtime};
}

pub use hoverlay_core as core;
pub use hoverlay_runtime as runtime;
