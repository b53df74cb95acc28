#![forbid(unsafe_code)]

//! Paragraph measurement and the hover scan.
//!
//! A [`Paragraph`] is a handle to one tracked element. The trait exposes
//! the two reads the pipeline needs, both taken fresh on every call:
//! layout can change between any two pointer events, so nothing here is
//! cached.
//!
//! [`anchor_under`] is the whole hover decision as a pure function: scan
//! the list, first hit wins, measure, done. The runtime tracker is only
//! event plumbing around it.

use crate::geometry::{PageRect, ScrollOffset, ViewportPoint, ViewportRect};
use crate::line_metrics::TextStyle;

/// A tracked element, measurable at any time.
///
/// Implementations are cheap handles (the runtime clones them into hover
/// results and listener closures). Equality is identity of the underlying
/// element, not of its current geometry.
pub trait Paragraph {
    /// Current viewport-space bounding box.
    ///
    /// A detached element reports a zero box at the viewport origin.
    fn viewport_bounds(&self) -> ViewportRect;

    /// Computed style inputs for line-height estimation.
    fn text_style(&self) -> TextStyle;

    /// Page-absolute bounding box under the given scroll offset.
    fn page_bounds(&self, scroll: ScrollOffset) -> PageRect {
        self.viewport_bounds().to_page(scroll)
    }
}

/// Where a hover control should position itself, as published by the
/// tracker while the pointer rests on a paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverAnchor<P> {
    /// The matched paragraph.
    pub paragraph: P,
    /// Page-absolute top edge of the paragraph.
    pub top: f64,
    /// Page-absolute left edge of the paragraph.
    pub left: f64,
    /// Estimated pixel height of the paragraph's first text line.
    pub first_line_height: f64,
}

/// Scan `paragraphs` in list order and build the anchor for the first one
/// whose viewport box contains `point`.
///
/// Every call re-measures every paragraph it visits; with overlapping
/// boxes the first in list order wins. An empty list, or a point over no
/// paragraph, yields `None`.
#[must_use]
pub fn anchor_under<P>(
    paragraphs: &[P],
    point: ViewportPoint,
    scroll: ScrollOffset,
) -> Option<HoverAnchor<P>>
where
    P: Paragraph + Clone,
{
    let hit = paragraphs
        .iter()
        .find(|paragraph| paragraph.viewport_bounds().contains(point))?;
    let bounds = hit.page_bounds(scroll);
    Some(HoverAnchor {
        paragraph: hit.clone(),
        top: bounds.top(),
        left: bounds.left(),
        first_line_height: hit.text_style().first_line_height(),
    })
}
