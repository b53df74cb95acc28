//! Property-based invariant tests for hover geometry and the scan.
//!
//! These tests verify that the measurement layer implements:
//!
//! 1. Containment agrees with the four edge inequalities, inclusively.
//! 2. Page translation shifts the origin by exactly the scroll offset and
//!    preserves size.
//! 3. `left()`/`top()` aliases never diverge from `x`/`y`.
//! 4. The scan returns the first listed hit, deterministically.
//! 5. Scroll affects anchor position but never which paragraph is hit.
//! 6. First-line estimation is total: pixel values pass through, every
//!    relative shape resolves at the default factor.

use hoverlay_core::{
    LineHeight, NORMAL_LINE_HEIGHT_FACTOR, Paragraph, ScrollOffset, TextStyle, ViewportPoint,
    ViewportRect, anchor_under,
};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
struct Block {
    index: usize,
    bounds: ViewportRect,
}

impl Paragraph for Block {
    fn viewport_bounds(&self) -> ViewportRect {
        self.bounds
    }

    fn text_style(&self) -> TextStyle {
        TextStyle::new(LineHeight::Px(20.0), 16.0)
    }
}

fn rect() -> impl Strategy<Value = ViewportRect> {
    (
        -500.0..500.0f64,
        -500.0..500.0f64,
        0.0..300.0f64,
        0.0..300.0f64,
    )
        .prop_map(|(x, y, width, height)| ViewportRect::new(x, y, width, height))
}

fn point() -> impl Strategy<Value = ViewportPoint> {
    (-800.0..800.0f64, -800.0..800.0f64).prop_map(|(x, y)| ViewportPoint::new(x, y))
}

fn scroll() -> impl Strategy<Value = ScrollOffset> {
    (0.0..5000.0f64, 0.0..5000.0f64).prop_map(|(x, y)| ScrollOffset::new(x, y))
}

fn blocks(count: usize) -> impl Strategy<Value = Vec<Block>> {
    proptest::collection::vec(rect(), 0..count).prop_map(|rects| {
        rects
            .into_iter()
            .enumerate()
            .map(|(index, bounds)| Block { index, bounds })
            .collect()
    })
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Containment matches the inclusive edge inequalities
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn contains_matches_edge_inequalities(r in rect(), p in point()) {
        let expected = p.x >= r.left()
            && p.x <= r.right()
            && p.y >= r.top()
            && p.y <= r.bottom();
        prop_assert_eq!(r.contains(p), expected);
    }

    #[test]
    fn all_four_corners_are_inside(r in rect()) {
        prop_assert!(r.contains(ViewportPoint::new(r.left(), r.top())));
        prop_assert!(r.contains(ViewportPoint::new(r.right(), r.bottom())));
        prop_assert!(r.contains(ViewportPoint::new(r.left(), r.bottom())));
        prop_assert!(r.contains(ViewportPoint::new(r.right(), r.top())));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Page translation is exactly the scroll offset
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn to_page_shifts_origin_and_preserves_size(r in rect(), s in scroll()) {
        let page = r.to_page(s);
        prop_assert_eq!(page.x, r.x + s.x);
        prop_assert_eq!(page.y, r.y + s.y);
        prop_assert_eq!(page.width, r.width);
        prop_assert_eq!(page.height, r.height);
    }

    #[test]
    fn page_aliases_never_diverge(r in rect(), s in scroll()) {
        let page = r.to_page(s);
        prop_assert_eq!(page.left(), page.x);
        prop_assert_eq!(page.top(), page.y);
        prop_assert_eq!(r.left(), r.x);
        prop_assert_eq!(r.top(), r.y);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. The scan is first-match-wins and deterministic
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn scan_returns_the_first_listed_hit(list in blocks(12), p in point(), s in scroll()) {
        let expected = list
            .iter()
            .position(|block| block.viewport_bounds().contains(p));
        let anchor = anchor_under(&list, p, s);
        prop_assert_eq!(anchor.as_ref().map(|a| a.paragraph.index), expected);
    }

    #[test]
    fn scan_is_deterministic(list in blocks(12), p in point(), s in scroll()) {
        prop_assert_eq!(anchor_under(&list, p, s), anchor_under(&list, p, s));
    }

    #[test]
    fn anchor_edges_come_from_the_hit_paragraph(list in blocks(12), p in point(), s in scroll()) {
        if let Some(anchor) = anchor_under(&list, p, s) {
            let bounds = anchor.paragraph.page_bounds(s);
            prop_assert_eq!(anchor.top, bounds.top());
            prop_assert_eq!(anchor.left, bounds.left());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Scroll moves anchors, never hits
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn scroll_does_not_change_which_paragraph_is_hit(
        list in blocks(12),
        p in point(),
        s1 in scroll(),
        s2 in scroll(),
    ) {
        let first = anchor_under(&list, p, s1).map(|a| a.paragraph.index);
        let second = anchor_under(&list, p, s2).map(|a| a.paragraph.index);
        prop_assert_eq!(first, second);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. First-line estimation is total
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn pixel_line_heights_pass_through(px in 0.0..200.0f64, font in 1.0..100.0f64) {
        let style = TextStyle::new(LineHeight::Px(px), font);
        prop_assert_eq!(style.first_line_height(), px);
    }

    #[test]
    fn relative_line_heights_scale_font_size(font in 1.0..100.0f64) {
        let style = TextStyle::new(LineHeight::Relative, font);
        prop_assert_eq!(style.first_line_height(), font * NORMAL_LINE_HEIGHT_FACTOR);
    }

    #[test]
    fn lossy_parse_never_panics(input in "\\PC*") {
        let _ = LineHeight::from_css_lossy(&input);
    }

    #[test]
    fn strict_parse_accepts_what_it_claims(px in 0.0..500.0f64) {
        let rendered = format!("{px}px");
        prop_assert_eq!(LineHeight::from_css(&rendered), Ok(LineHeight::Px(px)));
    }
}
