//! Property-based invariant tests for the tracker's listener lifecycle.
//!
//! These tests drive random operation sequences against a fixture page and
//! verify, after every step:
//!
//! 1. A running tracker has exactly one attached listener; a stopped one
//!    has zero. Never two.
//! 2. Attach and detach totals always balance the number of active
//!    listeners.
//! 3. After any dispatch, the published anchor equals the pure scan of the
//!    current list at the current scroll.
//! 4. A stopped tracker publishes `None` no matter what is dispatched.

use std::rc::Rc;

use hoverlay_core::{
    FixturePage, FixtureParagraph, Page, PointerMove, ScrollOffset, ViewportPoint, ViewportRect,
    anchor_under,
};
use hoverlay_runtime::HoverTracker;
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

type RectSpec = (f64, f64, f64, f64);

#[derive(Debug, Clone)]
enum Op {
    Start(Vec<RectSpec>),
    Replace(Vec<RectSpec>),
    Stop,
    Dispatch(f64, f64),
    Scroll(f64, f64),
}

fn rect_spec() -> impl Strategy<Value = RectSpec> {
    (0.0..200.0f64, 0.0..200.0f64, 0.0..100.0f64, 0.0..100.0f64)
}

fn specs() -> impl Strategy<Value = Vec<RectSpec>> {
    proptest::collection::vec(rect_spec(), 0..4)
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        specs().prop_map(Op::Start),
        specs().prop_map(Op::Replace),
        Just(Op::Stop),
        (0.0..300.0f64, 0.0..300.0f64).prop_map(|(x, y)| Op::Dispatch(x, y)),
        (0.0..1000.0f64, 0.0..1000.0f64).prop_map(|(x, y)| Op::Scroll(x, y)),
    ]
}

fn build(specs: &[RectSpec]) -> Vec<FixtureParagraph> {
    specs
        .iter()
        .map(|&(x, y, width, height)| {
            FixtureParagraph::new(ViewportRect::new(x, y, width, height))
        })
        .collect()
}

// ═════════════════════════════════════════════════════════════════════════
// Listener accounting and anchor consistency under random op sequences
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn lifecycle_invariants_hold_under_any_op_sequence(ops in proptest::collection::vec(op(), 1..20)) {
        let page = Rc::new(FixturePage::new());
        let mut tracker = HoverTracker::new(Rc::clone(&page));
        let mut current: Vec<FixtureParagraph> = Vec::new();
        let mut running = false;

        for op in ops {
            match op {
                Op::Start(specs) => {
                    let list = build(&specs);
                    current = list.clone();
                    tracker.start(list);
                    running = true;
                }
                Op::Replace(specs) => {
                    let list = build(&specs);
                    current = list.clone();
                    tracker.set_paragraphs(list);
                }
                Op::Stop => {
                    tracker.stop();
                    running = false;
                }
                Op::Dispatch(x, y) => {
                    page.dispatch_pointer_move(PointerMove::new(x, y));
                    if running {
                        let expected = anchor_under(
                            &current,
                            ViewportPoint::new(x, y),
                            page.scroll_offset(),
                        );
                        prop_assert_eq!(tracker.anchor(), expected);
                    } else {
                        prop_assert_eq!(tracker.anchor(), None);
                    }
                }
                Op::Scroll(x, y) => page.set_scroll(ScrollOffset::new(x, y)),
            }

            prop_assert_eq!(tracker.is_running(), running);
            prop_assert_eq!(page.active_listeners(), usize::from(running));
            prop_assert_eq!(
                page.attached_total() - page.detached_total(),
                usize::from(running)
            );
        }
    }
}
