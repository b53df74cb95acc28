//! Drives the hover tracker over a scripted fixture page and prints each
//! published anchor.
//!
//! Run with: `cargo run -p hoverlay --example hover_player --features test-helpers`

use std::rc::Rc;

use hoverlay::{
    FixturePage, FixtureParagraph, HoverTracker, LineHeight, PointerMove, ScrollOffset, TextStyle,
    ViewportRect,
};

fn main() {
    let page = Rc::new(FixturePage::new());

    let intro = FixtureParagraph::new(ViewportRect::new(40.0, 120.0, 560.0, 96.0))
        .with_style(TextStyle::new(LineHeight::Px(28.0), 18.0));
    let body = FixtureParagraph::new(ViewportRect::new(40.0, 240.0, 560.0, 160.0))
        .with_style(TextStyle::new(LineHeight::Relative, 16.0));
    let footnote = FixtureParagraph::new(ViewportRect::new(40.0, 420.0, 560.0, 40.0))
        .with_style(TextStyle::new(LineHeight::Relative, 13.0));

    let mut tracker = HoverTracker::new(Rc::clone(&page));
    let _sub = tracker.subscribe(|anchor| match anchor {
        Some(a) => println!(
            "hover  top {:>6.1}  left {:>5.1}  first line {:>5.1}px",
            a.top, a.left, a.first_line_height
        ),
        None => println!("hover  none"),
    });
    tracker.start(vec![intro, body, footnote]);

    // Sweep the pointer across the paragraphs and the gaps between them.
    let path = [
        (60.0, 130.0),
        (300.0, 180.0),
        (300.0, 230.0),
        (300.0, 260.0),
        (300.0, 430.0),
        (10.0, 10.0),
    ];
    for (x, y) in path {
        page.dispatch_pointer_move(PointerMove::new(x, y));
    }

    // Scrolling moves anchors into page coordinates on the next event.
    page.set_scroll(ScrollOffset::new(0.0, 250.0));
    page.dispatch_pointer_move(PointerMove::new(300.0, 130.0));

    tracker.stop();
}
