#![forbid(unsafe_code)]

//! In-memory page and paragraph fixtures.
//!
//! Gated behind the `test-helpers` feature. [`FixturePage`] implements
//! [`Page`] with settable scroll state, scripted event dispatch, and
//! lifetime counters for attach/detach, which is what subscription tests
//! assert against. [`FixtureParagraph`] is a cheap clonable handle with
//! settable bounds and style, equal to another handle only when both refer
//! to the same fixture element.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::geometry::{ScrollOffset, ViewportRect};
use crate::line_metrics::{LineHeight, TextStyle};
use crate::page::{ListenerId, Page};
use crate::paragraph::Paragraph;
use crate::pointer::PointerMove;

/// A scriptable paragraph element.
#[derive(Debug, Clone)]
pub struct FixtureParagraph {
    inner: Rc<ParagraphState>,
}

#[derive(Debug)]
struct ParagraphState {
    bounds: Cell<ViewportRect>,
    style: Cell<TextStyle>,
}

impl FixtureParagraph {
    /// A paragraph measuring `bounds`, styled `normal` over a 16px font.
    #[must_use]
    pub fn new(bounds: ViewportRect) -> Self {
        Self {
            inner: Rc::new(ParagraphState {
                bounds: Cell::new(bounds),
                style: Cell::new(TextStyle::new(LineHeight::Relative, 16.0)),
            }),
        }
    }

    #[must_use]
    pub fn with_style(self, style: TextStyle) -> Self {
        self.inner.style.set(style);
        self
    }

    /// Move or resize the element. Visible to every clone of this handle.
    pub fn set_bounds(&self, bounds: ViewportRect) {
        self.inner.bounds.set(bounds);
    }

    pub fn set_style(&self, style: TextStyle) {
        self.inner.style.set(style);
    }
}

impl Paragraph for FixtureParagraph {
    fn viewport_bounds(&self) -> ViewportRect {
        self.inner.bounds.get()
    }

    fn text_style(&self) -> TextStyle {
        self.inner.style.get()
    }
}

/// Identity equality: handles are equal iff they refer to the same
/// fixture element, regardless of current geometry.
impl PartialEq for FixtureParagraph {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// A scriptable page.
///
/// Tests drive it directly: set scroll, dispatch pointer moves, then read
/// the attach/detach counters to check subscription lifecycles.
#[derive(Default)]
pub struct FixturePage {
    scroll: Cell<ScrollOffset>,
    listeners: RefCell<Vec<(ListenerId, Rc<dyn Fn(PointerMove)>)>>,
    next_listener_id: Cell<ListenerId>,
    attached_total: Cell<usize>,
    detached_total: Cell<usize>,
}

impl FixturePage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll the page. Takes effect on the next measurement.
    pub fn set_scroll(&self, scroll: ScrollOffset) {
        self.scroll.set(scroll);
    }

    /// Deliver a pointer movement to every attached listener, in attach
    /// order.
    pub fn dispatch_pointer_move(&self, event: PointerMove) {
        // Snapshot first; a listener may attach or detach re-entrantly.
        let listeners: Vec<Rc<dyn Fn(PointerMove)>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(event);
        }
    }

    /// Listeners attached over the page's lifetime.
    #[must_use]
    pub fn attached_total(&self) -> usize {
        self.attached_total.get()
    }

    /// Listeners detached over the page's lifetime.
    #[must_use]
    pub fn detached_total(&self) -> usize {
        self.detached_total.get()
    }

    /// Listeners attached right now.
    #[must_use]
    pub fn active_listeners(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl Page for FixturePage {
    fn scroll_offset(&self) -> ScrollOffset {
        self.scroll.get()
    }

    fn attach_pointer_listener(&self, listener: Rc<dyn Fn(PointerMove)>) -> ListenerId {
        let id = self.next_listener_id.get();
        self.next_listener_id.set(id + 1);
        self.listeners.borrow_mut().push((id, listener));
        self.attached_total.set(self.attached_total.get() + 1);
        id
    }

    fn detach_pointer_listener(&self, id: ListenerId) {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        if listeners.len() < before {
            self.detached_total.set(self.detached_total.get() + 1);
        }
    }
}
