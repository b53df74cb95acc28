#![forbid(unsafe_code)]

//! Hover tracking over a live page.
//!
//! [`HoverTracker`] owns the single window-level pointer-move listener and
//! publishes the current [`HoverAnchor`] (or `None`) through an
//! [`Observable`]. It is the only stateful piece of the pipeline; the
//! decision itself is [`anchor_under`], a pure function.
//!
//! # Design
//!
//! - **One listener slot.** A running tracker has exactly one listener
//!   attached to its page. Replacing the paragraph list detaches the old
//!   listener and attaches one new listener; a brief gap between the two
//!   is fine, overlap never happens.
//! - **Recompute per event.** Every pointer move re-scans the current
//!   list against fresh geometry and fresh scroll state. There is no
//!   caching and no short-circuit for an unmoved pointer; equal results
//!   are absorbed by the observable's equality dedup instead.
//! - **Teardown.** [`HoverTracker::stop`] (and drop) detaches the
//!   listener and publishes `None`. Events delivered by the page after
//!   that reach no listener and change nothing.

use std::rc::Rc;

use hoverlay_core::{HoverAnchor, ListenerId, Page, Paragraph, PointerMove, anchor_under};
use tracing::debug;

use crate::observable::{Observable, Subscription};

/// Tracks which paragraph is under the pointer on one page.
///
/// `G` is the host page, `P` the paragraph handle. Paragraph handles are
/// cloned into published anchors, so they should be cheap to clone and
/// compare by element identity.
pub struct HoverTracker<G, P>
where
    G: Page + 'static,
    P: Paragraph + Clone + PartialEq + 'static,
{
    page: Rc<G>,
    paragraphs: Rc<Vec<P>>,
    anchor: Observable<Option<HoverAnchor<P>>>,
    listener: Option<ListenerId>,
}

impl<G, P> HoverTracker<G, P>
where
    G: Page + 'static,
    P: Paragraph + Clone + PartialEq + 'static,
{
    /// A stopped tracker on `page` with an empty paragraph list and an
    /// anchor of `None`.
    #[must_use]
    pub fn new(page: Rc<G>) -> Self {
        Self {
            page,
            paragraphs: Rc::new(Vec::new()),
            anchor: Observable::new(None),
            listener: None,
        }
    }

    /// Begin tracking `paragraphs`, attaching the pointer listener.
    ///
    /// On an already running tracker this replaces the list and
    /// re-subscribes, like [`HoverTracker::set_paragraphs`].
    pub fn start(&mut self, paragraphs: Vec<P>) {
        self.paragraphs = Rc::new(paragraphs);
        self.resubscribe();
    }

    /// Replace the tracked paragraph list.
    ///
    /// A running tracker re-subscribes exactly once: the old listener is
    /// detached, one new listener is attached. The new list is not
    /// compared against the old; replacing it with identical content still
    /// re-subscribes. On a stopped tracker the list is stored for the next
    /// [`HoverTracker::start`].
    pub fn set_paragraphs(&mut self, paragraphs: Vec<P>) {
        self.paragraphs = Rc::new(paragraphs);
        if self.listener.is_some() {
            self.resubscribe();
        }
    }

    /// Detach the listener and publish `None`.
    ///
    /// Idempotent. Pointer events dispatched after this have no effect on
    /// the published value.
    pub fn stop(&mut self) {
        if self.listener.is_some() {
            self.detach();
            self.anchor.set(None);
        }
    }

    /// Whether the listener is currently attached.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.listener.is_some()
    }

    /// Snapshot of the current value: the anchor under the pointer, or
    /// `None`.
    #[must_use]
    pub fn anchor(&self) -> Option<HoverAnchor<P>> {
        self.anchor.get()
    }

    /// Subscribe to anchor changes. Delivery follows [`Observable`]
    /// semantics: every real transition, in event order, no duplicates.
    pub fn subscribe(
        &self,
        callback: impl Fn(&Option<HoverAnchor<P>>) + 'static,
    ) -> Subscription {
        self.anchor.subscribe(callback)
    }

    /// A shared handle to the underlying observable, for callers that
    /// want versioning or `with` access.
    ///
    /// The handle can also write, but the tracker treats the observable
    /// as its output: a value set from outside is not tracked state and
    /// lasts only until the next pointer event recomputes the anchor.
    #[must_use]
    pub fn observable(&self) -> Observable<Option<HoverAnchor<P>>> {
        self.anchor.clone()
    }

    /// Drop the old listener, if any, and attach a fresh one over the
    /// current paragraph list.
    fn resubscribe(&mut self) {
        self.detach();

        let page = Rc::downgrade(&self.page);
        let paragraphs = Rc::clone(&self.paragraphs);
        let anchor = self.anchor.clone();
        let listener: Rc<dyn Fn(PointerMove)> = Rc::new(move |event: PointerMove| {
            // The page owns this closure; if the handle is gone the event
            // is from a page already torn down.
            let Some(page) = page.upgrade() else {
                return;
            };
            let scroll = page.scroll_offset();
            anchor.set(anchor_under(paragraphs.as_slice(), event.position, scroll));
        });

        let id = self.page.attach_pointer_listener(listener);
        self.listener = Some(id);
        debug!(
            listener_id = id,
            paragraphs = self.paragraphs.len(),
            "attached pointer listener"
        );
    }

    fn detach(&mut self) {
        if let Some(id) = self.listener.take() {
            self.page.detach_pointer_listener(id);
            debug!(listener_id = id, "detached pointer listener");
        }
    }
}

impl<G, P> Drop for HoverTracker<G, P>
where
    G: Page + 'static,
    P: Paragraph + Clone + PartialEq + 'static,
{
    fn drop(&mut self) {
        self.stop();
    }
}
