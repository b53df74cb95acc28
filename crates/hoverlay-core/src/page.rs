#![forbid(unsafe_code)]

//! The host page boundary.
//!
//! Everything the hover pipeline needs from its surroundings passes
//! through [`Page`]: the current scroll offsets and a window-level
//! pointer-move feed. Production hosts wrap a real window; tests use the
//! in-memory fixture.
//!
//! # Design
//!
//! Listening is push-based, mirroring how pages actually deliver pointer
//! events. Page handles are shared (`Rc`), so all methods take `&self`;
//! implementations use interior mutability for their listener registry.

use std::rc::Rc;

use crate::geometry::ScrollOffset;
use crate::pointer::PointerMove;

/// Identifier for an attached pointer listener, unique within one page's
/// lifetime.
pub type ListenerId = u64;

/// A scrollable page that can report scroll state and deliver
/// window-level pointer movement.
pub trait Page {
    /// Current scroll offsets, read fresh on every call.
    fn scroll_offset(&self) -> ScrollOffset;

    /// Attach a pointer-move listener at the window level.
    ///
    /// Window level means movement anywhere in the window is delivered,
    /// including areas outside every tracked element. Leaving a paragraph
    /// is only observable because of this.
    fn attach_pointer_listener(&self, listener: Rc<dyn Fn(PointerMove)>) -> ListenerId;

    /// Detach a previously attached listener.
    ///
    /// Detaching an id that is not attached is a no-op. After this
    /// returns, the listener is never called again.
    fn detach_pointer_listener(&self, id: ListenerId);
}
