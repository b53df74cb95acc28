#![forbid(unsafe_code)]

//! Runtime: reactive hover tracking.
//!
//! # Role in hoverlay
//! `hoverlay-runtime` turns the pure measurement layer of `hoverlay-core`
//! into a live value. It subscribes to a page's pointer-move feed and
//! keeps one observable up to date: the anchor of the paragraph currently
//! under the pointer, or `None`.
//!
//! # Primary responsibilities
//! - **Observable**: single-threaded value container with equality dedup,
//!   version tracking, and RAII subscriptions.
//! - **HoverTracker**: listener lifecycle (attach, atomic replace,
//!   teardown) and the per-event recompute.
//!
//! # Concurrency
//! Everything is single-threaded and synchronous. Events are processed to
//! completion in arrival order; observers always see the state of the most
//! recently processed event, never a partial update. Nothing here is
//! `Send` or `Sync`.

pub mod observable;
pub mod tracker;

pub use observable::{Observable, Subscription};
pub use tracker::HoverTracker;
