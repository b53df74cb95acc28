#![forbid(unsafe_code)]

//! Pointer events as delivered by the host page.

use crate::geometry::ViewportPoint;

/// A window-level pointer movement, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerMove {
    pub position: ViewportPoint,
}

impl PointerMove {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            position: ViewportPoint::new(x, y),
        }
    }

    #[must_use]
    pub const fn at(position: ViewportPoint) -> Self {
        Self { position }
    }
}
