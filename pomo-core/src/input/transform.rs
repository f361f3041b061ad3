//! Touch coordinate transform
//!
//! The touch controller always reports in the native portrait axes of the
//! panel, mirrored horizontally relative to the display. Every sample is
//! mapped into the current display orientation before hit-testing.

use crate::geometry::{Orientation, Point, Size, NATIVE_SIZE};

/// Map a native touch point into display coordinates
///
/// `size` is the display size in `orientation` (already rotated).
pub fn native_to_display(p: Point, orientation: Orientation, size: Size) -> Point {
    let (w, h) = (size.width, size.height);
    match orientation {
        Orientation::Portrait => Point::new(w - 1 - p.x, p.y),
        Orientation::Landscape => Point::new(p.y, p.x),
        Orientation::PortraitFlipped => Point::new(p.x, h - 1 - p.y),
        Orientation::LandscapeFlipped => Point::new(w - 1 - p.y, h - 1 - p.x),
    }
}

/// Inverse of [`native_to_display`]
pub fn display_to_native(p: Point, orientation: Orientation, size: Size) -> Point {
    let (w, h) = (size.width, size.height);
    match orientation {
        Orientation::Portrait => Point::new(w - 1 - p.x, p.y),
        Orientation::Landscape => Point::new(p.y, p.x),
        Orientation::PortraitFlipped => Point::new(p.x, h - 1 - p.y),
        Orientation::LandscapeFlipped => Point::new(h - 1 - p.y, w - 1 - p.x),
    }
}

/// Transform bound to one orientation
///
/// Owned by the application next to the drawing surface; both are switched
/// in the same call so touch and display never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchTransform {
    orientation: Orientation,
    native: Size,
}

impl Default for TouchTransform {
    fn default() -> Self {
        Self::new(Orientation::Portrait)
    }
}

impl TouchTransform {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            native: NATIVE_SIZE,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Map a native point; points outside the panel give `None`
    pub fn apply(&self, p: Point) -> Option<Point> {
        if p.x < 0 || p.y < 0 || p.x >= self.native.width || p.y >= self.native.height {
            return None;
        }
        Some(native_to_display(p, self.orientation, self.orientation.apply(self.native)))
    }
}
