//! Screen geometry primitives
//!
//! All coordinates are signed pixels in display space (after rotation).
//! A `Rect` spans `left..right` horizontally when drawn, but hit-testing
//! includes the right and bottom edges.

/// Native panel size in its portrait mounting
pub const NATIVE_SIZE: Size = Size::new(172, 320);

/// A point in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared distance to another point
    pub fn distance_squared(&self, other: Point) -> i32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// A width/height pair in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Center of a screen of this size
    pub const fn center(&self) -> Point {
        Point::new(self.width / 2, self.height / 2)
    }

    /// Same size with the axes swapped
    pub const fn transposed(&self) -> Self {
        Self::new(self.height, self.width)
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle from a top-left corner and a size
    pub const fn from_origin(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Rectangle of `width`×`height` centered on `center`
    ///
    /// Odd sizes lose a pixel on each side (`w/2` in each direction).
    pub const fn centered(center: Point, width: i32, height: i32) -> Self {
        Self::new(
            center.x - width / 2,
            center.y - height / 2,
            center.x + width / 2,
            center.y + height / 2,
        )
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub const fn center(&self) -> Point {
        Point::new((self.left + self.right) / 2, (self.top + self.bottom) / 2)
    }

    /// Grow the rectangle by `amount` on every side
    pub const fn inflate(&self, amount: i32) -> Self {
        Self::new(
            self.left - amount,
            self.top - amount,
            self.right + amount,
            self.bottom + amount,
        )
    }

    /// Shrink the rectangle by `amount` on every side
    pub const fn deflate(&self, amount: i32) -> Self {
        self.inflate(-amount)
    }

    /// Check if a point lies inside, edges included
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }
}

/// Display orientation
///
/// Numbered like the panel rotation register: 0 is the native portrait
/// mounting and each step turns the picture a further 90° clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Orientation {
    /// USB connector down
    #[default]
    Portrait = 0,
    /// Turned 90° clockwise
    Landscape = 1,
    /// USB connector up
    PortraitFlipped = 2,
    /// Turned 90° counter-clockwise
    LandscapeFlipped = 3,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Portrait,
        Orientation::Landscape,
        Orientation::PortraitFlipped,
        Orientation::LandscapeFlipped,
    ];

    /// Rotation index (0-3)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Orientation from a rotation index; values wrap modulo 4
    pub fn from_index(index: u8) -> Self {
        Self::ALL[(index % 4) as usize]
    }

    pub fn is_landscape(self) -> bool {
        matches!(self, Orientation::Landscape | Orientation::LandscapeFlipped)
    }

    /// Visible screen size for a panel of `native` size
    pub fn apply(self, native: Size) -> Size {
        if self.is_landscape() {
            native.transposed()
        } else {
            native
        }
    }
}
