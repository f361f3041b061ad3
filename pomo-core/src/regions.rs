//! Hit-region registry
//!
//! Every screen drawing routine returns the set of regions for the
//! controls it drew. Controls not drawn by the current screen stay
//! invalid, so a stale rectangle from an earlier screen can never be hit.

use crate::geometry::{Point, Rect};

/// Named touch targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Control {
    /// Pause/resume button on the countdown screen
    StatusButton = 0,
    /// "M" mode button on the countdown screen
    ModeButton,
    /// Inside of the progress ring (toggles the time format)
    Ring,
    /// Settings gear on the splash
    Gear,
    GridCancel,
    GridConfirm,
    /// The palette cell area as a whole
    GridCells,
    PreviewWork,
    PreviewRest,
    PreviewCancel,
    PreviewConfirm,
}

/// Number of controls
pub const CONTROL_COUNT: usize = 11;

/// Order in which regions are tested
///
/// Modal controls come first, then the splash, then the countdown chrome.
/// The first valid match wins.
pub const DISPATCH_ORDER: [Control; CONTROL_COUNT] = [
    Control::GridCancel,
    Control::GridConfirm,
    Control::GridCells,
    Control::PreviewCancel,
    Control::PreviewWork,
    Control::PreviewRest,
    Control::PreviewConfirm,
    Control::Gear,
    Control::ModeButton,
    Control::Ring,
    Control::StatusButton,
];

/// How a point is matched against a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Shape {
    /// Rectangle grown by the touch padding
    #[default]
    Padded,
    /// Rectangle as drawn, no padding
    Exact,
    /// Circle inscribed in the bounds, no padding
    Circle,
}

/// A control's touch target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Region {
    pub bounds: Rect,
    pub shape: Shape,
    pub valid: bool,
}

impl Region {
    /// Check if `p` hits this region
    ///
    /// Invalid regions never match.
    pub fn hit(&self, p: Point, padding: i32) -> bool {
        if !self.valid {
            return false;
        }
        match self.shape {
            Shape::Padded => self.bounds.inflate(padding).contains(p),
            Shape::Exact => self.bounds.contains(p),
            Shape::Circle => {
                let r = self.bounds.width() / 2;
                self.bounds.center().distance_squared(p) <= r * r
            }
        }
    }
}

/// Regions of every control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegionSet {
    regions: [Region; CONTROL_COUNT],
}

impl RegionSet {
    /// A set with every region invalid
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `control` tappable at `bounds` with padding
    pub fn set(&mut self, control: Control, bounds: Rect) {
        self.set_shaped(control, bounds, Shape::Padded);
    }

    pub fn set_shaped(&mut self, control: Control, bounds: Rect, shape: Shape) {
        self.regions[control as usize] = Region {
            bounds,
            shape,
            valid: true,
        };
    }

    /// Circular region of `radius` around `center`
    pub fn set_circle(&mut self, control: Control, center: Point, radius: i32) {
        self.set_shaped(control, Rect::centered(center, radius * 2, radius * 2), Shape::Circle);
    }

    pub fn invalidate(&mut self, control: Control) {
        self.regions[control as usize].valid = false;
    }

    pub fn invalidate_all(&mut self) {
        for r in self.regions.iter_mut() {
            r.valid = false;
        }
    }

    /// Region of a control, if currently valid
    pub fn get(&self, control: Control) -> Option<&Region> {
        let r = &self.regions[control as usize];
        r.valid.then_some(r)
    }

    pub fn is_valid(&self, control: Control) -> bool {
        self.regions[control as usize].valid
    }

    /// Number of valid regions
    pub fn valid_count(&self) -> usize {
        self.regions.iter().filter(|r| r.valid).count()
    }

    /// First control hit by `p` in dispatch order
    pub fn hit(&self, p: Point, padding: i32) -> Option<Control> {
        DISPATCH_ORDER
            .iter()
            .copied()
            .find(|&c| self.regions[c as usize].hit(p, padding))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_applies_to_rects_only() {
        let mut set = RegionSet::new();
        set.set(Control::ModeButton, Rect::new(10, 10, 20, 20));
        set.set_circle(Control::Ring, Point::new(100, 100), 70);

        assert_eq!(set.hit(Point::new(34, 15), 15), Some(Control::ModeButton));
        assert_eq!(set.hit(Point::new(36, 15), 15), None);

        assert_eq!(set.hit(Point::new(170, 100), 15), Some(Control::Ring));
        assert_eq!(set.hit(Point::new(171, 100), 15), None);
    }

    #[test]
    fn test_invalid_regions_never_hit() {
        let mut set = RegionSet::new();
        set.set(Control::Gear, Rect::new(0, 0, 50, 50));
        set.invalidate(Control::Gear);
        assert_eq!(set.hit(Point::new(25, 25), 15), None);
        assert!(set.get(Control::Gear).is_none());
    }

    #[test]
    fn test_dispatch_order_prefers_modal_controls() {
        let mut set = RegionSet::new();
        set.set_shaped(Control::GridCells, Rect::new(0, 0, 100, 100), Shape::Exact);
        set.set(Control::GridCancel, Rect::new(0, 110, 30, 130));

        // Inside the cancel button's padding, which overlaps the cell area
        assert_eq!(set.hit(Point::new(10, 98), 15), Some(Control::GridCancel));
        assert_eq!(set.hit(Point::new(10, 50), 15), Some(Control::GridCells));
    }

    #[test]
    fn test_invalidate_all() {
        let mut set = RegionSet::new();
        set.set(Control::PreviewWork, Rect::new(0, 0, 10, 10));
        set.set(Control::PreviewRest, Rect::new(20, 0, 30, 10));
        assert_eq!(set.valid_count(), 2);
        set.invalidate_all();
        assert_eq!(set.valid_count(), 0);
    }

    #[test]
    fn test_dispatch_order_is_complete() {
        for (i, a) in DISPATCH_ORDER.iter().enumerate() {
            for b in &DISPATCH_ORDER[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
