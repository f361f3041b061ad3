//! Splash screen shown while stopped

use crate::config::{Color, LayoutConfig};
use crate::geometry::{Point, Rect, Size};
use crate::regions::{Control, RegionSet};
use crate::traits::{DrawSurface, SurfaceError, SurfaceExt};

use super::icons::draw_gear;

/// Monogram scale inside the ring
const MONOGRAM_SCALE: u8 = 6;

/// Splash geometry for one orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SplashLayout {
    pub center: Point,
    pub gear_center: Point,
    /// Gear touch target, padding included
    pub gear: Rect,
}

impl SplashLayout {
    pub fn compute(size: Size, landscape: bool, cfg: &LayoutConfig) -> Self {
        let center = size.center();
        // Bottom in portrait, right edge in landscape
        let gear_center = if landscape {
            Point::new(size.width - 40, size.height / 2)
        } else {
            Point::new(size.width / 2, size.height - 40)
        };
        Self {
            center,
            gear_center,
            gear: Rect::centered(gear_center, cfg.gear_size, cfg.gear_size).inflate(cfg.gear_padding),
        }
    }
}

/// Draw the splash: ring, monogram and settings gear
pub fn draw_splash<S: DrawSurface>(
    s: &mut S,
    cfg: &LayoutConfig,
    color: Color,
) -> Result<RegionSet, SurfaceError> {
    let layout = SplashLayout::compute(s.size(), s.orientation().is_landscape(), cfg);

    s.fill_screen(Color::BLACK)?;
    s.draw_ring(layout.center, cfg.ring_radius, cfg.ring_thickness, color)?;
    s.draw_text_centered("R", layout.center, MONOGRAM_SCALE, color)?;
    draw_gear(s, layout.gear_center, cfg.gear_size, color)?;

    let mut regions = RegionSet::new();
    regions.set(Control::Gear, layout.gear);
    Ok(regions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Op, RecordingSurface};

    #[test]
    fn test_gear_position() {
        let cfg = LayoutConfig::default();
        let p = SplashLayout::compute(Size::new(172, 320), false, &cfg);
        assert_eq!(p.gear_center, Point::new(86, 280));
        assert_eq!(p.gear, Rect::new(60, 254, 112, 306));

        let l = SplashLayout::compute(Size::new(320, 172), true, &cfg);
        assert_eq!(l.gear_center, Point::new(280, 86));
    }

    #[test]
    fn test_splash_registers_only_gear() {
        let mut s = RecordingSurface::portrait();
        let regions = draw_splash(&mut s, &LayoutConfig::default(), Color::GOLD).unwrap();
        assert_eq!(regions.valid_count(), 1);
        assert!(regions.is_valid(Control::Gear));
        assert_eq!(s.ops[0], Op::FillScreen(Color::BLACK));
        assert_eq!(s.texts(), ["R"]);
    }
}
