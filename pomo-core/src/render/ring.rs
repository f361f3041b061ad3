//! Incremental progress ring
//!
//! The ring is split into equal angular segments starting at twelve
//! o'clock and running clockwise. Elapsed segments are erased by painting
//! the background over an annular wedge that spans every ring layer. Only
//! segments between the last erased count and the current one are
//! touched, so repeated calls with the same progress draw nothing.

use libm::{cosf, roundf, sinf};

use crate::config::Color;
use crate::geometry::Point;
use crate::state::Progress;
use crate::traits::{DrawSurface, SurfaceError, SurfaceExt};

/// Segments erased per wedge
///
/// Eight half-degree segments keep the straight wedge edge within a tenth
/// of a pixel of the true arc at the ring radius.
const SEGMENTS_PER_WEDGE: u16 = 8;

const TAU: f32 = 2.0 * core::f32::consts::PI;

/// Outcome of one ring update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RingUpdate {
    /// Nothing drawn
    Unchanged,
    /// Segments `from..to` erased
    Erased { from: u16, to: u16 },
    /// Full ring drawn, then `0..erased` erased
    Redrawn { erased: u16 },
}

/// Ring geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RingGeometry {
    pub center: Point,
    /// Outermost layer radius
    pub radius: i32,
    /// Number of 1px layers drawn inward from `radius`
    pub thickness: i32,
    pub segments: u16,
}

/// Ring renderer with its own shadow state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RingRenderer {
    /// Full ring currently on screen
    drawn: bool,
    /// Segments already erased
    erased: u16,
    color: Color,
}

impl RingRenderer {
    pub const fn new() -> Self {
        Self {
            drawn: false,
            erased: 0,
            color: Color::BLACK,
        }
    }

    /// Make the next update draw the full ring
    pub fn force_redraw(&mut self) {
        self.drawn = false;
        self.erased = 0;
    }

    /// Segments erased so far
    pub fn erased(&self) -> u16 {
        self.erased
    }

    /// Bring the ring on screen to `progress`
    ///
    /// The full ring is redrawn on the first call, after `force_redraw`,
    /// when the color changes, or when progress went backwards.
    pub fn update<S: DrawSurface>(
        &mut self,
        surface: &mut S,
        ring: &RingGeometry,
        progress: Progress,
        color: Color,
    ) -> Result<RingUpdate, SurfaceError> {
        let target = progress.segments(ring.segments);
        let full = !self.drawn || color != self.color || target < self.erased;

        let result = self.draw(surface, ring, target, color, full);
        if result.is_err() {
            self.force_redraw();
        }
        result
    }

    fn draw<S: DrawSurface>(
        &mut self,
        surface: &mut S,
        ring: &RingGeometry,
        target: u16,
        color: Color,
        full: bool,
    ) -> Result<RingUpdate, SurfaceError> {
        if full {
            self.drawn = false;
            surface.draw_ring(ring.center, ring.radius, ring.thickness, color)?;
            self.drawn = true;
            self.color = color;
            self.erased = 0;
            erase_segments(surface, ring, 0, target)?;
            self.erased = target;
            return Ok(RingUpdate::Redrawn { erased: target });
        }

        if target == self.erased {
            return Ok(RingUpdate::Unchanged);
        }

        let from = self.erased;
        erase_segments(surface, ring, from, target)?;
        self.erased = target;
        Ok(RingUpdate::Erased { from, to: target })
    }
}

/// Paint the background over segments `from..to`
fn erase_segments<S: DrawSurface>(
    surface: &mut S,
    ring: &RingGeometry,
    from: u16,
    to: u16,
) -> Result<(), SurfaceError> {
    let seg_angle = TAU / ring.segments as f32;
    let outer = (ring.radius + 1) as f32;
    let inner = (ring.radius - ring.thickness) as f32;

    let mut start = from;
    while start < to {
        let end = (start + SEGMENTS_PER_WEDGE).min(to);

        // Overlap the previous wedge by half a segment so no seam survives
        let mut a0 = start as f32 * seg_angle - TAU / 4.0;
        if start > 0 {
            a0 -= seg_angle / 2.0;
        }
        let a1 = end as f32 * seg_angle - TAU / 4.0;

        let oa = polar(ring.center, outer, a0);
        let ob = polar(ring.center, outer, a1);
        let ia = polar(ring.center, inner, a0);
        let ib = polar(ring.center, inner, a1);

        surface.fill_triangle(oa, ob, ib, Color::BLACK)?;
        surface.fill_triangle(oa, ib, ia, Color::BLACK)?;

        start = end;
    }
    Ok(())
}

fn polar(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(
        center.x + roundf(radius * cosf(angle)) as i32,
        center.y + roundf(radius * sinf(angle)) as i32,
    )
}
