//! Color preview screen
//!
//! Shows the pending work and rest colors as swatches. Tapping a swatch
//! opens the grid for that color.

use crate::config::{Color, LayoutConfig};
use crate::geometry::{Point, Rect, Size};
use crate::regions::{Control, RegionSet};
use crate::state::ColorEdit;
use crate::traits::{DrawSurface, SurfaceError, SurfaceExt};

const LABEL_SCALE: u8 = 2;
const BUTTON_SCALE: u8 = 3;
/// Swatch offset from the screen center
const SWATCH_OFFSET: i32 = 60;

/// Preview geometry for one orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PreviewLayout {
    pub work_swatch: Rect,
    pub rest_swatch: Rect,
    /// Label centers
    pub work_label: Point,
    pub rest_label: Point,
    pub cancel: Rect,
    pub confirm: Rect,
}

impl PreviewLayout {
    pub fn compute(size: Size, landscape: bool, cfg: &LayoutConfig) -> Self {
        let c = size.center();
        let (sw, sh) = (cfg.swatch_width, cfg.swatch_height);
        let button = |center: Point| {
            Rect::centered(center, cfg.preview_button_size, cfg.preview_button_size)
                .inflate(cfg.button_padding)
        };

        if landscape {
            // Side by side, buttons stacked on the right
            let (work, rest) = (
                Point::new(c.x - SWATCH_OFFSET, c.y),
                Point::new(c.x + SWATCH_OFFSET, c.y),
            );
            let x = size.width - 30;
            Self {
                work_swatch: Rect::centered(work, sw, sh),
                rest_swatch: Rect::centered(rest, sw, sh),
                work_label: Point::new(work.x, c.y - 40),
                rest_label: Point::new(rest.x, c.y - 40),
                confirm: button(Point::new(x, c.y - 30)),
                cancel: button(Point::new(x, c.y + 30)),
            }
        } else {
            // Stacked, buttons along the bottom
            let (work, rest) = (
                Point::new(c.x, c.y - SWATCH_OFFSET),
                Point::new(c.x, c.y + SWATCH_OFFSET),
            );
            let y = size.height - 40;
            Self {
                work_swatch: Rect::centered(work, sw, sh),
                rest_swatch: Rect::centered(rest, sw, sh),
                work_label: Point::new(c.x, work.y - 30),
                rest_label: Point::new(c.x, rest.y - 30),
                cancel: button(Point::new(size.width / 4, y)),
                confirm: button(Point::new(size.width * 3 / 4, y)),
            }
        }
    }
}

/// Draw the preview for an in-progress edit
pub fn draw_preview<S: DrawSurface>(
    s: &mut S,
    cfg: &LayoutConfig,
    edit: &ColorEdit,
) -> Result<RegionSet, SurfaceError> {
    let l = PreviewLayout::compute(s.size(), s.orientation().is_landscape(), cfg);
    let work = edit.preview.work;
    let rest = edit.rest_swatch();

    s.fill_screen(Color::BLACK)?;
    s.draw_text_centered("WORK", l.work_label, LABEL_SCALE, work)?;
    draw_swatch(s, l.work_swatch, work)?;
    s.draw_text_centered("REST", l.rest_label, LABEL_SCALE, rest)?;
    draw_swatch(s, l.rest_swatch, rest)?;

    draw_button(s, l.confirm, "V")?;
    draw_button(s, l.cancel, "X")?;

    let mut regions = RegionSet::new();
    regions.set(Control::PreviewWork, l.work_swatch);
    regions.set(Control::PreviewRest, l.rest_swatch);
    regions.set(Control::PreviewCancel, l.cancel);
    regions.set(Control::PreviewConfirm, l.confirm);
    Ok(regions)
}

fn draw_swatch<S: DrawSurface>(s: &mut S, rect: Rect, color: Color) -> Result<(), SurfaceError> {
    s.fill_rect(rect, color)?;
    s.draw_rect(rect, Color::WHITE)
}

fn draw_button<S: DrawSurface>(s: &mut S, rect: Rect, label: &str) -> Result<(), SurfaceError> {
    s.draw_rect(rect, Color::WHITE)?;
    s.draw_text_centered(label, rect.center(), BUTTON_SCALE, Color::WHITE)?;
    Ok(())
}
