//! Palette grid screen
//!
//! Fixed square cells, three columns in portrait (bottom row reserved for
//! the buttons) and five by four in landscape (buttons on the right).

use crate::config::{palette_color, Color, LayoutConfig, PALETTE_SIZE};
use crate::geometry::{Point, Rect, Size};
use crate::regions::{Control, RegionSet, Shape};
use crate::traits::{DrawSurface, SurfaceError, SurfaceExt};

/// Button label scale
const BUTTON_SCALE: u8 = 5;
/// Label nudge inside the button
const LABEL_OFFSET: Point = Point::new(2, 2);
/// Gap between the two buttons
const BUTTON_GAP: i32 = 20;
/// Border layers around the highlighted cell on a full draw
const HIGHLIGHT_LAYERS: i32 = 3;
/// Border layers when a single cell is repainted
const RESELECT_LAYERS: i32 = 4;

/// Grid geometry for one orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GridLayout {
    /// Left edge of the first column
    pub start_x: i32,
    pub cols: i32,
    /// Rows holding colors
    pub color_rows: i32,
    pub cell: i32,
    pub cancel: Rect,
    pub confirm: Rect,
    pub landscape: bool,
}

impl GridLayout {
    /// Compute the layout; `label` is the size of the larger button label
    pub fn compute(size: Size, landscape: bool, cfg: &LayoutConfig, label: Size) -> Self {
        let cell = cfg.grid_cell;
        let (cols, color_rows) = if landscape {
            (5, 4)
        } else {
            (3, size.height / cell - 1)
        };
        let grid_w = cols * cell;
        let start_x = if landscape {
            // Shifted left to leave room for the buttons
            (size.width - grid_w) / 2 - 10
        } else {
            (size.width - grid_w) / 2
        };

        let pad = cfg.button_padding;
        let (bw, bh) = (label.width + pad * 2, label.height + pad * 2);

        let (cancel, confirm) = if landscape {
            let x = size.width - 23;
            let cy = size.height / 2;
            let confirm_c = Point::new(x, cy - BUTTON_GAP / 2 - bh / 2);
            let cancel_c = Point::new(x, cy + BUTTON_GAP / 2 + bh / 2);
            (Rect::centered(cancel_c, bw, bh), Rect::centered(confirm_c, bw, bh))
        } else {
            let cy = color_rows * cell + cell / 2 + 15;
            let left = start_x + (grid_w - (bw * 2 + BUTTON_GAP)) / 2;
            (
                Rect::from_origin(left, cy - bh / 2, bw, bh),
                Rect::from_origin(left + bw + BUTTON_GAP, cy - bh / 2, bw, bh),
            )
        };

        Self {
            start_x,
            cols,
            color_rows,
            cell,
            cancel,
            confirm,
            landscape,
        }
    }

    /// Bottom edge of the color rows
    pub fn last_row_y(&self) -> i32 {
        self.color_rows * self.cell
    }

    /// Number of palette entries that fit
    pub fn cells_shown(&self) -> usize {
        ((self.cols * self.color_rows) as usize).min(PALETTE_SIZE)
    }

    /// Area covered by the color rows
    pub fn cell_area(&self) -> Rect {
        Rect::from_origin(self.start_x, 0, self.cols * self.cell, self.last_row_y())
    }

    pub fn cell_rect(&self, index: u8) -> Option<Rect> {
        let i = index as i32;
        if index as usize >= self.cells_shown() {
            return None;
        }
        let (row, col) = (i / self.cols, i % self.cols);
        Some(Rect::from_origin(
            self.start_x + col * self.cell,
            row * self.cell,
            self.cell,
            self.cell,
        ))
    }

    /// Palette index under `p`
    pub fn cell_at(&self, p: Point) -> Option<u8> {
        if p.x < self.start_x || p.y < 0 || p.y >= self.last_row_y() {
            return None;
        }
        let col = (p.x - self.start_x) / self.cell;
        let row = p.y / self.cell;
        if col >= self.cols || row >= self.color_rows {
            return None;
        }
        let index = (row * self.cols + col) as usize;
        (index < self.cells_shown()).then_some(index as u8)
    }
}

/// Compute the grid layout for the surface's current orientation
pub fn layout_for<S: DrawSurface>(s: &S, cfg: &LayoutConfig) -> GridLayout {
    let x = s.text_size("X", BUTTON_SCALE);
    let v = s.text_size("V", BUTTON_SCALE);
    let label = Size::new(x.width.max(v.width), x.height.max(v.height));
    GridLayout::compute(s.size(), s.orientation().is_landscape(), cfg, label)
}

/// Draw the whole grid with `highlight` marked
pub fn draw_grid<S: DrawSurface>(
    s: &mut S,
    cfg: &LayoutConfig,
    highlight: Option<u8>,
) -> Result<RegionSet, SurfaceError> {
    let g = layout_for(s, cfg);
    s.fill_screen(Color::BLACK)?;

    for index in 0..g.cells_shown() as u8 {
        let (Some(rect), Some(color)) = (g.cell_rect(index), palette_color(index)) else {
            continue;
        };
        s.fill_rect(rect, color)?;
        if highlight == Some(index) {
            s.draw_frame(rect, HIGHLIGHT_LAYERS, Color::WHITE)?;
        }
    }

    // Separators on top of the cells
    let last_y = g.last_row_y();
    let right = g.start_x + g.cols * g.cell - 1;
    for col in 1..g.cols {
        let x = g.start_x + col * g.cell;
        s.draw_line(Point::new(x, 0), Point::new(x, last_y - 1), Color::BLACK)?;
    }
    for row in 1..g.color_rows {
        let y = row * g.cell;
        s.draw_line(Point::new(g.start_x, y), Point::new(right, y), Color::BLACK)?;
    }
    s.draw_line(Point::new(g.start_x, last_y), Point::new(right, last_y), Color::BLACK)?;

    draw_button(s, g.confirm, "V")?;
    draw_button(s, g.cancel, "X")?;

    let mut regions = RegionSet::new();
    regions.set_shaped(Control::GridCells, g.cell_area(), Shape::Exact);
    regions.set(Control::GridCancel, g.cancel);
    regions.set(Control::GridConfirm, g.confirm);
    Ok(regions)
}

/// Repaint one cell with or without the highlight border
///
/// Out-of-range indices are ignored.
pub fn redraw_cell<S: DrawSurface>(
    s: &mut S,
    cfg: &LayoutConfig,
    index: u8,
    selected: bool,
) -> Result<(), SurfaceError> {
    let g = layout_for(s, cfg);
    let (Some(rect), Some(color)) = (g.cell_rect(index), palette_color(index)) else {
        return Ok(());
    };
    s.fill_rect(rect, color)?;

    let (row, col) = (index as i32 / g.cols, index as i32 % g.cols);
    let (x0, y0) = (rect.left, rect.top);
    let (x1, y1) = (rect.right, rect.bottom);
    if col > 0 {
        s.draw_line(Point::new(x0, y0), Point::new(x0, y1 - 1), Color::BLACK)?;
    }
    if col < g.cols - 1 {
        s.draw_line(Point::new(x1, y0), Point::new(x1, y1 - 1), Color::BLACK)?;
    }
    if row > 0 {
        s.draw_line(Point::new(x0, y0), Point::new(x1 - 1, y0), Color::BLACK)?;
    }
    if g.landscape || row < g.color_rows - 1 {
        s.draw_line(Point::new(x0, y1), Point::new(x1 - 1, y1), Color::BLACK)?;
    }

    if selected {
        s.draw_frame(rect, RESELECT_LAYERS, Color::WHITE)?;
    }
    Ok(())
}

fn draw_button<S: DrawSurface>(s: &mut S, rect: Rect, label: &str) -> Result<(), SurfaceError> {
    s.draw_rect(rect, Color::GOLD)?;
    let c = rect.center();
    s.draw_text_centered(
        label,
        Point::new(c.x + LABEL_OFFSET.x, c.y + LABEL_OFFSET.y),
        BUTTON_SCALE,
        Color::GOLD,
    )?;
    Ok(())
}
