//! Drawing surface trait

use crate::config::Color;
use crate::geometry::{Orientation, Point, Rect, Size};

/// Errors reported by a drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SurfaceError {
    /// Bus transfer to the panel failed
    Communication,
    /// Primitive lies entirely off screen
    OutOfBounds,
}

/// Primitive drawing operations on the panel
///
/// Coordinates are in the current orientation: `(0, 0)` is the top-left
/// corner of the picture as the user sees it. There is no frame buffer, so
/// every call goes to the panel immediately.
///
/// Rectangles cover `width()`×`height()` pixels starting at
/// `(left, top)`. Circles are centered on a pixel.
pub trait DrawSurface {
    /// Visible size in the current orientation
    fn size(&self) -> Size;

    fn orientation(&self) -> Orientation;

    /// Rotate the picture; the next draw call uses the new axes
    fn set_orientation(&mut self, orientation: Orientation);

    fn fill_screen(&mut self, color: Color) -> Result<(), SurfaceError>;

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), SurfaceError>;

    /// 1px outline just inside `rect`
    fn draw_rect(&mut self, rect: Rect, color: Color) -> Result<(), SurfaceError>;

    /// 1px circle outline
    fn draw_circle(&mut self, center: Point, radius: i32, color: Color) -> Result<(), SurfaceError>;

    fn fill_circle(&mut self, center: Point, radius: i32, color: Color) -> Result<(), SurfaceError>;

    fn draw_line(&mut self, from: Point, to: Point, color: Color) -> Result<(), SurfaceError>;

    fn draw_pixel(&mut self, at: Point, color: Color) -> Result<(), SurfaceError>;

    fn fill_triangle(&mut self, a: Point, b: Point, c: Point, color: Color) -> Result<(), SurfaceError>;

    /// Draw text with its top-left corner at `top_left`
    ///
    /// `scale` multiplies the built-in font size. Only ASCII is expected.
    fn draw_text(&mut self, text: &str, top_left: Point, scale: u8, color: Color) -> Result<(), SurfaceError>;

    /// Size `text` would occupy at `scale`
    fn text_size(&self, text: &str, scale: u8) -> Size;
}

/// Helper trait for composite shapes used by several screens
pub trait SurfaceExt: DrawSurface {
    /// Draw text centered on `center` and return its bounds
    fn draw_text_centered(
        &mut self,
        text: &str,
        center: Point,
        scale: u8,
        color: Color,
    ) -> Result<Rect, SurfaceError> {
        let size = self.text_size(text, scale);
        let bounds = Rect::from_origin(
            center.x - size.width / 2,
            center.y - size.height / 2,
            size.width,
            size.height,
        );
        self.draw_text(text, Point::new(bounds.left, bounds.top), scale, color)?;
        Ok(bounds)
    }

    /// Ring of `thickness` concentric 1px circles, outermost at `radius`
    fn draw_ring(
        &mut self,
        center: Point,
        radius: i32,
        thickness: i32,
        color: Color,
    ) -> Result<(), SurfaceError> {
        for i in 0..thickness {
            self.draw_circle(center, radius - i, color)?;
        }
        Ok(())
    }

    /// Border of `layers` nested 1px outlines growing inward from `rect`
    fn draw_frame(&mut self, rect: Rect, layers: i32, color: Color) -> Result<(), SurfaceError> {
        for i in 0..layers {
            self.draw_rect(rect.deflate(i), color)?;
        }
        Ok(())
    }
}

// Blanket implementation for all DrawSurface types
impl<T: DrawSurface> SurfaceExt for T {}
