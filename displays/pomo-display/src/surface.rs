//! `DrawSurface` over an RGB565 embedded-graphics target

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Dimensions, OriginDimensions};
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::{
    Circle, Line, Primitive, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment, Triangle,
};
use embedded_graphics::{Drawable, Pixel};
use pomo_core::config::Color;
use pomo_core::geometry::{Orientation, Point, Rect, Size};
use pomo_core::traits::{DrawSurface, SurfaceError};

use crate::rotated::Rotated;
use crate::text::{draw_text as draw_glyphs, measure};

type EgPoint = embedded_graphics::geometry::Point;
type EgSize = embedded_graphics::geometry::Size;

fn to_rgb(color: Color) -> Rgb565 {
    Rgb565::from(RawU16::new(color.raw()))
}

fn to_point(p: Point) -> EgPoint {
    EgPoint::new(p.x, p.y)
}

/// Drawing surface for a native portrait RGB565 panel
///
/// Rotation is applied in software through [`Rotated`]. Every target
/// error is reported as `SurfaceError::Communication`.
pub struct GraphicsSurface<D> {
    target: Rotated<D>,
}

impl<D> GraphicsSurface<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(display: D, orientation: Orientation) -> Self {
        Self {
            target: Rotated::new(display, orientation),
        }
    }

    /// Rectangle in embedded-graphics form, `None` when empty
    fn rectangle(&self, rect: Rect) -> Result<Option<Rectangle>, SurfaceError> {
        if rect.width() <= 0 || rect.height() <= 0 {
            return Ok(None);
        }
        let area = Rectangle::new(
            EgPoint::new(rect.left, rect.top),
            EgSize::new(rect.width() as u32, rect.height() as u32),
        );
        if area.intersection(&self.target.bounding_box()).is_zero_sized() {
            return Err(SurfaceError::OutOfBounds);
        }
        Ok(Some(area))
    }

    fn draw<P>(&mut self, primitive: P) -> Result<(), SurfaceError>
    where
        P: Drawable<Color = Rgb565>,
    {
        primitive
            .draw(&mut self.target)
            .map(|_| ())
            .map_err(|_| SurfaceError::Communication)
    }
}

impl<D> DrawSurface for GraphicsSurface<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn size(&self) -> Size {
        let size = self.target.size();
        Size::new(size.width as i32, size.height as i32)
    }

    fn orientation(&self) -> Orientation {
        self.target.orientation()
    }

    fn set_orientation(&mut self, orientation: Orientation) {
        self.target.set_orientation(orientation);
    }

    fn fill_screen(&mut self, color: Color) -> Result<(), SurfaceError> {
        self.target
            .clear(to_rgb(color))
            .map_err(|_| SurfaceError::Communication)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), SurfaceError> {
        let Some(area) = self.rectangle(rect)? else {
            return Ok(());
        };
        self.target
            .fill_solid(&area, to_rgb(color))
            .map_err(|_| SurfaceError::Communication)
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) -> Result<(), SurfaceError> {
        let Some(area) = self.rectangle(rect)? else {
            return Ok(());
        };
        let style = PrimitiveStyleBuilder::new()
            .stroke_color(to_rgb(color))
            .stroke_width(1)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        self.draw(area.into_styled(style))
    }

    fn draw_circle(&mut self, center: Point, radius: i32, color: Color) -> Result<(), SurfaceError> {
        if radius < 0 {
            return Ok(());
        }
        let circle = Circle::with_center(to_point(center), 2 * radius as u32 + 1);
        self.draw(circle.into_styled(PrimitiveStyle::with_stroke(to_rgb(color), 1)))
    }

    fn fill_circle(&mut self, center: Point, radius: i32, color: Color) -> Result<(), SurfaceError> {
        if radius < 0 {
            return Ok(());
        }
        let circle = Circle::with_center(to_point(center), 2 * radius as u32 + 1);
        self.draw(circle.into_styled(PrimitiveStyle::with_fill(to_rgb(color))))
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) -> Result<(), SurfaceError> {
        let line = Line::new(to_point(from), to_point(to));
        self.draw(line.into_styled(PrimitiveStyle::with_stroke(to_rgb(color), 1)))
    }

    fn draw_pixel(&mut self, at: Point, color: Color) -> Result<(), SurfaceError> {
        self.draw(Pixel(to_point(at), to_rgb(color)))
    }

    fn fill_triangle(&mut self, a: Point, b: Point, c: Point, color: Color) -> Result<(), SurfaceError> {
        let triangle = Triangle::new(to_point(a), to_point(b), to_point(c));
        self.draw(triangle.into_styled(PrimitiveStyle::with_fill(to_rgb(color))))
    }

    fn draw_text(&mut self, text: &str, top_left: Point, scale: u8, color: Color) -> Result<(), SurfaceError> {
        draw_glyphs(&mut self.target, text, to_point(top_left), scale, to_rgb(color))
            .map_err(|_| SurfaceError::Communication)
    }

    fn text_size(&self, text: &str, scale: u8) -> Size {
        let size = measure(text, scale);
        Size::new(size.width as i32, size.height as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FrameBuffer;
    use embedded_graphics::pixelcolor::RgbColor;
    use pomo_core::traits::SurfaceExt;

    fn surface(orientation: Orientation) -> GraphicsSurface<FrameBuffer> {
        GraphicsSurface::new(FrameBuffer::new(), orientation)
    }

    fn native(s: &mut GraphicsSurface<FrameBuffer>) -> &FrameBuffer {
        &s.target.inner
    }

    #[test]
    fn test_color_conversion() {
        assert_eq!(to_rgb(Color::RED), Rgb565::RED);
        assert_eq!(to_rgb(Color::WHITE), Rgb565::WHITE);
        assert_eq!(to_rgb(Color::GOLD), Rgb565::new(31, 39, 0));
    }

    #[test]
    fn test_size_and_rotation() {
        let mut s = surface(Orientation::Portrait);
        assert_eq!(s.size(), Size::new(172, 320));
        s.set_orientation(Orientation::LandscapeFlipped);
        assert_eq!(s.size(), Size::new(320, 172));
        assert_eq!(s.orientation(), Orientation::LandscapeFlipped);
    }

    #[test]
    fn test_fill_rect_covers_width_by_height() {
        let mut s = surface(Orientation::Portrait);
        s.fill_rect(Rect::from_origin(10, 20, 4, 3), Color::RED).unwrap();
        let fb = native(&mut s);
        assert_eq!(fb.count_lit(), 12);
        assert_eq!(fb.lit_bounds(), Some((EgPoint::new(10, 20), EgPoint::new(13, 22))));
    }

    #[test]
    fn test_rect_bounds_checks() {
        let mut s = surface(Orientation::Portrait);
        assert_eq!(s.fill_rect(Rect::new(10, 10, 10, 20), Color::RED), Ok(()));
        assert_eq!(
            s.fill_rect(Rect::from_origin(200, 10, 5, 5), Color::RED),
            Err(SurfaceError::OutOfBounds)
        );
        assert_eq!(native(&mut s).count_lit(), 0);
    }

    #[test]
    fn test_draw_rect_is_inside_outline() {
        let mut s = surface(Orientation::Portrait);
        s.draw_rect(Rect::from_origin(0, 0, 10, 10), Color::WHITE).unwrap();
        let fb = native(&mut s);
        assert_eq!(fb.count_lit(), 36);
        assert_eq!(fb.get(EgPoint::new(9, 9)), Rgb565::WHITE);
        assert_eq!(fb.get(EgPoint::new(5, 5)), Rgb565::BLACK);
    }

    #[test]
    fn test_circle_centered_on_pixel() {
        let mut s = surface(Orientation::Portrait);
        s.fill_circle(Point::new(50, 60), 4, Color::WHITE).unwrap();
        let fb = native(&mut s);
        assert_eq!(fb.get(EgPoint::new(50, 60)), Rgb565::WHITE);
        let (lo, hi) = fb.lit_bounds().unwrap();
        assert_eq!((lo.x + hi.x) / 2, 50);
        assert_eq!((lo.y + hi.y) / 2, 60);
        assert!(hi.x - lo.x <= 8);
    }

    #[test]
    fn test_landscape_drawing_lands_rotated() {
        let mut s = surface(Orientation::Landscape);
        s.draw_pixel(Point::new(0, 0), Color::GREEN).unwrap();
        s.fill_rect(Rect::from_origin(300, 150, 20, 22), Color::BLUE).unwrap();
        let fb = native(&mut s);
        assert_eq!(fb.get(EgPoint::new(171, 0)), Rgb565::GREEN);
        assert_eq!(fb.get(EgPoint::new(0, 319)), Rgb565::BLUE);
    }

    #[test]
    fn test_centered_text_uses_font_metrics() {
        let mut s = surface(Orientation::Portrait);
        assert_eq!(s.text_size("25:00", 3), Size::new(90, 24));
        let bounds = s
            .draw_text_centered("25:00", Point::new(86, 160), 3, Color::WHITE)
            .unwrap();
        assert_eq!(bounds, Rect::new(41, 148, 131, 172));
        let (lo, hi) = native(&mut s).lit_bounds().unwrap();
        assert!(lo.x >= 41 && hi.x < 131);
        assert!(lo.y >= 148 && hi.y < 172);
    }

    #[test]
    fn test_target_failure_is_communication_error() {
        let mut s = surface(Orientation::Portrait);
        s.target.inner.fail = true;
        assert_eq!(s.fill_screen(Color::BLACK), Err(SurfaceError::Communication));
        assert_eq!(
            s.fill_rect(Rect::from_origin(0, 0, 5, 5), Color::RED),
            Err(SurfaceError::Communication)
        );
        assert_eq!(
            s.draw_text("M", Point::new(0, 0), 1, Color::RED),
            Err(SurfaceError::Communication)
        );
    }
}
