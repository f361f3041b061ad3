//! Software rotation of a native portrait panel

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Dimensions, OriginDimensions, Point, Size};
use embedded_graphics::pixelcolor::PixelColor;
use embedded_graphics::primitives::{ContainsPoint, Rectangle};
use embedded_graphics::Pixel;
use pomo_core::geometry::Orientation;

fn map_point(orientation: Orientation, native: Size, p: Point) -> Point {
    let w = native.width as i32;
    let h = native.height as i32;
    match orientation {
        Orientation::Portrait => p,
        Orientation::Landscape => Point::new(w - 1 - p.y, p.x),
        Orientation::PortraitFlipped => Point::new(w - 1 - p.x, h - 1 - p.y),
        Orientation::LandscapeFlipped => Point::new(p.y, h - 1 - p.x),
    }
}

/// Draw target that maps display coordinates onto the native panel
///
/// Display `(0, 0)` is the top-left corner as the user sees it. The
/// mapping from display to native coordinates, for a native panel of
/// `W`×`H`:
///
/// | Orientation | native x | native y |
/// |---|---|---|
/// | 0 | `dx` | `dy` |
/// | 1 | `W-1-dy` | `dx` |
/// | 2 | `W-1-dx` | `H-1-dy` |
/// | 3 | `dy` | `H-1-dx` |
pub struct Rotated<D> {
    pub(crate) inner: D,
    orientation: Orientation,
}

impl<D: DrawTarget> Rotated<D> {
    pub fn new(inner: D, orientation: Orientation) -> Self {
        Self { inner, orientation }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    fn native_size(&self) -> Size {
        self.inner.bounding_box().size
    }

    /// Map a display point to the native panel
    pub fn to_native(&self, p: Point) -> Point {
        map_point(self.orientation, self.native_size(), p)
    }

    /// Map a display rectangle to the native panel
    ///
    /// A rotation by a multiple of 90° keeps rectangles axis aligned, so
    /// mapping two opposite corners is enough.
    fn rect_to_native(&self, area: &Rectangle) -> Option<Rectangle> {
        let bottom_right = area.bottom_right()?;
        let a = self.to_native(area.top_left);
        let b = self.to_native(bottom_right);
        Some(Rectangle::with_corners(a, b))
    }
}

impl<D: DrawTarget> OriginDimensions for Rotated<D> {
    fn size(&self) -> Size {
        let native = self.native_size();
        if self.orientation.is_landscape() {
            Size::new(native.height, native.width)
        } else {
            native
        }
    }
}

impl<D, C> DrawTarget for Rotated<D>
where
    D: DrawTarget<Color = C>,
    C: PixelColor,
{
    type Color = C;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        let orientation = self.orientation;
        let native = self.native_size();
        self.inner.draw_iter(
            pixels
                .into_iter()
                .filter(move |Pixel(p, _)| bounds.contains(*p))
                .map(move |Pixel(p, c)| Pixel(map_point(orientation, native, p), c)),
        )
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        match self.rect_to_native(&area) {
            Some(native) => self.inner.fill_solid(&native, color),
            None => Ok(()),
        }
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.inner.clear(color)
    }
}
