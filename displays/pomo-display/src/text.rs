//! Scaled bitmap text
//!
//! Glyphs come from the 5×8 ASCII font with one column of spacing, giving
//! a 6×8 advance per character. Larger text is drawn by magnifying each
//! font pixel into a `scale`×`scale` block.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Dimensions, OriginDimensions, Point, Size};
use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics::{Drawable, Pixel};

/// Font used for all text
pub const FONT: MonoFont<'static> = MonoFont {
    character_spacing: 1,
    ..FONT_5X8
};

/// Advance of one character at scale 1
pub fn char_advance() -> Size {
    Size::new(
        FONT.character_size.width + FONT.character_spacing,
        FONT.character_size.height,
    )
}

/// Size of `text` at `scale`, counting a full advance per character
pub fn measure(text: &str, scale: u8) -> Size {
    let s = scale.max(1) as u32;
    let advance = char_advance();
    Size::new(advance.width * text.chars().count() as u32 * s, advance.height * s)
}

/// Draw target that magnifies every pixel
///
/// Pixel `(x, y)` drawn here lands as a filled block at
/// `origin + (x, y) * scale` on the wrapped target.
pub struct Scaled<'a, D> {
    target: &'a mut D,
    origin: Point,
    scale: u32,
}

impl<'a, D: DrawTarget> Scaled<'a, D> {
    pub fn new(target: &'a mut D, origin: Point, scale: u8) -> Self {
        Self {
            target,
            origin,
            scale: scale.max(1) as u32,
        }
    }
}

impl<D: DrawTarget> OriginDimensions for Scaled<'_, D> {
    fn size(&self) -> Size {
        self.target.bounding_box().size / self.scale
    }
}

impl<D: DrawTarget> DrawTarget for Scaled<'_, D> {
    type Color = D::Color;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let block = Size::new_equal(self.scale);
        for Pixel(p, color) in pixels {
            let at = self.origin + p * self.scale as i32;
            self.target.fill_solid(&Rectangle::new(at, block), color)?;
        }
        Ok(())
    }
}

/// Draw `text` with its top-left corner at `top_left`
pub fn draw_text<D: DrawTarget>(
    target: &mut D,
    text: &str,
    top_left: Point,
    scale: u8,
    color: D::Color,
) -> Result<(), D::Error> {
    let style = MonoTextStyle::new(&FONT, color);
    let mut scaled = Scaled::new(target, top_left, scale);
    Text::with_baseline(text, Point::zero(), style, Baseline::Top).draw(&mut scaled)?;
    Ok(())
}
