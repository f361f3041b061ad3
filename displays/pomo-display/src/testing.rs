//! Framebuffer draw target for host tests

use std::vec;
use std::vec::Vec;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Point, Size};
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::primitives::{PointsIter, Rectangle};
use embedded_graphics::Pixel;

const WIDTH: u32 = 172;
const HEIGHT: u32 = 320;

/// Native-portrait RGB565 framebuffer
pub struct FrameBuffer {
    pixels: Vec<Rgb565>,
    /// Number of `fill_solid` calls received
    pub fills: usize,
    /// Fail every draw call
    pub fail: bool,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            pixels: vec![Rgb565::BLACK; (WIDTH * HEIGHT) as usize],
            fills: 0,
            fail: false,
        }
    }

    pub fn get(&self, p: Point) -> Rgb565 {
        self.pixels[(p.y as u32 * WIDTH + p.x as u32) as usize]
    }

    /// Pixels that are not black
    pub fn count_lit(&self) -> usize {
        self.pixels.iter().filter(|&&c| c != Rgb565::BLACK).count()
    }

    /// Bounding box of all non-black pixels as (min, max), inclusive
    pub fn lit_bounds(&self) -> Option<(Point, Point)> {
        let mut bounds: Option<(Point, Point)> = None;
        for (i, c) in self.pixels.iter().enumerate() {
            if *c == Rgb565::BLACK {
                continue;
            }
            let p = Point::new((i as u32 % WIDTH) as i32, (i as u32 / WIDTH) as i32);
            bounds = Some(match bounds {
                None => (p, p),
                Some((lo, hi)) => (lo.component_min(p), hi.component_max(p)),
            });
        }
        bounds
    }

    fn set(&mut self, p: Point, color: Rgb565) {
        if p.x >= 0 && p.y >= 0 && (p.x as u32) < WIDTH && (p.y as u32) < HEIGHT {
            self.pixels[(p.y as u32 * WIDTH + p.x as u32) as usize] = color;
        }
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH, HEIGHT)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = ();

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), ()>
    where
        I: IntoIterator<Item = Pixel<Rgb565>>,
    {
        if self.fail {
            return Err(());
        }
        for Pixel(p, c) in pixels {
            self.set(p, c);
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Rgb565) -> Result<(), ()> {
        if self.fail {
            return Err(());
        }
        self.fills += 1;
        for p in area.points() {
            self.set(p, color);
        }
        Ok(())
    }
}
