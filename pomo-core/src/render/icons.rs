//! Icons drawn from primitives

use libm::{cosf, sinf};

use crate::config::Color;
use crate::geometry::{Point, Rect};
use crate::traits::{DrawSurface, SurfaceError};

/// Right-pointing triangle
pub fn draw_play<S: DrawSurface>(s: &mut S, c: Point, size: i32, color: Color) -> Result<(), SurfaceError> {
    let half_h = size / 2;
    let w = size * 3 / 4;
    s.fill_triangle(
        Point::new(c.x - w / 2, c.y - half_h),
        Point::new(c.x - w / 2, c.y + half_h),
        Point::new(c.x + w / 2, c.y),
        color,
    )
}

/// Two vertical bars
pub fn draw_pause<S: DrawSurface>(s: &mut S, c: Point, size: i32, color: Color) -> Result<(), SurfaceError> {
    let bar_w = size / 4;
    let gap = size / 4;
    let top = c.y - size / 2;
    s.fill_rect(Rect::from_origin(c.x - gap - bar_w, top, bar_w, size), color)?;
    s.fill_rect(Rect::from_origin(c.x + gap, top, bar_w, size), color)
}

/// Eight-tooth cog with a hollow hub
pub fn draw_gear<S: DrawSurface>(s: &mut S, c: Point, size: i32, color: Color) -> Result<(), SurfaceError> {
    const TEETH: i32 = 8;
    let outer = size / 2 - 1;
    let inner = size / 3;
    let tooth_len = size / 6;
    let half_w = (size / 10) as f32 / 2.0;

    for r in inner + 1..=outer {
        s.draw_circle(c, r, color)?;
    }

    // Each tooth is filled with short strokes across its width
    let steps = tooth_len * 2;
    for i in 0..TEETH {
        let angle = i as f32 * 2.0 * core::f32::consts::PI / TEETH as f32;
        let (sin, cos) = (sinf(angle), cosf(angle));
        for step in 0..=steps {
            let dist = outer as f32 + tooth_len as f32 * step as f32 / steps as f32;
            let (mx, my) = (c.x as f32 + dist * cos, c.y as f32 + dist * sin);
            // Perpendicular to the tooth direction is (-sin, cos)
            let a = Point::new((mx - half_w * sin) as i32, (my + half_w * cos) as i32);
            let b = Point::new((mx + half_w * sin) as i32, (my - half_w * cos) as i32);
            s.draw_line(a, b, color)?;
        }
    }

    s.fill_circle(c, inner, Color::BLACK)?;
    s.draw_circle(c, inner, color)?;
    s.fill_circle(c, inner / 2, Color::BLACK)
}
