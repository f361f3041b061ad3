//! Test doubles for the capability traits

use std::string::String;
use std::vec::Vec;

use crate::config::{Color, SettingKey};
use crate::geometry::{Orientation, Point, Rect, Size, NATIVE_SIZE};
use crate::traits::{
    AccelSample, AccelSource, DrawSurface, SensorError, SettingsStore, SurfaceError, TouchPoints,
    TouchSource,
};

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    FillScreen(Color),
    FillRect(Rect, Color),
    DrawRect(Rect, Color),
    DrawCircle(Point, i32, Color),
    FillCircle(Point, i32, Color),
    DrawLine(Point, Point, Color),
    DrawPixel(Point, Color),
    FillTriangle(Point, Point, Point, Color),
    Text(String, Point, u8, Color),
}

/// Drawing surface that records every call
///
/// Text measures 6×8 pixels per character at scale 1.
#[derive(Debug)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
    orientation: Orientation,
    /// Remaining calls before every call fails
    fail_in: Option<usize>,
}

impl RecordingSurface {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            ops: Vec::new(),
            orientation,
            fail_in: None,
        }
    }

    pub fn portrait() -> Self {
        Self::new(Orientation::Portrait)
    }

    pub fn landscape() -> Self {
        Self::new(Orientation::Landscape)
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    /// Strings drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(t, ..) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Let `n` more calls succeed, then fail every call
    pub fn fail_after(&mut self, n: usize) {
        self.fail_in = Some(n);
    }

    pub fn recover(&mut self) {
        self.fail_in = None;
    }

    fn record(&mut self, op: Op) -> Result<(), SurfaceError> {
        if let Some(n) = self.fail_in.as_mut() {
            if *n == 0 {
                return Err(SurfaceError::Communication);
            }
            *n -= 1;
        }
        self.ops.push(op);
        Ok(())
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> Size {
        self.orientation.apply(NATIVE_SIZE)
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    fn fill_screen(&mut self, color: Color) -> Result<(), SurfaceError> {
        self.record(Op::FillScreen(color))
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), SurfaceError> {
        self.record(Op::FillRect(rect, color))
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) -> Result<(), SurfaceError> {
        self.record(Op::DrawRect(rect, color))
    }

    fn draw_circle(&mut self, center: Point, radius: i32, color: Color) -> Result<(), SurfaceError> {
        self.record(Op::DrawCircle(center, radius, color))
    }

    fn fill_circle(&mut self, center: Point, radius: i32, color: Color) -> Result<(), SurfaceError> {
        self.record(Op::FillCircle(center, radius, color))
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) -> Result<(), SurfaceError> {
        self.record(Op::DrawLine(from, to, color))
    }

    fn draw_pixel(&mut self, at: Point, color: Color) -> Result<(), SurfaceError> {
        self.record(Op::DrawPixel(at, color))
    }

    fn fill_triangle(&mut self, a: Point, b: Point, c: Point, color: Color) -> Result<(), SurfaceError> {
        self.record(Op::FillTriangle(a, b, c, color))
    }

    fn draw_text(&mut self, text: &str, top_left: Point, scale: u8, color: Color) -> Result<(), SurfaceError> {
        self.record(Op::Text(String::from(text), top_left, scale, color))
    }

    fn text_size(&self, text: &str, scale: u8) -> Size {
        let s = scale as i32;
        Size::new(6 * s * text.len() as i32, 8 * s)
    }
}

/// Touch source driven by the test
#[derive(Debug, Default)]
pub struct ScriptedTouch {
    pub line: bool,
    pub point: Option<Point>,
    pub fail: bool,
}

impl ScriptedTouch {
    /// Finger down at a native coordinate
    pub fn press(&mut self, native: Point) {
        self.line = true;
        self.point = Some(native);
    }

    pub fn release(&mut self) {
        self.line = false;
        self.point = None;
    }
}

impl TouchSource for ScriptedTouch {
    fn line_asserted(&mut self) -> bool {
        self.line
    }

    fn points(&mut self) -> Result<TouchPoints, SensorError> {
        if self.fail {
            return Err(SensorError::Bus);
        }
        let mut points = TouchPoints::new();
        if let Some(p) = self.point {
            let _ = points.push(p);
        }
        Ok(points)
    }
}

/// Accelerometer replaying samples; the last one repeats
#[derive(Debug, Default)]
pub struct ScriptedAccel {
    samples: Vec<AccelSample>,
    next: usize,
    fail: bool,
}

impl ScriptedAccel {
    pub fn new(samples: &[AccelSample]) -> Self {
        Self {
            samples: samples.to_vec(),
            next: 0,
            fail: false,
        }
    }

    /// Device lying flat
    pub fn flat() -> Self {
        Self::new(&[AccelSample::new(0, 0, 1000)])
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Replace the script
    pub fn set(&mut self, sample: AccelSample) {
        self.samples = std::vec![sample];
        self.next = 0;
    }
}

impl AccelSource for ScriptedAccel {
    fn read(&mut self) -> Result<AccelSample, SensorError> {
        if self.fail || self.samples.is_empty() {
            return Err(SensorError::Bus);
        }
        let i = self.next.min(self.samples.len() - 1);
        self.next += 1;
        Ok(self.samples[i])
    }
}

/// Settings store in RAM counting writes
#[derive(Debug, Default)]
pub struct MemorySettings {
    values: [Option<u16>; 2],
    pub writes: usize,
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: SettingKey) -> Option<u16> {
        self.values[key as usize]
    }

    fn set(&mut self, key: SettingKey, value: u16) {
        self.values[key as usize] = Some(value);
        self.writes += 1;
    }
}
