//! AXS5106L capacitive touch controller
//!
//! The controller pulls its interrupt line LOW while a finger is on the
//! panel and reports coordinates in a 14-byte block at register 0x01.
//! The line is the reliable presence signal. Reads in the middle of a
//! touch sometimes fail or report zero points, so the last good points
//! are held until the line has been HIGH for two samples in a row.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::i2c::I2c;
use pomo_core::geometry::Point;
use pomo_core::traits::{SensorError, TouchPoints, TouchSource, MAX_TOUCH_POINTS};

/// AXS5106L I2C address
pub const AXS5106L_ADDR: u8 = 0x63;

/// Touch report register
const REG_TOUCH_DATA: u8 = 0x01;

/// Report length
const REPORT_LEN: usize = 14;

/// Bytes per point record
const POINT_LEN: usize = 6;

/// Point records that fit in one report
const POINTS_PER_REPORT: usize = (REPORT_LEN - 2) / POINT_LEN;

/// HIGH samples needed before the held points are dropped
const RELEASE_SAMPLES: u8 = 2;

/// Touch controller errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchError {
    /// I2C transfer failed
    Bus,
    /// Report claims more points than the controller supports
    InvalidCount(u8),
    /// Reset line could not be driven
    Pin,
}

impl From<TouchError> for SensorError {
    fn from(e: TouchError) -> Self {
        match e {
            TouchError::Bus => SensorError::Bus,
            TouchError::InvalidCount(_) => SensorError::InvalidData,
            TouchError::Pin => SensorError::NotReady,
        }
    }
}

/// Decode a raw report into points
///
/// Byte 1 is the point count. Each point record holds a 12-bit X in
/// bytes 0-1 and a 12-bit Y in bytes 2-3. A count of zero is a valid
/// empty report.
pub fn parse_report(data: &[u8; REPORT_LEN]) -> Result<TouchPoints, TouchError> {
    let count = data[1];
    if count as usize > MAX_TOUCH_POINTS {
        return Err(TouchError::InvalidCount(count));
    }

    let mut points = TouchPoints::new();
    for i in 0..(count as usize).min(POINTS_PER_REPORT) {
        let rec = &data[2 + i * POINT_LEN..2 + (i + 1) * POINT_LEN];
        let x = (((rec[0] & 0x0F) as u16) << 8) | rec[1] as u16;
        let y = (((rec[2] & 0x0F) as u16) << 8) | rec[3] as u16;
        // Capacity is MAX_TOUCH_POINTS, larger than POINTS_PER_REPORT
        let _ = points.push(Point::new(x as i32, y as i32));
    }
    Ok(points)
}

/// Pulse the controller's reset line and wait for it to boot
///
/// The line is left high on success.
pub fn reset_pulse<RST: OutputPin, D: DelayNs>(rst: &mut RST, delay: &mut D) -> Result<(), TouchError> {
    rst.set_low().map_err(|_| TouchError::Pin)?;
    delay.delay_ms(10);
    rst.set_high().map_err(|_| TouchError::Pin)?;
    delay.delay_ms(50);
    Ok(())
}

/// AXS5106L driver
pub struct Axs5106l<I2C, INT> {
    i2c: I2C,
    int: INT,
    /// Last good points, held while the line stays LOW
    points: TouchPoints,
    line_low: bool,
    high_samples: u8,
}

impl<I2C, INT> Axs5106l<I2C, INT>
where
    I2C: I2c,
    INT: InputPin,
{
    /// Create a driver; `int` is the active-low interrupt line
    pub fn new(i2c: I2C, int: INT) -> Self {
        Self {
            i2c,
            int,
            points: TouchPoints::new(),
            line_low: false,
            high_samples: RELEASE_SAMPLES,
        }
    }

    /// Read the raw 14-byte report
    pub fn read_report(&mut self) -> Result<[u8; REPORT_LEN], TouchError> {
        let mut data = [0u8; REPORT_LEN];
        self.i2c
            .write_read(AXS5106L_ADDR, &[REG_TOUCH_DATA], &mut data)
            .map_err(|_| TouchError::Bus)?;
        Ok(data)
    }

    /// Sample the interrupt line and update the held points
    ///
    /// Returns `true` while the line is LOW. A failed or empty read while
    /// LOW keeps the previous points.
    pub fn poll(&mut self) -> Result<bool, TouchError> {
        // An unreadable pin keeps the previous level
        self.line_low = self.int.is_low().unwrap_or(self.line_low);

        if !self.line_low {
            self.high_samples = self.high_samples.saturating_add(1);
            if self.high_samples >= RELEASE_SAMPLES {
                self.points.clear();
            }
            return Ok(false);
        }

        self.high_samples = 0;
        let points = parse_report(&self.read_report()?)?;
        if !points.is_empty() {
            self.points = points;
        }
        Ok(true)
    }
}

impl<I2C, INT> TouchSource for Axs5106l<I2C, INT>
where
    I2C: I2c,
    INT: InputPin,
{
    fn line_asserted(&mut self) -> bool {
        match self.poll() {
            Ok(low) => low,
            // The read failed but the line was sampled
            Err(_) => self.line_low,
        }
    }

    fn points(&mut self) -> Result<TouchPoints, SensorError> {
        Ok(self.points.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeDelay, FakeI2c, FakeOutput, FakePin};

    fn report(points: &[(u16, u16)]) -> [u8; REPORT_LEN] {
        let mut data = [0u8; REPORT_LEN];
        data[1] = points.len() as u8;
        for (i, &(x, y)) in points.iter().enumerate() {
            let rec = &mut data[2 + i * POINT_LEN..2 + (i + 1) * POINT_LEN];
            rec[0] = (x >> 8) as u8 | 0x40;
            rec[1] = x as u8;
            rec[2] = (y >> 8) as u8;
            rec[3] = y as u8;
        }
        data
    }

    fn driver(points: &[(u16, u16)], low: bool) -> Axs5106l<FakeI2c, FakePin> {
        let mut i2c = FakeI2c::new(AXS5106L_ADDR);
        i2c.set_block(REG_TOUCH_DATA, &report(points));
        Axs5106l::new(i2c, FakePin { low })
    }

    #[test]
    fn test_parse_twelve_bit_coordinates() {
        let points = parse_report(&report(&[(171, 300)])).unwrap();
        assert_eq!(points.as_slice(), &[Point::new(171, 300)]);

        // Event flags in the high nibble are masked off
        let points = parse_report(&report(&[(0x0FFF, 0x0123)])).unwrap();
        assert_eq!(points[0], Point::new(0x0FFF, 0x0123));
    }

    #[test]
    fn test_parse_counts() {
        assert!(parse_report(&report(&[])).unwrap().is_empty());
        assert_eq!(parse_report(&report(&[(1, 2), (3, 4)])).unwrap().len(), 2);

        let mut data = report(&[]);
        data[1] = 6;
        assert_eq!(parse_report(&data), Err(TouchError::InvalidCount(6)));
    }

    #[test]
    fn test_reads_only_while_line_low() {
        let mut touch = driver(&[(10, 20)], false);
        assert!(!touch.line_asserted());
        assert_eq!(touch.i2c.transactions, 0);

        touch.int.low = true;
        assert!(touch.line_asserted());
        assert_eq!(touch.primary_point(), Ok(Some(Point::new(10, 20))));
    }

    #[test]
    fn test_points_held_across_bad_reads() {
        let mut touch = driver(&[(10, 20)], true);
        touch.line_asserted();

        // Zero-count report mid-touch
        touch.i2c.set_block(REG_TOUCH_DATA, &report(&[]));
        assert!(touch.line_asserted());
        assert_eq!(touch.primary_point(), Ok(Some(Point::new(10, 20))));

        // Bus failure mid-touch
        touch.i2c.fail = true;
        assert!(touch.line_asserted());
        assert_eq!(touch.points.len(), 1);
    }

    #[test]
    fn test_cleared_after_two_high_samples() {
        let mut touch = driver(&[(10, 20)], true);
        touch.line_asserted();

        touch.int.low = false;
        assert!(!touch.line_asserted());
        assert_eq!(touch.points.len(), 1);

        assert!(!touch.line_asserted());
        assert!(touch.points.is_empty());
    }

    #[test]
    fn test_single_high_glitch_keeps_points() {
        let mut touch = driver(&[(10, 20)], true);
        touch.line_asserted();
        touch.int.low = false;
        touch.line_asserted();
        touch.int.low = true;
        touch.i2c.set_block(REG_TOUCH_DATA, &report(&[]));
        touch.line_asserted();
        assert_eq!(touch.primary_point(), Ok(Some(Point::new(10, 20))));
    }

    #[test]
    fn test_reset_pulse_sequence() {
        let mut rst = FakeOutput::default();
        let mut delay = FakeDelay::default();
        reset_pulse(&mut rst, &mut delay).unwrap();
        assert_eq!(rst.levels, [false, true]);
        assert_eq!(delay.total_ns, 60_000_000);
    }

    #[test]
    fn test_reset_pulse_reports_pin_failure() {
        let mut rst = FakeOutput {
            fail: true,
            ..Default::default()
        };
        let mut delay = FakeDelay::default();
        assert_eq!(reset_pulse(&mut rst, &mut delay), Err(TouchError::Pin));
        assert_eq!(delay.total_ns, 0);
        assert_eq!(SensorError::from(TouchError::Pin), SensorError::NotReady);
    }
}
