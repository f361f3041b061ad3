//! Touch and acceleration source traits

use heapless::Vec;

use crate::geometry::Point;

/// Errors that can occur reading a sensor
///
/// The engine treats all of these as "no new information this tick".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Bus transfer failed
    Bus,
    /// Device has no sample available
    NotReady,
    /// Sample failed validation
    InvalidData,
}

/// Most points a touch controller reports at once
pub const MAX_TOUCH_POINTS: usize = 5;

/// Decoded touch points in panel-native coordinates
pub type TouchPoints = Vec<Point, MAX_TOUCH_POINTS>;

/// Trait for capacitive touch controllers
///
/// Implementations report the interrupt line level separately from the
/// coordinates because the line is the reliable presence signal; the
/// coordinate registers may lag or read empty mid-touch.
pub trait TouchSource {
    /// Check if the controller currently signals a touch
    fn line_asserted(&mut self) -> bool;

    /// Latest decoded points, in native panel axes
    ///
    /// An empty list means no coordinate is known right now.
    fn points(&mut self) -> Result<TouchPoints, SensorError>;

    /// First point, if any
    fn primary_point(&mut self) -> Result<Option<Point>, SensorError> {
        self.points().map(|p| p.first().copied())
    }
}

/// One accelerometer reading in milli-g
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelSample {
    pub x_mg: i16,
    pub y_mg: i16,
    pub z_mg: i16,
}

impl AccelSample {
    pub const fn new(x_mg: i16, y_mg: i16, z_mg: i16) -> Self {
        Self { x_mg, y_mg, z_mg }
    }
}

/// Trait for accelerometers
pub trait AccelSource {
    /// Read the latest acceleration vector
    fn read(&mut self) -> Result<AccelSample, SensorError>;
}
