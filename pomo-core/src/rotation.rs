//! Orientation detection from the accelerometer
//!
//! The in-plane axes are compared against a fixed threshold. The Y axis is
//! checked first, so a diagonal tilt resolves to portrait. When neither
//! axis clears the threshold (device lying flat) the orientation is kept.

use crate::geometry::Orientation;
use crate::traits::{AccelSample, AccelSource, SensorError};

/// Pick an orientation from one sample
///
/// Returns `None` when the tilt is ambiguous.
pub fn classify(sample: AccelSample, threshold_mg: i16) -> Option<Orientation> {
    let (ax, ay) = (sample.x_mg, sample.y_mg);
    if ay < -threshold_mg {
        Some(Orientation::Portrait)
    } else if ay > threshold_mg {
        Some(Orientation::PortraitFlipped)
    } else if ax > threshold_mg {
        Some(Orientation::Landscape)
    } else if ax < -threshold_mg {
        Some(Orientation::LandscapeFlipped)
    } else {
        None
    }
}

/// Result of one rotation poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RotationPoll {
    /// Poll interval has not elapsed
    NotDue,
    /// Orientation unchanged (or tilt ambiguous)
    Unchanged,
    /// Orientation changed to the contained value
    Changed(Orientation),
    /// Sensor read failed; orientation kept
    ReadFailed(SensorError),
}

/// Polls the accelerometer at a fixed interval and tracks orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RotationManager {
    current: Orientation,
    interval_ms: u32,
    threshold_mg: i16,
    last_poll: Option<u32>,
}

impl RotationManager {
    pub fn new(initial: Orientation, interval_ms: u32, threshold_mg: i16) -> Self {
        Self {
            current: initial,
            interval_ms,
            threshold_mg,
            last_poll: None,
        }
    }

    pub fn current(&self) -> Orientation {
        self.current
    }

    /// Read the sensor if the poll interval has elapsed
    ///
    /// The first call always polls.
    pub fn poll<A: AccelSource>(&mut self, accel: &mut A, now_ms: u32) -> RotationPoll {
        if let Some(last) = self.last_poll {
            if now_ms.wrapping_sub(last) < self.interval_ms {
                return RotationPoll::NotDue;
            }
        }
        self.last_poll = Some(now_ms);

        match accel.read() {
            Ok(sample) => self.update(sample),
            Err(e) => RotationPoll::ReadFailed(e),
        }
    }

    /// Apply one sample regardless of the interval
    pub fn update(&mut self, sample: AccelSample) -> RotationPoll {
        match classify(sample, self.threshold_mg) {
            Some(o) if o != self.current => {
                self.current = o;
                RotationPoll::Changed(o)
            }
            _ => RotationPoll::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedAccel;

    fn sample(x: i16, y: i16) -> AccelSample {
        AccelSample::new(x, y, 0)
    }

    #[test]
    fn test_classify_axes() {
        assert_eq!(classify(sample(0, -900), 500), Some(Orientation::Portrait));
        assert_eq!(classify(sample(0, 900), 500), Some(Orientation::PortraitFlipped));
        assert_eq!(classify(sample(900, 0), 500), Some(Orientation::Landscape));
        assert_eq!(classify(sample(-900, 0), 500), Some(Orientation::LandscapeFlipped));
    }

    #[test]
    fn test_flat_is_ambiguous() {
        assert_eq!(classify(AccelSample::new(100, -200, 1000), 500), None);
        // Exactly at the threshold does not count
        assert_eq!(classify(sample(500, -500), 500), None);
    }

    #[test]
    fn test_y_axis_wins_on_diagonal() {
        assert_eq!(classify(sample(800, -800), 500), Some(Orientation::Portrait));
    }

    #[test]
    fn test_poll_interval() {
        let mut accel = ScriptedAccel::new(&[sample(900, 0), sample(-900, 0)]);
        let mut rm = RotationManager::new(Orientation::Portrait, 2_000, 500);

        assert_eq!(rm.poll(&mut accel, 0), RotationPoll::Changed(Orientation::Landscape));
        assert_eq!(rm.poll(&mut accel, 1_999), RotationPoll::NotDue);
        assert_eq!(
            rm.poll(&mut accel, 2_000),
            RotationPoll::Changed(Orientation::LandscapeFlipped)
        );
        assert_eq!(rm.current(), Orientation::LandscapeFlipped);
    }

    #[test]
    fn test_read_failure_keeps_orientation() {
        let mut accel = ScriptedAccel::failing();
        let mut rm = RotationManager::new(Orientation::Landscape, 2_000, 500);
        assert_eq!(
            rm.poll(&mut accel, 0),
            RotationPoll::ReadFailed(SensorError::Bus)
        );
        assert_eq!(rm.current(), Orientation::Landscape);
    }

    #[test]
    fn test_same_orientation_unchanged() {
        let mut rm = RotationManager::new(Orientation::Portrait, 2_000, 500);
        assert_eq!(rm.update(sample(0, -1000)), RotationPoll::Unchanged);
        assert_eq!(rm.update(sample(0, 0)), RotationPoll::Unchanged);
    }
}
