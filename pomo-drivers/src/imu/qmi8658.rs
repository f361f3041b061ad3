//! QMI8658 6-axis IMU, accelerometer only
//!
//! The chip shares the I2C bus with the touch controller. Only the
//! accelerometer is enabled; the gyroscope stays powered down.

use embedded_hal::i2c::I2c;
use pomo_core::traits::{AccelSample, AccelSource, SensorError};

/// QMI8658 I2C address (SA0 high)
pub const QMI8658_ADDR: u8 = 0x6B;

/// QMI8658 register addresses
pub mod reg {
    /// Device identifier, reads 0x05
    pub const WHO_AM_I: u8 = 0x00;
    /// Serial interface configuration
    pub const CTRL1: u8 = 0x02;
    /// Accelerometer range and output data rate
    pub const CTRL2: u8 = 0x03;
    /// Sensor enable
    pub const CTRL7: u8 = 0x08;
    /// Accelerometer X low byte; Y and Z follow
    pub const AX_L: u8 = 0x35;
}

/// Expected WHO_AM_I value
const CHIP_ID: u8 = 0x05;

/// CTRL1: register address auto-increment
const CTRL1_ADDR_AI: u8 = 0x40;

/// CTRL2: ±2 g full scale, 250 Hz output rate
const CTRL2_ACCEL_2G_250HZ: u8 = 0x05;

/// CTRL7: accelerometer enabled, gyroscope off
const CTRL7_ACCEL_EN: u8 = 0x01;

/// LSB per g at ±2 g full scale
const LSB_PER_G: i32 = 16384;

/// IMU errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ImuError {
    /// I2C transfer failed
    Bus,
    /// WHO_AM_I returned an unexpected value
    WrongChip(u8),
}

impl From<ImuError> for SensorError {
    fn from(e: ImuError) -> Self {
        match e {
            ImuError::Bus => SensorError::Bus,
            ImuError::WrongChip(_) => SensorError::NotReady,
        }
    }
}

/// Convert a raw ±2 g reading to milli-g
pub fn raw_to_mg(raw: i16) -> i16 {
    (raw as i32 * 1000 / LSB_PER_G) as i16
}

/// QMI8658 driver
pub struct Qmi8658<I2C> {
    i2c: I2C,
    ready: bool,
}

impl<I2C: I2c> Qmi8658<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self { i2c, ready: false }
    }

    /// Check the chip ID and enable the accelerometer
    ///
    /// Until this succeeds, `read` reports `SensorError::NotReady`.
    pub fn init(&mut self) -> Result<(), ImuError> {
        let id = self.read_reg(reg::WHO_AM_I)?;
        if id != CHIP_ID {
            return Err(ImuError::WrongChip(id));
        }

        self.write_reg(reg::CTRL1, CTRL1_ADDR_AI)?;
        self.write_reg(reg::CTRL2, CTRL2_ACCEL_2G_250HZ)?;
        self.write_reg(reg::CTRL7, CTRL7_ACCEL_EN)?;
        self.ready = true;
        Ok(())
    }

    /// Read the raw X, Y, Z counts
    pub fn read_raw(&mut self) -> Result<[i16; 3], ImuError> {
        let mut data = [0u8; 6];
        self.i2c
            .write_read(QMI8658_ADDR, &[reg::AX_L], &mut data)
            .map_err(|_| ImuError::Bus)?;
        Ok([
            i16::from_le_bytes([data[0], data[1]]),
            i16::from_le_bytes([data[2], data[3]]),
            i16::from_le_bytes([data[4], data[5]]),
        ])
    }

    fn read_reg(&mut self, reg: u8) -> Result<u8, ImuError> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(QMI8658_ADDR, &[reg], &mut buf)
            .map_err(|_| ImuError::Bus)?;
        Ok(buf[0])
    }

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), ImuError> {
        self.i2c
            .write(QMI8658_ADDR, &[reg, value])
            .map_err(|_| ImuError::Bus)
    }
}

impl<I2C: I2c> AccelSource for Qmi8658<I2C> {
    fn read(&mut self) -> Result<AccelSample, SensorError> {
        if !self.ready {
            return Err(SensorError::NotReady);
        }
        let [x, y, z] = self.read_raw()?;
        Ok(AccelSample::new(raw_to_mg(x), raw_to_mg(y), raw_to_mg(z)))
    }
}
