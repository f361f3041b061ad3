//! Bus and pin fakes for driver tests

use core::convert::Infallible;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, ErrorType as PinErrorType, InputPin, OutputPin};
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};

/// I2C device with a flat 256-byte register file
///
/// A write sets the register pointer from its first byte and stores the
/// rest; a read returns registers from the pointer onward.
#[derive(Debug)]
pub struct FakeI2c {
    address: u8,
    pub regs: [u8; 256],
    pub fail: bool,
    /// Every register write as (register, value)
    pub writes: Vec<(u8, u8)>,
    /// Number of transactions seen
    pub transactions: usize,
    pointer: u8,
}

impl FakeI2c {
    pub fn new(address: u8) -> Self {
        Self {
            address,
            regs: [0; 256],
            fail: false,
            writes: Vec::new(),
            transactions: 0,
            pointer: 0,
        }
    }

    /// Preload consecutive registers starting at `reg`
    pub fn set_block(&mut self, reg: u8, data: &[u8]) {
        for (i, &b) in data.iter().enumerate() {
            self.regs[reg.wrapping_add(i as u8) as usize] = b;
        }
    }
}

impl ErrorType for FakeI2c {
    type Error = ErrorKind;
}

impl I2c for FakeI2c {
    fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), ErrorKind> {
        self.transactions += 1;
        if self.fail {
            return Err(ErrorKind::Bus);
        }
        if address != self.address {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }
        for op in operations {
            match op {
                Operation::Write(bytes) => {
                    let Some((&reg, data)) = bytes.split_first() else {
                        continue;
                    };
                    self.pointer = reg;
                    for (i, &b) in data.iter().enumerate() {
                        let r = reg.wrapping_add(i as u8);
                        self.regs[r as usize] = b;
                        self.writes.push((r, b));
                    }
                }
                Operation::Read(buf) => {
                    for (i, b) in buf.iter_mut().enumerate() {
                        *b = self.regs[self.pointer.wrapping_add(i as u8) as usize];
                    }
                }
            }
        }
        Ok(())
    }
}

/// Input pin whose level the test sets
#[derive(Debug, Default)]
pub struct FakePin {
    pub low: bool,
}

impl PinErrorType for FakePin {
    type Error = Infallible;
}

impl InputPin for FakePin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(!self.low)
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(self.low)
    }
}

/// Output pin recording every level it is driven to
#[derive(Debug, Default)]
pub struct FakeOutput {
    /// `true` for high
    pub levels: Vec<bool>,
    pub fail: bool,
}

impl PinErrorType for FakeOutput {
    type Error = digital::ErrorKind;
}

impl OutputPin for FakeOutput {
    fn set_low(&mut self) -> Result<(), digital::ErrorKind> {
        self.drive(false)
    }

    fn set_high(&mut self) -> Result<(), digital::ErrorKind> {
        self.drive(true)
    }
}

impl FakeOutput {
    fn drive(&mut self, high: bool) -> Result<(), digital::ErrorKind> {
        if self.fail {
            return Err(digital::ErrorKind::Other);
        }
        self.levels.push(high);
        Ok(())
    }
}

/// Delay that only adds up the requested time
#[derive(Debug, Default)]
pub struct FakeDelay {
    pub total_ns: u64,
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }
}
