//! Newline-delimited framing for the serial console transport
//!
//! Bytes are fed one at a time. A line ends at `\n`; `\r` is dropped so
//! both LF and CRLF terminals work. Empty lines are skipped.

use heapless::{String, Vec};

/// Maximum accepted line length in bytes
pub const MAX_LINE_LEN: usize = 64;

/// A complete line of text
pub type Line = String<MAX_LINE_LEN>;

/// Errors that can occur while assembling a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Line exceeded `MAX_LINE_LEN`; input is discarded up to the next newline
    TooLong,
    /// Line was not valid UTF-8
    InvalidUtf8,
}

/// State machine for assembling lines
#[derive(Debug, Clone, Default)]
pub struct LineParser {
    buffer: Vec<u8, MAX_LINE_LEN>,
    /// Set after an overflow until the terminating newline is seen
    discarding: bool,
}

impl LineParser {
    /// Create a new line parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the parser state
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.discarding = false;
    }

    /// Feed a single byte to the parser
    ///
    /// Returns `Ok(Some(line))` when a non-empty line is complete,
    /// `Ok(None)` when more bytes are needed, or `Err` when the current line
    /// had to be dropped. An overflow is reported once, on the byte that
    /// overflowed.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Line>, LineError> {
        match byte {
            b'\r' => Ok(None),
            b'\n' => {
                if self.discarding {
                    self.reset();
                    return Ok(None);
                }
                if self.buffer.is_empty() {
                    return Ok(None);
                }
                let result = match core::str::from_utf8(&self.buffer) {
                    Ok(text) => {
                        let mut line = Line::new();
                        // Cannot fail: buffer and line share a capacity
                        let _ = line.push_str(text);
                        Ok(Some(line))
                    }
                    Err(_) => Err(LineError::InvalidUtf8),
                };
                self.buffer.clear();
                result
            }
            _ if self.discarding => Ok(None),
            _ => {
                if self.buffer.push(byte).is_err() {
                    self.buffer.clear();
                    self.discarding = true;
                    return Err(LineError::TooLong);
                }
                Ok(None)
            }
        }
    }
}
