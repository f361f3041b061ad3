//! Countdown text formatting

use core::fmt::Write;

use heapless::String;

/// Formatted countdown, "MM:SS" or "MM"
pub type TimeText = String<8>;

/// Format the remaining time
///
/// Minutes and seconds are truncated, so a fresh 25 minute session reads
/// "25:00" and the last second reads "00:00".
pub fn format_remaining(remaining_ms: u32, minutes_only: bool) -> TimeText {
    let minutes = remaining_ms / 60_000;
    let seconds = (remaining_ms % 60_000) / 1_000;

    let mut text = TimeText::new();
    // Longest value is "71582:47" (u32::MAX ms), which fits in 8 bytes
    let _ = if minutes_only {
        write!(text, "{:02}", minutes)
    } else {
        write!(text, "{:02}:{:02}", minutes, seconds)
    };
    text
}
