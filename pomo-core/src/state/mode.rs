//! Session kinds and duration modes

/// Whether the countdown is a work or a rest interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionKind {
    #[default]
    Work,
    Rest,
}

impl SessionKind {
    /// The session that follows this one
    pub fn toggled(self) -> Self {
        match self {
            SessionKind::Work => SessionKind::Rest,
            SessionKind::Rest => SessionKind::Work,
        }
    }
}

/// Work/rest duration pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Mode {
    /// 1 minute work, 1 minute rest
    Quick = 0,
    /// 25 minutes work, 5 minutes rest
    #[default]
    Classic = 1,
    /// 50 minutes work, 10 minutes rest
    Extended = 2,
}

const MINUTE_MS: u32 = 60 * 1000;

impl Mode {
    /// Mode from its index; out-of-range values give `None`
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Mode::Quick),
            1 => Some(Mode::Classic),
            2 => Some(Mode::Extended),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Next mode in the cycle 1/1 -> 25/5 -> 50/10 -> 1/1
    pub fn next(self) -> Self {
        match self {
            Mode::Quick => Mode::Classic,
            Mode::Classic => Mode::Extended,
            Mode::Extended => Mode::Quick,
        }
    }

    /// Work interval length
    pub fn work_ms(self) -> u32 {
        match self {
            Mode::Quick => MINUTE_MS,
            Mode::Classic => 25 * MINUTE_MS,
            Mode::Extended => 50 * MINUTE_MS,
        }
    }

    /// Rest interval length
    pub fn rest_ms(self) -> u32 {
        match self {
            Mode::Quick => MINUTE_MS,
            Mode::Classic => 5 * MINUTE_MS,
            Mode::Extended => 10 * MINUTE_MS,
        }
    }

    /// Interval length for a session kind
    pub fn duration_ms(self, session: SessionKind) -> u32 {
        match session {
            SessionKind::Work => self.work_ms(),
            SessionKind::Rest => self.rest_ms(),
        }
    }

    /// Short label, e.g. "25/5"
    pub fn label(self) -> &'static str {
        match self {
            Mode::Quick => "1/1",
            Mode::Classic => "25/5",
            Mode::Extended => "50/10",
        }
    }
}
