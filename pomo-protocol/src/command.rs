//! Inbound bot commands

/// A command received from the chat bot or console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BotCommand {
    /// `/start` - greeting, answered with the help text
    Start,
    /// `/help` - list of commands
    Help,
    /// `/status` - current timer phase and mode
    Status,
    /// `/work` - start a work session
    Work,
    /// `/pause` - pause the running countdown
    Pause,
    /// `/resume` - resume a paused countdown
    Resume,
    /// `/stop` - stop the timer
    Stop,
    /// `/mode` - cycle the duration mode
    Mode,
}

/// One-shot command delivered to the timer loop
///
/// These are the only commands that change timer state. Each one maps to a
/// single flag in the command inbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum RemoteCommand {
    Start = 0x01,
    Pause = 0x02,
    Resume = 0x04,
    Stop = 0x08,
    CycleMode = 0x10,
}

impl RemoteCommand {
    /// All commands in the order the timer loop applies them
    pub const ALL: [RemoteCommand; 5] = [
        RemoteCommand::Start,
        RemoteCommand::Pause,
        RemoteCommand::Resume,
        RemoteCommand::Stop,
        RemoteCommand::CycleMode,
    ];

    /// Flag bit for this command
    pub fn bit(self) -> u8 {
        self as u8
    }
}

impl BotCommand {
    /// Parse a line of chat text
    ///
    /// Surrounding whitespace is ignored and matching is case-insensitive.
    /// Anything that is not a known command yields `None`.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        const TABLE: [(&str, BotCommand); 8] = [
            ("/start", BotCommand::Start),
            ("/help", BotCommand::Help),
            ("/status", BotCommand::Status),
            ("/work", BotCommand::Work),
            ("/pause", BotCommand::Pause),
            ("/resume", BotCommand::Resume),
            ("/stop", BotCommand::Stop),
            ("/mode", BotCommand::Mode),
        ];

        TABLE
            .iter()
            .find(|(word, _)| word.eq_ignore_ascii_case(text))
            .map(|&(_, cmd)| cmd)
    }

    /// The inbox flag this command raises, if it controls the timer
    pub fn remote(&self) -> Option<RemoteCommand> {
        match self {
            BotCommand::Work => Some(RemoteCommand::Start),
            BotCommand::Pause => Some(RemoteCommand::Pause),
            BotCommand::Resume => Some(RemoteCommand::Resume),
            BotCommand::Stop => Some(RemoteCommand::Stop),
            BotCommand::Mode => Some(RemoteCommand::CycleMode),
            BotCommand::Start | BotCommand::Help | BotCommand::Status => None,
        }
    }
}
