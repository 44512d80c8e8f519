use derive_more::{AsRef, Debug, Display};

/// Leading `DD-MM-YYYY HH:MM:SS.mmm ±HHMM` stamp of a health reporter line.
/// Compared as text only, never parsed into a date.
#[derive(Debug, Display, AsRef, Clone, PartialEq, Eq, Hash)]
pub struct TimestampPrefix(String);

impl TimestampPrefix {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for TimestampPrefix {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

/// Component color ranked `Green < Yellow < Red`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    #[display("green")]
    Green,
    #[display("yellow")]
    Yellow,
    #[display("red")]
    Red,
}

impl Color {
    /// Expects an already lower-cased name.
    pub fn try_from_name(name: &str) -> Option<Self> {
        match name {
            "green" => Some(Self::Green),
            "yellow" => Some(Self::Yellow),
            "red" => Some(Self::Red),
            _ => None,
        }
    }
}

/// Local check state as understood by the monitoring agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Warn,
    Crit,
    Unknown,
}

impl Status {
    pub fn code(self) -> u8 {
        match self {
            Self::Ok => 0,
            Self::Warn => 1,
            Self::Crit => 2,
            Self::Unknown => 3,
        }
    }
    pub fn text(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warn => "WARN",
            Self::Crit => "CRIT",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl From<Color> for Status {
    fn from(value: Color) -> Self {
        match value {
            Color::Green => Self::Ok,
            Color::Yellow => Self::Warn,
            Color::Red => Self::Crit,
        }
    }
}
