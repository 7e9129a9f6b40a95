use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid month '{0}': expected two digits between 01 and 12")]
pub struct InvalidMonth(pub String);

/// Month of the year, written as exactly two digits (`01`..`12`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(u8);

impl Month {
    pub fn parse(value: &str) -> Result<Self, InvalidMonth> {
        let bytes = value.as_bytes();
        if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(InvalidMonth(value.to_string()));
        }

        let number = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
        if !(1..=12).contains(&number) {
            return Err(InvalidMonth(value.to_string()));
        }

        Ok(Self(number))
    }

    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }
}

impl FromStr for Month {
    type Err = InvalidMonth;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}
