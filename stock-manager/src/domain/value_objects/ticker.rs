use serde::{Deserialize, Serialize};
use std::fmt;

/// Short identifier of a stock, unique across the table.
///
/// Stored exactly as submitted: no case folding and no character rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    pub fn new(value: impl Into<String>) -> Result<Self, &'static str> {
        let s: String = value.into();
        if s.is_empty() {
            return Err("Ticker cannot be empty");
        }
        Ok(Ticker(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Ticker {
    type Error = &'static str;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ticker::new(value)
    }
}

impl TryFrom<String> for Ticker {
    type Error = &'static str;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Ticker::new(value)
    }
}

impl From<Ticker> for String {
    fn from(ticker: Ticker) -> String {
        ticker.0
    }
}
