use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier of a stock row
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockId(i64);

impl StockId {
    pub const fn new(value: i64) -> Self {
        StockId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for StockId {
    fn from(value: i64) -> Self {
        StockId(value)
    }
}

impl From<StockId> for i64 {
    fn from(id: StockId) -> i64 {
        id.0
    }
}

impl fmt::Display for StockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
