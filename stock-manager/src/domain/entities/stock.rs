use crate::domain::value_objects::{StockId, Ticker};
use serde::{Deserialize, Serialize};

/// A persisted stock record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    pub id: StockId,
    pub name: String,
    pub ticker: Ticker,
    pub price: f64,
}

/// A validated stock that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewStock {
    pub name: String,
    pub ticker: Ticker,
    pub price: f64,
}

impl NewStock {
    pub fn with_id(self, id: StockId) -> Stock {
        Stock {
            id,
            name: self.name,
            ticker: self.ticker,
            price: self.price,
        }
    }
}

/// Field changes for an existing stock. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockPatch {
    pub name: Option<String>,
    pub ticker: Option<Ticker>,
    pub price: Option<f64>,
}

impl StockPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.ticker.is_none() && self.price.is_none()
    }

    /// Apply the changes in place; the id is never touched
    pub fn apply(&self, stock: &mut Stock) {
        if let Some(name) = &self.name {
            stock.name = name.clone();
        }
        if let Some(ticker) = &self.ticker {
            stock.ticker = ticker.clone();
        }
        if let Some(price) = self.price {
            stock.price = price;
        }
    }
}

impl From<NewStock> for StockPatch {
    fn from(stock: NewStock) -> Self {
        StockPatch {
            name: Some(stock.name),
            ticker: Some(stock.ticker),
            price: Some(stock.price),
        }
    }
}
