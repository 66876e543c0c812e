use crate::domain::entities::{NewStock, StockPatch};
use crate::domain::value_objects::Ticker;
use thiserror::Error;

/// Untyped field values as they arrive from a form or JSON body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawStockFields {
    pub name: Option<String>,
    pub ticker: Option<String>,
    pub price: Option<String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),
}

/// Turns raw input into well-formed stock values. Pure; never touches the store.
///
/// Two rules coexist:
/// - [`validate_new`](Self::validate_new) requires name, ticker and price
///   (create, and both HTML forms).
/// - [`validate_patch`](Self::validate_patch) requires at least one of them
///   (JSON update only).
pub struct StockValidator;

impl StockValidator {
    pub fn validate_new(raw: &RawStockFields) -> Result<NewStock, ValidationError> {
        let name = present(&raw.name).ok_or(ValidationError::MissingField("name"))?;
        let ticker = present(&raw.ticker).ok_or(ValidationError::MissingField("ticker"))?;
        let price = present(&raw.price).ok_or(ValidationError::MissingField("price"))?;

        Ok(NewStock {
            name: name.to_string(),
            ticker: Ticker::new(ticker).map_err(|_| ValidationError::MissingField("ticker"))?,
            price: Self::parse_price(price)?,
        })
    }

    pub fn validate_patch(raw: &RawStockFields) -> Result<StockPatch, ValidationError> {
        let patch = StockPatch {
            name: present(&raw.name).map(str::to_string),
            ticker: present(&raw.ticker)
                .map(Ticker::new)
                .transpose()
                .map_err(|_| ValidationError::MissingField("ticker"))?,
            price: present(&raw.price).map(Self::parse_price).transpose()?,
        };

        if patch.is_empty() {
            return Err(ValidationError::MissingField("name, ticker or price"));
        }
        Ok(patch)
    }

    /// Parse a submitted price. Surrounding whitespace is ignored; NaN and
    /// infinities are rejected since they have no JSON representation.
    pub fn parse_price(raw: &str) -> Result<f64, ValidationError> {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| ValidationError::InvalidPrice(raw.to_string()))
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
