use crate::domain::{RawStockFields, StockId};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/stocks` and `PUT /api/stocks/{id}`
///
/// Every field is optional here; which ones are required is decided by the
/// use case.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StockRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub price: Option<PriceInput>,
}

/// Price as sent by the client: `180.5` or `"180.5"`. Any other JSON value
/// is kept as its text and fails price parsing downstream.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl PriceInput {
    pub fn into_text(self) -> String {
        match self {
            PriceInput::Number(n) => n.to_string(),
            PriceInput::Text(s) => s,
            PriceInput::Other(v) => v.to_string(),
        }
    }
}

impl From<StockRequest> for RawStockFields {
    fn from(req: StockRequest) -> Self {
        RawStockFields {
            name: req.name,
            ticker: req.ticker,
            price: req.price.map(PriceInput::into_text),
        }
    }
}

/// Acknowledgement for write operations
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<StockId>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse {
            message: message.into(),
            id: None,
        }
    }

    pub fn with_id(mut self, id: StockId) -> Self {
        self.id = Some(id);
        self
    }
}

/// Error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorResponse {
            error: error.into(),
        }
    }
}
