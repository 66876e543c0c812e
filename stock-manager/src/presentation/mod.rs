pub mod html;
pub mod rest;
mod router;

pub use rest::ApiError;
pub use router::{AppState, create_router};
