//! HTTP API module for the Pay and Withholding Engine.
//!
//! This module provides the REST endpoints the shift-tracker UI calls for
//! pay previews and withholding estimates. The handlers are thin: they
//! translate JSON requests into engine calls and format the results.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PayRequest, WithholdingRequest};
pub use response::ApiError;
pub use state::AppState;
