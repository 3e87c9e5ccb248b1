//! HTTP API module for the bonus engine.
//!
//! This module exposes the monthly bonus calculation, the perfect-week
//! check and the active policy over REST.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AttendanceRequest, BonusCalculationRequest, MAX_MILES_PER_ENTRY, MAX_MONEY_AMOUNT,
    PerfectWeekCheckRequest,
};
pub use response::{ApiError, ApiErrorResponse, BonusCalculationResponse};
pub use state::AppState;
