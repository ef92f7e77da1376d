//! HTTP API module for the Work-Calendar Engine.
//!
//! This module exposes the duration engine and attendance metrics over
//! REST endpoints backed by the loaded calendar.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AttendanceRequest, DurationRequest};
pub use response::{ApiError, AttendanceResponse, DurationResponse};
pub use state::AppState;
