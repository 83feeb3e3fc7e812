//! Utility modules: errors, logging, time parsing, input validation

pub mod error;
pub mod logger;
pub mod time;
pub mod validation;

pub use error::{AppError, AppResponse, AppResult, ok};
