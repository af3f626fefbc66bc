//! Shared types for the tiffin booking platform
//!
//! Common types used across multiple crates: data models, the unified
//! error system, and value types (days of week).

pub mod error;
pub mod models;
pub mod types;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use types::DayOfWeek;
