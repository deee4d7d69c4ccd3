//! Unified error system for the front-of-house service
//!
//! - [`ErrorCode`]: standardized numeric codes
//! - [`ErrorCategory`]: classification of codes by domain
//! - [`AppError`]: error with code, message and optional details
//! - [`ApiResponse`]: body rendered for failed requests
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::TableNotFound);
//! let err = AppError::validation("Seats must be at least 1").with_detail("field", "seats");
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, Some(2));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
