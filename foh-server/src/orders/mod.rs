//! Order lifecycle
//!
//! - **rules**: pure decisions linking order, item and table status
//! - **money**: decimal-precise totals
//! - **service**: applies the rules against the repositories
//!
//! ```text
//! Handler → OrderService → rules / money
//!                ↓
//!     OrderRepository · DiningTableRepository · MenuItemRepository
//! ```

pub mod money;
pub mod rules;
pub mod service;

pub use service::OrderService;
