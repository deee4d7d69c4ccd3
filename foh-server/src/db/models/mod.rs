//! Database Models
//!
//! Persisted entity shapes. Enums and request payloads live in
//! `shared::models`; these structs add the record ids and server-owned fields.

// Serde helpers
pub mod serde_helpers;

// Auth
pub mod user;

// Catalog
pub mod menu_item;

// Floor
pub mod dining_table;

// Orders
pub mod order;

// Re-exports
pub use dining_table::DiningTable;
pub use menu_item::MenuItem;
pub use order::{Order, OrderItem};
pub use user::User;
