//! Entity models for the data-grid admin console.
//!
//! These types mirror the JSON documents served by the grid's REST API for
//! role-based access control. Field names are serialized in camelCase, and
//! those same camelCase names are the field keys used by the console's table
//! filters.

mod health;
mod role;

pub use health::ComponentHealth;
pub use role::{DetailedRole, Role, RoleCachePermission, RolePermission};
