//! Client-side search over console tables.
//!
//! Every table in the console (roles, role permissions, accessible caches,
//! principals) filters the list handed over by its data source the same way:
//!
//! - [`filter_by_term`] - regular-expression search with a literal fallback
//!   for terms that are not valid patterns
//! - [`filter_by_field`] - case-insensitive substring search on one field,
//!   where a list field matches if any of its elements does
//! - [`filter_without_field`] - case-insensitive substring search on plain strings
//! - [`lookup_enum_key_by_value`] - translates a selector label back into the
//!   field key it stands for
//!
//! All of these are pure: they borrow the input, keep its order and never fail.
//!
//! # Example
//!
//! ```
//! use grid_console_filter::filter::{filter_roles, FilterOption, RoleFilterOption};
//! use grid_console_model::Role;
//!
//! let mut admin = Role::new("admin");
//! admin.cache_permissions = vec!["READ".into(), "WRITE".into()];
//! let mut observer = Role::new("observer");
//! observer.cache_permissions = vec!["READ".into()];
//! let roles = vec![admin, observer];
//!
//! let option = RoleFilterOption::from_label("Cache permissions").unwrap();
//! let writers = filter_roles("write", &roles, option);
//! assert_eq!(writers.len(), 1);
//! assert_eq!(writers[0].name, "admin");
//! ```

mod engine;
mod options;
mod searchable;

pub use engine::{
    filter_by_field, filter_by_term, filter_items, filter_roles, filter_without_field, TermMatcher,
};
pub use options::{
    key_by_value_json, lookup_enum_key_by_value, FilterOption, RoleCachePermissionFilterOption,
    RoleFilterOption, RolePermissionFilterOption,
};
pub use searchable::{FieldValue, Searchable};
