//! Output formatting utilities for the gconsole CLI.
//!
//! This module provides functions for formatting data as tables or JSON.
//! It is organized into submodules by table:
//!
//! - [`roles`] - Role table output formatting
//! - [`role_detail`] - Permissions, caches and principals of one role
//! - [`names`] - Role name typeahead output formatting
//! - [`helpers`] - Common formatting utilities (truncation, health, paging)

pub mod helpers;
mod names;
mod role_detail;
mod roles;

pub use names::{format_names_json, format_names_list};
pub use role_detail::{
    format_caches_table, format_detail_page_json, format_permissions_table,
    format_principals_table,
};
pub use roles::{format_roles_json, format_roles_table};
