//! Search, filter and paging for the data-grid admin console's tables.
//!
//! The [`filter`] module holds the pure filter functions every table uses.
//! [`TableView`] and [`RoleDetailState`] keep the state a table or the role
//! detail page needs between two user actions, and [`SnapshotStore`] reads the
//! entity lists they are applied to from a local JSON snapshot.

pub mod filter;
pub mod pagination;
pub mod role_detail;
pub mod store;
pub mod view;

use chrono::{DateTime, Utc};
use grid_console_model::{DetailedRole, Role};
use serde::{Deserialize, Serialize};

pub use pagination::Pagination;
pub use role_detail::RoleDetailState;
pub use store::{SnapshotStore, StoreError};
pub use view::{PageView, PlainTableView, TableView};

/// Access-management data captured from a cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// When the data was captured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loaded_at: Option<DateTime<Utc>>,

    /// Roles as listed in the access management table.
    #[serde(default)]
    pub roles: Vec<Role>,

    /// Detail of the roles that have been opened.
    #[serde(default)]
    pub role_details: Vec<DetailedRole>,
}

impl Snapshot {
    /// Finds a role's detail by name, ignoring case.
    pub fn role_detail(&self, name: &str) -> Option<&DetailedRole> {
        self.role_details
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
    }

    pub fn role_names(&self) -> Vec<&str> {
        self.roles.iter().map(|r| r.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_deserialize_minimal() {
        let snapshot: Snapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.loaded_at.is_none());
        assert!(snapshot.roles.is_empty());
        assert!(snapshot.role_details.is_empty());
    }

    #[test]
    fn test_snapshot_deserialize_full() {
        let json = r#"{
            "loadedAt": "2026-10-01T08:30:00Z",
            "roles": [{"name": "admin", "cachePermissions": ["ALL"]}],
            "roleDetails": [{"name": "admin", "principals": ["root"]}]
        }"#;

        let snapshot: Snapshot = serde_json::from_str(json).unwrap();
        assert!(snapshot.loaded_at.is_some());
        assert_eq!(snapshot.role_names(), vec!["admin"]);
        assert_eq!(snapshot.role_detail("ADMIN").unwrap().principals, vec!["root"]);
        assert!(snapshot.role_detail("observer").is_none());
    }

    #[test]
    fn test_snapshot_serialize_skips_missing_timestamp() {
        let json = serde_json::to_string(&Snapshot::default()).unwrap();
        assert!(!json.contains("loadedAt"));
        assert!(json.contains("roleDetails"));
    }
}
