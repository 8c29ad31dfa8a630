//! Role, permission and principal models.

use serde::{Deserialize, Serialize};

/// A security role as listed in the access management table.
///
/// # Examples
///
/// ```
/// use grid_console_model::Role;
///
/// let json = r#"{
///     "name": "deployer",
///     "cacheManagerPermissions": ["CREATE", "MONITOR"]
/// }"#;
///
/// let role: Role = serde_json::from_str(json).unwrap();
/// assert_eq!(role.name, "deployer");
/// assert!(role.cache_permissions.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Role name, unique within a cluster.
    pub name: String,

    /// Free-form description.
    #[serde(default)]
    pub description: String,

    /// Permissions granted on the cache manager (e.g. `ADMIN`, `CREATE`).
    #[serde(default)]
    pub cache_manager_permissions: Vec<String>,

    /// Permissions granted on caches (e.g. `READ`, `WRITE`).
    #[serde(default)]
    pub cache_permissions: Vec<String>,
}

impl Role {
    /// Creates a role with no description and no permissions.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            cache_manager_permissions: Vec::new(),
            cache_permissions: Vec::new(),
        }
    }
}

/// A single permission carried by a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePermission {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
}

/// A cache the role can access, with the cache's current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleCachePermission {
    pub cache_name: String,
    #[serde(default)]
    pub cache_type: String,
    /// Raw health string as reported by the server; see
    /// [`ComponentHealth`](crate::ComponentHealth) for the known values.
    #[serde(default)]
    pub health: String,
}

/// Full detail of one role: its permissions, reachable caches and principals.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedRole {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub permissions: Vec<RolePermission>,

    #[serde(default)]
    pub role_cache_permissions: Vec<RoleCachePermission>,

    /// Principal names mapped to this role.
    #[serde(default)]
    pub principals: Vec<String>,
}
