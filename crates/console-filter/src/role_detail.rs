//! Loading state of the role detail page.
//!
//! The page shows one role at a time. Asking for a role starts a load only
//! when the name is non-empty and differs from the role already shown; the
//! data source then completes the load with the role's detail or an error.

use grid_console_model::{DetailedRole, RoleCachePermission, RolePermission};
use tracing::debug;

/// Where the role detail page currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RoleDetailState {
    /// No role requested yet.
    #[default]
    Idle,
    /// A role was requested and its detail is being fetched.
    Loading { role: String },
    /// The role's detail is available.
    Loaded(DetailedRole),
    /// Fetching the role failed. Requesting the same role again is a no-op,
    /// so a failed role stays failed until another role is requested.
    Failed { role: String, error: String },
}

impl RoleDetailState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests the detail of `name`.
    ///
    /// Returns true if a load was started. Empty names and the role already
    /// shown (or being loaded) are ignored. That includes a role whose load
    /// failed: retrying it takes a request for another role first.
    pub fn load_role(&mut self, name: &str) -> bool {
        if name.is_empty() || self.role_name() == name {
            return false;
        }
        debug!(role = name, "loading role detail");
        *self = RoleDetailState::Loading {
            role: name.to_string(),
        };
        true
    }

    /// Completes a pending load.
    ///
    /// The result is dropped if no load is pending or if it belongs to a role
    /// other than the one being loaded. Returns true if the state changed.
    pub fn complete(&mut self, result: Result<DetailedRole, String>) -> bool {
        let RoleDetailState::Loading { role } = self else {
            return false;
        };

        match result {
            Ok(detail) if detail.name == *role => {
                *self = RoleDetailState::Loaded(detail);
                true
            }
            Ok(detail) => {
                debug!(expected = %role, got = %detail.name, "discarding detail for another role");
                false
            }
            Err(error) => {
                *self = RoleDetailState::Failed {
                    role: role.clone(),
                    error,
                };
                true
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RoleDetailState::Loading { .. })
    }

    /// Name of the role shown, loading or failed; empty when idle.
    pub fn role_name(&self) -> &str {
        match self {
            RoleDetailState::Idle => "",
            RoleDetailState::Loading { role } | RoleDetailState::Failed { role, .. } => role,
            RoleDetailState::Loaded(detail) => &detail.name,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RoleDetailState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn detail(&self) -> Option<&DetailedRole> {
        match self {
            RoleDetailState::Loaded(detail) => Some(detail),
            _ => None,
        }
    }

    pub fn description(&self) -> &str {
        self.detail().map_or("", |d| d.description.as_str())
    }

    pub fn permissions(&self) -> &[RolePermission] {
        self.detail()
            .map(|d| d.permissions.as_slice())
            .unwrap_or_default()
    }

    pub fn cache_permissions(&self) -> &[RoleCachePermission] {
        self.detail()
            .map(|d| d.role_cache_permissions.as_slice())
            .unwrap_or_default()
    }

    pub fn principals(&self) -> &[String] {
        self.detail()
            .map(|d| d.principals.as_slice())
            .unwrap_or_default()
    }
}
