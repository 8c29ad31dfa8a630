//! Field access for filterable entities.

use grid_console_model::{DetailedRole, Role, RoleCachePermission, RolePermission};
use serde_json::Value;

/// The value of a searchable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// A scalar string field.
    Text(&'a str),
    /// A list of strings (e.g. permission names).
    List(&'a [String]),
    /// A JSON array; only its string elements are searched.
    Json(&'a [Value]),
}

impl FieldValue<'_> {
    /// Returns true if the field contains `needle`, which must already be lowercase.
    ///
    /// A list matches when any of its elements does, so an empty list never matches.
    pub(crate) fn contains_lowercase(&self, needle: &str) -> bool {
        match self {
            FieldValue::Text(text) => text.to_lowercase().contains(needle),
            FieldValue::List(values) => values.iter().any(|v| v.to_lowercase().contains(needle)),
            FieldValue::Json(values) => values
                .iter()
                .filter_map(Value::as_str)
                .any(|v| v.to_lowercase().contains(needle)),
        }
    }
}

/// An entity that can be matched by the table filters.
///
/// Field keys are the camelCase names the entity is serialized with.
pub trait Searchable {
    /// Returns the field named `key`, or `None` if the entity has no such field.
    fn field(&self, key: &str) -> Option<FieldValue<'_>>;

    /// Returns the entity's own string form, for entities that are plain strings.
    fn own_text(&self) -> Option<&str> {
        None
    }
}

impl Searchable for String {
    fn field(&self, _key: &str) -> Option<FieldValue<'_>> {
        None
    }

    fn own_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl Searchable for &str {
    fn field(&self, _key: &str) -> Option<FieldValue<'_>> {
        None
    }

    fn own_text(&self) -> Option<&str> {
        Some(*self)
    }
}

/// JSON records are searchable on their string and array members; every other
/// member type is treated as absent.
impl Searchable for Value {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match self.as_object()?.get(key)? {
            Value::String(s) => Some(FieldValue::Text(s)),
            Value::Array(values) => Some(FieldValue::Json(values)),
            _ => None,
        }
    }

    fn own_text(&self) -> Option<&str> {
        self.as_str()
    }
}

impl Searchable for Role {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "name" => Some(FieldValue::Text(&self.name)),
            "description" => Some(FieldValue::Text(&self.description)),
            "cacheManagerPermissions" => Some(FieldValue::List(&self.cache_manager_permissions)),
            "cachePermissions" => Some(FieldValue::List(&self.cache_permissions)),
            _ => None,
        }
    }
}

impl Searchable for RolePermission {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "name" => Some(FieldValue::Text(&self.name)),
            "category" => Some(FieldValue::Text(&self.category)),
            "description" => Some(FieldValue::Text(&self.description)),
            _ => None,
        }
    }
}

impl Searchable for RoleCachePermission {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "cacheName" => Some(FieldValue::Text(&self.cache_name)),
            "cacheType" => Some(FieldValue::Text(&self.cache_type)),
            "health" => Some(FieldValue::Text(&self.health)),
            _ => None,
        }
    }
}

impl Searchable for DetailedRole {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "name" => Some(FieldValue::Text(&self.name)),
            "description" => Some(FieldValue::Text(&self.description)),
            "principals" => Some(FieldValue::List(&self.principals)),
            _ => None,
        }
    }
}
