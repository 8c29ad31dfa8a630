//! Search options offered by each table's filter selector.
//!
//! Each option pairs the field key consumed by
//! [`filter_by_field`](super::filter_by_field) with the label shown to the
//! user. Selections come back from the UI as labels, so translating them to
//! keys goes through [`lookup_enum_key_by_value`].

use std::fmt;

use serde_json::Value;

/// Returns the first key in `mapping` whose value equals `value`.
///
/// Returns `None` when no entry matches; lookup never fails.
///
/// # Example
///
/// ```
/// use grid_console_filter::filter::lookup_enum_key_by_value;
///
/// let mapping = [("name", "Name"), ("type", "Type")];
/// assert_eq!(lookup_enum_key_by_value(mapping, "Type"), Some("type"));
/// assert_eq!(lookup_enum_key_by_value(mapping, "Unknown"), None);
/// ```
pub fn lookup_enum_key_by_value<K, V, Q, I>(mapping: I, value: Q) -> Option<K>
where
    I: IntoIterator<Item = (K, V)>,
    V: PartialEq<Q>,
{
    mapping
        .into_iter()
        .find(|(_, v)| *v == value)
        .map(|(k, _)| k)
}

/// Reverse lookup over a JSON object of `key -> label` strings.
///
/// Anything other than an object is treated as an empty mapping.
pub fn key_by_value_json<'a>(mapping: &'a Value, value: &str) -> Option<&'a str> {
    let object = mapping.as_object()?;
    lookup_enum_key_by_value(
        object
            .iter()
            .filter_map(|(k, v)| Some((k.as_str(), v.as_str()?))),
        value,
    )
}

/// A selectable search option for one table.
pub trait FilterOption: Copy + Eq + fmt::Debug + 'static {
    /// Every option, in the order the selector lists them. The first one is
    /// the default.
    const ALL: &'static [Self];

    /// Field key the option filters on.
    fn key(&self) -> &'static str;

    /// Label shown in the selector.
    fn label(&self) -> &'static str;

    /// The option selected when a table is first shown.
    fn default_option() -> Self {
        Self::ALL[0]
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|o| o.key() == key)
    }

    /// Resolves a selector label back to its option.
    fn from_label(label: &str) -> Option<Self> {
        let key = lookup_enum_key_by_value(Self::ALL.iter().map(|o| (o.key(), o.label())), label)?;
        Self::from_key(key)
    }

    /// Accepts a label or a key, ignoring case.
    fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::from_label(input).or_else(|| Self::from_key(input)).or_else(|| {
            Self::ALL.iter().copied().find(|o| {
                o.label().eq_ignore_ascii_case(input) || o.key().eq_ignore_ascii_case(input)
            })
        })
    }
}

macro_rules! filter_option {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => ($key:literal, $label:literal)),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl FilterOption for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn key(&self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }

            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                <Self as FilterOption>::default_option()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

filter_option! {
    /// Search options of the role table.
    RoleFilterOption {
        Name => ("name", "Name"),
        CacheManagerPermissions => ("cacheManagerPermissions", "Cache manager permissions"),
        CachePermissions => ("cachePermissions", "Cache permissions"),
    }
}

filter_option! {
    /// Search options of a role's permission table.
    RolePermissionFilterOption {
        Name => ("name", "Name"),
        Category => ("category", "Category"),
        Description => ("description", "Description"),
    }
}

filter_option! {
    /// Search options of a role's accessible-cache table.
    RoleCachePermissionFilterOption {
        CacheName => ("cacheName", "Cache name"),
        CacheType => ("cacheType", "Cache type"),
        Health => ("health", "Health"),
    }
}
