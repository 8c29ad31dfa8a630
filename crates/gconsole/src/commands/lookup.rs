//! Resolution of user-typed names: search options and role names, with
//! "did you mean" suggestions for near misses.

use grid_console_filter::filter::FilterOption;
use strsim::levenshtein;

use super::{CommandError, Result};

/// Maximum Levenshtein distance to consider a name as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Finds the closest candidate to `query` by Levenshtein distance, ignoring case.
///
/// Exact matches and candidates further than the threshold are not suggested.
pub fn find_similar_name<'a>(
    query: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Option<String> {
    let query_lower = query.to_lowercase();

    let (best_match, best_distance) = candidates
        .filter(|name| !name.is_empty())
        .map(|name| (name, levenshtein(&query_lower, &name.to_lowercase())))
        .min_by_key(|(_, d)| *d)?;

    (best_distance > 0 && best_distance <= MAX_SUGGESTION_DISTANCE)
        .then(|| best_match.to_string())
}

/// Formats the suggestion suffix of a "not found" message.
pub fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(". Did you mean '{s}'?"),
        None => String::new(),
    }
}

/// Resolves a `--by` value to a table's search option, defaulting to the
/// table's first option when absent.
pub fn resolve_option<O: FilterOption>(table: &'static str, input: Option<&str>) -> Result<O> {
    let Some(input) = input else {
        return Ok(O::default_option());
    };

    O::parse(input).ok_or_else(|| {
        let labels = O::ALL.iter().map(|o| o.label());
        CommandError::UnknownOption {
            table,
            input: input.to_string(),
            valid: O::ALL
                .iter()
                .map(|o| format!("\"{}\"", o.label()))
                .collect::<Vec<_>>()
                .join(", "),
            suggestion: find_similar_name(input, labels),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_console_filter::filter::{RoleCachePermissionFilterOption, RoleFilterOption};

    #[test]
    fn test_find_similar_name() {
        let names = ["admin", "observer", "deployer"];
        assert_eq!(
            find_similar_name("obsrver", names.iter().copied()),
            Some("observer".to_string())
        );
        assert_eq!(find_similar_name("ADMN", names.iter().copied()), Some("admin".to_string()));
    }

    #[test]
    fn test_find_similar_name_no_suggestion() {
        let names = ["admin", "observer"];
        assert_eq!(find_similar_name("admin", names.iter().copied()), None);
        assert_eq!(find_similar_name("completely-different", names.iter().copied()), None);
        assert_eq!(find_similar_name("x", std::iter::empty()), None);
    }

    #[test]
    fn test_did_you_mean() {
        assert_eq!(did_you_mean(&Some("admin".into())), ". Did you mean 'admin'?");
        assert_eq!(did_you_mean(&None), "");
    }

    #[test]
    fn test_resolve_option_default() {
        let option: RoleFilterOption = resolve_option("roles", None).unwrap();
        assert_eq!(option, RoleFilterOption::Name);
    }

    #[test]
    fn test_resolve_option_by_label_or_key() {
        let option: RoleCachePermissionFilterOption =
            resolve_option("caches", Some("Cache type")).unwrap();
        assert_eq!(option, RoleCachePermissionFilterOption::CacheType);

        let option: RoleCachePermissionFilterOption =
            resolve_option("caches", Some("health")).unwrap();
        assert_eq!(option, RoleCachePermissionFilterOption::Health);
    }

    #[test]
    fn test_resolve_option_unknown_with_suggestion() {
        let err = resolve_option::<RoleCachePermissionFilterOption>("caches", Some("Helth"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown search option 'Helth' for caches. Valid options: \"Cache name\", \
             \"Cache type\", \"Health\". Did you mean 'Health'?"
        );
    }

    #[test]
    fn test_resolve_option_unknown_without_suggestion() {
        let err = resolve_option::<RoleFilterOption>("roles", Some("owner")).unwrap_err();
        assert!(matches!(err, CommandError::UnknownOption { suggestion: None, .. }));
    }
}
