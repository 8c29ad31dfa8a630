//! Term matching and the filter functions behind every console table.

use grid_console_model::Role;
use regex::{Regex, RegexBuilder};
use tracing::debug;

use super::options::{FilterOption, RoleFilterOption};
use super::searchable::Searchable;

/// A compiled search term.
///
/// The term is first tried as a case-insensitive regular expression. When it
/// does not compile it is escaped and matched literally, so building a matcher
/// never fails.
///
/// # Example
///
/// ```
/// use grid_console_filter::filter::TermMatcher;
///
/// let matcher = TermMatcher::new("^cache-[0-9]+$");
/// assert!(matcher.is_match("CACHE-42"));
///
/// // An unbalanced group is not a valid pattern: matched literally instead.
/// let matcher = TermMatcher::new("a(");
/// assert!(matcher.is_match("data(1)"));
/// assert!(!matcher.is_match("data"));
/// ```
#[derive(Debug, Clone)]
pub struct TermMatcher {
    kind: MatcherKind,
}

#[derive(Debug, Clone)]
enum MatcherKind {
    Everything,
    Pattern(Regex),
    /// Last resort when even the escaped term exceeds the regex size limits.
    Substring(String),
}

impl TermMatcher {
    /// Compiles `term`. An empty term matches everything.
    pub fn new(term: &str) -> Self {
        if term.is_empty() {
            return Self {
                kind: MatcherKind::Everything,
            };
        }

        let kind = match case_insensitive(term) {
            Ok(re) => MatcherKind::Pattern(re),
            Err(err) => {
                debug!(term, error = %err, "search term is not a valid pattern, matching literally");
                match case_insensitive(&regex::escape(term)) {
                    Ok(re) => MatcherKind::Pattern(re),
                    Err(err) => {
                        debug!(error = %err, "escaped search term rejected, using substring match");
                        MatcherKind::Substring(term.to_lowercase())
                    }
                }
            }
        };

        Self { kind }
    }

    /// Returns true if `text` contains a match for the term.
    pub fn is_match(&self, text: &str) -> bool {
        match &self.kind {
            MatcherKind::Everything => true,
            MatcherKind::Pattern(re) => re.is_match(text),
            MatcherKind::Substring(needle) => text.to_lowercase().contains(needle.as_str()),
        }
    }

    /// Returns true if this matcher accepts every input.
    pub fn matches_everything(&self) -> bool {
        matches!(self.kind, MatcherKind::Everything)
    }
}

fn case_insensitive(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

/// Filters plain strings by a regular-expression search term.
///
/// Invalid patterns are matched literally; an empty term returns every entity.
pub fn filter_by_term<'a, S: AsRef<str>>(term: &str, entities: &'a [S]) -> Vec<&'a S> {
    let matcher = TermMatcher::new(term);
    if matcher.matches_everything() {
        return entities.iter().collect();
    }
    entities
        .iter()
        .filter(|e| matcher.is_match(e.as_ref()))
        .collect()
}

/// Filters entities whose `field_key` field contains `term`, ignoring case.
///
/// A list field matches when any element contains the term. Entities that do
/// not have the field are left out of the result.
pub fn filter_by_field<'a, T: Searchable>(
    term: &str,
    entities: &'a [T],
    field_key: &str,
) -> Vec<&'a T> {
    let needle = term.to_lowercase();
    let mut missing = 0usize;

    let matched = entities
        .iter()
        .filter(|entity| match entity.field(field_key) {
            Some(value) => value.contains_lowercase(&needle),
            None => {
                missing += 1;
                false
            }
        })
        .collect();

    if missing > 0 {
        debug!(field = field_key, missing, "entities without the filtered field were excluded");
    }
    matched
}

/// Filters plain strings that contain `term`, ignoring case.
pub fn filter_without_field<'a, S: AsRef<str>>(term: &str, entities: &'a [S]) -> Vec<&'a S> {
    let needle = term.to_lowercase();
    entities
        .iter()
        .filter(|e| e.as_ref().to_lowercase().contains(&needle))
        .collect()
}

/// Filters a table's entities, on one field when `field` is given and on the
/// entities' own text otherwise.
pub fn filter_items<'a, T: Searchable>(
    term: &str,
    entities: &'a [T],
    field: Option<&str>,
) -> Vec<&'a T> {
    if let Some(key) = field {
        return filter_by_field(term, entities, key);
    }

    let needle = term.to_lowercase();
    entities
        .iter()
        .filter(|e| {
            e.own_text()
                .is_some_and(|text| text.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Filters the role table by the selected search option.
pub fn filter_roles<'a>(term: &str, roles: &'a [Role], option: RoleFilterOption) -> Vec<&'a Role> {
    filter_by_field(term, roles, option.key())
}
