//! Names command implementation.
//!
//! Role name typeahead: the term is a regular expression, matched without
//! regard to case; a term that does not compile is matched literally.

use grid_console_filter::filter::filter_by_term;
use tracing::debug;

use super::{CommandContext, Result, SnapshotSource};
use crate::output::{format_names_json, format_names_list};

/// Role names matching `term`, in snapshot order.
pub fn matching_names<'a>(term: &str, names: &'a [&'a str]) -> Vec<&'a str> {
    filter_by_term(term, names).into_iter().copied().collect()
}

/// Executes the names command.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be read.
pub fn execute(ctx: &CommandContext, term: &str, source: &SnapshotSource) -> Result<()> {
    let snapshot = source.load()?;
    let names = snapshot.role_names();
    let matched = matching_names(term, &names);
    debug!(term, matched = matched.len(), total = names.len(), "matched role names");

    if ctx.json_output {
        println!("{}", format_names_json(term, &matched)?);
    } else if !ctx.quiet {
        print!("{}", format_names_list(&matched));
    }

    Ok(())
}
