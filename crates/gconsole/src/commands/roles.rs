//! Roles command implementation.
//!
//! Searches and pages the access management role table of the snapshot.

use grid_console_filter::filter::{FilterOption, RoleFilterOption};
use grid_console_filter::TableView;
use tracing::debug;

use super::lookup::resolve_option;
use super::{CommandContext, Result, SnapshotSource};
use crate::cli::TableArgs;
use crate::output::helpers::format_loaded_at;
use crate::output::{format_roles_json, format_roles_table};

/// Options for the roles command.
#[derive(Debug)]
pub struct RolesOptions {
    /// Search option, by label or key.
    pub by: Option<String>,
    pub table: TableArgs,
}

/// Executes the roles command.
///
/// # Errors
///
/// Returns an error if the search option is unknown or the snapshot cannot be read.
pub fn execute(ctx: &CommandContext, opts: &RolesOptions, source: &SnapshotSource) -> Result<()> {
    let option: RoleFilterOption = resolve_option("roles", opts.by.as_deref())?;
    let snapshot = source.load()?;

    let mut view: TableView<RoleFilterOption> = TableView::new();
    view.select_option(option);
    if let Some(ref search) = opts.table.search {
        view.set_search(search.as_str());
    }
    view.pagination = source.pagination(&opts.table);

    let page = view.render(&snapshot.roles);
    debug!(
        option = option.key(),
        matched = page.filtered,
        total = page.total,
        "rendered role table"
    );

    if ctx.json_output {
        let output = format_roles_json(&page, view.search(), option.label())?;
        println!("{output}");
    } else if !ctx.quiet {
        if ctx.verbose {
            eprintln!(
                "Snapshot {} taken {}",
                source.store.path().display(),
                format_loaded_at(snapshot.loaded_at.as_ref())
            );
        }
        print!("{}", format_roles_table(&page, view.search(), ctx.use_colors));
    }

    Ok(())
}
