//! Principals command implementation.
//!
//! Searches and pages the principals mapped to one role. The list has no
//! search option: the term is matched against the principal name itself.

use grid_console_filter::PlainTableView;

use super::{open_role, CommandContext, Result, SnapshotSource};
use crate::cli::TableArgs;
use crate::output::{format_detail_page_json, format_principals_table};

/// Options for the principals command.
#[derive(Debug)]
pub struct PrincipalsOptions {
    /// Role name.
    pub role: String,
    pub table: TableArgs,
}

/// Executes the principals command.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be read or has no detail for the role.
pub fn execute(
    ctx: &CommandContext,
    opts: &PrincipalsOptions,
    source: &SnapshotSource,
) -> Result<()> {
    let snapshot = source.load()?;
    let detail = open_role(&snapshot, &opts.role)?;

    let mut view = PlainTableView::new();
    if let Some(ref search) = opts.table.search {
        view.set_search(search.as_str());
    }
    view.pagination = source.pagination(&opts.table);

    let page = view.render(detail.principals());

    if ctx.json_output {
        let output = format_detail_page_json(detail.role_name(), &page, view.search(), None)?;
        println!("{output}");
    } else if !ctx.quiet {
        print!(
            "{}",
            format_principals_table(detail.role_name(), &page, view.search(), ctx.use_colors)
        );
    }

    Ok(())
}
