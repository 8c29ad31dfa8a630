//! Caches command implementation.
//!
//! Searches and pages the caches one role can access.

use grid_console_filter::filter::{FilterOption, RoleCachePermissionFilterOption};
use grid_console_filter::TableView;

use super::lookup::resolve_option;
use super::{open_role, CommandContext, Result, SnapshotSource};
use crate::cli::TableArgs;
use crate::output::{format_caches_table, format_detail_page_json};

/// Options for the caches command.
#[derive(Debug)]
pub struct CachesOptions {
    /// Role name.
    pub role: String,
    /// Search option, by label or key.
    pub by: Option<String>,
    pub table: TableArgs,
}

/// Executes the caches command.
///
/// # Errors
///
/// Returns an error if the search option is unknown, the snapshot cannot be
/// read, or it has no detail for the role.
pub fn execute(ctx: &CommandContext, opts: &CachesOptions, source: &SnapshotSource) -> Result<()> {
    let option: RoleCachePermissionFilterOption = resolve_option("caches", opts.by.as_deref())?;
    let snapshot = source.load()?;
    let detail = open_role(&snapshot, &opts.role)?;

    let mut view: TableView<RoleCachePermissionFilterOption> = TableView::new();
    view.select_option(option);
    if let Some(ref search) = opts.table.search {
        view.set_search(search.as_str());
    }
    view.pagination = source.pagination(&opts.table);

    let page = view.render(detail.cache_permissions());

    if ctx.json_output {
        let output =
            format_detail_page_json(detail.role_name(), &page, view.search(), Some(option.label()))?;
        println!("{output}");
    } else if !ctx.quiet {
        print!(
            "{}",
            format_caches_table(detail.role_name(), &page, view.search(), ctx.use_colors)
        );
    }

    Ok(())
}
