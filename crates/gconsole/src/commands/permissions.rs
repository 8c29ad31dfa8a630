//! Permissions command implementation.
//!
//! Searches and pages the permissions of one role.

use grid_console_filter::filter::{FilterOption, RolePermissionFilterOption};
use grid_console_filter::TableView;

use super::lookup::resolve_option;
use super::{open_role, CommandContext, Result, SnapshotSource};
use crate::cli::TableArgs;
use crate::output::{format_detail_page_json, format_permissions_table};

/// Options for the permissions command.
#[derive(Debug)]
pub struct PermissionsOptions {
    /// Role name.
    pub role: String,
    /// Search option, by label or key.
    pub by: Option<String>,
    pub table: TableArgs,
}

/// Executes the permissions command.
///
/// # Errors
///
/// Returns an error if the search option is unknown, the snapshot cannot be
/// read, or it has no detail for the role.
pub fn execute(
    ctx: &CommandContext,
    opts: &PermissionsOptions,
    source: &SnapshotSource,
) -> Result<()> {
    let option: RolePermissionFilterOption = resolve_option("permissions", opts.by.as_deref())?;
    let snapshot = source.load()?;
    let detail = open_role(&snapshot, &opts.role)?;

    let mut view: TableView<RolePermissionFilterOption> = TableView::new();
    view.select_option(option);
    if let Some(ref search) = opts.table.search {
        view.set_search(search.as_str());
    }
    view.pagination = source.pagination(&opts.table);

    let page = view.render(detail.permissions());

    if ctx.json_output {
        let output =
            format_detail_page_json(detail.role_name(), &page, view.search(), Some(option.label()))?;
        println!("{output}");
    } else if !ctx.quiet {
        print!(
            "{}",
            format_permissions_table(
                detail.role_name(),
                detail.description(),
                &page,
                view.search(),
                ctx.use_colors
            )
        );
    }

    Ok(())
}
