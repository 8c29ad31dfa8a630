//! Output formatting for the tables of the role detail page.

use grid_console_filter::PageView;
use grid_console_model::{RoleCachePermission, RolePermission};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::{
    empty_message, format_health, format_page_footer, push_header, truncate_str,
};
use super::roles::TablePageOutput;

/// Formats a page of any role detail table as JSON.
pub fn format_detail_page_json<T: Serialize>(
    role: &str,
    page: &PageView<'_, T>,
    search: &str,
    search_by: Option<&'static str>,
) -> Result<String, serde_json::Error> {
    let output = TablePageOutput {
        role: Some(role),
        search,
        search_by,
        page,
    };
    serde_json::to_string_pretty(&output)
}

/// Title line naming the role and its description.
fn push_title(output: &mut String, role: &str, description: &str, use_colors: bool) {
    let title = if description.is_empty() {
        role.to_string()
    } else {
        format!("{role} - {description}")
    };
    if use_colors {
        output.push_str(&format!("{}\n\n", title.bold()));
    } else {
        output.push_str(&title);
        output.push_str("\n\n");
    }
}

/// Formats a page of role permissions as a table.
pub fn format_permissions_table(
    role: &str,
    description: &str,
    page: &PageView<'_, RolePermission>,
    search: &str,
    use_colors: bool,
) -> String {
    let mut output = String::new();
    push_title(&mut output, role, description, use_colors);
    if let Some(message) = empty_message(page, "permissions", search) {
        output.push_str(&message);
        return output;
    }

    let header = format!("{:<24} {:<20} {}", "Name", "Category", "Description");
    push_header(&mut output, &header, use_colors);

    for permission in &page.items {
        let line = format!(
            "{:<24} {:<20} {}",
            truncate_str(&permission.name, 24),
            truncate_str(&permission.category, 20),
            truncate_str(&permission.description, 50)
        );
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output.push_str(&format_page_footer(page, "permissions", use_colors));
    output
}

/// Formats a page of the caches a role can access as a table.
pub fn format_caches_table(
    role: &str,
    page: &PageView<'_, RoleCachePermission>,
    search: &str,
    use_colors: bool,
) -> String {
    let mut output = String::new();
    push_title(&mut output, role, "", use_colors);
    if let Some(message) = empty_message(page, "caches", search) {
        output.push_str(&message);
        return output;
    }

    let header = format!("{:<30} {:<16} {}", "Cache name", "Type", "Health");
    push_header(&mut output, &header, use_colors);

    for cache in &page.items {
        let line = format!(
            "{:<30} {:<16} {}",
            truncate_str(&cache.cache_name, 30),
            truncate_str(&cache.cache_type, 16),
            format_health(&cache.health, use_colors)
        );
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output.push_str(&format_page_footer(page, "caches", use_colors));
    output
}

/// Formats a page of a role's principals, one per line.
pub fn format_principals_table(
    role: &str,
    page: &PageView<'_, String>,
    search: &str,
    use_colors: bool,
) -> String {
    let mut output = String::new();
    push_title(&mut output, role, "", use_colors);
    if let Some(message) = empty_message(page, "principals", search) {
        output.push_str(&message);
        return output;
    }

    push_header(&mut output, "Principal", use_colors);
    for principal in &page.items {
        output.push_str(principal);
        output.push('\n');
    }

    output.push_str(&format_page_footer(page, "principals", use_colors));
    output
}
