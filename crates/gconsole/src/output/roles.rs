//! Role table output formatting.

use grid_console_filter::PageView;
use grid_console_model::Role;
use serde::Serialize;

use super::helpers::{empty_message, format_list, format_page_footer, push_header, truncate_str};

/// JSON output structure for one page of a searchable table.
#[derive(Serialize)]
pub struct TablePageOutput<'a, T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<&'a str>,
    pub search: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_by: Option<&'static str>,
    #[serde(flatten)]
    pub page: &'a PageView<'a, T>,
}

/// Formats a page of roles as JSON.
pub fn format_roles_json(
    page: &PageView<'_, Role>,
    search: &str,
    search_by: &'static str,
) -> Result<String, serde_json::Error> {
    let output = TablePageOutput {
        role: None,
        search,
        search_by: Some(search_by),
        page,
    };
    serde_json::to_string_pretty(&output)
}

/// Formats a page of roles as a table.
pub fn format_roles_table(page: &PageView<'_, Role>, search: &str, use_colors: bool) -> String {
    if let Some(message) = empty_message(page, "roles", search) {
        return message;
    }

    let mut output = String::new();
    let header = format!(
        "{:<24} {:<30} {}",
        "Name", "Cache manager permissions", "Cache permissions"
    );
    push_header(&mut output, &header, use_colors);

    for role in &page.items {
        let line = format!(
            "{:<24} {:<30} {}",
            truncate_str(&role.name, 24),
            format_list(&role.cache_manager_permissions, 30),
            format_list(&role.cache_permissions, 40)
        );
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output.push_str(&format_page_footer(page, "roles", use_colors));
    output
}
