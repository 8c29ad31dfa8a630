//! Common helper functions for output formatting.

use chrono::{DateTime, Local, Utc};
use grid_console_filter::PageView;
use grid_console_model::ComponentHealth;
use owo_colors::OwoColorize;

/// Truncates a string to a maximum number of characters.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Joins a permission list for a table cell.
pub fn format_list(values: &[String], max_len: usize) -> String {
    truncate_str(&values.join(", "), max_len)
}

/// Formats a component health for display.
///
/// Unrecognized values are shown as-is, uncolored.
pub fn format_health(raw: &str, use_colors: bool) -> String {
    let Ok(health) = raw.parse::<ComponentHealth>() else {
        return raw.to_string();
    };
    let label = health.as_str();

    if !use_colors {
        return label.to_string();
    }
    match health {
        ComponentHealth::Healthy => label.green().to_string(),
        ComponentHealth::HealthyRebalancing => label.blue().to_string(),
        ComponentHealth::Degraded => label.yellow().to_string(),
        ComponentHealth::Failed => label.red().to_string(),
        ComponentHealth::Unknown => label.dimmed().to_string(),
    }
}

/// Formats a snapshot timestamp in local time.
pub fn format_loaded_at(loaded_at: Option<&DateTime<Utc>>) -> String {
    match loaded_at {
        Some(at) => at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        None => "unknown".to_string(),
    }
}

/// Pushes a table header line, dimmed when colors are enabled.
pub fn push_header(output: &mut String, header: &str, use_colors: bool) {
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(header);
        output.push('\n');
    }
}

/// Message shown instead of a table with no rows.
///
/// An empty data source and a search that excluded everything read
/// differently.
pub fn empty_message<T>(page: &PageView<'_, T>, entity: &str, search: &str) -> Option<String> {
    if page.is_source_empty() {
        Some(format!("No {entity} found.\n"))
    } else if page.is_filtered_out() {
        Some(format!(
            "No {entity} match '{search}'. Clear the search to see all {} {entity}.\n",
            page.total
        ))
    } else if page.items.is_empty() {
        Some(format!(
            "Page {} is past the last page ({}).\n",
            page.page, page.page_count
        ))
    } else {
        None
    }
}

/// Pagination line printed under a table.
pub fn format_page_footer<T>(page: &PageView<'_, T>, entity: &str, use_colors: bool) -> String {
    let mut footer = format!("Page {} of {}", page.page, page.page_count);
    if page.filtered == page.total {
        footer.push_str(&format!(" ({} {entity})", page.total));
    } else {
        footer.push_str(&format!(
            " ({} of {} {entity} match)",
            page.filtered, page.total
        ));
    }

    if use_colors {
        format!("{}\n", footer.dimmed())
    } else {
        format!("{footer}\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: Vec<&String>, total: usize, filtered: usize) -> PageView<'_, String> {
        PageView {
            items,
            total,
            filtered,
            page: 1,
            per_page: 10,
            page_count: filtered.div_ceil(10).max(1),
        }
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("this is long", 10), "this is...");
        assert_eq!(truncate_str("ééééééé", 5), "éé...");
    }

    #[test]
    fn test_format_list() {
        assert_eq!(format_list(&[], 20), "");
        assert_eq!(
            format_list(&["READ".to_string(), "WRITE".to_string()], 20),
            "READ, WRITE"
        );
    }

    #[test]
    fn test_format_health_no_colors() {
        assert_eq!(format_health("HEALTHY", false), "HEALTHY");
        assert_eq!(format_health("degraded", false), "DEGRADED");
        assert_eq!(format_health("SPLIT_BRAIN", false), "SPLIT_BRAIN");
    }

    #[test]
    fn test_format_loaded_at_missing() {
        assert_eq!(format_loaded_at(None), "unknown");
    }

    #[test]
    fn test_empty_message_source_empty() {
        let view = page(vec![], 0, 0);
        assert_eq!(
            empty_message(&view, "roles", "adm").as_deref(),
            Some("No roles found.\n")
        );
    }

    #[test]
    fn test_empty_message_filtered_out() {
        let view = page(vec![], 4, 0);
        assert_eq!(
            empty_message(&view, "roles", "zzz").as_deref(),
            Some("No roles match 'zzz'. Clear the search to see all 4 roles.\n")
        );
    }

    #[test]
    fn test_empty_message_with_rows() {
        let name = "admin".to_string();
        let view = page(vec![&name], 1, 1);
        assert!(empty_message(&view, "roles", "").is_none());
    }

    #[test]
    fn test_page_footer() {
        let name = "admin".to_string();
        assert_eq!(
            format_page_footer(&page(vec![&name], 4, 4), "roles", false),
            "Page 1 of 1 (4 roles)\n"
        );
        assert_eq!(
            format_page_footer(&page(vec![&name], 4, 1), "roles", false),
            "Page 1 of 1 (1 of 4 roles match)\n"
        );
    }
}
