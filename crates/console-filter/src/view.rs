//! Table state: search term, selected search option and current page.
//!
//! The state is a plain value owned by the caller. Every change goes through
//! a method that keeps it consistent (a new search or a new option goes back
//! to the first page), and [`TableView::render`] derives the rows to display
//! from the entity list supplied by the data source.

use serde::Serialize;

use crate::filter::{filter_items, filter_without_field, FilterOption, Searchable};
use crate::pagination::Pagination;

/// One rendered page of a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView<'a, T> {
    /// Rows on the current page.
    pub items: Vec<&'a T>,
    /// Number of entities before filtering.
    pub total: usize,
    /// Number of entities matching the search.
    pub filtered: usize,
    pub page: usize,
    pub per_page: usize,
    pub page_count: usize,
}

impl<T> PageView<'_, T> {
    /// True when the data source returned nothing at all.
    pub fn is_source_empty(&self) -> bool {
        self.total == 0
    }

    /// True when there is data but the search excluded all of it.
    pub fn is_filtered_out(&self) -> bool {
        self.total > 0 && self.filtered == 0
    }
}

fn page_of<'a, T>(
    matched: Vec<&'a T>,
    total: usize,
    pagination: &Pagination,
) -> PageView<'a, T> {
    let filtered = matched.len();
    let items = pagination.slice(&matched).to_vec();
    PageView {
        items,
        total,
        filtered,
        page: pagination.page,
        per_page: pagination.per_page,
        page_count: pagination.page_count(filtered),
    }
}

/// State of a table whose search is scoped by a selectable option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView<O: FilterOption> {
    search: String,
    option: O,
    pub pagination: Pagination,
}

impl<O: FilterOption> Default for TableView<O> {
    fn default() -> Self {
        Self {
            search: String::new(),
            option: O::default_option(),
            pagination: Pagination::default(),
        }
    }
}

impl<O: FilterOption> TableView<O> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn option(&self) -> O {
        self.option
    }

    /// Sets the search term and returns to the first page.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.pagination.set_page(1);
    }

    /// Selects a search option and returns to the first page.
    pub fn select_option(&mut self, option: O) {
        self.option = option;
        self.pagination.set_page(1);
    }

    /// Selects the option whose selector label is `label`. Returns false and
    /// leaves the state untouched when no option has that label.
    pub fn select_label(&mut self, label: &str) -> bool {
        match O::from_label(label) {
            Some(option) => {
                self.select_option(option);
                true
            }
            None => false,
        }
    }

    /// Entities matching the current search; all of them when the search is empty.
    pub fn filtered<'a, T: Searchable>(&self, items: &'a [T]) -> Vec<&'a T> {
        if self.search.is_empty() {
            return items.iter().collect();
        }
        filter_items(&self.search, items, Some(self.option.key()))
    }

    pub fn render<'a, T: Searchable>(&self, items: &'a [T]) -> PageView<'a, T> {
        page_of(self.filtered(items), items.len(), &self.pagination)
    }
}

/// State of a table of plain strings (e.g. principal names).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlainTableView {
    search: String,
    pub pagination: Pagination,
}

impl PlainTableView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Sets the search term and returns to the first page.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.pagination.set_page(1);
    }

    pub fn filtered<'a, S: AsRef<str>>(&self, items: &'a [S]) -> Vec<&'a S> {
        if self.search.is_empty() {
            return items.iter().collect();
        }
        filter_without_field(&self.search, items)
    }

    pub fn render<'a, S: AsRef<str>>(&self, items: &'a [S]) -> PageView<'a, S> {
        page_of(self.filtered(items), items.len(), &self.pagination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{RoleCachePermissionFilterOption, RoleFilterOption};
    use grid_console_model::{Role, RoleCachePermission};

    fn roles(n: usize) -> Vec<Role> {
        (0..n)
            .map(|i| {
                let mut role = Role::new(format!("role-{i:02}"));
                role.cache_permissions = vec![if i % 2 == 0 { "READ" } else { "WRITE" }.into()];
                role
            })
            .collect()
    }

    #[test]
    fn test_empty_search_shows_everything() {
        let roles = roles(3);
        let view: TableView<RoleFilterOption> = TableView::new();

        let page = view.render(&roles);
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.total, 3);
        assert_eq!(page.filtered, 3);
        assert_eq!(page.page_count, 1);
    }

    #[test]
    fn test_empty_search_keeps_entities_with_empty_lists() {
        let mut roles = roles(2);
        roles[1].cache_permissions.clear();

        let mut view: TableView<RoleFilterOption> = TableView::new();
        view.select_option(RoleFilterOption::CachePermissions);

        assert_eq!(view.filtered(&roles).len(), 2);
    }

    #[test]
    fn test_search_on_selected_option() {
        let roles = roles(6);
        let mut view: TableView<RoleFilterOption> = TableView::new();
        view.select_option(RoleFilterOption::CachePermissions);
        view.set_search("write");

        let page = view.render(&roles);
        let names: Vec<&str> = page.items.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["role-01", "role-03", "role-05"]);
        assert_eq!(page.total, 6);
        assert_eq!(page.filtered, 3);
    }

    #[test]
    fn test_search_and_option_changes_reset_page() {
        let mut view: TableView<RoleFilterOption> = TableView::new();
        view.pagination.set_page(3);
        view.set_search("x");
        assert_eq!(view.pagination.page, 1);

        view.pagination.set_page(2);
        view.select_option(RoleFilterOption::CacheManagerPermissions);
        assert_eq!(view.pagination.page, 1);
    }

    #[test]
    fn test_select_label() {
        let mut view: TableView<RoleCachePermissionFilterOption> = TableView::new();
        assert_eq!(view.option(), RoleCachePermissionFilterOption::CacheName);

        assert!(view.select_label("Health"));
        assert_eq!(view.option(), RoleCachePermissionFilterOption::Health);

        assert!(!view.select_label("Owner"));
        assert_eq!(view.option(), RoleCachePermissionFilterOption::Health);
    }

    #[test]
    fn test_paging_over_filtered_rows() {
        let roles = roles(25);
        let mut view: TableView<RoleFilterOption> = TableView::new();
        view.set_search("role-");
        view.pagination.set_page(3);

        let page = view.render(&roles);
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.items[0].name, "role-20");
        assert_eq!(page.page_count, 3);
    }

    #[test]
    fn test_empty_states() {
        let caches: Vec<RoleCachePermission> = vec![];
        let view: TableView<RoleCachePermissionFilterOption> = TableView::new();
        assert!(view.render(&caches).is_source_empty());

        let roles = roles(2);
        let mut view: TableView<RoleFilterOption> = TableView::new();
        view.set_search("nothing-like-this");
        let page = view.render(&roles);
        assert!(page.is_filtered_out());
        assert!(!page.is_source_empty());
    }

    #[test]
    fn test_plain_table_view() {
        let principals = vec!["principal1", "Principal2", "admin"];
        let mut view = PlainTableView::new();
        assert_eq!(view.render(&principals).items.len(), 3);

        view.set_search("PRINC");
        let page = view.render(&principals);
        assert_eq!(page.items, vec![&"principal1", &"Principal2"]);
        assert_eq!(page.filtered, 2);
        assert_eq!(page.total, 3);
    }
}
