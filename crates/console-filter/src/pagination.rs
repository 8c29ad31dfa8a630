//! Page slicing for console tables.

/// Default number of rows per page.
pub const DEFAULT_PER_PAGE: usize = 10;

/// Current page of a table.
///
/// Pages are 1-based. Changing the page size always returns to the first page.
///
/// # Example
///
/// ```
/// use grid_console_filter::Pagination;
///
/// let rows: Vec<u32> = (1..=25).collect();
/// let mut pagination = Pagination::default();
/// pagination.set_page(3);
///
/// assert_eq!(pagination.slice(&rows), &[21, 22, 23, 24, 25]);
/// assert_eq!(pagination.page_count(rows.len()), 3);
///
/// pagination.set_per_page(20);
/// assert_eq!(pagination.page, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Pagination {
    /// Creates a pagination on `page` with `per_page` rows; both are at least 1.
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Changes the page size and goes back to the first page.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
        self.page = 1;
    }

    /// Number of pages needed for `total` rows. An empty table still has one page.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.per_page.max(1)).max(1)
    }

    /// Returns the rows of the current page, or an empty slice past the last page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let (start, end) = self.bounds(items.len());
        &items[start..end]
    }

    /// 1-based indexes of the first and last rows shown, or `None` when the
    /// current page is empty.
    pub fn range(&self, total: usize) -> Option<(usize, usize)> {
        let (start, end) = self.bounds(total);
        (start < end).then_some((start + 1, end))
    }

    fn bounds(&self, total: usize) -> (usize, usize) {
        let per_page = self.per_page.max(1);
        let start = self
            .page
            .max(1)
            .saturating_sub(1)
            .saturating_mul(per_page)
            .min(total);
        let end = start.saturating_add(per_page).min(total);
        (start, end)
    }
}
