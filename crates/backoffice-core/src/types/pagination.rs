//! List query parameters and paginated results.

use serde::{Deserialize, Deserializer, Serialize};

use super::sorting::{SortDirection, SortField};

/// Default page size.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Maximum page size the backend accepts.
pub const MAX_PAGE_SIZE: u32 = 500;

/// Query-string names a list endpoint uses for its sort parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKeys {
    /// Name of the sort column parameter.
    pub field: &'static str,
    /// Name of the sort direction parameter.
    pub direction: &'static str,
}

impl SortKeys {
    /// `sortField` / `sortDirection`.
    pub const FIELD_DIRECTION: Self = Self {
        field: "sortField",
        direction: "sortDirection",
    };

    /// `sortBy` / `sortOrder` (item, package, and vehicle lists).
    pub const BY_ORDER: Self = Self {
        field: "sortBy",
        direction: "sortOrder",
    };
}

/// Query parameters for a paginated, searchable, sortable list.
///
/// `page_number` is always at least 1. Changing the search text or the sort
/// resets `page_number` to 1 so a narrowed result set is never viewed from
/// a page that no longer exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    page_number: u32,
    page_size: u32,
    search: String,
    sort: Option<SortField>,
}

impl ListQuery {
    /// Create a query for the first page with the given page size.
    pub fn new(page_size: u32) -> Self {
        Self {
            page_number: 1,
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
            search: String::new(),
            sort: None,
        }
    }

    /// Builder: set the initial sort.
    pub fn sorted_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some(SortField::new(field, direction));
        self
    }

    /// Current page number (1-based).
    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    /// Items per page.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Current search text (already trimmed).
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Current sort, if any.
    pub fn sort(&self) -> Option<&SortField> {
        self.sort.as_ref()
    }

    /// Jump to a page. Zero is treated as page 1.
    pub fn set_page(&mut self, page_number: u32) {
        self.page_number = page_number.max(1);
    }

    /// Change the page size and return to the first page.
    pub fn set_page_size(&mut self, page_size: u32) {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self.page_number = 1;
    }

    /// Replace the search text. Returns `true` if the text changed.
    pub fn set_search(&mut self, search: &str) -> bool {
        let search = search.trim();
        if search == self.search {
            return false;
        }
        self.search = search.to_string();
        self.page_number = 1;
        true
    }

    /// Replace the sort. Always returns to the first page.
    pub fn set_sort(&mut self, field: impl Into<String>, direction: SortDirection) {
        self.sort = Some(SortField::new(field, direction));
        self.page_number = 1;
    }

    /// Select a sort column the way a clickable table header does.
    ///
    /// Selecting the active column flips its direction; selecting another
    /// column starts ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        let direction = match &self.sort {
            Some(current) if current.field == field => current.direction.reversed(),
            _ => SortDirection::Asc,
        };
        self.set_sort(field, direction);
    }

    /// Remove any sort.
    pub fn clear_sort(&mut self) {
        if self.sort.take().is_some() {
            self.page_number = 1;
        }
    }

    /// Render the query-string pairs sent to list endpoints.
    ///
    /// Empty search text and an absent sort are omitted.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.to_pairs_with(SortKeys::FIELD_DIRECTION)
    }

    /// Render the query-string pairs with endpoint-specific sort names.
    pub fn to_pairs_with(&self, keys: SortKeys) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("pageNumber".to_string(), self.page_number.to_string()),
            ("pageSize".to_string(), self.page_size.to_string()),
        ];
        if !self.search.is_empty() {
            pairs.push(("search".to_string(), self.search.clone()));
        }
        if let Some(sort) = &self.sort {
            if !sort.field.is_empty() {
                pairs.push((keys.field.to_string(), sort.field.clone()));
                pairs.push((keys.direction.to_string(), sort.direction.as_str().to_string()));
            }
        }
        pairs
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// One page of a list response.
///
/// The previous/next flags are derived from `current_page` and
/// `total_pages`, so `has_previous_page() == (current_page > 1)` and
/// `has_next_page() == (current_page < total_pages)` hold for every value
/// of this type, including ones decoded from the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The items on this page, in server order.
    pub data: Vec<T>,
    /// Current page number (1-based).
    pub current_page: u32,
    /// Total number of pages (at least 1).
    pub total_pages: u32,
    /// Total number of items across all pages.
    pub total_count: u64,
    has_previous_page: bool,
    has_next_page: bool,
}

impl<T> Page<T> {
    /// Create a page, deriving the navigation flags.
    pub fn new(data: Vec<T>, current_page: u32, total_pages: u32, total_count: u64) -> Self {
        let current_page = current_page.max(1);
        let total_pages = total_pages.max(1);
        Self {
            data,
            current_page,
            total_pages,
            total_count,
            has_previous_page: current_page > 1,
            has_next_page: current_page < total_pages,
        }
    }

    /// Create an empty first page.
    pub fn empty() -> Self {
        Self::new(Vec::new(), 1, 1, 0)
    }

    /// Slice an in-memory collection into the requested page.
    pub fn paginate(items: Vec<T>, page_number: u32, page_size: u32) -> Self {
        let page_size = page_size.max(1) as u64;
        let total_count = items.len() as u64;
        let total_pages = if total_count == 0 {
            1
        } else {
            total_count.div_ceil(page_size)
        };
        let page_number = page_number.max(1);
        let offset = (page_number as u64 - 1) * page_size;
        let data = items
            .into_iter()
            .skip(offset as usize)
            .take(page_size as usize)
            .collect();
        Self::new(data, page_number, total_pages as u32, total_count)
    }

    /// Whether a page precedes this one.
    pub fn has_previous_page(&self) -> bool {
        self.has_previous_page
    }

    /// Whether a page follows this one.
    pub fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    /// Whether the page holds no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Map the items, keeping the pagination metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_count: self.total_count,
            has_previous_page: self.has_previous_page,
            has_next_page: self.has_next_page,
        }
    }
}

/// Paginated result as the backend sends it.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePage<T> {
    #[serde(alias = "Data")]
    data: Vec<T>,
    #[serde(alias = "CurrentPage")]
    current_page: u32,
    #[serde(alias = "TotalPages")]
    total_pages: u32,
    #[serde(default, alias = "TotalCount")]
    total_count: u64,
    #[serde(default, alias = "HasPreviousPage")]
    has_previous_page: Option<bool>,
    #[serde(default, alias = "HasNextPage")]
    has_next_page: Option<bool>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Page<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = WirePage::<T>::deserialize(deserializer)?;
        let page = Page::new(wire.data, wire.current_page, wire.total_pages, wire.total_count);

        let previous_mismatch = wire
            .has_previous_page
            .is_some_and(|flag| flag != page.has_previous_page);
        let next_mismatch = wire
            .has_next_page
            .is_some_and(|flag| flag != page.has_next_page);
        if previous_mismatch || next_mismatch {
            tracing::warn!(
                current_page = page.current_page,
                total_pages = page.total_pages,
                wire_has_previous = ?wire.has_previous_page,
                wire_has_next = ?wire.has_next_page,
                "Page flags disagree with page numbers; using derived values"
            );
        }

        Ok(page)
    }
}
