//! Paged list with a selected record and its detail.

use std::fmt;
use std::time::Duration;

use backoffice_client::client::Outcome;
use backoffice_client::resource::{Resource, ResourceService};
use backoffice_core::config::ConsoleConfig;
use backoffice_core::types::{ListQuery, Page, SortDirection};
use backoffice_core::{AppError, AppResult};
use tracing::{debug, info, warn};

use crate::debounce::Debounce;
use crate::panel::{Panel, Ticket};

/// Asks the operator to approve a destructive action.
pub trait Confirmation {
    /// `true` to proceed.
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirmation for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// A list fetch that has been started but not applied.
#[derive(Debug, Clone)]
pub struct ListRequest {
    ticket: Ticket,
    query: ListQuery,
}

impl ListRequest {
    /// Ticket to hand back to [`ListDetailController::apply_list`].
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// Query snapshot taken when the fetch started.
    pub fn query(&self) -> &ListQuery {
        &self.query
    }
}

/// What applying a list response did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListApply<Id> {
    /// A newer fetch had started; nothing changed.
    Stale,
    /// The page was replaced; the selection was kept or cleared.
    Applied,
    /// The page was replaced and its first row auto-selected. Its detail
    /// still has to be fetched.
    Selected(Id),
}

type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

struct RowFilter<T> {
    name: &'static str,
    predicate: Predicate<T>,
}

/// List/detail controller for one resource.
///
/// Invariants after every applied response:
/// - the selected id, if any, is one of the visible rows;
/// - if the visible rows are not empty, something is selected.
pub struct ListDetailController<R: Resource> {
    /// Resource service.
    service: ResourceService<R>,
    /// Editable query.
    query: ListQuery,
    /// Latest page.
    list: Panel<Page<R::Record>>,
    /// Detail of the selected row.
    detail: Panel<R::Record>,
    /// Selected key.
    selected: Option<R::Id>,
    /// Local predicates over the fetched page.
    filters: Vec<RowFilter<R::Record>>,
    /// Pending search text.
    search: Debounce<String>,
    /// Last success message.
    notice: Option<String>,
    /// Last action failure.
    error: Option<String>,
}

impl<R: Resource> fmt::Debug for ListDetailController<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListDetailController")
            .field("resource", &R::ROUTES.name)
            .field("query", &self.query)
            .field("selected", &self.selected)
            .field("filters", &self.filters.iter().map(|f| f.name).collect::<Vec<_>>())
            .finish()
    }
}

impl<R: Resource> ListDetailController<R> {
    /// A controller with the given page size and search delay.
    pub fn new(service: ResourceService<R>, page_size: u32, search_delay: Duration) -> Self {
        Self {
            service,
            query: ListQuery::new(page_size),
            list: Panel::new(),
            detail: Panel::new(),
            selected: None,
            filters: Vec::new(),
            search: Debounce::new(search_delay),
            notice: None,
            error: None,
        }
    }

    /// A controller using the console defaults.
    pub fn from_config(service: ResourceService<R>, config: &ConsoleConfig) -> Self {
        Self::new(
            service,
            config.page_size,
            Duration::from_millis(config.search_debounce_ms),
        )
    }

    /// Builder: initial sort.
    pub fn sorted_by(mut self, field: &str, direction: SortDirection) -> Self {
        self.query.set_sort(field, direction);
        self
    }

    /// Resource service.
    pub fn service(&self) -> &ResourceService<R> {
        &self.service
    }

    /// Current query.
    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    /// Edit the query without fetching. Call [`Self::refresh`] afterwards.
    pub fn query_mut(&mut self) -> &mut ListQuery {
        &mut self.query
    }

    /// List panel.
    pub fn list_panel(&self) -> &Panel<Page<R::Record>> {
        &self.list
    }

    /// Detail panel.
    pub fn detail_panel(&self) -> &Panel<R::Record> {
        &self.detail
    }

    /// Latest page, if loaded.
    pub fn page(&self) -> Option<&Page<R::Record>> {
        self.list.value()
    }

    /// Rows of the latest page that pass every filter.
    pub fn rows(&self) -> Vec<&R::Record> {
        self.page()
            .map(|page| {
                page.data
                    .iter()
                    .filter(|record| self.filters.iter().all(|f| (f.predicate)(record)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Selected key.
    pub fn selected(&self) -> Option<R::Id> {
        self.selected
    }

    /// Detail of the selected row, if loaded.
    pub fn detail(&self) -> Option<&R::Record> {
        self.detail.value()
    }

    /// Last success message.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Set the success message shown to the operator.
    pub fn set_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    /// Record a failed action for the operator.
    pub(crate) fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Last action failure, or the list failure.
    pub fn error(&self) -> Option<String> {
        self.error.clone().or_else(|| self.list.error())
    }

    /// Start a list fetch.
    pub fn begin_list(&mut self) -> ListRequest {
        ListRequest {
            ticket: self.list.begin(),
            query: self.query.clone(),
        }
    }

    /// Apply a list response and reconcile the selection.
    pub fn apply_list(&mut self, ticket: Ticket, result: AppResult<Page<R::Record>>) -> ListApply<R::Id> {
        if let Err(e) = &result {
            warn!(resource = R::ROUTES.name, error = %e, "List fetch failed");
        }
        if !self.list.resolve(ticket, result) {
            return ListApply::Stale;
        }
        match self.reconcile() {
            Some(id) => ListApply::Selected(id),
            None => ListApply::Applied,
        }
    }

    /// Fetch the current page and, if a row was auto-selected, its detail.
    pub async fn refresh(&mut self) {
        let request = self.begin_list();
        let result = self.service.list(request.query()).await;
        if let ListApply::Selected(_) = self.apply_list(request.ticket(), result) {
            self.load_detail().await;
        }
    }

    /// Start a detail fetch for the selected row.
    pub fn begin_detail(&mut self) -> Option<(Ticket, R::Id)> {
        let id = self.selected?;
        Some((self.detail.begin(), id))
    }

    /// Apply a detail response. Returns `false` if it was stale.
    pub fn apply_detail(&mut self, ticket: Ticket, result: AppResult<R::Record>) -> bool {
        if let Err(e) = &result {
            warn!(resource = R::ROUTES.name, error = %e, "Detail fetch failed");
        }
        self.detail.resolve(ticket, result)
    }

    /// Fetch the detail of the selected row. Resources whose rows are
    /// complete records take the detail from the visible row.
    pub async fn load_detail(&mut self) {
        if let Some((ticket, id)) = self.begin_detail() {
            let result = match self.row_detail(id) {
                Some(record) => Ok(record),
                None => self.service.get(id).await,
            };
            self.apply_detail(ticket, result);
        }
    }

    /// Select a row and fetch its detail.
    pub async fn select(&mut self, id: R::Id) {
        self.selected = Some(id);
        self.load_detail().await;
    }

    /// Clear the selection and its detail.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.detail.clear();
    }

    /// Record a keystroke in the search box.
    pub fn input_search(&mut self, text: impl Into<String>) {
        self.search.push(text.into());
    }

    /// Wait for the search box to go quiet, then apply it.
    /// Returns `true` if the list was re-fetched.
    pub async fn settle_search(&mut self) -> bool {
        match self.search.settle().await {
            Some(text) => self.apply_search(&text).await,
            None => false,
        }
    }

    /// Apply search text now. Returns `true` if the list was re-fetched.
    pub async fn apply_search(&mut self, text: &str) -> bool {
        self.search.cancel();
        if !self.query.set_search(text) {
            return false;
        }
        debug!(resource = R::ROUTES.name, search = %self.query.search(), "Search changed");
        self.refresh().await;
        true
    }

    /// Sort by `field` in `direction` and re-fetch.
    pub async fn set_sort(&mut self, field: &str, direction: SortDirection) {
        self.query.set_sort(field, direction);
        self.refresh().await;
    }

    /// Header-click sort and re-fetch.
    pub async fn toggle_sort(&mut self, field: &str) {
        self.query.toggle_sort(field);
        self.refresh().await;
    }

    /// Jump to a page and re-fetch.
    pub async fn set_page(&mut self, page_number: u32) {
        self.query.set_page(page_number);
        self.refresh().await;
    }

    /// Change the page size and re-fetch from page 1.
    pub async fn set_page_size(&mut self, page_size: u32) {
        self.query.set_page_size(page_size);
        self.refresh().await;
    }

    /// Move to the next page if there is one.
    pub async fn next_page(&mut self) -> bool {
        let Some(page) = self.page().filter(|p| p.has_next_page()) else {
            return false;
        };
        let next = page.current_page + 1;
        self.set_page(next).await;
        true
    }

    /// Move to the previous page if there is one.
    pub async fn previous_page(&mut self) -> bool {
        let Some(page) = self.page().filter(|p| p.has_previous_page()) else {
            return false;
        };
        let previous = page.current_page - 1;
        self.set_page(previous).await;
        true
    }

    /// Install (or replace) a named row filter.
    pub async fn set_filter<F>(&mut self, name: &'static str, predicate: F)
    where
        F: Fn(&R::Record) -> bool + Send + Sync + 'static,
    {
        self.filters.retain(|f| f.name != name);
        self.filters.push(RowFilter {
            name,
            predicate: Box::new(predicate),
        });
        self.after_filter_change().await;
    }

    /// Remove a named row filter.
    pub async fn clear_filter(&mut self, name: &'static str) {
        let before = self.filters.len();
        self.filters.retain(|f| f.name != name);
        if self.filters.len() != before {
            self.after_filter_change().await;
        }
    }

    /// Delete the selected record after confirmation.
    ///
    /// Declining sends nothing and returns `Ok(None)`. On success the
    /// selection and detail are cleared and the list is re-fetched once.
    /// On failure the selection is left as it was.
    pub async fn delete_selected(&mut self, confirm: &impl Confirmation) -> AppResult<Option<Outcome>> {
        let id = self
            .selected
            .ok_or_else(|| AppError::validation("Select a record first"))?;
        let prompt = format!(
            "Are you sure you want to delete this {}?",
            R::ROUTES.name.to_lowercase()
        );
        if !confirm.confirm(&prompt) {
            debug!(resource = R::ROUTES.name, %id, "Delete declined");
            return Ok(None);
        }

        match self.service.delete(id).await {
            Ok(outcome) => {
                self.error = None;
                self.notice = Some(
                    outcome
                        .message
                        .clone()
                        .unwrap_or_else(|| format!("{} deleted successfully", R::ROUTES.name)),
                );
                self.clear_selection();
                self.refresh().await;
                info!(resource = R::ROUTES.name, %id, "Selected record deleted");
                Ok(Some(outcome))
            }
            Err(e) => {
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    async fn after_filter_change(&mut self) {
        if self.reconcile().is_some() {
            self.load_detail().await;
        }
    }

    fn row_detail(&self, id: R::Id) -> Option<R::Record> {
        if R::ROUTES.detail.is_some() {
            return None;
        }
        self.rows().into_iter().find(|record| R::id_of(record) == id).cloned()
    }

    /// Enforce the selection invariants. Returns the newly auto-selected
    /// id, if any.
    fn reconcile(&mut self) -> Option<R::Id> {
        let visible: Vec<R::Id> = self.rows().into_iter().map(R::id_of).collect();

        if let Some(id) = self.selected {
            if !visible.contains(&id) {
                debug!(resource = R::ROUTES.name, %id, "Selected row no longer visible");
                self.clear_selection();
            }
        }

        if self.selected.is_none() {
            if let Some(first) = visible.first().copied() {
                self.selected = Some(first);
                return Some(first);
            }
        }
        None
    }
}
