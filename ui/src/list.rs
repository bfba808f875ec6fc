//! State behind every paginated admin table.
//!
//! The controller never talks to the network itself. A load is split into
//! [`ListController::begin_load`], which hands out the query to send together
//! with a generation number, and [`ListController::finish_load`], which only
//! applies a response if no newer load has started since.

use std::collections::HashSet;

use api::ListResource;
use types::{Error, Filters, ListQuery, Page, Pagination, Result};

use crate::{MutationMessages, Notice};

/// The controller for a given resource.
pub type ListOf<R> = ListController<<R as ListResource>::Filters, <R as ListResource>::Item>;

#[derive(Debug, Clone, PartialEq)]
pub struct LoadTicket<F> {
    pub generation: u64,
    pub query: ListQuery<F>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Applied,
    Failed(Error),
    /// A newer load was started after this one; the response was ignored.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListController<F, T> {
    query: ListQuery<F>,
    raw_search: String,
    items: Vec<T>,
    pagination: Pagination,
    loading: bool,
    generation: u64,
    revision: u64,
    /// Ids of rows with a write in flight.
    busy_rows: HashSet<String>,
}

impl<F: Filters, T> ListController<F, T> {
    pub fn new(page_size: u32) -> Self {
        Self {
            query: ListQuery::new(page_size),
            raw_search: String::new(),
            items: Vec::new(),
            pagination: Pagination::default(),
            loading: false,
            generation: 0,
            revision: 0,
            busy_rows: HashSet::new(),
        }
    }

    pub fn query(&self) -> &ListQuery<F> {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.query.page
    }

    pub fn filters(&self) -> &F {
        &self.query.filters
    }

    /// What is in the search box right now.
    pub fn raw_search(&self) -> &str {
        &self.raw_search
    }

    /// The search term the current listing was requested with.
    pub fn search(&self) -> &str {
        &self.query.search
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_page(&self) -> u32 {
        self.pagination.last_page()
    }

    pub fn can_go_previous(&self) -> bool {
        self.query.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.query.page < self.last_page()
    }

    /// Changes whenever the listing has to be fetched again: a different
    /// query, or an explicit reload after a write.
    pub fn reload_key(&self) -> (ListQuery<F>, u64) {
        (self.query.clone(), self.revision)
    }

    pub fn set_raw_search(&mut self, text: impl Into<String>) {
        self.raw_search = text.into();
    }

    /// Adopts a settled search term. A new term starts again from page 1.
    pub fn apply_search(&mut self, search: &str) -> bool {
        if self.query.search == search {
            return false;
        }
        self.query.search = search.to_string();
        self.query.page = 1;
        true
    }

    /// Edits the filters in place. Any change starts again from page 1.
    pub fn change_filters(&mut self, update: impl FnOnce(&mut F)) -> bool {
        let mut filters = self.query.filters.clone();
        update(&mut filters);
        if filters == self.query.filters {
            return false;
        }
        self.query.filters = filters;
        self.query.page = 1;
        true
    }

    pub fn go_to_page(&mut self, page: u32) -> bool {
        let page = page.clamp(1, self.last_page());
        if page == self.query.page {
            return false;
        }
        self.query.page = page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.can_go_next() && self.go_to_page(self.query.page + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        self.can_go_previous() && self.go_to_page(self.query.page - 1)
    }

    /// Asks for the current page to be fetched again without changing the
    /// query.
    pub fn request_reload(&mut self) {
        self.revision += 1;
    }

    pub fn begin_load(&mut self) -> LoadTicket<F> {
        self.generation += 1;
        self.loading = true;
        LoadTicket {
            generation: self.generation,
            query: self.query.clone(),
        }
    }

    pub fn finish_load(&mut self, generation: u64, result: Result<Page<T>>) -> LoadOutcome {
        if generation != self.generation {
            tracing::debug!(generation, latest = self.generation, "dropping stale listing");
            return LoadOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.items = page.items;
                self.pagination = page.pagination;
                // The last page can disappear after a delete.
                let last = self.last_page();
                if self.query.page > last {
                    self.query.page = last;
                }
                LoadOutcome::Applied
            }
            Err(err) => {
                tracing::warn!(error = %err, page = self.query.page, "failed to load listing");
                self.items.clear();
                self.pagination = Pagination::default();
                LoadOutcome::Failed(err)
            }
        }
    }

    /// Turns the result of a write into the one notice to show, and reloads
    /// the listing if the write went through.
    pub fn finish_mutation(&mut self, result: Result<()>, messages: &MutationMessages) -> Notice {
        match result {
            Ok(()) => {
                self.request_reload();
                Notice::success(messages.success.clone())
            }
            Err(err) => {
                tracing::warn!(error = %err, "{}", messages.failure);
                Notice::error(err.user_message(&messages.failure))
            }
        }
    }

    pub fn is_row_busy(&self, id: &str) -> bool {
        self.busy_rows.contains(id)
    }

    /// Marks the row as being written. Returns `false` if a write for it is
    /// already in flight, in which case nothing should be sent.
    pub fn begin_row_write(&mut self, id: &str) -> bool {
        self.busy_rows.insert(id.to_string())
    }

    /// Like [`Self::finish_mutation`] for a write made straight from a table
    /// row. A failed row write reloads as well, so controls that already show
    /// the rejected value are redrawn from the server's copy.
    pub fn finish_row_write(
        &mut self,
        id: &str,
        result: Result<()>,
        messages: &MutationMessages,
    ) -> Notice {
        self.busy_rows.remove(id);
        let failed = result.is_err();
        let notice = self.finish_mutation(result, messages);
        if failed {
            self.request_reload();
        }
        notice
    }
}
