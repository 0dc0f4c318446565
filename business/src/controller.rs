//! Parent-side pagination state of a list screen.
//!
//! The controller owns the authoritative window, the rows of the current page
//! and the server-side query terms. It never performs IO: every transition that
//! needs data returns the [`ListQuery`] to run, and the caller feeds the answer
//! back through [`PaginationController::apply_page`].

use log::{debug, warn};

use crate::model::{Page, Resource};
use crate::pagination::{PageChange, PageWindow};
use crate::query::{FilterMap, ListQuery};

/// What happened to a fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// Rows and total were replaced.
    Applied,
    /// A newer request was issued meanwhile; the response was dropped.
    Stale,
    /// `skip` pointed past `total`; the window moved to the last page and this
    /// query must be run.
    Clamped(ListQuery),
}

#[derive(Debug, Clone)]
pub struct PaginationController<T: Resource> {
    window: PageWindow,
    rows: Vec<T>,
    filters: FilterMap,
    search: Option<String>,
    latest_seq: u64,
    loading: bool,
}

impl<T: Resource> PaginationController<T> {
    pub fn new(take: u64) -> Self {
        Self {
            window: PageWindow::first(take),
            rows: Vec::new(),
            filters: FilterMap::new(),
            search: None,
            latest_seq: 0,
            loading: false,
        }
    }

    pub fn window(&self) -> PageWindow {
        self.window
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn filters(&self) -> &FilterMap {
        &self.filters
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Re-fetches the current window with the current terms.
    pub fn refresh(&mut self) -> ListQuery {
        self.issue()
    }

    pub fn on_page_change(&mut self, skip: u64, take: u64) -> ListQuery {
        self.window.apply(PageChange { skip, take });
        self.issue()
    }

    /// New server-side filters always start again from the first page.
    pub fn on_filter_change(&mut self, filters: FilterMap) -> ListQuery {
        self.filters = filters;
        self.window.skip = 0;
        self.issue()
    }

    pub fn on_search(&mut self, term: &str) -> ListQuery {
        let term = term.trim();
        self.search = (!term.is_empty()).then(|| term.to_owned());
        self.window.skip = 0;
        self.issue()
    }

    pub fn apply_page(&mut self, seq: u64, page: Page<T>) -> PageOutcome {
        if seq != self.latest_seq {
            debug!(
                "Dropping stale {} page (seq {seq}, latest {})",
                T::PATH,
                self.latest_seq
            );
            return PageOutcome::Stale;
        }

        self.window.total = page.total;
        if self.window.is_out_of_range() {
            self.window = self.window.clamped();
            debug!(
                "{} window out of range, clamping to skip={}",
                T::PATH,
                self.window.skip
            );
            return PageOutcome::Clamped(self.issue());
        }

        self.rows = page.data;
        self.loading = false;
        PageOutcome::Applied
    }

    /// Marks the request as finished without touching the displayed rows.
    ///
    /// Returns `false` when the failure belongs to a superseded request.
    pub fn apply_failure(&mut self, seq: u64) -> bool {
        if seq != self.latest_seq {
            return false;
        }
        warn!("Fetching {} failed, keeping current page", T::PATH);
        self.loading = false;
        true
    }

    /// Local patch after a successful create: prepend and count it.
    pub fn insert_created(&mut self, row: T) {
        self.rows.insert(0, row);
        self.window.total += 1;
    }

    /// Replaces the row with the same id. Returns `false` if it is not on this page.
    pub fn replace_updated(&mut self, row: T) -> bool {
        match self.rows.iter_mut().find(|existing| existing.id() == row.id()) {
            Some(existing) => {
                *existing = row;
                true
            }
            None => false,
        }
    }

    /// Local patch after a successful delete. The total shrinks even when the row
    /// is not on the current page.
    pub fn remove_deleted(&mut self, id: &T::Id) -> bool {
        self.window.total = self.window.total.saturating_sub(1);
        let before = self.rows.len();
        self.rows.retain(|row| row.id() != id);
        self.rows.len() != before
    }

    fn issue(&mut self) -> ListQuery {
        self.latest_seq += 1;
        self.loading = true;
        ListQuery::new(self.latest_seq, self.window)
            .with_filters(self.filters.clone())
            .with_search(self.search.clone())
    }
}
