//! Widget-local state of the paginated table and its reducer.
//!
//! The widget owns the search text, the active filter map and the sort order.
//! Paging belongs to the parent: page requests only turn into events.

use bizdesk_business::{FilterMap, PageChange, PageWindow};
use ustr::Ustr;

use super::TableEvent;
use super::filters::ALL_VALUE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    Next,
    Previous,
    Size(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub field: Ustr,
    pub descending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    SetSearch(String),
    SetFilter { field: Ustr, value: String },
    ClearFilters,
    ChangePage(PageRequest),
    /// Cycles a sortable column: ascending, descending, unsorted.
    ToggleSort(Ustr),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
    pub search: String,
    pub filters: FilterMap,
    pub sort: Option<SortOrder>,
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self, field: Ustr) -> Option<&str> {
        self.filters.get(&field).map(String::as_str)
    }

    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty()
    }

    /// Applies `action` and returns the event the parent must see, if any.
    pub fn reduce(&mut self, action: TableAction, window: PageWindow) -> Option<TableEvent> {
        match action {
            TableAction::SetSearch(text) => {
                self.search = text;
                None
            }
            TableAction::SetFilter { field, value } => {
                if value == ALL_VALUE {
                    self.filters.remove(&field);
                } else {
                    self.filters.insert(field, value);
                }
                Some(TableEvent::FilterChange(self.filters.clone()))
            }
            TableAction::ClearFilters => {
                self.filters.clear();
                Some(TableEvent::FilterChange(FilterMap::new()))
            }
            TableAction::ChangePage(request) => page_change(request, window).map(TableEvent::PageChange),
            TableAction::ToggleSort(field) => {
                self.sort = match self.sort {
                    Some(SortOrder {
                        field: current,
                        descending: false,
                    }) if current == field => Some(SortOrder {
                        field,
                        descending: true,
                    }),
                    Some(SortOrder {
                        field: current,
                        descending: true,
                    }) if current == field => None,
                    _ => Some(SortOrder {
                        field,
                        descending: false,
                    }),
                };
                None
            }
        }
    }
}

fn page_change(request: PageRequest, window: PageWindow) -> Option<PageChange> {
    match request {
        PageRequest::Next => window.next(),
        PageRequest::Previous => window.previous(),
        PageRequest::Size(take) if take > 0 => Some(window.with_page_size(take)),
        PageRequest::Size(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status() -> Ustr {
        Ustr::from("status")
    }

    fn set(field: &str, value: &str) -> TableAction {
        TableAction::SetFilter {
            field: Ustr::from(field),
            value: value.to_owned(),
        }
    }

    #[test]
    fn search_emits_nothing() {
        let mut state = TableState::new();
        let event = state.reduce(TableAction::SetSearch("ly".to_owned()), PageWindow::default());
        assert_eq!(event, None);
        assert_eq!(state.search, "ly");
    }

    #[test]
    fn selecting_all_removes_only_that_field() {
        let mut state = TableState::new();
        let window = PageWindow::default();
        state.reduce(set("status", "ENABLED"), window);
        state.reduce(set("role", "DRIVER"), window);

        let event = state.reduce(set("status", ALL_VALUE), window);

        let mut expected = FilterMap::new();
        expected.insert(Ustr::from("role"), "DRIVER".to_owned());
        assert_eq!(event, Some(TableEvent::FilterChange(expected)));
        assert_eq!(state.selected(status()), None);
    }

    #[test]
    fn selecting_value_overwrites_field() {
        let mut state = TableState::new();
        let window = PageWindow::default();
        state.reduce(set("status", "ENABLED"), window);
        let event = state.reduce(set("status", "DISABLED"), window);

        let Some(TableEvent::FilterChange(map)) = event else {
            panic!("expected a filter change");
        };
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&status()).map(String::as_str), Some("DISABLED"));
    }

    #[test]
    fn clear_always_emits_empty_map() {
        let mut state = TableState::new();
        let window = PageWindow::default();
        assert_eq!(
            state.reduce(TableAction::ClearFilters, window),
            Some(TableEvent::FilterChange(FilterMap::new()))
        );

        state.reduce(set("status", "ENABLED"), window);
        assert_eq!(
            state.reduce(TableAction::ClearFilters, window),
            Some(TableEvent::FilterChange(FilterMap::new()))
        );
        assert!(!state.has_filters());
    }

    #[test]
    fn paging_respects_window_bounds() {
        let mut state = TableState::new();
        let last = PageWindow::new(20, 10, 25);

        assert_eq!(state.reduce(TableAction::ChangePage(PageRequest::Next), last), None);
        assert_eq!(
            state.reduce(TableAction::ChangePage(PageRequest::Previous), last),
            Some(TableEvent::PageChange(PageChange { skip: 10, take: 10 }))
        );

        let first = PageWindow::new(0, 10, 25);
        assert_eq!(state.reduce(TableAction::ChangePage(PageRequest::Previous), first), None);
        assert_eq!(
            state.reduce(TableAction::ChangePage(PageRequest::Next), first),
            Some(TableEvent::PageChange(PageChange { skip: 10, take: 10 }))
        );
    }

    #[test]
    fn page_size_change_restarts_at_first_page() {
        let mut state = TableState::new();
        for size in bizdesk_business::PAGE_SIZE_OPTIONS {
            let event = state.reduce(
                TableAction::ChangePage(PageRequest::Size(size)),
                PageWindow::new(40, 10, 200),
            );
            assert_eq!(event, Some(TableEvent::PageChange(PageChange { skip: 0, take: size })));
        }
        assert_eq!(
            state.reduce(TableAction::ChangePage(PageRequest::Size(0)), PageWindow::default()),
            None
        );
    }

    #[test]
    fn sort_cycles_through_three_states() {
        let mut state = TableState::new();
        let window = PageWindow::default();
        let name = Ustr::from("name");

        state.reduce(TableAction::ToggleSort(name), window);
        assert_eq!(state.sort, Some(SortOrder { field: name, descending: false }));
        state.reduce(TableAction::ToggleSort(name), window);
        assert_eq!(state.sort, Some(SortOrder { field: name, descending: true }));
        assert_eq!(state.reduce(TableAction::ToggleSort(name), window), None);
        assert_eq!(state.sort, None);

        state.reduce(TableAction::ToggleSort(name), window);
        state.reduce(TableAction::ToggleSort(status()), window);
        assert_eq!(state.sort, Some(SortOrder { field: status(), descending: false }));
    }
}
