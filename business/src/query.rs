use std::collections::BTreeMap;

use ustr::Ustr;

use crate::pagination::PageWindow;

/// Active equality constraints, field → selected value.
///
/// Only fields with a real selection are present; "no constraint" is the
/// absence of the key.
pub type FilterMap = BTreeMap<Ustr, String>;

/// A paged list request as sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Issue order of this request; responses to older requests are discarded.
    pub seq: u64,
    pub skip: u64,
    pub take: u64,
    pub filters: FilterMap,
    pub search: Option<String>,
}

impl ListQuery {
    pub fn new(seq: u64, window: PageWindow) -> Self {
        Self {
            seq,
            skip: window.skip,
            take: window.take,
            filters: FilterMap::new(),
            search: None,
        }
    }

    pub fn with_filters(mut self, filters: FilterMap) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_search(mut self, search: Option<String>) -> Self {
        self.search = search.filter(|term| !term.trim().is_empty());
        self
    }

    /// Query string pairs: `skip`, `take`, `search` when set, then one pair per filter.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("skip".to_owned(), self.skip.to_string()),
            ("take".to_owned(), self.take.to_string()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search".to_owned(), search.clone()));
        }
        pairs.extend(
            self.filters
                .iter()
                .map(|(field, value)| (field.as_str().to_owned(), value.clone())),
        );
        pairs
    }
}
