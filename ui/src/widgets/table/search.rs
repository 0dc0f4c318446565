//! Client-side view of the current page: filters, search and sort.
//!
//! Only the rows the parent handed over are considered. Nothing here fetches.

use bizdesk_business::FilterMap;

use super::columns::{Column, field_value};
use super::state::{SortOrder, TableState};

/// Case-insensitive substring match over the raw accessor value of every column.
pub fn matches_search<T>(row: &T, columns: &[Column<T>], search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    columns
        .iter()
        .any(|column| column.text(row).to_lowercase().contains(&needle))
}

/// Strict equality between each active filter and the text of its column.
pub fn matches_filters<T>(row: &T, columns: &[Column<T>], filters: &FilterMap) -> bool {
    filters
        .iter()
        .all(|(field, value)| field_value(columns, *field, row).to_string() == *value)
}

/// Indices into `rows` of the rows to display, in display order.
pub fn visible_rows<T>(rows: &[T], columns: &[Column<T>], state: &TableState) -> Vec<usize> {
    let mut visible: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| matches_filters(*row, columns, &state.filters))
        .filter(|(_, row)| matches_search(*row, columns, &state.search))
        .map(|(index, _)| index)
        .collect();

    if let Some(SortOrder { field, descending }) = state.sort {
        visible.sort_by(|a, b| {
            let ordering = field_value(columns, field, &rows[*a])
                .sort_cmp(&field_value(columns, field, &rows[*b]));
            if descending { ordering.reverse() } else { ordering }
        });
    }
    visible
}
