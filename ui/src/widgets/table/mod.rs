//! Generic paginated, filterable and searchable table.
//!
//! The widget is split into focused parts:
//! - `columns`: typed column contract and layout
//! - `filters`: filter options grouped into dropdowns
//! - `search`: client-side filtering, search and sort of the current page
//! - `state`: widget-local state and its reducer
//! - `toolbar`, `header`, `row`, `pager`: rendering
//!
//! The widget never fetches. It renders the page it is given and reports what
//! the user asked for through [`TableOutput`].

pub mod columns;
pub mod filters;
pub mod header;
pub mod pager;
pub mod row;
pub mod search;
pub mod state;
pub mod toolbar;

use bizdesk_business::{FilterMap, PageChange, PageWindow};
use egui::{Align, Id, Layout, Sense, Ui};
use egui_extras::TableBuilder;

pub use columns::{CellValue, Column};
pub use filters::{ALL_LABEL, ALL_VALUE, FilterGroup, FilterOption, derive_filter_groups};
pub use state::{PageRequest, SortOrder, TableAction, TableState};

use columns::{HEADER_HEIGHT, ROW_HEIGHT, layout_columns};
use header::render_table_header;
use pager::render_pager;
use row::render_row;
use search::visible_rows;
use toolbar::render_toolbar;

pub const EMPTY_LABEL: &str = "Aucun résultat";

/// Notification sent to the parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    PageChange(PageChange),
    /// The complete active filter map after the change.
    FilterChange(FilterMap),
    /// Index of the clicked row in the page handed to the widget.
    RowClicked(usize),
}

/// Everything that happened during one frame.
#[derive(Debug)]
pub struct TableOutput<A> {
    pub events: Vec<TableEvent>,
    /// Action chosen in a row's actions cell, with that row's page index.
    pub action: Option<(usize, A)>,
}

impl<A> Default for TableOutput<A> {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            action: None,
        }
    }
}

impl<A> TableOutput<A> {
    pub fn page_change(&self) -> Option<PageChange> {
        self.events.iter().find_map(|event| match event {
            TableEvent::PageChange(change) => Some(*change),
            _ => None,
        })
    }

    pub fn filter_change(&self) -> Option<&FilterMap> {
        self.events.iter().rev().find_map(|event| match event {
            TableEvent::FilterChange(filters) => Some(filters),
            _ => None,
        })
    }

    pub fn clicked_row(&self) -> Option<usize> {
        self.events.iter().find_map(|event| match event {
            TableEvent::RowClicked(index) => Some(*index),
            _ => None,
        })
    }
}

pub type ActionsRenderer<'a, T, A> = &'a dyn Fn(&mut Ui, &T) -> Option<A>;

/// ```ignore
/// let output = TableWithPagination::new("subsidiaries", rows, &columns, window)
///     .filter_options(&options)
///     .actions(&render_actions)
///     .show(ui, &mut table_state);
/// ```
pub struct TableWithPagination<'a, T, A = ()> {
    id: Id,
    rows: &'a [T],
    columns: &'a [Column<T>],
    filter_options: &'a [FilterOption],
    window: PageWindow,
    row_click: bool,
    actions: Option<ActionsRenderer<'a, T, A>>,
}

impl<'a, T, A> TableWithPagination<'a, T, A> {
    pub fn new(
        id_salt: impl std::hash::Hash,
        rows: &'a [T],
        columns: &'a [Column<T>],
        window: PageWindow,
    ) -> Self {
        Self {
            id: Id::new(id_salt),
            rows,
            columns,
            filter_options: &[],
            window,
            row_click: false,
            actions: None,
        }
    }

    pub fn filter_options(mut self, options: &'a [FilterOption]) -> Self {
        self.filter_options = options;
        self
    }

    /// Rows sense clicks and report [`TableEvent::RowClicked`].
    pub fn row_click(mut self, enabled: bool) -> Self {
        self.row_click = enabled;
        self
    }

    pub fn actions(mut self, actions: ActionsRenderer<'a, T, A>) -> Self {
        self.actions = Some(actions);
        self
    }

    pub fn show(self, ui: &mut Ui, state: &mut TableState) -> TableOutput<A> {
        let mut pending: Vec<TableAction> = Vec::new();
        let mut output = TableOutput::default();
        let groups = derive_filter_groups(self.filter_options);

        ui.vertical(|ui| {
            render_toolbar(ui, self.id, state, self.columns, &groups, &mut pending);
            ui.add_space(8.0);

            let visible = visible_rows(self.rows, self.columns, state);
            self.render_body(ui, state, &visible, &mut pending, &mut output);

            if visible.is_empty() {
                ui.label(EMPTY_LABEL);
            }

            ui.add_space(8.0);
            render_pager(ui, self.window, &mut pending);
        });

        for action in pending {
            if let Some(event) = state.reduce(action, self.window) {
                output.events.push(event);
            }
        }
        output
    }

    fn render_body(
        &self,
        ui: &mut Ui,
        state: &TableState,
        visible: &[usize],
        pending: &mut Vec<TableAction>,
        output: &mut TableOutput<A>,
    ) {
        let with_actions = self.actions.is_some();
        let mut builder = TableBuilder::new(ui)
            .id_salt(self.id.with("rows"))
            .striped(true)
            .cell_layout(Layout::left_to_right(Align::Center));
        for column in layout_columns(self.columns.len(), with_actions) {
            builder = builder.column(column);
        }
        if self.row_click {
            builder = builder.sense(Sense::click());
        }

        builder
            .header(HEADER_HEIGHT, |mut header| {
                render_table_header(&mut header, self.columns, state.sort, with_actions, pending);
            })
            .body(|mut body| {
                for &index in visible {
                    let record = &self.rows[index];
                    body.row(ROW_HEIGHT, |mut row| {
                        let result =
                            render_row(&mut row, record, self.columns, self.actions, self.row_click);
                        if let Some(action) = result.action {
                            output.action = Some((index, action));
                        } else if result.clicked {
                            output.events.push(TableEvent::RowClicked(index));
                        }
                    });
                }
            });
    }
}
