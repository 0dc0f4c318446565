//! Header row of the paginated table.

use egui::{Button, Ui};
use egui_extras::TableRow;

use super::columns::Column;
use super::state::{SortOrder, TableAction};

pub const ACTIONS_HEADER: &str = "Actions";

/// Renders one header cell per column, plus "Actions" when rows have actions.
///
/// Sortable columns render as flat buttons; a click pushes a
/// [`TableAction::ToggleSort`].
pub fn render_table_header<T>(
    header: &mut TableRow<'_, '_>,
    columns: &[Column<T>],
    sort: Option<SortOrder>,
    with_actions: bool,
    actions: &mut Vec<TableAction>,
) {
    for column in columns {
        header.col(|ui| {
            if column.sortable {
                let label = format!("{}{}", column.header, sort_marker(column, sort));
                if ui.add(Button::new(label).frame(false)).clicked() {
                    actions.push(TableAction::ToggleSort(column.field));
                }
            } else {
                render_header_cell(ui, &column.header);
            }
        });
    }
    if with_actions {
        header.col(|ui| render_header_cell(ui, ACTIONS_HEADER));
    }
}

fn render_header_cell(ui: &mut Ui, label: &str) {
    ui.strong(label);
}

fn sort_marker<T>(column: &Column<T>, sort: Option<SortOrder>) -> &'static str {
    match sort {
        Some(order) if order.field == column.field && order.descending => " ⏷",
        Some(order) if order.field == column.field => " ⏶",
        _ => "",
    }
}
