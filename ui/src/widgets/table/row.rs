//! Body rows of the paginated table.

use egui::{CursorIcon, Ui};
use egui_extras::TableRow;

use super::columns::Column;

/// Result of rendering one row.
pub struct RowResult<A> {
    pub action: Option<A>,
    pub clicked: bool,
}

/// Renders every column cell and, when given, the trailing actions cell.
///
/// A row whose actions cell produced an action never reports a click, so action
/// buttons do not double as row clicks. Clickable rows show a pointing hand and
/// their cell labels are not selectable, so clicks on text reach the row.
pub fn render_row<T, A>(
    row: &mut TableRow<'_, '_>,
    record: &T,
    columns: &[Column<T>],
    actions: Option<&dyn Fn(&mut Ui, &T) -> Option<A>>,
    clickable: bool,
) -> RowResult<A> {
    for column in columns {
        row.col(|ui| {
            if clickable {
                ui.style_mut().interaction.selectable_labels = false;
            }
            column.show_cell(ui, record);
        });
    }

    let mut action = None;
    if let Some(render_actions) = actions {
        row.col(|ui| {
            ui.horizontal(|ui| {
                action = render_actions(ui, record);
            });
        });
    }

    if !clickable {
        return RowResult { action, clicked: false };
    }
    let response = row.response().on_hover_cursor(CursorIcon::PointingHand);
    let clicked = action.is_none() && response.clicked();
    RowResult { action, clicked }
}
