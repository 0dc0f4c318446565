//! Search box and filter dropdowns above the table.

use egui::{ComboBox, Id, TextEdit, Ui};

use super::columns::Column;
use super::filters::FilterGroup;
use super::state::{TableAction, TableState};

pub const SEARCH_HINT: &str = "Rechercher…";
pub const RESET_FILTERS_LABEL: &str = "Réinitialiser les filtres";

pub fn render_toolbar<T>(
    ui: &mut Ui,
    id: Id,
    state: &TableState,
    columns: &[Column<T>],
    groups: &[FilterGroup],
    actions: &mut Vec<TableAction>,
) {
    ui.horizontal_wrapped(|ui| {
        let mut search = state.search.clone();
        let response = ui.add(
            TextEdit::singleline(&mut search)
                .id(id.with("search"))
                .hint_text(SEARCH_HINT)
                .desired_width(220.0),
        );
        if response.changed() {
            actions.push(TableAction::SetSearch(search));
        }

        for group in groups {
            render_filter_dropdown(ui, id, state, columns, group, actions);
        }

        if !groups.is_empty()
            && ui
                .add_enabled(state.has_filters(), egui::Button::new(RESET_FILTERS_LABEL))
                .clicked()
        {
            actions.push(TableAction::ClearFilters);
        }
    });
}

fn render_filter_dropdown<T>(
    ui: &mut Ui,
    id: Id,
    state: &TableState,
    columns: &[Column<T>],
    group: &FilterGroup,
    actions: &mut Vec<TableAction>,
) {
    let title = columns
        .iter()
        .find(|column| column.field == group.field)
        .map_or(group.field.as_str(), |column| column.header.as_str());
    let selected = state.selected(group.field);

    ui.label(format!("{title} :"));
    ComboBox::from_id_salt(id.with(group.field.as_str()))
        .selected_text(group.selected_label(selected))
        .show_ui(ui, |ui| {
            for option in &group.options {
                let is_selected = match selected {
                    Some(value) => value == option.value,
                    None => option.is_all(),
                };
                if ui.selectable_label(is_selected, option.label.as_str()).clicked() && !is_selected {
                    actions.push(TableAction::SetFilter {
                        field: group.field,
                        value: option.value.clone(),
                    });
                }
            }
        });
}
