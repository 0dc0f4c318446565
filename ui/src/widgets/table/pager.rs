//! Page navigation and page-size controls.

use bizdesk_business::{PAGE_SIZE_OPTIONS, PageWindow};
use egui::{Button, Ui};

use super::state::{PageRequest, TableAction};

pub const PREVIOUS_LABEL: &str = "◀ Précédent";
pub const NEXT_LABEL: &str = "Suivant ▶";
pub const PAGE_SIZE_LABEL: &str = "Lignes par page :";

pub fn page_label(window: PageWindow) -> String {
    format!("Page {} sur {}", window.current_page(), window.total_pages())
}

pub fn total_label(window: PageWindow) -> String {
    match window.total {
        0 => "Aucun élément".to_owned(),
        1 => "1 élément".to_owned(),
        total => format!("{total} éléments"),
    }
}

/// Previous/next buttons are disabled when the window has nowhere to go.
pub fn render_pager(ui: &mut Ui, window: PageWindow, actions: &mut Vec<TableAction>) {
    ui.horizontal(|ui| {
        if ui
            .add_enabled(window.has_previous(), Button::new(PREVIOUS_LABEL))
            .clicked()
        {
            actions.push(TableAction::ChangePage(PageRequest::Previous));
        }

        ui.label(page_label(window));

        if ui
            .add_enabled(window.has_next(), Button::new(NEXT_LABEL))
            .clicked()
        {
            actions.push(TableAction::ChangePage(PageRequest::Next));
        }

        ui.separator();
        ui.label(PAGE_SIZE_LABEL);
        for size in PAGE_SIZE_OPTIONS {
            let selected = size == window.take;
            if ui.selectable_label(selected, size.to_string()).clicked() && !selected {
                actions.push(TableAction::ChangePage(PageRequest::Size(size)));
            }
        }

        ui.separator();
        ui.label(total_label(window));
    });
}
