//! Enterprises table.

use bizdesk_business::Enterprise;
use egui::Ui;

use super::{RowAction, TableConfig, render_status, status_filter_options, toggle_label};
use crate::widgets::{CellValue, Column, FilterOption};

pub struct EnterpriseTable;

impl TableConfig for EnterpriseTable {
    type Row = Enterprise;

    const TITLE: &'static str = "Entreprises";

    fn columns() -> Vec<Column<Enterprise>> {
        vec![
            Column::new("Nom", "name", |e: &Enterprise| CellValue::text(&e.name)).sortable(),
            Column::new("SIRET", "siret", |e: &Enterprise| CellValue::text(&e.siret)),
            Column::new("Email", "email", |e: &Enterprise| CellValue::text(&e.email)),
            Column::new("Statut", "status", |e: &Enterprise| CellValue::text(e.status.as_str()))
                .filterable()
                .render(|ui, e: &Enterprise| render_status(ui, e.status)),
        ]
    }

    fn filter_options() -> Vec<FilterOption> {
        status_filter_options()
    }

    fn actions(ui: &mut Ui, enterprise: &Enterprise) -> Option<RowAction> {
        let mut action = None;
        if ui.small_button(toggle_label(enterprise.status.is_enabled())).clicked() {
            action = Some(RowAction::SetStatus(enterprise.status.toggled().as_str()));
        }
        if ui.small_button("🗑").on_hover_text("Supprimer").clicked() {
            action = Some(RowAction::Delete);
        }
        action
    }
}
