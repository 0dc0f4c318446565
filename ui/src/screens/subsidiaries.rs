//! Subsidiaries table and its create/edit form.

use bizdesk_business::{Subsidiary, SubsidiaryDraft};
use egui::{Grid, TextEdit, Ui};

use super::{
    DraftForm, RowAction, TableConfig, render_status, status_filter_options, toggle_label,
};
use crate::widgets::{CellValue, Column, FilterOption};

pub struct SubsidiaryTable;

impl TableConfig for SubsidiaryTable {
    type Row = Subsidiary;

    const TITLE: &'static str = "Filiales";

    fn columns() -> Vec<Column<Subsidiary>> {
        vec![
            Column::new("Nom", "name", |s: &Subsidiary| CellValue::text(&s.name)).sortable(),
            Column::new("Ville", "city", |s: &Subsidiary| CellValue::text(&s.city)).sortable(),
            Column::new("Adresse", "address", |s: &Subsidiary| {
                CellValue::optional_text(s.address.as_deref())
            }),
            Column::new("Employés", "employeeCount", |s: &Subsidiary| {
                CellValue::integer(s.employee_count)
            })
            .sortable(),
            Column::new("Statut", "status", |s: &Subsidiary| CellValue::text(s.status.as_str()))
                .filterable()
                .render(|ui, s: &Subsidiary| render_status(ui, s.status)),
        ]
    }

    fn filter_options() -> Vec<FilterOption> {
        status_filter_options()
    }

    fn actions(ui: &mut Ui, subsidiary: &Subsidiary) -> Option<RowAction> {
        let mut action = None;
        if ui.small_button("✏").on_hover_text("Modifier").clicked() {
            action = Some(RowAction::Edit);
        }
        if ui.small_button(toggle_label(subsidiary.status.is_enabled())).clicked() {
            action = Some(RowAction::SetStatus(subsidiary.status.toggled().as_str()));
        }
        if ui.small_button("🗑").on_hover_text("Supprimer").clicked() {
            action = Some(RowAction::Delete);
        }
        action
    }

    fn form() -> Option<Box<dyn DraftForm<Subsidiary>>> {
        Some(Box::new(SubsidiaryForm::default()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubsidiaryForm {
    pub name: String,
    pub city: String,
    pub address: String,
}

impl DraftForm<Subsidiary> for SubsidiaryForm {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn load(&mut self, subsidiary: &Subsidiary) {
        self.name = subsidiary.name.clone();
        self.city = subsidiary.city.clone();
        self.address = subsidiary.address.clone().unwrap_or_default();
    }

    fn ui(&mut self, ui: &mut Ui) {
        Grid::new("subsidiary_form")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                labelled_field(ui, "Nom", &mut self.name);
                labelled_field(ui, "Ville", &mut self.city);
                labelled_field(ui, "Adresse", &mut self.address);
            });
    }

    fn draft(&self) -> Result<SubsidiaryDraft, String> {
        let name = self.name.trim();
        let city = self.city.trim();
        if name.is_empty() {
            return Err("Le nom est obligatoire".to_owned());
        }
        if city.is_empty() {
            return Err("La ville est obligatoire".to_owned());
        }
        let address = self.address.trim();
        Ok(SubsidiaryDraft {
            name: name.to_owned(),
            city: city.to_owned(),
            address: (!address.is_empty()).then(|| address.to_owned()),
        })
    }
}

fn labelled_field(ui: &mut Ui, label: &str, value: &mut String) {
    let label = ui.label(label);
    ui.add(TextEdit::singleline(value)).labelled_by(label.id);
    ui.end_row();
}
