//! Employees table.

use bizdesk_business::{Employee, EmployeeRole};
use egui::Ui;

use super::{RowAction, TableConfig, render_status, status_filter_options, toggle_label};
use crate::widgets::{CellValue, Column, FilterOption};

pub struct EmployeeTable;

impl TableConfig for EmployeeTable {
    type Row = Employee;

    const TITLE: &'static str = "Employés";

    fn columns() -> Vec<Column<Employee>> {
        vec![
            Column::new("Nom", "lastName", |e: &Employee| CellValue::text(&e.last_name)).sortable(),
            Column::new("Prénom", "firstName", |e: &Employee| CellValue::text(&e.first_name))
                .sortable(),
            Column::new("Email", "email", |e: &Employee| CellValue::text(&e.email)),
            Column::new("Téléphone", "phone", |e: &Employee| {
                CellValue::optional_text(e.phone.as_deref())
            }),
            Column::new("Rôle", "role", |e: &Employee| CellValue::text(e.role.as_str()))
                .filterable()
                .render(|ui, e: &Employee| {
                    ui.label(e.role.label());
                }),
            Column::new("Filiale", "subsidiaryName", |e: &Employee| {
                CellValue::optional_text(e.subsidiary_name.as_deref())
            })
            .sortable(),
            Column::new("Statut", "status", |e: &Employee| CellValue::text(e.status.as_str()))
                .filterable()
                .render(|ui, e: &Employee| render_status(ui, e.status)),
        ]
    }

    fn filter_options() -> Vec<FilterOption> {
        let mut options = status_filter_options();
        options.extend(EmployeeRole::ALL.into_iter().map(|role| {
            FilterOption::builder()
                .field("role")
                .label(role.label())
                .value(role.as_str())
                .build()
        }));
        options
    }

    fn actions(ui: &mut Ui, employee: &Employee) -> Option<RowAction> {
        let mut action = None;
        if ui.small_button("Détails").clicked() {
            action = Some(RowAction::Details);
        }
        if ui.small_button(toggle_label(employee.status.is_enabled())).clicked() {
            action = Some(RowAction::SetStatus(employee.status.toggled().as_str()));
        }
        if ui.small_button("🗑").on_hover_text("Supprimer").clicked() {
            action = Some(RowAction::Delete);
        }
        action
    }
}
