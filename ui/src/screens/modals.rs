//! Modal windows of the list screens.

use bizdesk_business::Resource;
use egui::{Button, Color32, Grid, Ui, Window};
use serde::Serialize;
use serde_json::Value;

use super::DraftForm;

pub const CLOSE_LABEL: &str = "Fermer";
pub const CONFIRM_DELETE_LABEL: &str = "Confirmer la suppression";
pub const CANCEL_LABEL: &str = "Annuler";
pub const SAVE_LABEL: &str = "Enregistrer";

/// Answer of a modal for the current frame.
#[derive(Debug, PartialEq, Eq)]
pub enum ModalOutcome<T> {
    Open,
    Closed,
    Confirmed(T),
}

/// Read-only key/value view of a record.
///
/// Returns `false` once the user closed the window.
pub fn show_detail_modal<T: Serialize>(ui: &mut Ui, title: &str, record: &T) -> bool {
    let mut open = true;
    let mut close_clicked = false;

    Window::new(title)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            match serde_json::to_value(record) {
                Ok(Value::Object(fields)) => {
                    Grid::new((title, "detail_grid"))
                        .num_columns(2)
                        .striped(true)
                        .spacing([16.0, 4.0])
                        .show(ui, |ui| {
                            for (key, value) in &fields {
                                ui.strong(key.as_str());
                                ui.label(display_value(value));
                                ui.end_row();
                            }
                        });
                }
                Ok(other) => {
                    ui.label(display_value(&other));
                }
                Err(err) => {
                    ui.colored_label(Color32::RED, format!("Erreur : {err}"));
                }
            }

            ui.add_space(8.0);
            if ui.button(CLOSE_LABEL).clicked() {
                close_clicked = true;
            }
        });

    open && !close_clicked
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "-".to_owned(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Asks before deleting `subject`.
pub fn show_delete_modal(ui: &mut Ui, subject: &str) -> ModalOutcome<()> {
    let mut open = true;
    let mut outcome = ModalOutcome::Open;

    Window::new("Suppression")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            ui.label(format!("Supprimer {subject} ? Cette action est définitive."));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui
                    .add(Button::new(CONFIRM_DELETE_LABEL).fill(Color32::from_rgb(220, 53, 69)))
                    .clicked()
                {
                    outcome = ModalOutcome::Confirmed(());
                }
                if ui.button(CANCEL_LABEL).clicked() {
                    outcome = ModalOutcome::Closed;
                }
            });
        });

    if open { outcome } else { ModalOutcome::Closed }
}

/// Create/edit form. Saving is only possible while the form is valid and no
/// request is running.
pub fn show_form_modal<T: Resource>(
    ui: &mut Ui,
    title: &str,
    form: &mut dyn DraftForm<T>,
    error: Option<&str>,
    submitting: bool,
) -> ModalOutcome<T::Draft> {
    let mut open = true;
    let mut outcome = ModalOutcome::Open;

    Window::new(title)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            form.ui(ui);
            ui.add_space(8.0);

            let draft = form.draft();
            if let Err(reason) = &draft {
                ui.colored_label(Color32::from_rgb(255, 165, 0), reason.as_str());
            }
            if let Some(error) = error {
                ui.colored_label(Color32::RED, format!("Erreur : {error}"));
            }

            ui.horizontal(|ui| {
                let can_save = draft.is_ok() && !submitting;
                if ui.add_enabled(can_save, Button::new(SAVE_LABEL)).clicked()
                    && let Ok(draft) = draft
                {
                    outcome = ModalOutcome::Confirmed(draft);
                }
                if ui.button(CANCEL_LABEL).clicked() {
                    outcome = ModalOutcome::Closed;
                }
                if submitting {
                    ui.spinner();
                }
            });
        });

    if open { outcome } else { ModalOutcome::Closed }
}
