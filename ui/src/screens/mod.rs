//! List screens: one per backend collection.
//!
//! A screen pairs a [`TableConfig`] (columns, filters, row actions) with a
//! [`ListScreen`] that owns the pagination controller and runs the IO.

mod list;
mod modals;

pub mod employees;
pub mod enterprises;
pub mod subsidiaries;
pub mod transport_requests;

use bizdesk_business::Resource;
use chrono::{DateTime, Utc};
use egui::{Color32, RichText, Ui};

use crate::widgets::{Column, FilterOption, Notifications};

pub use employees::EmployeeTable;
pub use enterprises::EnterpriseTable;
pub use list::ListScreen;
pub use subsidiaries::{SubsidiaryForm, SubsidiaryTable};
pub use transport_requests::TransportRequestTable;

/// What a row's actions cell asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Details,
    Edit,
    Delete,
    /// PATCH the status endpoint with this wire value.
    SetStatus(&'static str),
}

/// Columns, filters and row actions of one entity's table.
pub trait TableConfig: 'static {
    type Row: Resource;

    const TITLE: &'static str;

    /// Whether clicking a row opens its details.
    const ROW_CLICK: bool = true;

    fn columns() -> Vec<Column<Self::Row>>;

    fn filter_options() -> Vec<FilterOption>;

    fn actions(ui: &mut Ui, row: &Self::Row) -> Option<RowAction>;

    /// Create/edit form, for entities that support it.
    fn form() -> Option<Box<dyn DraftForm<Self::Row>>> {
        None
    }
}

/// Editable fields of a record.
pub trait DraftForm<T: Resource>: Send {
    fn reset(&mut self);

    fn load(&mut self, record: &T);

    fn ui(&mut self, ui: &mut Ui);

    /// The payload to send, or the reason the form cannot be submitted.
    fn draft(&self) -> Result<T::Draft, String>;
}

/// A tab of the application.
pub trait Screen {
    fn title(&self) -> &'static str;

    fn show(&mut self, ui: &mut Ui, notices: &mut Notifications, now: DateTime<Utc>);
}

pub const ENABLED_COLOR: Color32 = Color32::from_rgb(34, 139, 34);
pub const DISABLED_COLOR: Color32 = Color32::from_rgb(160, 160, 160);
pub const PENDING_COLOR: Color32 = Color32::from_rgb(255, 165, 0);

/// Coloured status label used by the status columns.
pub fn status_badge(ui: &mut Ui, label: &str, color: Color32) {
    ui.label(RichText::new(label).color(color).strong());
}

/// "Activer" for a disabled record, "Désactiver" for an enabled one.
pub fn toggle_label(enabled: bool) -> &'static str {
    if enabled { "Désactiver" } else { "Activer" }
}

/// Filter options for a `status` field holding a [`bizdesk_business::Status`].
pub fn status_filter_options() -> Vec<FilterOption> {
    use bizdesk_business::Status;

    [Status::Enabled, Status::Disabled]
        .into_iter()
        .map(|status| {
            FilterOption::builder()
                .field("status")
                .label(status.label())
                .value(status.as_str())
                .build()
        })
        .collect()
}

/// Status cell: French label, green when enabled.
pub fn render_status(ui: &mut Ui, status: bizdesk_business::Status) {
    let color = if status.is_enabled() { ENABLED_COLOR } else { DISABLED_COLOR };
    status_badge(ui, status.label(), color);
}
