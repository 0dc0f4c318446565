//! Transport requests table.
//!
//! Requests are created by the customer side, so this screen has no form: an
//! operator only accepts or rejects pending requests.

use bizdesk_business::{TransportRequest, TransportStatus};
use egui::Ui;

use super::{
    DISABLED_COLOR, ENABLED_COLOR, PENDING_COLOR, RowAction, TableConfig, status_badge,
};
use crate::widgets::{CellValue, Column, FilterOption};

/// Display format of the request date. Search still sees the RFC 3339 value.
pub const DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

pub struct TransportRequestTable;

impl TableConfig for TransportRequestTable {
    type Row = TransportRequest;

    const TITLE: &'static str = "Demandes de transport";

    fn columns() -> Vec<Column<TransportRequest>> {
        vec![
            Column::new("Référence", "reference", |r: &TransportRequest| {
                CellValue::text(&r.reference)
            })
            .sortable(),
            Column::new("Départ", "departure", |r: &TransportRequest| {
                CellValue::text(&r.departure)
            }),
            Column::new("Arrivée", "arrival", |r: &TransportRequest| CellValue::text(&r.arrival)),
            Column::new("Date", "requestedAt", |r: &TransportRequest| {
                CellValue::text(r.requested_at.to_rfc3339())
            })
            .sortable()
            .render(|ui, r: &TransportRequest| {
                ui.label(r.requested_at.format(DATE_FORMAT).to_string());
            }),
            Column::new("Passagers", "passengers", |r: &TransportRequest| {
                CellValue::integer(r.passengers)
            })
            .sortable(),
            Column::new("Statut", "status", |r: &TransportRequest| {
                CellValue::text(r.status.as_str())
            })
            .filterable()
            .render(|ui, r: &TransportRequest| render_transport_status(ui, r.status)),
        ]
    }

    fn filter_options() -> Vec<FilterOption> {
        TransportStatus::ALL
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

    fn actions(ui: &mut Ui, request: &TransportRequest) -> Option<RowAction> {
        if !request.status.is_open() {
            return None;
        }
        let mut action = None;
        if ui.small_button("Accepter").clicked() {
            action = Some(RowAction::SetStatus(TransportStatus::Accepted.as_str()));
        }
        if ui.small_button("Refuser").clicked() {
            action = Some(RowAction::SetStatus(TransportStatus::Rejected.as_str()));
        }
        action
    }
}

fn render_transport_status(ui: &mut Ui, status: TransportStatus) {
    let color = match status {
        TransportStatus::Pending => PENDING_COLOR,
        TransportStatus::Accepted | TransportStatus::Completed => ENABLED_COLOR,
        TransportStatus::Rejected => DISABLED_COLOR,
    };
    status_badge(ui, status.label(), color);
}
