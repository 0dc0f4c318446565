//! Interaction tests for `TableWithPagination`.
//!
//! The table is driven with a fixed page of rows; every event it emits is
//! collected so the tests can assert on what the parent would receive.

use bizdesk_business::{FilterMap, PageChange, PageWindow};
use bizdesk_ui::widgets::table::pager::{NEXT_LABEL, PREVIOUS_LABEL};
use bizdesk_ui::widgets::table::toolbar::RESET_FILTERS_LABEL;
use bizdesk_ui::widgets::table::{ALL_LABEL, EMPTY_LABEL};
use bizdesk_ui::widgets::{
    CellValue, Column, FilterOption, TableEvent, TableState, TableWithPagination,
};
use egui_kittest::Harness;
use kittest::Queryable;
use ustr::Ustr;

struct Row {
    id: u64,
    name: &'static str,
    status: &'static str,
}

struct Fixture {
    rows: Vec<Row>,
    columns: Vec<Column<Row>>,
    options: Vec<FilterOption>,
    window: PageWindow,
    table: TableState,
    events: Vec<TableEvent>,
    actions: Vec<(usize, u64)>,
}

impl Fixture {
    fn new(window: PageWindow) -> Self {
        Self {
            rows: vec![
                Row { id: 1, name: "Lyon", status: "ENABLED" },
                Row { id: 2, name: "Paris", status: "DISABLED" },
                Row { id: 3, name: "Nantes", status: "ENABLED" },
            ],
            columns: vec![
                Column::new("Nom", "name", |row: &Row| CellValue::text(row.name)),
                Column::new("Statut", "status", |row: &Row| CellValue::text(row.status))
                    .filterable(),
            ],
            options: vec![
                FilterOption::builder().field("status").label("Actif").value("ENABLED").build(),
                FilterOption::builder()
                    .field("status")
                    .label("Inactif")
                    .value("DISABLED")
                    .build(),
            ],
            window,
            table: TableState::new(),
            events: Vec::new(),
            actions: Vec::new(),
        }
    }
}

fn harness(window: PageWindow) -> Harness<'static, Fixture> {
    Harness::new_ui_state(
        |ui, fixture: &mut Fixture| {
            let open = |ui: &mut egui::Ui, row: &Row| -> Option<u64> {
                ui.button(format!("Ouvrir {}", row.name)).clicked().then_some(row.id)
            };
            let output = TableWithPagination::<_, u64>::new(
                "test_table",
                &fixture.rows,
                &fixture.columns,
                fixture.window,
            )
            .filter_options(&fixture.options)
            .row_click(true)
            .actions(&open)
            .show(ui, &mut fixture.table);
            fixture.events.extend(output.events);
            fixture.actions.extend(output.action);
        },
        Fixture::new(window),
    )
}

#[test]
fn last_page_shows_page_count_and_blocks_next() {
    let mut harness = harness(PageWindow::new(20, 10, 25));
    harness.run();

    harness.get_by_label("Page 3 sur 3");
    harness.get_by_label("25 éléments");

    harness.get_by_label(NEXT_LABEL).click();
    harness.run();
    assert!(harness.state().events.is_empty(), "next is disabled on the last page");

    harness.get_by_label(PREVIOUS_LABEL).click();
    harness.run();
    assert_eq!(
        harness.state().events,
        vec![TableEvent::PageChange(PageChange { skip: 10, take: 10 })]
    );
}

#[test]
fn previous_is_blocked_on_first_page() {
    let mut harness = harness(PageWindow::new(0, 10, 25));
    harness.run();

    harness.get_by_label(PREVIOUS_LABEL).click();
    harness.run();
    assert!(harness.state().events.is_empty());

    harness.get_by_label(NEXT_LABEL).click();
    harness.run();
    assert_eq!(
        harness.state().events,
        vec![TableEvent::PageChange(PageChange { skip: 10, take: 10 })]
    );
}

#[test]
fn empty_dataset_disables_both_directions() {
    let mut harness = harness(PageWindow::first(10));
    harness.state_mut().rows.clear();
    harness.run();

    harness.get_by_label("Page 1 sur 0");
    harness.get_by_label(EMPTY_LABEL);

    harness.get_by_label(NEXT_LABEL).click();
    harness.get_by_label(PREVIOUS_LABEL).click();
    harness.run();
    assert!(harness.state().events.is_empty());
}

#[test]
fn page_size_change_restarts_from_first_page() {
    let mut harness = harness(PageWindow::new(20, 10, 25));
    harness.run();

    harness.get_by_label("50").click();
    harness.run();

    assert_eq!(
        harness.state().events,
        vec![TableEvent::PageChange(PageChange { skip: 0, take: 50 })]
    );
}

#[test]
fn choosing_a_filter_emits_the_full_map_and_filters_the_page() {
    let mut harness = harness(PageWindow::new(0, 10, 3));
    harness.run();
    harness.get_by_label("Paris");

    harness.get_by_label(ALL_LABEL).click();
    harness.run();
    harness.get_by_label("Actif").click();
    harness.run();

    let mut expected = FilterMap::new();
    expected.insert(Ustr::from("status"), "ENABLED".to_owned());
    assert_eq!(harness.state().events, vec![TableEvent::FilterChange(expected)]);

    assert!(harness.query_by_label("Paris").is_none());
    harness.get_by_label("Lyon");
    harness.get_by_label("Nantes");
}

#[test]
fn reset_clears_filters() {
    let mut harness = harness(PageWindow::new(0, 10, 3));
    harness
        .state_mut()
        .table
        .filters
        .insert(Ustr::from("status"), "DISABLED".to_owned());
    harness.run();

    assert!(harness.query_by_label("Lyon").is_none());

    harness.get_by_label(RESET_FILTERS_LABEL).click();
    harness.run();

    assert_eq!(
        harness.state().events,
        vec![TableEvent::FilterChange(FilterMap::new())]
    );
    harness.get_by_label("Lyon");
}

#[test]
fn search_narrows_rows_without_emitting_events() {
    let mut harness = harness(PageWindow::new(0, 10, 3));
    harness.state_mut().table.search = "an".to_owned();
    harness.run();

    harness.get_by_label("Nantes");
    assert!(harness.query_by_label("Lyon").is_none());
    assert!(harness.query_by_label("Paris").is_none());
    assert!(harness.state().events.is_empty());
}

#[test]
fn action_button_reports_action_not_row_click() {
    let mut harness = harness(PageWindow::new(0, 10, 3));
    harness.run();

    harness.get_by_label("Ouvrir Paris").click();
    harness.run();

    assert_eq!(harness.state().actions, vec![(1, 2)]);
    assert!(
        !harness
            .state()
            .events
            .iter()
            .any(|event| matches!(event, TableEvent::RowClicked(_))),
        "action buttons must not double as row clicks"
    );
}

#[test]
fn clicking_cell_text_reports_row_click() {
    let mut harness = harness(PageWindow::new(0, 10, 3));
    harness.run();

    harness.get_by_label("Paris").click();
    harness.run();

    assert_eq!(harness.state().events, vec![TableEvent::RowClicked(1)]);
    assert!(harness.state().actions.is_empty());
}

#[test]
fn clickable_rows_show_pointing_hand() {
    let mut harness = harness(PageWindow::new(0, 10, 3));
    harness.run();

    harness.get_by_label("Nantes").hover();
    harness.run();

    assert_eq!(
        harness.output().platform_output.cursor_icon,
        egui::CursorIcon::PointingHand
    );
}
