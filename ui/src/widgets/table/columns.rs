//! Column contract of the paginated table.
//!
//! A column reads its value through a typed accessor function, so the widget
//! never looks fields up by name at runtime. An optional renderer replaces the
//! default text cell; search, filters and sorting keep using the accessor value.

use std::cmp::Ordering;
use std::fmt;

use egui::{Label, Ui};
use egui_extras::Column as LayoutColumn;
use ustr::Ustr;

pub const ROW_HEIGHT: f32 = 28.0;
pub const HEADER_HEIGHT: f32 = 24.0;
pub const MIN_COLUMN_WIDTH: f32 = 70.0;
pub const ACTIONS_WIDTH: f32 = 220.0;

/// Raw value of a cell, as returned by a column accessor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Bool(bool),
    #[default]
    Empty,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// `None` maps to [`CellValue::Empty`].
    pub fn optional_text(value: Option<&str>) -> Self {
        value.map_or(Self::Empty, Self::text)
    }

    pub fn integer(value: impl TryInto<i64>) -> Self {
        value.try_into().map_or(Self::Empty, Self::Integer)
    }

    /// Ordering used by sortable columns: integers numerically, text
    /// case-insensitively, empty cells last.
    pub fn sort_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Empty, Self::Empty) => Ordering::Equal,
            (Self::Empty, _) => Ordering::Greater,
            (_, Self::Empty) => Ordering::Less,
            (a, b) => a.to_string().to_lowercase().cmp(&b.to_string().to_lowercase()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Empty => Ok(()),
        }
    }
}

pub type Accessor<T> = fn(&T) -> CellValue;

pub type CellRenderer<T> = Box<dyn Fn(&mut Ui, &T) + Send + Sync>;

pub struct Column<T> {
    pub header: String,
    /// Record field this column shows; filter options target columns by field.
    pub field: Ustr,
    pub accessor: Accessor<T>,
    pub sortable: bool,
    pub filterable: bool,
    render: Option<CellRenderer<T>>,
}

impl<T> Column<T> {
    pub fn new(header: impl Into<String>, field: &str, accessor: Accessor<T>) -> Self {
        Self {
            header: header.into(),
            field: Ustr::from(field),
            accessor,
            sortable: false,
            filterable: false,
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    /// Custom cell content. The accessor still drives search and filtering.
    pub fn render(mut self, render: impl Fn(&mut Ui, &T) + Send + Sync + 'static) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    pub fn has_renderer(&self) -> bool {
        self.render.is_some()
    }

    pub fn value(&self, row: &T) -> CellValue {
        (self.accessor)(row)
    }

    pub fn text(&self, row: &T) -> String {
        self.value(row).to_string()
    }

    pub fn show_cell(&self, ui: &mut Ui, row: &T) {
        match &self.render {
            Some(render) => render(ui, row),
            None => {
                ui.add(Label::new(self.text(row)).selectable(false));
            }
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("header", &self.header)
            .field("field", &self.field)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("render", &self.render.is_some())
            .finish_non_exhaustive()
    }
}

/// Layout of `count` data columns plus an optional trailing actions column.
pub fn layout_columns(count: usize, with_actions: bool) -> Vec<LayoutColumn> {
    let mut layout: Vec<LayoutColumn> = (0..count)
        .map(|_| LayoutColumn::auto().at_least(MIN_COLUMN_WIDTH).resizable(true))
        .collect();
    if with_actions {
        layout.push(LayoutColumn::exact(ACTIONS_WIDTH));
    }
    layout
}

/// Value of the column showing `field`, or [`CellValue::Empty`] when no column does.
pub fn field_value<T>(columns: &[Column<T>], field: Ustr, row: &T) -> CellValue {
    columns
        .iter()
        .find(|column| column.field == field)
        .map_or(CellValue::Empty, |column| column.value(row))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        seats: u32,
    }

    #[test]
    fn text_comes_from_accessor() {
        let column = Column::new("Places", "seats", |row: &Row| CellValue::integer(row.seats));
        assert_eq!(column.text(&Row { name: "a", seats: 4 }), "4");
        assert!(!column.has_renderer());
    }

    #[test]
    fn renderer_does_not_change_accessor_text() {
        let column = Column::new("Nom", "name", |row: &Row| CellValue::text(row.name))
            .render(|ui, row: &Row| {
                ui.strong(row.name.to_uppercase());
            });
        assert!(column.has_renderer());
        assert_eq!(column.text(&Row { name: "lyon", seats: 0 }), "lyon");
    }

    #[test]
    fn unknown_field_is_empty() {
        let columns = vec![Column::new("Nom", "name", |row: &Row| CellValue::text(row.name))];
        let row = Row { name: "a", seats: 1 };
        assert_eq!(field_value(&columns, Ustr::from("status"), &row), CellValue::Empty);
        assert_eq!(field_value(&columns, Ustr::from("name"), &row).to_string(), "a");
    }

    #[test]
    fn actions_add_a_trailing_layout_column() {
        assert_eq!(layout_columns(3, false).len(), 3);
        assert_eq!(layout_columns(3, true).len(), 4);
    }

    #[test]
    fn sort_cmp_orders_numbers_numerically_and_empty_last() {
        assert_eq!(CellValue::Integer(9).sort_cmp(&CellValue::Integer(10)), Ordering::Less);
        assert_eq!(CellValue::text("b").sort_cmp(&CellValue::text("A")), Ordering::Greater);
        assert_eq!(CellValue::Empty.sort_cmp(&CellValue::text("a")), Ordering::Greater);
    }
}
