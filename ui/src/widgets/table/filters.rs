//! Filter options and their grouping into dropdowns.

use bon::Builder;
use ustr::Ustr;

/// Reserved option value meaning "no constraint on this field".
pub const ALL_VALUE: &str = "all";
pub const ALL_LABEL: &str = "Tous";

/// One selectable value of a filter dropdown.
///
/// ```ignore
/// FilterOption::builder().field("status").label("Actif").value("ENABLED").build()
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct FilterOption {
    #[builder(into)]
    pub label: String,
    #[builder(into)]
    pub value: String,
    #[builder(into)]
    pub field: Ustr,
}

impl FilterOption {
    pub fn is_all(&self) -> bool {
        self.value == ALL_VALUE
    }

    fn all(field: Ustr) -> Self {
        Self {
            label: ALL_LABEL.to_owned(),
            value: ALL_VALUE.to_owned(),
            field,
        }
    }
}

/// Options of a single dropdown, led by the synthetic "Tous" entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterGroup {
    pub field: Ustr,
    pub options: Vec<FilterOption>,
}

impl FilterGroup {
    /// Label of the option currently selected, "Tous" when nothing is.
    pub fn selected_label(&self, selected: Option<&str>) -> &str {
        let value = selected.unwrap_or(ALL_VALUE);
        self.options
            .iter()
            .find(|option| option.value == value)
            .map_or(ALL_LABEL, |option| option.label.as_str())
    }
}

/// Groups options by field, keeping first-appearance order for groups and
/// declaration order inside each group.
pub fn derive_filter_groups(options: &[FilterOption]) -> Vec<FilterGroup> {
    let mut groups: Vec<FilterGroup> = Vec::new();
    for option in options {
        match groups.iter_mut().find(|group| group.field == option.field) {
            Some(group) => group.options.push(option.clone()),
            None => groups.push(FilterGroup {
                field: option.field,
                options: vec![FilterOption::all(option.field), option.clone()],
            }),
        }
    }
    groups
}
