//! Search refinements: the descriptors an extension advertises and the values
//! the host sends back.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriState {
    #[default]
    Ignore,
    Include,
    Exclude,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSortValue {
    pub key: String,
    pub direction: SortDirection,
}

pub type MultiToggleValues = HashMap<String, TriState>;

/// A value for one filter control. The shape follows the control type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Checkbox(bool),
    Text(String),
    Sort(FilterSortValue),
    MultiToggle(MultiToggleValues),
}

/// Filter control id -> current value.
pub type FilterValues = HashMap<String, FilterValue>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterField {
    pub key: String,
    pub label: String,
}

impl FilterField {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self { key: key.into(), label: label.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSort {
    pub id: String,
    pub label: String,
    pub default_value: FilterSortValue,
    pub fields: Vec<FilterField>,
    pub supports_both_directions: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSeparator {
    pub id: String,
    pub label: String,
    pub default_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterMultiToggle {
    pub id: String,
    pub label: String,
    pub default_value: MultiToggleValues,
    pub fields: Vec<FilterField>,
    pub is_tri_state: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCheckbox {
    pub id: String,
    pub label: String,
    pub default_value: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FilterOption {
    Sort(FilterSort),
    Separator(FilterSeparator),
    MultiToggle(FilterMultiToggle),
    Checkbox(FilterCheckbox),
}

impl FilterOption {
    pub fn id(&self) -> &str {
        match self {
            FilterOption::Sort(f) => &f.id,
            FilterOption::Separator(f) => &f.id,
            FilterOption::MultiToggle(f) => &f.id,
            FilterOption::Checkbox(f) => &f.id,
        }
    }
}
