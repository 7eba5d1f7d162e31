//! Taskpane state and the read side used by whatever renders it.
//!
//! This module defines the one live state object of the field picker: the
//! loaded catalog, the view selection (tab and filter), the sort direction,
//! the configured insertion strategy, and the notice waiting to be shown.
//! Commands mutate it through `update::update`; renderers read it through the
//! helper methods below.

use common::{Category, FieldCatalog, FieldName, SortDirection};

use crate::insertion::InsertionStrategy;
use crate::props::TaskpaneProps;

/// What the author is looking at. Transient and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    /// Tab whose fields are listed.
    pub active_category: Category,

    /// Case-insensitive substring applied to the active tab only.
    pub filter_text: String,
}

/// Main state container for the taskpane.
///
/// Fields are `pub` because they are read by renderers and written by the
/// `update` module; nothing else should mutate them.
#[derive(Debug, Clone)]
pub struct TaskpaneState {
    /// Fields of the last successful load, empty until one happens.
    pub catalog: FieldCatalog,

    /// Active tab and filter.
    pub view: ViewState,

    /// Direction of the last sort, also applied to the next load.
    pub sort: SortDirection,

    /// How chosen tokens are embedded.
    pub strategy: InsertionStrategy,

    /// Display name of the loaded definition file, if any.
    pub source_name: Option<String>,

    /// Message waiting to be shown to the author (parse failures, cleanup).
    pub notice: Option<String>,
}

/// Content of the field list for the active tab.
#[derive(Debug, PartialEq, Eq)]
pub enum ListView<'a> {
    /// The tab has no fields at all; show `helpers::EMPTY_LIST_MESSAGE`.
    NoFields,
    /// Fields passing the filter, possibly none.
    Fields(Vec<&'a FieldName>),
}

impl TaskpaneState {
    /// Constructs a state with an empty catalog and the configured tab, sort
    /// direction and strategy.
    pub fn new(props: TaskpaneProps) -> Self {
        Self {
            catalog: FieldCatalog::new(),
            view: ViewState {
                active_category: props.initial_category,
                filter_text: String::new(),
            },
            sort: props.initial_sort,
            strategy: props.strategy,
            source_name: None,
            notice: None,
        }
    }

    /// The list for the active tab with the current filter applied.
    ///
    /// An empty tab and a filter that matches nothing are kept apart so the
    /// renderer can show the placeholder only in the first case.
    pub fn list_view(&self) -> ListView<'_> {
        let category = self.view.active_category;
        if self.catalog.fields(category).is_empty() {
            return ListView::NoFields;
        }
        ListView::Fields(self.catalog.query(category, &self.view.filter_text))
    }

    /// Loop open/close controls are offered on the plural tab only.
    pub fn loop_controls_visible(&self) -> bool {
        self.view.active_category == Category::Plural
    }
}

impl Default for TaskpaneState {
    fn default() -> Self {
        Self::new(TaskpaneProps::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> TaskpaneState {
        let mut state = TaskpaneState::default();
        state.catalog = ["Fecha", "Firma", "Resultados.Item.Precio"]
            .iter()
            .filter_map(|n| FieldName::parse(n))
            .collect();
        state
    }

    #[test]
    fn test_new_state_uses_props() {
        let state = TaskpaneState::new(TaskpaneProps {
            strategy: InsertionStrategy::HiddenRegion,
            initial_sort: SortDirection::Descending,
            initial_category: Category::Unique,
        });
        assert_eq!(state.view.active_category, Category::Unique);
        assert_eq!(state.sort, SortDirection::Descending);
        assert_eq!(state.strategy, InsertionStrategy::HiddenRegion);
        assert!(state.catalog.is_empty());
    }

    #[test]
    fn test_list_view_distinguishes_empty_tab() {
        let mut state = loaded();
        state.view.active_category = Category::Unique;
        assert_eq!(state.list_view(), ListView::NoFields);

        state.view.active_category = Category::General;
        state.view.filter_text = "zzz".to_string();
        assert_eq!(state.list_view(), ListView::Fields(vec![]));
    }

    #[test]
    fn test_list_view_applies_filter() {
        let mut state = loaded();
        state.view.filter_text = "FI".to_string();
        match state.list_view() {
            ListView::Fields(fields) => {
                let names: Vec<&str> = fields.iter().map(|f| f.as_str()).collect();
                assert_eq!(names, vec!["Firma"]);
            }
            ListView::NoFields => panic!("expected fields"),
        }
    }

    #[test]
    fn test_loop_controls_only_on_plural_tab() {
        let mut state = loaded();
        assert!(!state.loop_controls_visible());
        state.view.active_category = Category::Plural;
        assert!(state.loop_controls_visible());
    }
}
