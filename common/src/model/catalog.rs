//! Per-category catalog of field names.
//!
//! The catalog is replaced wholesale on every load and is only ever reordered
//! afterwards; filtering produces borrowed views and never touches the stored
//! order.

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::LazyLock;

use super::category::Category;
use super::field::FieldName;
use crate::error::ParseError;
use crate::fields::read_field_names;

/// Direction shared by every category when the catalog is sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Field names grouped by category, in source order until sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldCatalog {
    general: Vec<FieldName>,
    unique: Vec<FieldName>,
    plural: Vec<FieldName>,
}

impl FieldCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a `.fields` source into a fresh catalog in source order.
    ///
    /// Fails as a whole when the source is not well-formed; there is no
    /// partial result.
    pub fn load(source: &str) -> Result<Self, ParseError> {
        let catalog: FieldCatalog = read_field_names(source)?.into_iter().collect();
        info!(
            "loaded field catalog: {} general, {} unique, {} plural",
            catalog.general.len(),
            catalog.unique.len(),
            catalog.plural.len()
        );
        Ok(catalog)
    }

    /// Appends a name to the end of its category.
    pub fn push(&mut self, name: FieldName) {
        self.fields_mut(name.category()).push(name);
    }

    pub fn fields(&self, category: Category) -> &[FieldName] {
        match category {
            Category::General => &self.general,
            Category::Unique => &self.unique,
            Category::Plural => &self.plural,
        }
    }

    fn fields_mut(&mut self, category: Category) -> &mut Vec<FieldName> {
        match category {
            Category::General => &mut self.general,
            Category::Unique => &mut self.unique,
            Category::Plural => &mut self.plural,
        }
    }

    pub fn len(&self) -> usize {
        self.general.len() + self.unique.len() + self.plural.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sorts every category with the same direction.
    ///
    /// The comparison is total, so ties only happen between identical names
    /// and a descending pass is the exact reverse of an ascending one.
    pub fn sort(&mut self, direction: SortDirection) {
        for category in Category::ALL {
            self.fields_mut(category)
                .sort_unstable_by(|a, b| direction.apply(collate(a.as_str(), b.as_str())));
        }
    }

    /// Names of `category` containing `filter`, ignoring case, in stored order.
    pub fn query(&self, category: Category, filter: &str) -> Vec<&FieldName> {
        let needle = filter.to_lowercase();
        self.fields(category)
            .iter()
            .filter(|name| name.matches_lowercase(&needle))
            .collect()
    }
}

impl FromIterator<FieldName> for FieldCatalog {
    fn from_iter<I: IntoIterator<Item = FieldName>>(iter: I) -> Self {
        let mut catalog = FieldCatalog::new();
        for name in iter {
            catalog.push(name);
        }
        catalog
    }
}

/// CLDR root collator at tertiary strength with punctuation not ignored.
static ROOT_COLLATOR: LazyLock<Option<CollatorBorrowed<'static>>> = LazyLock::new(|| {
    Collator::try_new(Default::default(), CollatorOptions::default())
        .map_err(|err| warn!("root collation unavailable, sorting by code point: {}", err))
        .ok()
});

/// Root-locale comparison: punctuation before digits before letters, then
/// accents, then case (lowercase first). Names the collator holds equal fall
/// back to reversed code points so the order stays total.
pub fn collate(a: &str, b: &str) -> Ordering {
    let collated = match ROOT_COLLATOR.as_ref() {
        Some(collator) => collator.compare(a, b),
        None => Ordering::Equal,
    };
    collated.then_with(|| b.cmp(a))
}
