//! Defines the configuration the taskpane starts from.
//!
//! This module contains the `TaskpaneProps` struct, which plays the part of
//! component properties: whoever hosts the taskpane decides them once, before
//! the first command is dispatched, and the state never changes them except
//! through commands.

use serde::{Deserialize, Serialize};

use common::{Category, SortDirection};

use crate::insertion::InsertionStrategy;

/// Startup configuration for `TaskpaneState`.
///
/// Deserialized from the `taskpane` section of the configuration file; every
/// field may be omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TaskpaneProps {
    /// How tokens are embedded in the document.
    ///
    /// - `field-code` (the default) writes MERGEFIELD field codes, found by
    ///   merge tools that scan field instructions.
    /// - `hidden-region` writes the token as plain text inside an undecorated
    ///   region tagged with the token.
    ///
    /// The two are not meant to be mixed within one document.
    pub strategy: InsertionStrategy,

    /// Direction applied to every freshly loaded catalog. Ascending unless
    /// configured otherwise.
    pub initial_sort: SortDirection,

    /// Tab that is active before the author picks one.
    pub initial_category: Category,
}
