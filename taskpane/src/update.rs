//! Update function for the taskpane.
//!
//! This module contains a single `update` function following an Elm-style
//! architecture: it receives the current `TaskpaneState`, the open document
//! and a `Msg`, mutates the state accordingly, and returns whether the view
//! should re-render.
//!
//! Key behaviors
//! - Loading a definition file replaces the catalog wholesale, sorted with the
//!   current direction; a malformed file keeps the old catalog and raises a notice.
//! - Tab, filter and sort commands only touch the state.
//! - Choosing a field or loop control builds the token for the active tab and
//!   embeds it with the configured strategy in one committed batch.
//! - Cleanup unwraps hidden regions, or explains the manual steps when tokens
//!   are written as field codes.

use log::warn;

use common::{FieldCatalog, PlaceholderToken};

use crate::cleanup::remove_regions;
use crate::helpers::{cleanup_notice, load_failed_notice, MANUAL_FIELD_CODE_CLEANUP};
use crate::host::{HostDocument, HostError};
use crate::insertion::InsertionStrategy;
use crate::messages::Msg;
use crate::state::TaskpaneState;

/// Central update function for the taskpane.
///
/// Contract
/// - Mutates `state` based on `msg`; only commands that embed tokens or clean
///   up touch `document`.
/// - Returns `Ok(true)` to re-render, `Ok(false)` when only the document changed.
/// - Host failures are returned unchanged; nothing is retried or rolled back.
pub async fn update<D: HostDocument>(
    state: &mut TaskpaneState,
    document: &mut D,
    msg: Msg,
) -> Result<bool, HostError> {
    match msg {
        Msg::LoadCatalog {
            source_name,
            source,
        } => {
            match FieldCatalog::load(&source) {
                Ok(mut catalog) => {
                    catalog.sort(state.sort);
                    state.catalog = catalog;
                    state.source_name = Some(source_name);
                    state.notice = None;
                }
                Err(err) => {
                    warn!("keeping previous catalog, {} failed to load: {}", source_name, err);
                    state.notice = Some(load_failed_notice(&source_name));
                }
            }
            Ok(true)
        }
        Msg::ChangeCategory(category) => {
            if state.view.active_category == category {
                return Ok(false);
            }
            state.view.active_category = category;
            Ok(true)
        }
        Msg::ChangeFilter(filter) => {
            if state.view.filter_text == filter {
                return Ok(false);
            }
            state.view.filter_text = filter;
            Ok(true)
        }
        Msg::ChangeSortDirection(direction) => {
            state.sort = direction;
            state.catalog.sort(direction);
            Ok(true)
        }
        Msg::ChooseField(field) => {
            let token = PlaceholderToken::for_field(&field, state.view.active_category);
            state.strategy.insert(document, &token).await?;
            Ok(false)
        }
        Msg::ChooseControlToken(control) => {
            let token = PlaceholderToken::loop_control(control);
            state.strategy.insert(document, &token).await?;
            Ok(false)
        }
        Msg::CleanUp => {
            let notice = match state.strategy {
                InsertionStrategy::HiddenRegion => cleanup_notice(remove_regions(document).await?),
                InsertionStrategy::FieldCode => MANUAL_FIELD_CODE_CLEANUP.to_string(),
            };
            state.notice = Some(notice);
            Ok(true)
        }
        Msg::DismissNotice => Ok(state.notice.take().is_some()),
    }
}
