//! Unwrapping hidden regions once a template is finished.
//!
//! One flat sweep over the whole document: every hidden region is removed and
//! its text kept. Regions the author decorated (bounding box, tags) are their
//! own content controls and stay. Field codes are left alone; turning those into text is a manual
//! step for the author (see [`crate::helpers::MANUAL_FIELD_CODE_CLEANUP`]).

use log::info;

use crate::host::{Appearance, HostDocument, HostError, Mutation, Transaction};

/// Removes every hidden region in `document`, keeping its content.
///
/// Makes two round trips: one read of the regions, then one batch with all
/// removals. Returns how many regions were unwrapped.
pub async fn remove_regions<D: HostDocument>(document: &mut D) -> Result<usize, HostError> {
    let regions = document.load_regions().await?;

    let mut transaction = Transaction::new(document);
    for region in regions.iter().filter(|r| r.appearance == Appearance::Hidden) {
        transaction.queue(Mutation::RemoveRegion {
            id: region.id,
            keep_content: true,
        });
    }
    let removed = transaction.len();
    transaction.commit().await?;

    info!("unwrapped {} of {} region(s)", removed, regions.len());
    Ok(removed)
}
