//! Tokens as plain text inside an undecorated, tagged region.
//!
//! The token is document text, not markup, so it is never escaped. Merge
//! tools find it through the region's tag and title rather than by scanning
//! field codes.

use common::PlaceholderToken;

use crate::host::{Appearance, Mutation, RegionSpec};

pub fn region_for(token: &PlaceholderToken) -> RegionSpec {
    RegionSpec {
        title: token.to_string(),
        tag: token.to_string(),
        appearance: Appearance::Hidden,
        content: token.to_string(),
    }
}

/// Creates the region at the selection.
pub fn structural_insert(token: &PlaceholderToken) -> Mutation {
    Mutation::InsertRegion(region_for(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_metadata_is_the_raw_token() {
        let region = region_for(&PlaceholderToken::literal("$a<b>&c"));
        assert_eq!(region.title, "$a<b>&c");
        assert_eq!(region.tag, "$a<b>&c");
        assert_eq!(region.content, "$a<b>&c");
        assert_eq!(region.appearance, Appearance::Hidden);
    }
}
