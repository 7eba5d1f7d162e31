//! Embedding placeholder tokens into the document.
//!
//! Both strategies share one plan shape: a single structural insertion at the
//! selection, a single space right after the inserted construct, and a
//! selection move to the end of that space. The selection therefore never
//! ends inside the construct and further typing cannot extend it.
//!
//! The two strategies serve different merge tools and are not meant to be
//! mixed within one document.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use common::{PlaceholderToken, UnknownValue};

use crate::host::{Anchor, HostDocument, HostError, Mutation, Transaction};

pub mod field_code;
pub mod hidden_region;

/// How tokens are embedded; chosen once through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InsertionStrategy {
    /// MERGEFIELD field code carried in a markup package.
    #[default]
    FieldCode,
    /// Undecorated region tagged with the token.
    HiddenRegion,
}

impl InsertionStrategy {
    /// The three mutations that embed `token`, in submission order.
    pub fn plan(self, token: &PlaceholderToken) -> Vec<Mutation> {
        let structural = match self {
            InsertionStrategy::FieldCode => field_code::structural_insert(token),
            InsertionStrategy::HiddenRegion => hidden_region::structural_insert(token),
        };
        vec![
            structural,
            Mutation::InsertText {
                anchor: Anchor::AfterInserted,
                text: " ".to_string(),
            },
            Mutation::SelectEnd(Anchor::AfterInserted),
        ]
    }

    /// Embeds `token` at the selection in one committed batch.
    pub async fn insert<D: HostDocument>(
        self,
        document: &mut D,
        token: &PlaceholderToken,
    ) -> Result<(), HostError> {
        debug!("inserting {} as {}", token, self);
        let mut transaction = Transaction::new(document);
        for mutation in self.plan(token) {
            transaction.queue(mutation);
        }
        transaction.commit().await
    }
}

impl fmt::Display for InsertionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InsertionStrategy::FieldCode => "field-code",
            InsertionStrategy::HiddenRegion => "hidden-region",
        };
        f.write_str(name)
    }
}

impl FromStr for InsertionStrategy {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "field-code" | "mergefield" => Ok(InsertionStrategy::FieldCode),
            "hidden-region" | "content-control" => Ok(InsertionStrategy::HiddenRegion),
            _ => Err(UnknownValue {
                kind: "insertion strategy",
                expected: "field-code or hidden-region",
                found: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryDocument;
    use futures::executor::block_on;

    #[test]
    fn test_plan_shape_is_shared() {
        let token = PlaceholderToken::literal("$Fecha");
        for strategy in [InsertionStrategy::FieldCode, InsertionStrategy::HiddenRegion] {
            let plan = strategy.plan(&token);
            assert_eq!(plan.len(), 3);
            assert_eq!(
                plan[1],
                Mutation::InsertText {
                    anchor: Anchor::AfterInserted,
                    text: " ".to_string()
                }
            );
            assert_eq!(plan[2], Mutation::SelectEnd(Anchor::AfterInserted));
        }
    }

    #[test]
    fn test_insert_commits_once() {
        let mut document = MemoryDocument::new();
        let token = PlaceholderToken::literal("$Fecha");
        block_on(InsertionStrategy::FieldCode.insert(&mut document, &token)).unwrap();
        assert_eq!(document.syncs(), 1);
        assert_eq!(document.plain_text(), "«$Fecha» ");
    }

    #[test]
    fn test_cursor_never_inside_construct() {
        let token = PlaceholderToken::literal("$r.item.precio");
        for strategy in [InsertionStrategy::FieldCode, InsertionStrategy::HiddenRegion] {
            let mut document = MemoryDocument::from_text("Precio: ");
            block_on(strategy.insert(&mut document, &token)).unwrap();
            document.type_text("USD");

            let text = document.plain_text();
            assert!(text.ends_with(" USD"), "{strategy}: {text}");
            for region in document.regions() {
                assert_eq!(region.content, "$r.item.precio");
            }
        }
    }

    #[test]
    fn test_host_failure_propagates() {
        let mut document = MemoryDocument::from_text("x");
        document.reject_next_sync("busy");
        let token = PlaceholderToken::literal("$Fecha");
        let err = block_on(InsertionStrategy::HiddenRegion.insert(&mut document, &token))
            .unwrap_err();
        assert!(matches!(err, HostError::Rejected { .. }));
        assert_eq!(document.plain_text(), "x");
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(
            "hidden-region".parse::<InsertionStrategy>().unwrap(),
            InsertionStrategy::HiddenRegion
        );
        assert_eq!(InsertionStrategy::FieldCode.to_string(), "field-code");
        assert!("ooxml-v2".parse::<InsertionStrategy>().is_err());
        let json = serde_json::to_string(&InsertionStrategy::HiddenRegion).unwrap();
        assert_eq!(json, "\"hidden-region\"");
    }
}
