//! In-memory host document.
//!
//! Models a document as a flat list of nodes with the selection collapsed to
//! a position between nodes. Batches are applied to a draft copy and swapped
//! in only when every mutation succeeds.

use log::debug;
use serde::Serialize;

use common::markup::{read_field_code, FieldCode};

use super::{Anchor, HostDocument, HostError, Mutation, RegionId, RegionInfo};

/// One piece of document content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Node {
    Text { text: String },
    FieldCode(FieldCode),
    Region(RegionInfo),
}

impl Node {
    fn visible_text(&self) -> &str {
        match self {
            Node::Text { text } => text,
            Node::FieldCode(field) => &field.display,
            Node::Region(region) => &region.content,
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    cursor: usize,
    last_region_id: RegionId,
    reject_next: Option<String>,
    syncs: usize,
}

struct Draft {
    nodes: Vec<Node>,
    cursor: usize,
    last_region_id: RegionId,
    last_inserted: Option<usize>,
}

impl Draft {
    fn resolve(&self, anchor: Anchor) -> Result<usize, HostError> {
        match anchor {
            Anchor::Selection => Ok(self.cursor),
            Anchor::AfterInserted => self
                .last_inserted
                .map(|index| index + 1)
                .ok_or(HostError::NothingInserted),
        }
    }

    fn insert(&mut self, at: usize, node: Node) {
        self.nodes.insert(at, node);
        if at < self.cursor {
            self.cursor += 1;
        }
        self.last_inserted = Some(at);
    }

    fn apply(&mut self, mutation: Mutation) -> Result<(), HostError> {
        match mutation {
            Mutation::InsertMarkup { package } => {
                let field = read_field_code(&package)?;
                self.insert(self.cursor, Node::FieldCode(field));
            }
            Mutation::InsertRegion(spec) => {
                self.last_region_id += 1;
                let region = RegionInfo {
                    id: self.last_region_id,
                    title: spec.title,
                    tag: spec.tag,
                    appearance: spec.appearance,
                    content: spec.content,
                };
                self.insert(self.cursor, Node::Region(region));
            }
            Mutation::InsertText { anchor, text } => {
                let at = self.resolve(anchor)?;
                self.insert(at, Node::Text { text });
            }
            Mutation::SelectEnd(anchor) => {
                self.cursor = self.resolve(anchor)?;
            }
            Mutation::RemoveRegion { id, keep_content } => {
                let index = self
                    .nodes
                    .iter()
                    .position(|node| matches!(node, Node::Region(region) if region.id == id))
                    .ok_or(HostError::UnknownRegion { id })?;
                if keep_content {
                    let text = self.nodes[index].visible_text().to_string();
                    self.nodes[index] = Node::Text { text };
                } else {
                    self.nodes.remove(index);
                    if index < self.cursor {
                        self.cursor -= 1;
                    }
                }
            }
        }
        Ok(())
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document holding `text`, with the selection collapsed after it.
    pub fn from_text(text: &str) -> Self {
        Self {
            nodes: vec![Node::Text {
                text: text.to_string(),
            }],
            cursor: 1,
            ..Self::default()
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Selection position, counted in nodes from the start of the document.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of round trips made so far, reads included.
    pub fn syncs(&self) -> usize {
        self.syncs
    }

    /// Makes the next round trip fail with `reason`.
    pub fn reject_next_sync(&mut self, reason: &str) {
        self.reject_next = Some(reason.to_string());
    }

    /// Types text at the selection, as an author would, outside any batch.
    pub fn type_text(&mut self, text: &str) {
        self.nodes.insert(
            self.cursor,
            Node::Text {
                text: text.to_string(),
            },
        );
        self.cursor += 1;
    }

    /// Text as rendered: field codes show their result, regions their content.
    pub fn plain_text(&self) -> String {
        self.nodes.iter().map(Node::visible_text).collect()
    }

    pub fn regions(&self) -> impl Iterator<Item = &RegionInfo> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Region(region) => Some(region),
            _ => None,
        })
    }

    pub fn field_codes(&self) -> impl Iterator<Item = &FieldCode> {
        self.nodes.iter().filter_map(|node| match node {
            Node::FieldCode(field) => Some(field),
            _ => None,
        })
    }

    fn round_trip(&mut self) -> Result<(), HostError> {
        self.syncs += 1;
        match self.reject_next.take() {
            Some(reason) => Err(HostError::Rejected { reason }),
            None => Ok(()),
        }
    }
}

impl HostDocument for MemoryDocument {
    async fn sync(&mut self, batch: Vec<Mutation>) -> Result<(), HostError> {
        self.round_trip()?;

        let mut draft = Draft {
            nodes: self.nodes.clone(),
            cursor: self.cursor,
            last_region_id: self.last_region_id,
            last_inserted: None,
        };
        let count = batch.len();
        for mutation in batch {
            draft.apply(mutation)?;
        }

        self.nodes = draft.nodes;
        self.cursor = draft.cursor;
        self.last_region_id = draft.last_region_id;
        debug!("applied {} mutation(s), cursor at {}", count, self.cursor);
        Ok(())
    }

    async fn load_regions(&mut self) -> Result<Vec<RegionInfo>, HostError> {
        self.round_trip()?;
        Ok(self.regions().cloned().collect())
    }
}
