//! Markup helpers for field-code constructs.
//!
//! `escape_xml` is applied once to a raw token before it goes into markup.
//! `read_field_code` is the consumer side: it pulls the instruction and the
//! displayed result out of a flat-OPC package the way a merge tool scanning
//! for MERGEFIELD constructs would, which also undoes the escaping.

use regex::Regex;
use roxmltree::Document;
use serde::Serialize;
use std::sync::LazyLock;

use crate::error::MarkupError;

static MERGEFIELD_INSTRUCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*MERGEFIELD\s+(.+?)\s+\\\*\s*MERGEFORMAT\s*$")
        .expect("valid MERGEFIELD instruction regex")
});

/// Escapes the five reserved XML characters.
///
/// Total and pure. Not idempotent: escaping twice double-escapes `&`.
pub fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// A field code as found in a document: its instruction and the result text
/// shown until the field is updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldCode {
    pub instruction: String,
    pub display: String,
}

impl FieldCode {
    /// Token referenced by a `MERGEFIELD ... \* MERGEFORMAT` instruction.
    pub fn merge_token(&self) -> Option<&str> {
        MERGEFIELD_INSTRUCTION
            .captures(&self.instruction)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Phase {
    Before,
    Instruction,
    Result,
    Done,
}

/// Reads the first complete field code out of a markup package.
///
/// Runs are walked in document order: instruction text is collected between
/// the `begin` and `separate` markers, display text between `separate` and
/// `end`.
pub fn read_field_code(package: &str) -> Result<FieldCode, MarkupError> {
    let document = Document::parse(package)?;

    let mut phase = Phase::Before;
    let mut instruction = String::new();
    let mut display = String::new();

    for node in document.descendants().filter(|n| n.is_element()) {
        match (node.tag_name().name(), phase) {
            ("fldChar", _) => {
                let kind = node
                    .attributes()
                    .find(|attr| attr.name() == "fldCharType")
                    .map(|attr| attr.value());
                phase = match (kind, phase) {
                    (Some("begin"), Phase::Before) => Phase::Instruction,
                    (Some("separate"), Phase::Instruction) => Phase::Result,
                    (Some("end"), Phase::Result) => Phase::Done,
                    _ => phase,
                };
            }
            ("instrText", Phase::Instruction) => {
                instruction.push_str(node.text().unwrap_or_default())
            }
            ("t", Phase::Result) => display.push_str(node.text().unwrap_or_default()),
            _ => {}
        }
        if phase == Phase::Done {
            return Ok(FieldCode {
                instruction,
                display,
            });
        }
    }

    Err(MarkupError::IncompleteFieldCode)
}
