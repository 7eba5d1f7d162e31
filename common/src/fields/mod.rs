//! Reading `.fields` definition files.
//!
//! A definition file is XML with one `<field name="..."/>` element per field,
//! possibly nested inside a root element and carrying other attributes that
//! are ignored. Elements are visited in document order.

use log::debug;
use roxmltree::{Document, ParsingOptions};

use crate::error::ParseError;
use crate::model::field::FieldName;

const FIELD_ELEMENT: &str = "field";
const NAME_ATTRIBUTE: &str = "name";

/// Extracts every usable field name from a definition source, in order.
///
/// Elements without a `name` attribute and names rejected by
/// [`FieldName::parse`] are skipped; only a malformed document is an error.
pub fn read_field_names(source: &str) -> Result<Vec<FieldName>, ParseError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let document = Document::parse_with_options(source, options)?;

    let names = document
        .descendants()
        .filter(|node| node.is_element() && node.tag_name().name() == FIELD_ELEMENT)
        .filter_map(|node| {
            let raw = node.attribute(NAME_ATTRIBUTE)?;
            let name = FieldName::parse(raw);
            if name.is_none() {
                debug!("skipping field with unusable name {:?}", raw);
            }
            name
        })
        .collect();

    Ok(names)
}
