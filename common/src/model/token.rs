use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::field::FieldName;
use crate::error::UnknownValue;

/// Variable bound to one row of the result collection inside a loop.
pub const LOOP_VARIABLE: &str = "r";

/// Collection iterated by the loop control tokens.
pub const LOOP_COLLECTION: &str = "resultados";

/// The two literal tokens that open and close a repeated region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopControl {
    Open,
    Close,
}

impl FromStr for LoopControl {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" | "foreach" => Ok(LoopControl::Open),
            "close" | "end" => Ok(LoopControl::Close),
            _ => Err(UnknownValue {
                kind: "loop control",
                expected: "open or close",
                found: s.to_string(),
            }),
        }
    }
}

/// Textual reference embedded in the document and resolved by the merge
/// engine at render time.
///
/// Tokens are derived on every insertion request and never stored. They are
/// raw text: whoever embeds one in markup escapes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaceholderToken(String);

impl PlaceholderToken {
    /// Token for a field chosen on the tab of `category`.
    ///
    /// Plural fields are addressed through the loop variable: the first path
    /// segment is dropped and the rest is lowercased, because the merge
    /// language matches row properties case-insensitively against query
    /// columns. Other fields keep their original case.
    pub fn for_field(field: &FieldName, category: Category) -> Self {
        match category {
            Category::Plural => {
                let property = field.tail().unwrap_or_default().to_lowercase();
                Self(format!("${}.{}", LOOP_VARIABLE, property))
            }
            Category::General | Category::Unique => Self(format!("${}", field)),
        }
    }

    pub fn loop_control(control: LoopControl) -> Self {
        match control {
            LoopControl::Open => Self(format!(
                "#foreach(${} in ${})",
                LOOP_VARIABLE, LOOP_COLLECTION
            )),
            LoopControl::Close => Self("#end".to_string()),
        }
    }

    /// Wraps text that is already a token, e.g. one typed on the command line.
    pub fn literal(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceholderToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PlaceholderToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
