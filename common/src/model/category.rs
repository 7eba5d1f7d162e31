use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownValue;

/// Name prefix of fields read from each row of a repeated result.
pub const PLURAL_PREFIX: &str = "resultados.";

/// Name prefix of fields read from the single-row result.
pub const UNIQUE_PREFIX: &str = "resultado.";

/// Cardinality role of a field, decided from its name when the catalog loads.
///
/// Each category is shown on its own tab of the taskpane and decides how the
/// placeholder token for a field is written.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Scalar value outside any result.
    #[default]
    General,
    /// Scalar value of the single-row result.
    Unique,
    /// Column of a repeated result, addressed through the loop variable.
    Plural,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::General, Category::Unique, Category::Plural];

    /// One-letter tab code (`G`, `U`, `P`).
    pub fn code(self) -> char {
        match self {
            Category::General => 'G',
            Category::Unique => 'U',
            Category::Plural => 'P',
        }
    }

    /// Tab label shown to authors.
    pub fn label(self) -> &'static str {
        match self {
            Category::General => "Generales",
            Category::Unique => "Únicos",
            Category::Plural => "Plurales",
        }
    }
}

/// Classifies a field name by a case-insensitive prefix test.
///
/// `resultados.` wins over `resultado.`; anything else is `General`.
pub fn classify(name: &str) -> Category {
    let lower = name.to_lowercase();
    if lower.starts_with(PLURAL_PREFIX) {
        Category::Plural
    } else if lower.starts_with(UNIQUE_PREFIX) {
        Category::Unique
    } else {
        Category::General
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::General => "general",
            Category::Unique => "unique",
            Category::Plural => "plural",
        };
        f.write_str(name)
    }
}

impl FromStr for Category {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "general" | "g" => Ok(Category::General),
            "unique" | "u" => Ok(Category::Unique),
            "plural" | "p" => Ok(Category::Plural),
            _ => Err(UnknownValue {
                kind: "category",
                expected: "general, unique or plural",
                found: s.to_string(),
            }),
        }
    }
}
