//! Reference format
//!
//! Where a `$ref` points: into the same document, at an absolute URL, or at a relative file.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Leading marker of an absolute URL reference
pub const URL_MARKER: &str = "http";

/// Leading marker of a same-document reference
pub const INTERNAL_MARKER: &str = "#/";

/// Leading marker of a relative file reference (`./` or `../`)
pub const RELATIVE_MARKER: &str = ".";

/// Format of a `$ref` string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceFormat {
    /// Points within the same document, e.g. `#/definitions/Foo`
    Internal,
    /// Absolute external reference
    Url,
    /// Relative file reference
    Relative,
}

impl ReferenceFormat {
    /// Classify a reference by its prefix
    ///
    /// The checks run in a fixed order (URL, internal, relative) and anything
    /// unmatched is treated as internal, so bare names like `Animal` stay usable.
    pub fn classify(reference: &str) -> Self {
        if reference.starts_with(URL_MARKER) {
            ReferenceFormat::Url
        } else if reference.starts_with(INTERNAL_MARKER) {
            ReferenceFormat::Internal
        } else if reference.starts_with(RELATIVE_MARKER) {
            ReferenceFormat::Relative
        } else {
            ReferenceFormat::Internal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceFormat::Internal => "internal",
            ReferenceFormat::Url => "url",
            ReferenceFormat::Relative => "relative",
        }
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, ReferenceFormat::Internal)
    }
}

impl fmt::Display for ReferenceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
