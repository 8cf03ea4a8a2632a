//! Reference kind
//!
//! The document section a `$ref` points into.

use super::error::{RefError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Internal prefix for references to `definitions`
pub const INTERNAL_DEFINITION_PREFIX: &str = "#/definitions/";

/// Internal prefix for references to `parameters`
pub const INTERNAL_PARAMETER_PREFIX: &str = "#/parameters/";

/// Kind of a `$ref`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    Definition,
    Parameter,
    Path,
    Response,
}

impl ReferenceKind {
    /// Prefix that an internal reference of this kind starts with
    ///
    /// Only definitions and parameters have one.
    pub fn internal_prefix(&self) -> Result<&'static str> {
        match self {
            ReferenceKind::Definition => Ok(INTERNAL_DEFINITION_PREFIX),
            ReferenceKind::Parameter => Ok(INTERNAL_PARAMETER_PREFIX),
            ReferenceKind::Path | ReferenceKind::Response => {
                Err(RefError::UnmappedKindForPrefix { kind: *self })
            }
        }
    }

    /// Whether references of this kind may resolve within the same document
    ///
    /// Paths and responses are only ever loaded from a URL or a relative file.
    pub fn allows_internal(&self) -> bool {
        !matches!(self, ReferenceKind::Path | ReferenceKind::Response)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceKind::Definition => "definition",
            ReferenceKind::Parameter => "parameter",
            ReferenceKind::Path => "path",
            ReferenceKind::Response => "response",
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_prefix() {
        assert_eq!(
            ReferenceKind::Definition.internal_prefix().unwrap(),
            "#/definitions/"
        );
        assert_eq!(
            ReferenceKind::Parameter.internal_prefix().unwrap(),
            "#/parameters/"
        );
    }

    #[test]
    fn test_unmapped_prefix() {
        for kind in [ReferenceKind::Path, ReferenceKind::Response] {
            match kind.internal_prefix() {
                Err(RefError::UnmappedKindForPrefix { kind: k }) => assert_eq!(k, kind),
                other => panic!("expected UnmappedKindForPrefix, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_allows_internal() {
        assert!(ReferenceKind::Definition.allows_internal());
        assert!(ReferenceKind::Parameter.allows_internal());
        assert!(!ReferenceKind::Path.allows_internal());
        assert!(!ReferenceKind::Response.allows_internal());
    }
}
