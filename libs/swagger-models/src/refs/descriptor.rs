//! Reference descriptor
//!
//! Immutable value holding a classified, normalized `$ref` and its simple form.

use super::error::{RefError, Result};
use super::format::{ReferenceFormat, INTERNAL_MARKER};
use super::kind::ReferenceKind;
use std::fmt;
use tracing::{debug, trace};

/// A `$ref` string with its kind, format and simple form resolved
///
/// Built only through [`ReferenceDescriptor::create`]; there is no way to change a
/// descriptor afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferenceDescriptor {
    kind: ReferenceKind,
    format: ReferenceFormat,
    raw_reference: String,
    simple_reference: String,
}

impl ReferenceDescriptor {
    /// Classify, validate and normalize a reference of the given kind
    ///
    /// Internal references given as a bare name get the kind's prefix prepended,
    /// so `create(Definition, "Animal")` stores `#/definitions/Animal`.
    pub fn create(kind: ReferenceKind, reference: impl Into<String>) -> Result<Self> {
        let reference = reference.into();
        if reference.is_empty() {
            debug!(%kind, "rejecting empty ref");
            return Err(RefError::EmptyReference { kind });
        }

        let format = ReferenceFormat::classify(&reference);
        if format.is_internal() && !kind.allows_internal() {
            debug!(%kind, %reference, "rejecting internal ref");
            return Err(RefError::InvalidKindForInternalFormat { kind });
        }

        let raw_reference = normalize(kind, format, reference)?;
        let simple_reference = simple_form(kind, format, &raw_reference)?;

        Ok(Self {
            kind,
            format,
            raw_reference,
            simple_reference,
        })
    }

    pub fn kind(&self) -> ReferenceKind {
        self.kind
    }

    pub fn format(&self) -> ReferenceFormat {
        self.format
    }

    /// The full reference, including any internal prefix
    pub fn raw_reference(&self) -> &str {
        &self.raw_reference
    }

    /// The reference with the internal prefix stripped; same as the raw form otherwise
    pub fn simple_reference(&self) -> &str {
        &self.simple_reference
    }
}

impl fmt::Display for ReferenceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw_reference)
    }
}

fn normalize(kind: ReferenceKind, format: ReferenceFormat, reference: String) -> Result<String> {
    if !format.is_internal() || reference.starts_with(INTERNAL_MARKER) {
        return Ok(reference);
    }

    let prefix = kind.internal_prefix()?;
    trace!(%kind, %reference, prefix, "expanding bare ref");
    Ok(format!("{}{}", prefix, reference))
}

fn simple_form(kind: ReferenceKind, format: ReferenceFormat, raw: &str) -> Result<String> {
    if !format.is_internal() {
        return Ok(raw.to_string());
    }

    let prefix = kind.internal_prefix()?;
    raw.strip_prefix(prefix)
        .map(str::to_string)
        .ok_or_else(|| {
            debug!(%kind, reference = raw, "internal ref points into another section");
            RefError::PrefixMismatch {
                kind,
                reference: raw.to_string(),
            }
        })
}
