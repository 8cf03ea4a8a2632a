//! Swagger data models
//!
//! This crate provides strongly-typed Rust structures for Swagger / OpenAPI documents.
//!
//! # Module Organization
//!
//! - `refs`: `$ref` handling shared by every reference-typed model
//!
//! # Design Philosophy
//!
//! - **Validated on construction**: a reference is classified and normalized once,
//!   then never changes
//! - **Extensible**: `extensions` field captures vendor (`x-*`) properties
//! - **Strongly-typed**: reference format and kind are closed enums
//! - **Flexible**: Can serialize/deserialize to/from JSON
//!
//! # Example
//!
//! ```rust
//! use swagger_models::refs::{RefModel, ReferenceFormat, ReferenceTyped};
//! use serde_json::json;
//!
//! let model: RefModel = serde_json::from_value(json!({ "$ref": "Animal" })).unwrap();
//! assert_eq!(model.reference(), "#/definitions/Animal");
//! assert_eq!(model.simple_reference(), "Animal");
//! assert_eq!(model.format(), ReferenceFormat::Internal);
//! ```

pub mod refs;

// Re-export commonly used types
pub use refs::*;
