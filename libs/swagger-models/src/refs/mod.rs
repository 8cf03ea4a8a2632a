//! `$ref` pointers
//!
//! Classification of reference strings and the models that embed them

pub mod descriptor;
pub mod error;
pub mod format;
pub mod kind;
pub mod models;

// Re-export commonly used types
pub use descriptor::*;
pub use error::{RefError, Result};
pub use format::*;
pub use kind::*;
pub use models::*;
