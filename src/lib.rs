#![forbid(unsafe_code)]
//! Swift static accessors for Android-style resources.
//!
//! Turns a resource tree (`array`, `bool`, `color`, `dimen`, `integer` and
//! `string` entries) into a Swift file exposing them as `R.string.app_name`,
//! `R.color.primary` and so on.
//!
//! # Quick Start
//!
//! ```rust
//! use rdotswift::{GenerateOptions, ResourceTree, generate, traits::Parser};
//!
//! let tree = ResourceTree::from_str(r##"{
//!     "string": { "app_name": "Example" },
//!     "color": { "primary": "#3F51B5" },
//!     "dimen": { "margin": "16dp" }
//! }"##)?;
//!
//! let swift = generate(&tree, &GenerateOptions::default());
//! assert!(swift.contains("static let app_name = \"Example\""));
//! assert!(swift.contains("static let primary = UIColor(red: 0.247, green: 0.318, blue: 0.71, alpha: 1)"));
//! assert!(swift.contains("static let margin: CGFloat = 16"));
//! # Ok::<(), rdotswift::Error>(())
//! ```
//!
//! Generation never fails: values that do not fit their category are passed
//! through as-is, so malformed input yields malformed Swift rather than an
//! error.

pub mod color;
pub mod comment;
pub mod document;
pub mod emitter;
pub mod error;
pub mod identifier;
pub mod literal;
pub mod options;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    document::generate,
    error::Error,
    options::GenerateOptions,
    types::{Category, CategoryMap, ResourceTree},
};
