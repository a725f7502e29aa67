//! All error types for the rdotswift crate.
//!
//! Code generation itself never fails; these errors come from loading and
//! writing resource trees and from parsing category names.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown category `{0}`")]
    UnknownCategory(String),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid resource: {0}")]
    InvalidResource(String),
}
