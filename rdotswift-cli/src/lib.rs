//! CLI library for testing purposes

pub mod config;
pub mod formats;
pub mod generate;
pub mod input;
pub mod path_glob;

pub use config::{OptionOverrides, load_options};
pub use formats::InputFormat;
pub use generate::{GenerateRequest, render, run_generate_command};
