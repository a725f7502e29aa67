//! Options controlling the shape of the generated Swift source.

use serde::{Deserialize, Serialize};

/// Name of the root type when none is configured.
pub const DEFAULT_CLASS_NAME: &str = "R";

/// Generation options for [`crate::generate`].
///
/// Deserializes from the flat keys `class`, `extension`, `header`, `appkit`,
/// `if`, `endif` and `source`; every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Root type name, `R` when unset.
    pub class: Option<String>,
    /// Skip the `final class` scaffold; the root type is declared elsewhere.
    pub extension: bool,
    /// Emit the generated-by banner and the platform import.
    pub header: bool,
    /// Target AppKit (`NSColor`) instead of UIKit (`UIColor`).
    pub appkit: bool,
    /// Wrap the output in `#if <condition>`.
    #[serde(rename = "if")]
    pub condition: Option<String>,
    /// Force (`Some(true)`) or suppress (`Some(false)`) the closing `#endif`.
    pub endif: Option<bool>,
    /// Emitted as a `// <source>` provenance comment.
    pub source: Option<String>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            class: None,
            extension: false,
            header: true,
            appkit: false,
            condition: None,
            endif: None,
            source: None,
        }
    }
}

impl GenerateOptions {
    /// Creates default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_extension(mut self, extension: bool) -> Self {
        self.extension = extension;
        self
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    pub fn with_appkit(mut self, appkit: bool) -> Self {
        self.appkit = appkit;
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn with_endif(mut self, endif: bool) -> Self {
        self.endif = Some(endif);
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// The root type name. An empty name falls back to the default.
    pub fn class_name(&self) -> &str {
        match self.class.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_CLASS_NAME,
        }
    }

    /// The active `#if` condition, ignoring an empty string.
    pub fn condition(&self) -> Option<&str> {
        self.condition.as_deref().filter(|c| !c.is_empty())
    }

    /// Whether the document ends with `#endif`.
    pub fn closes_condition(&self) -> bool {
        match self.endif {
            Some(endif) => endif,
            None => self.condition().is_some(),
        }
    }

    /// Color type used for color literals.
    pub fn color_type(&self) -> &'static str {
        if self.appkit { "NSColor" } else { "UIColor" }
    }

    /// Framework imported by the header.
    pub fn framework(&self) -> &'static str {
        if self.appkit { "AppKit" } else { "UIKit" }
    }

    /// The provenance comment text, ignoring an empty string.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref().filter(|s| !s.is_empty())
    }
}
