use std::path::Path;

use rdotswift::GenerateOptions;

/// Loads generation options from a TOML file.
///
/// ```toml
/// class = "R"
/// appkit = true
/// if = "os(macOS)"
/// source = "res/values"
/// ```
pub fn load_options(path: impl AsRef<Path>) -> Result<GenerateOptions, String> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Cannot read config {}: {}", path.display(), e))?;
    toml::from_str(&content).map_err(|e| format!("Invalid config {}: {}", path.display(), e))
}

/// Option flags given on the command line. Set flags override the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionOverrides {
    pub class: Option<String>,
    pub extension: bool,
    pub no_header: bool,
    pub appkit: bool,
    pub condition: Option<String>,
    pub endif: bool,
    pub no_endif: bool,
    pub source: Option<String>,
}

impl OptionOverrides {
    pub fn apply(self, mut options: GenerateOptions) -> GenerateOptions {
        if let Some(class) = self.class {
            options.class = Some(class);
        }
        if self.extension {
            options.extension = true;
        }
        if self.no_header {
            options.header = false;
        }
        if self.appkit {
            options.appkit = true;
        }
        if let Some(condition) = self.condition {
            options.condition = Some(condition);
        }
        if self.endif {
            options.endif = Some(true);
        } else if self.no_endif {
            options.endif = Some(false);
        }
        if let Some(source) = self.source {
            options.source = Some(source);
        }
        options
    }
}
