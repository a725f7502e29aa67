use std::path::Path;
use std::str::FromStr;

/// Serializations a resource tree can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// A JSON object keyed by category:
    ///
    /// ```json
    /// {
    ///     "string": { "app_name": "Example" },
    ///     "color": { "primary": "#3F51B5" }
    /// }
    /// ```
    Json,

    /// The same structure written as YAML:
    ///
    /// ```yaml
    /// string:
    ///   app_name: Example
    /// color:
    ///   primary: "#3F51B5"
    /// ```
    Yaml,
}

impl InputFormat {
    /// Infers the format from a file extension (`.json`, `.yaml`, `.yml`).
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        ext.parse().ok()
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(InputFormat::Json),
            "yaml" | "yml" => Ok(InputFormat::Yaml),
            _ => Err(format!(
                "Unknown input format: '{}'. Supported formats: json, yaml",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(InputFormat::from_path("values.json"), Some(InputFormat::Json));
        assert_eq!(InputFormat::from_path("res/values.YML"), Some(InputFormat::Yaml));
        assert_eq!(InputFormat::from_path("strings.xml"), None);
        assert_eq!(InputFormat::from_path("noext"), None);
    }

    #[test]
    fn test_from_str_reports_supported_formats() {
        let err = "xml".parse::<InputFormat>().unwrap_err();
        assert!(err.contains("Supported formats: json, yaml"));
    }
}
