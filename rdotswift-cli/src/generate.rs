use std::fs;

use rdotswift::{GenerateOptions, ResourceTree, generate, traits::Parser};
use tracing::info;

use crate::config::{OptionOverrides, load_options};
use crate::formats::InputFormat;
use crate::input::read_and_merge;
use crate::path_glob::expand_input_globs;

/// Everything the generate command needs, as parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    pub inputs: Vec<String>,
    pub input_format: Option<InputFormat>,
    pub output: Option<String>,
    pub config: Option<String>,
    pub overrides: OptionOverrides,
    /// Where to save the merged resource tree as JSON, if anywhere.
    pub save_tree: Option<String>,
}

/// Reads and merges the inputs and returns the generated Swift source.
pub fn render(request: &GenerateRequest) -> Result<String, String> {
    let (tree, options) = prepare(request)?;
    Ok(generate(&tree, &options))
}

fn prepare(request: &GenerateRequest) -> Result<(ResourceTree, GenerateOptions), String> {
    if request.inputs.is_empty() {
        return Err("At least one input file is required.".to_string());
    }

    let base = match &request.config {
        Some(path) => load_options(path)?,
        None => GenerateOptions::default(),
    };
    let options = request.overrides.clone().apply(base);

    let inputs = expand_input_globs(&request.inputs)?;
    let tree = read_and_merge(&inputs, request.input_format)?;
    info!(files = inputs.len(), entries = tree.len(), "merged resource trees");

    Ok((tree, options))
}

/// Run the generate command: write to the output file, or stdout when none is given.
pub fn run_generate_command(request: GenerateRequest) -> Result<(), String> {
    let (tree, options) = prepare(&request)?;

    if let Some(path) = &request.save_tree {
        tree.write_to(path)
            .map_err(|e| format!("Cannot write {}: {}", path, e))?;
        info!(path = path.as_str(), "saved merged resource tree");
    }

    let swift = generate(&tree, &options);

    match &request.output {
        Some(path) => {
            fs::write(path, swift).map_err(|e| format!("Cannot write {}: {}", path, e))?;
            info!(path = path.as_str(), "wrote swift source");
        }
        None => print!("{}", swift),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_applies_config_and_flags() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("values.json");
        let config = dir.path().join("rdotswift.toml");
        fs::write(&input, r#"{"bool": {"debug": true}}"#).unwrap();
        fs::write(&config, "class = \"Res\"\nheader = false\n").unwrap();

        let request = GenerateRequest {
            inputs: vec![input.to_string_lossy().to_string()],
            config: Some(config.to_string_lossy().to_string()),
            overrides: OptionOverrides {
                extension: true,
                ..Default::default()
            },
            ..Default::default()
        };

        let swift = render(&request).unwrap();
        assert_eq!(
            swift,
            "extension Res.bool {\n    /// true\n    static let debug = true\n}\n"
        );
    }

    #[test]
    fn test_run_saves_merged_tree() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("a.json");
        let second = dir.path().join("b.yaml");
        let saved = dir.path().join("merged.json");
        let output = dir.path().join("R.swift");
        fs::write(&first, r#"{"string": {"title": "A", "body": "B"}}"#).unwrap();
        fs::write(&second, "string:\n  title: Z\ninteger:\n  max: 3\n").unwrap();

        let request = GenerateRequest {
            inputs: vec![
                first.to_string_lossy().to_string(),
                second.to_string_lossy().to_string(),
            ],
            output: Some(output.to_string_lossy().to_string()),
            save_tree: Some(saved.to_string_lossy().to_string()),
            ..Default::default()
        };
        run_generate_command(request).unwrap();

        let tree = ResourceTree::read_from(&saved).unwrap();
        let keys: Vec<&String> = tree.string.keys().collect();
        assert_eq!(keys, ["title", "body"]);
        assert_eq!(tree.string["title"], "Z");
        assert_eq!(tree.integer["max"], 3);
        assert!(fs::read_to_string(&output).unwrap().contains("static let max = 3"));
    }

    #[test]
    fn test_render_requires_inputs() {
        let err = render(&GenerateRequest::default()).unwrap_err();
        assert!(err.contains("At least one input file"));
    }
}
