use rdotswift::{ResourceTree, traits::Parser};
use tracing::debug;

use crate::formats::InputFormat;

/// Reads one resource tree, inferring the format from the extension unless given.
pub fn read_tree(path: &str, format: Option<InputFormat>) -> Result<ResourceTree, String> {
    let format = format
        .or_else(|| InputFormat::from_path(path))
        .ok_or_else(|| format!("Cannot infer input format from extension: {}", path))?;

    let tree = match format {
        InputFormat::Json => ResourceTree::read_from(path).map_err(|e| e.to_string())?,
        InputFormat::Yaml => {
            let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
            serde_yaml::from_str::<ResourceTree>(&content).map_err(|e| e.to_string())?
        }
    };

    debug!(path, entries = tree.len(), ?format, "read resource tree");
    Ok(tree)
}

/// Reads every input and merges them in order; later files win on duplicate keys.
pub fn read_and_merge(inputs: &[String], format: Option<InputFormat>) -> Result<ResourceTree, String> {
    let mut merged = ResourceTree::new();
    for input in inputs {
        let tree = read_tree(input, format).map_err(|e| format!("Cannot read {}: {}", input, e))?;
        merged.merge(tree);
    }
    Ok(merged)
}
