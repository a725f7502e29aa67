use std::collections::HashSet;

/// Expand possible glob patterns in a list of input strings into concrete file paths.
///
/// Plain paths are kept as given so a missing file is reported when it is read.
/// Matches of one pattern come out sorted; duplicates are dropped, first one wins.
pub fn expand_input_globs(inputs: &[String]) -> Result<Vec<String>, String> {
    fn has_glob_meta(s: &str) -> bool {
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'['))
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut results: Vec<String> = Vec::with_capacity(inputs.len());

    for pattern in inputs {
        if !has_glob_meta(pattern) {
            if seen.insert(pattern.clone()) {
                results.push(pattern.clone());
            }
            continue;
        }

        let paths = glob::glob(pattern)
            .map_err(|e| format!("Invalid glob pattern '{}': {}", pattern, e))?;
        let mut matched = 0usize;
        for entry in paths {
            let path = entry.map_err(|e| e.to_string())?;
            if !path.is_file() {
                continue;
            }
            matched += 1;
            let s = path.to_string_lossy().to_string();
            if seen.insert(s.clone()) {
                results.push(s);
            }
        }
        if matched == 0 {
            return Err(format!("No files match '{}'", pattern));
        }
    }

    Ok(results)
}
