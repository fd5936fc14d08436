use anyhow::{Context, Result};
use chatnote::models::annotation::MessageAnnotation;
use chatnote::stream::collect_annotations;
use std::io::Read;
use std::path::Path;

/// Read a file, or stdin when the path is `-`
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read annotations from stdin")?;
        return Ok(buffer);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read annotations from {}", path.display()))
}

/// Decode annotations from a JSON array, or from a recorded data stream body
pub fn parse_annotations(input: &str, stream: bool) -> Result<Vec<MessageAnnotation>> {
    if stream {
        return collect_annotations(input).context("Failed to decode data stream");
    }
    serde_json::from_str(input).context("Expected a JSON array of message annotations")
}

pub fn load_annotations(path: &Path, stream: bool) -> Result<Vec<MessageAnnotation>> {
    let input = read_input(path)?;
    let annotations = parse_annotations(&input, stream)?;
    tracing::debug!(count = annotations.len(), "loaded annotations");
    Ok(annotations)
}
