use anyhow::Result;
use chatnote::annotations::SourceFilter;
use chatnote::models::annotation::MessageAnnotation;
use chatnote::models::source::SourceNode;
use console::style;

/// Render the cleaned nodes of the first sources annotation
pub fn render_sources(
    annotations: &[MessageAnnotation],
    filter: &SourceFilter,
    json: bool,
) -> Result<Vec<String>> {
    let sources = filter.select_sources(annotations);
    let Some(first) = sources.into_iter().next() else {
        tracing::info!("No sources annotation found");
        return Ok(Vec::new());
    };

    if json {
        return Ok(vec![serde_json::to_string(&first)?]);
    }

    Ok(first
        .nodes
        .iter()
        .enumerate()
        .map(|(index, node)| format_node(index + 1, node))
        .collect())
}

fn format_node(rank: usize, node: &SourceNode) -> String {
    let score = node
        .score
        .map(|score| format!("{:.2}", score))
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{:>2}. {} {} {}",
        rank,
        style(format!("[{:>4}]", score)).dim(),
        style(&node.url).cyan(),
        style(format!("({})", node.id)).dim()
    )
}
