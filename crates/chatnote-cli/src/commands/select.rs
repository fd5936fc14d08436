use anyhow::Result;
use chatnote::annotations::select_by_type;
use chatnote::models::annotation::{AnnotationType, MessageAnnotation};
use serde_json::Value;

/// Payloads of every annotation of the given type as one JSON document per line
pub fn render_selection(
    annotations: &[MessageAnnotation],
    annotation_type: AnnotationType,
) -> Result<Vec<String>> {
    select_by_type(annotations, annotation_type)
        .into_iter()
        .map(|annotation| -> Result<String> {
            let mut value = serde_json::to_value(annotation)?;
            let data = value.get_mut("data").map(Value::take).unwrap_or(Value::Null);
            Ok(serde_json::to_string(&data)?)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_selection_keeps_order() {
        let annotations = vec![
            MessageAnnotation::event("first"),
            MessageAnnotation::image("https://img"),
            MessageAnnotation::event("second"),
        ];
        let lines = render_selection(&annotations, AnnotationType::Events).unwrap();
        assert_eq!(lines, vec![r#"{"title":"first"}"#, r#"{"title":"second"}"#]);

        assert!(render_selection(&annotations, AnnotationType::Tools)
            .unwrap()
            .is_empty());
    }
}
