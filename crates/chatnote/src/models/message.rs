use super::annotation::MessageAnnotation;
use super::role::Role;
use super::source::SourceData;
use crate::annotations::{get_annotation_data, get_source_annotation_data, AnnotationPayload};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A chat message as exchanged with the interface, with its annotations
pub struct ChatMessage {
    #[serde(default)]
    pub id: String,
    pub role: Role,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<MessageAnnotation>,
}

impl ChatMessage {
    pub fn new<S: Into<String>>(id: S, role: Role) -> Self {
        ChatMessage {
            id: id.into(),
            role,
            content: String::new(),
            annotations: Vec::new(),
        }
    }

    /// Create a new user message
    pub fn user<S: Into<String>>(id: S) -> Self {
        Self::new(id, Role::User)
    }

    /// Create a new assistant message
    pub fn assistant<S: Into<String>>(id: S) -> Self {
        Self::new(id, Role::Assistant)
    }

    /// Append text to the message content
    pub fn with_text<S: AsRef<str>>(mut self, text: S) -> Self {
        self.content.push_str(text.as_ref());
        self
    }

    /// Attach an annotation after any existing ones
    pub fn with_annotation(mut self, annotation: MessageAnnotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn annotations_of<T: AnnotationPayload>(&self) -> Vec<&T> {
        get_annotation_data(&self.annotations)
    }

    /// Sources payloads ready for display, see [`get_source_annotation_data`]
    pub fn sources(&self) -> Vec<SourceData> {
        get_source_annotation_data(&self.annotations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::annotation::EventData;
    use crate::models::source::SourceNode;
    use serde_json::json;

    #[test]
    fn test_message_builder() {
        let message = ChatMessage::assistant("m1")
            .with_text("Hello ")
            .with_text("there")
            .with_annotation(MessageAnnotation::event("Thinking"))
            .with_annotation(MessageAnnotation::sources(SourceData::new(vec![
                SourceNode::new("n1", "https://docs/").with_score(0.8),
                SourceNode::new("n2", "https://low").with_score(0.1),
            ])));

        assert_eq!(message.role, Role::Assistant);
        assert_eq!(message.content, "Hello there");

        let events: Vec<&EventData> = message.annotations_of();
        assert_eq!(events[0].title, "Thinking");

        let sources = message.sources();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].nodes.len(), 1);
        assert_eq!(sources[0].nodes[0].url, "https://docs");
    }

    #[test]
    fn test_message_without_annotations() {
        let message: ChatMessage = serde_json::from_value(json!({
            "id": "m2",
            "role": "user",
            "content": "What is new?"
        }))
        .unwrap();
        assert!(message.annotations.is_empty());
        assert!(message.sources().is_empty());

        let value = serde_json::to_value(&message).unwrap();
        assert!(value.get("annotations").is_none());
    }
}
