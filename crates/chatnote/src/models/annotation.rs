use super::document::DocumentFileData;
use super::source::SourceData;
use super::tool::ToolData;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The discriminant of a message annotation, as it appears in the `type` field
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AnnotationType {
    Image,
    DocumentFile,
    Sources,
    Events,
    Tools,
    SuggestedQuestions,
    #[serde(rename = "agent")]
    #[strum(serialize = "agent")]
    AgentEvents,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageData {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventData {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentEventData {
    pub agent: String,
    pub text: String,
}

pub type SuggestedQuestionsData = Vec<String>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
/// A tagged side-channel datum attached to a chat message
pub enum MessageAnnotation {
    Image(ImageData),
    DocumentFile(DocumentFileData),
    Sources(SourceData),
    Events(EventData),
    Tools(ToolData),
    SuggestedQuestions(SuggestedQuestionsData),
    #[serde(rename = "agent")]
    AgentEvents(AgentEventData),
}

impl MessageAnnotation {
    pub fn image<S: Into<String>>(url: S) -> Self {
        MessageAnnotation::Image(ImageData { url: url.into() })
    }

    pub fn event<S: Into<String>>(title: S) -> Self {
        MessageAnnotation::Events(EventData {
            title: title.into(),
        })
    }

    pub fn agent_event<A: Into<String>, T: Into<String>>(agent: A, text: T) -> Self {
        MessageAnnotation::AgentEvents(AgentEventData {
            agent: agent.into(),
            text: text.into(),
        })
    }

    pub fn sources(data: SourceData) -> Self {
        MessageAnnotation::Sources(data)
    }

    pub fn suggested_questions<I, S>(questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MessageAnnotation::SuggestedQuestions(questions.into_iter().map(Into::into).collect())
    }

    pub fn annotation_type(&self) -> AnnotationType {
        match self {
            MessageAnnotation::Image(_) => AnnotationType::Image,
            MessageAnnotation::DocumentFile(_) => AnnotationType::DocumentFile,
            MessageAnnotation::Sources(_) => AnnotationType::Sources,
            MessageAnnotation::Events(_) => AnnotationType::Events,
            MessageAnnotation::Tools(_) => AnnotationType::Tools,
            MessageAnnotation::SuggestedQuestions(_) => AnnotationType::SuggestedQuestions,
            MessageAnnotation::AgentEvents(_) => AnnotationType::AgentEvents,
        }
    }

    pub fn is(&self, annotation_type: AnnotationType) -> bool {
        self.annotation_type() == annotation_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::source::SourceNode;
    use serde_json::json;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_type_names_match_wire_format() {
        let names: Vec<String> = AnnotationType::iter().map(|t| t.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "image",
                "document_file",
                "sources",
                "events",
                "tools",
                "suggested_questions",
                "agent"
            ]
        );
        for ty in AnnotationType::iter() {
            let serialized = serde_json::to_value(ty).unwrap();
            assert_eq!(serialized, json!(ty.as_ref()));
            assert_eq!(AnnotationType::from_str(ty.as_ref()).unwrap(), ty);
        }
    }

    #[test]
    fn test_decode_sources_annotation() {
        let annotation: MessageAnnotation = serde_json::from_value(json!({
            "type": "sources",
            "data": {
                "nodes": [
                    { "id": "a", "metadata": { "page": 2 }, "score": 0.7, "text": "t", "url": "https://a/" }
                ]
            }
        }))
        .unwrap();

        assert_eq!(annotation.annotation_type(), AnnotationType::Sources);
        let MessageAnnotation::Sources(data) = annotation else {
            panic!("expected sources annotation");
        };
        assert_eq!(data.nodes.len(), 1);
        assert_eq!(data.nodes[0].metadata["page"], 2);
    }

    #[test]
    fn test_agent_events_use_agent_tag() {
        let annotation = MessageAnnotation::agent_event("researcher", "looking up papers");
        let value = serde_json::to_value(&annotation).unwrap();
        assert_eq!(
            value,
            json!({ "type": "agent", "data": { "agent": "researcher", "text": "looking up papers" } })
        );
        assert!(annotation.is(AnnotationType::AgentEvents));
    }

    #[test]
    fn test_suggested_questions_payload_is_a_list() {
        let value = json!({ "type": "suggested_questions", "data": ["why?", "how?"] });
        let annotation: MessageAnnotation = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(
            annotation,
            MessageAnnotation::suggested_questions(["why?", "how?"])
        );
        assert_eq!(serde_json::to_value(&annotation).unwrap(), value);
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result: Result<MessageAnnotation, _> =
            serde_json::from_value(json!({ "type": "video", "data": { "url": "x" } }));
        assert!(result.is_err());
    }

    #[test]
    fn test_sources_builder() {
        let annotation =
            MessageAnnotation::sources(SourceData::new(vec![SourceNode::new("a", "https://a")]));
        assert!(annotation.is(AnnotationType::Sources));
        assert!(!annotation.is(AnnotationType::Image));
    }
}
