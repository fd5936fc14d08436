//! Selecting annotation payloads out of a message and preparing sources for display
use crate::models::annotation::{
    AgentEventData, AnnotationType, EventData, ImageData, MessageAnnotation,
    SuggestedQuestionsData,
};
use crate::models::document::DocumentFileData;
use crate::models::source::{SourceData, SourceNode};
use crate::models::tool::ToolData;

/// Nodes scoring at or below this are too weak to show as a source.
pub const NODE_SCORE_THRESHOLD: f64 = 0.25;

/// A payload type that can be borrowed out of the matching annotation variant
pub trait AnnotationPayload {
    const ANNOTATION_TYPE: AnnotationType;

    fn from_annotation(annotation: &MessageAnnotation) -> Option<&Self>;
}

macro_rules! annotation_payload {
    ($payload:ty, $variant:ident) => {
        impl AnnotationPayload for $payload {
            const ANNOTATION_TYPE: AnnotationType = AnnotationType::$variant;

            fn from_annotation(annotation: &MessageAnnotation) -> Option<&Self> {
                match annotation {
                    MessageAnnotation::$variant(data) => Some(data),
                    _ => None,
                }
            }
        }
    };
}

annotation_payload!(ImageData, Image);
annotation_payload!(DocumentFileData, DocumentFile);
annotation_payload!(SourceData, Sources);
annotation_payload!(EventData, Events);
annotation_payload!(ToolData, Tools);
annotation_payload!(SuggestedQuestionsData, SuggestedQuestions);
annotation_payload!(AgentEventData, AgentEvents);

/// All annotations of the given type, in the order they were emitted
pub fn select_by_type(
    annotations: &[MessageAnnotation],
    annotation_type: AnnotationType,
) -> Vec<&MessageAnnotation> {
    annotations
        .iter()
        .filter(|annotation| annotation.is(annotation_type))
        .collect()
}

/// The payloads of every annotation of type `T`, in the order they were emitted
pub fn get_annotation_data<T: AnnotationPayload>(annotations: &[MessageAnnotation]) -> Vec<&T> {
    annotations.iter().filter_map(T::from_annotation).collect()
}

/// Sources payloads with the first one cleaned by the default [`SourceFilter`]
pub fn get_source_annotation_data(annotations: &[MessageAnnotation]) -> Vec<SourceData> {
    SourceFilter::default().select_sources(annotations)
}

/// Clean a node list with the default [`SourceFilter`]
pub fn clean_nodes(nodes: &[SourceNode]) -> Vec<SourceNode> {
    SourceFilter::default().clean_nodes(nodes)
}

/// Decides which source nodes are worth showing and in what order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceFilter {
    pub score_threshold: f64,
}

impl Default for SourceFilter {
    fn default() -> Self {
        Self::new(NODE_SCORE_THRESHOLD)
    }
}

impl SourceFilter {
    pub fn new(score_threshold: f64) -> Self {
        Self { score_threshold }
    }

    /// A node is kept when it scores above the threshold (or is unscored) and links somewhere
    pub fn keeps(&self, node: &SourceNode) -> bool {
        node.score
            .map_or(true, |score| score > self.score_threshold)
            && node.has_url()
    }

    /// Filter, rank and normalize a node list.
    ///
    /// Nodes are ordered by descending effective score, so unscored nodes rank
    /// alongside a score of 1.0. The sort is stable: equal scores keep their input
    /// order. One trailing `/` is stripped from each url. The input is left untouched.
    pub fn clean_nodes(&self, nodes: &[SourceNode]) -> Vec<SourceNode> {
        let mut kept: Vec<SourceNode> = nodes
            .iter()
            .filter(|node| self.keeps(node))
            .cloned()
            .collect();

        kept.sort_by(|a, b| b.effective_score().total_cmp(&a.effective_score()));

        for node in &mut kept {
            if node.url.ends_with('/') {
                node.url.pop();
            }
        }

        tracing::debug!(
            total = nodes.len(),
            kept = kept.len(),
            threshold = self.score_threshold,
            "cleaned source nodes"
        );
        kept
    }

    /// Every sources payload in emission order, with only the first one cleaned.
    ///
    /// Later sources annotations are returned as they were received.
    pub fn select_sources(&self, annotations: &[MessageAnnotation]) -> Vec<SourceData> {
        let mut data: Vec<SourceData> = get_annotation_data::<SourceData>(annotations)
            .into_iter()
            .cloned()
            .collect();

        if let Some(first) = data.first_mut() {
            first.nodes = self.clean_nodes(&first.nodes);
        }
        data
    }
}
