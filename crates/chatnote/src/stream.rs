//! Encoding and decoding of the line based chat data stream.
//!
//! Every line is `<prefix>:<json>\n`. The chat interface reads text chunks from
//! `0:` lines and message annotations from `8:` lines, so recorded stream bodies can
//! be replayed to recover the annotations of a response.
use crate::errors::{StreamError, StreamResult};
use crate::models::annotation::MessageAnnotation;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

const TEXT_PREFIX: &str = "0";
const DATA_PREFIX: &str = "2";
const ERROR_PREFIX: &str = "3";
const ANNOTATIONS_PREFIX: &str = "8";
const FINISH_PREFIX: &str = "d";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinishMessage {
    pub finish_reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

/// One decoded line of the data stream
#[derive(Debug, Clone, PartialEq)]
pub enum StreamPart {
    Text(String),
    Data(Vec<Value>),
    Error(String),
    /// Raw annotation values; the protocol does not constrain their shape
    MessageAnnotations(Vec<Value>),
    Finish(FinishMessage),
}

pub fn format_text(text: &str) -> String {
    let encoded_text = serde_json::to_string(text).unwrap_or_else(|_| String::new());
    format!("{}:{}\n", TEXT_PREFIX, encoded_text)
}

pub fn format_annotations(annotations: &[MessageAnnotation]) -> StreamResult<String> {
    Ok(format!(
        "{}:{}\n",
        ANNOTATIONS_PREFIX,
        serde_json::to_string(annotations)?
    ))
}

pub fn format_finish(reason: &str) -> String {
    let finish = json!({
        "finishReason": reason,
        "usage": {
            "promptTokens": 0,
            "completionTokens": 0
        }
    });
    format!("{}:{}\n", FINISH_PREFIX, finish)
}

fn decode<T: serde::de::DeserializeOwned>(prefix: &str, payload: &str) -> StreamResult<T> {
    serde_json::from_str(payload).map_err(|source| StreamError::InvalidPayload {
        prefix: prefix.to_string(),
        source,
    })
}

/// Decode a single stream line, with or without its trailing newline
pub fn parse_line(line: &str) -> StreamResult<StreamPart> {
    let line = line.trim_end_matches(['\n', '\r']);
    let (prefix, payload) = line
        .split_once(':')
        .ok_or_else(|| StreamError::MalformedLine(line.to_string()))?;

    match prefix {
        TEXT_PREFIX => Ok(StreamPart::Text(decode(prefix, payload)?)),
        DATA_PREFIX => Ok(StreamPart::Data(decode(prefix, payload)?)),
        ERROR_PREFIX => Ok(StreamPart::Error(decode(prefix, payload)?)),
        ANNOTATIONS_PREFIX => Ok(StreamPart::MessageAnnotations(decode(prefix, payload)?)),
        FINISH_PREFIX => Ok(StreamPart::Finish(decode(prefix, payload)?)),
        _ => Err(StreamError::UnknownPrefix(prefix.to_string())),
    }
}

/// Replay a recorded stream body and gather its annotations in emission order.
///
/// Parts other than annotations are ignored, including ones this module does not
/// know. Annotation values that are not a recognized annotation are skipped.
pub fn collect_annotations(body: &str) -> StreamResult<Vec<MessageAnnotation>> {
    let mut annotations = Vec::new();

    for line in body.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let values = match parse_line(line) {
            Ok(StreamPart::MessageAnnotations(values)) => values,
            Ok(_) => continue,
            Err(StreamError::UnknownPrefix(prefix)) => {
                tracing::debug!("Skipping unsupported stream part: {}", prefix);
                continue;
            }
            Err(err) => return Err(err),
        };

        for value in values {
            match serde_json::from_value::<MessageAnnotation>(value) {
                Ok(annotation) => annotations.push(annotation),
                Err(err) => {
                    tracing::warn!("Skipping unrecognized annotation: {}", err);
                }
            }
        }
    }

    Ok(annotations)
}

/// Concatenate the text chunks of a recorded stream body
pub fn collect_text(body: &str) -> StreamResult<String> {
    let mut text = String::new();
    for line in body.lines().filter(|line| !line.trim().is_empty()) {
        match parse_line(line) {
            Ok(StreamPart::Text(chunk)) => text.push_str(&chunk),
            Ok(_) | Err(StreamError::UnknownPrefix(_)) => continue,
            Err(err) => return Err(err),
        }
    }
    Ok(text)
}
