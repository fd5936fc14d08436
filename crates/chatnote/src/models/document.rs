use serde::{Deserialize, Serialize};
use std::path::Path;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DocumentFileType {
    Csv,
    Pdf,
    Txt,
    Docx,
}

/// Every file type the chat input accepts for upload
pub const DOCUMENT_FILE_TYPES: [DocumentFileType; 4] = [
    DocumentFileType::Csv,
    DocumentFileType::Pdf,
    DocumentFileType::Txt,
    DocumentFileType::Docx,
];

impl DocumentFileType {
    /// Guess the type from the extension of a file name
    pub fn from_filename(filename: &str) -> Option<Self> {
        Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

/// What the backend knows about a file once it has been uploaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedFileMeta {
    pub id: String,
    /// Stored name in the backend, including its uuid and sanitized
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refs: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentFile {
    /// The original file name
    pub filename: String,
    pub filesize: u64,
    pub filetype: DocumentFileType,
    /// None until the file is uploaded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<UploadedFileMeta>,
}

impl DocumentFile {
    pub fn is_uploaded(&self) -> bool {
        self.metadata.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentFileData {
    pub files: Vec<DocumentFile>,
}
