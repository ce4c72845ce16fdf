//! Dispatch from an uploaded file (or a file on disk) to the matching
//! extractor, keyed on the file extension.

use std::path::Path;

use tracing::debug;

use crate::error::ExtractError;
use crate::imaging::describe_image;
use crate::pdf::extract_pdf_text;
use crate::tabular::extract_tabular_summary;
use crate::text::extract_plain_text;

/// What the UI layer hands over for an uploaded file.
pub trait UploadedFile {
    fn name(&self) -> &str;
    fn bytes(&self) -> &[u8];
}

/// An owned upload, for callers that don't have their own file type.
#[derive(Debug, Clone)]
pub struct Upload {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

impl UploadedFile for Upload {
    fn name(&self) -> &str {
        &self.name
    }

    fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Pdf,
    Text,
    Tabular,
    Image,
}

impl UploadKind {
    /// Classify by extension, case-insensitively. `None` if unsupported.
    pub fn from_name(name: &str) -> Option<Self> {
        let ext = Path::new(name).extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "txt" => Some(Self::Text),
            "csv" => Some(Self::Tabular),
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp" => Some(Self::Image),
            _ => None,
        }
    }

    pub fn extract(self, bytes: &[u8]) -> Result<String, ExtractError> {
        match self {
            Self::Pdf => extract_pdf_text(bytes),
            Self::Text => extract_plain_text(bytes),
            Self::Tabular => extract_tabular_summary(bytes),
            Self::Image => describe_image(bytes),
        }
    }

    fn read_error(self, reason: String) -> ExtractError {
        match self {
            Self::Pdf => ExtractError::Pdf(reason),
            Self::Text => ExtractError::Text(reason),
            Self::Tabular => ExtractError::Tabular(reason),
            Self::Image => ExtractError::Image(reason),
        }
    }
}

/// Run the extractor matching the upload's extension.
pub fn extract_upload(file: &impl UploadedFile) -> Result<String, ExtractError> {
    let kind = UploadKind::from_name(file.name())
        .ok_or_else(|| ExtractError::UnsupportedFileType(file.name().to_string()))?;

    debug!(name = file.name(), ?kind, size = file.bytes().len(), "extracting upload");
    kind.extract(file.bytes())
}

/// Read a file from disk and run the extractor matching its extension.
///
/// I/O failures are reported under the marker of the file's kind.
pub fn extract_path(path: impl AsRef<Path>) -> Result<String, ExtractError> {
    let path = path.as_ref();
    let name = path.to_string_lossy();
    let kind = UploadKind::from_name(&name)
        .ok_or_else(|| ExtractError::UnsupportedFileType(name.to_string()))?;

    let bytes = std::fs::read(path).map_err(|e| kind.read_error(e.to_string()))?;

    debug!(path = %path.display(), ?kind, size = bytes.len(), "extracting file");
    kind.extract(&bytes)
}
