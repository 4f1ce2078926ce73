//! Input sources for annotated documents
//!
//! Documents arrive as JSON produced by the upstream annotators.

use crate::error::{EngineError, Result};
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use tscan_core::annotation::AnnotatedDocument;

/// Where an annotated document comes from
pub enum Input {
    /// JSON text
    Json(String),
    /// Path of a JSON file
    File(PathBuf),
    /// JSON as UTF-8 bytes
    Bytes(Vec<u8>),
    /// Reader stream such as stdin
    Reader(Box<dyn Read + Send>),
    /// An already deserialised document
    Document(AnnotatedDocument),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Json(text) => f
                .debug_tuple("Json")
                .field(&format!("<{} chars>", text.len()))
                .finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f
                .debug_tuple("Bytes")
                .field(&format!("<{} bytes>", bytes.len()))
                .finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<Reader>").finish(),
            Input::Document(doc) => f
                .debug_tuple("Document")
                .field(&format!("<{} paragraphs>", doc.paragraphs.len()))
                .finish(),
        }
    }
}

impl Input {
    /// Input from JSON text
    pub fn from_json<S: Into<String>>(text: S) -> Self {
        Input::Json(text.into())
    }

    /// Input from a file path
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Input::File(path.into())
    }

    /// Input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Name used in report rows: the file name for files, `stdin` otherwise
    pub fn name(&self) -> String {
        match self {
            Input::File(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            _ => "stdin".to_string(),
        }
    }

    /// Read and deserialise the document
    pub fn to_document(self) -> Result<AnnotatedDocument> {
        match self {
            Input::Document(doc) => Ok(doc),
            Input::Json(text) => Ok(serde_json::from_str(&text)?),
            Input::File(path) => {
                let text = fs::read_to_string(&path).map_err(|e| {
                    EngineError::IoError(format!("Failed to read file {path:?}: {e}"))
                })?;
                serde_json::from_str(&text)
                    .map_err(|e| EngineError::InputError(format!("{}: {e}", path.display())))
            }
            Input::Bytes(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer).map_err(|e| {
                    EngineError::IoError(format!("Failed to read from stream: {e}"))
                })?;
                Ok(serde_json::from_slice(&buffer)?)
            }
        }
    }
}

impl From<AnnotatedDocument> for Input {
    fn from(doc: AnnotatedDocument) -> Self {
        Input::Document(doc)
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}
