//! Text-extraction adapter boundary.
//!
//! Extraction of plain text from stored files is an upstream collaborator:
//! it runs once per uploaded document, before any text enters the engine.
//! This module fixes the interface — recognized media types, the extractor
//! trait, and the explicit error for everything else — and ships a
//! plain-text implementation. PDF and word-processor decoding plug in behind
//! the same trait.

use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

/// Media types the detection pipeline accepts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Pdf,
    Word,
    PlainText,
}

impl MediaType {
    /// Resolve a declared media type (MIME string or bare file extension).
    ///
    /// Anything unrecognized is an explicit error naming the declared type —
    /// never a silent fallback to empty text.
    pub fn from_declared(declared: &str) -> Result<Self, ExtractError> {
        let normalized = declared.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "application/pdf" | "pdf" | ".pdf" => Ok(Self::Pdf),
            "application/msword"
            | "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            | "doc"
            | ".doc"
            | "docx"
            | ".docx" => Ok(Self::Word),
            "text/plain" | "txt" | ".txt" => Ok(Self::PlainText),
            _ => Err(ExtractError::UnsupportedMediaType {
                declared: declared.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Word => "word",
            Self::PlainText => "plain_text",
        }
    }
}

/// Adapter that turns a stored file into the plain text the engine consumes.
///
/// Implementations must be total per media type: either the whole text or an
/// error, never best-effort partial text. Failures must leave the stored
/// bytes untouched (the adapter only reads its input).
pub trait TextExtractor {
    fn extract(&self, bytes: &[u8], media_type: MediaType) -> Result<String, ExtractError>;
}

/// Extractor for plain-text files.
///
/// Decodes lossily so byte-level encoding damage degrades to replacement
/// characters instead of failing the upload.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8], media_type: MediaType) -> Result<String, ExtractError> {
        match media_type {
            MediaType::PlainText => Ok(String::from_utf8_lossy(bytes).into_owned()),
            other => Err(ExtractError::NoDecoder {
                media_type: other.as_str(),
            }),
        }
    }
}
