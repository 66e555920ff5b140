//! Document kinds and content access
//!
//! Classifies files by extension and reads document content for viewing and
//! download. Download bytes are returned exactly as stored on disk.

use std::fs;
use std::path::Path;

use crate::error::DocumentError;

/// Document classification, resolved once from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Markdown,
    Unsupported,
}

impl DocumentKind {
    /// Classifies a path by its extension, case-insensitively.
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("pdf") => DocumentKind::Pdf,
            Some("md") | Some("markdown") => DocumentKind::Markdown,
            _ => DocumentKind::Unsupported,
        }
    }

    /// Media type for HTTP responses; `Unsupported` has none.
    pub fn media_type(&self) -> Option<&'static str> {
        match self {
            DocumentKind::Pdf => Some("application/pdf"),
            DocumentKind::Markdown => Some("text/markdown"),
            DocumentKind::Unsupported => None,
        }
    }
}

/// Reads a document's raw bytes, untransformed.
pub fn read_document_bytes(path: &Path) -> Result<Vec<u8>, DocumentError> {
    if !path.is_file() {
        return Err(DocumentError::NotAFile(path.to_string_lossy().to_string()));
    }
    Ok(fs::read(path)?)
}

/// Reads a Markdown document as text.
///
/// Decoders are tried in a fixed order; the first that accepts the bytes
/// wins. A document no decoder accepts surfaces as `DecodeFailed`.
pub fn read_document_text(path: &Path) -> Result<String, DocumentError> {
    let bytes = read_document_bytes(path)?;
    decode_text(&bytes)
        .ok_or_else(|| DocumentError::DecodeFailed(path.to_string_lossy().to_string()))
}

// Ordered list of supported text encodings
const DECODERS: &[fn(&[u8]) -> Option<String>] = &[decode_utf8, decode_utf16];

fn decode_text(bytes: &[u8]) -> Option<String> {
    DECODERS.iter().find_map(|decode| decode(bytes))
}

fn decode_utf8(bytes: &[u8]) -> Option<String> {
    let text = std::str::from_utf8(bytes).ok()?;
    // Strip the BOM some editors prepend
    Some(text.strip_prefix('\u{feff}').unwrap_or(text).to_string())
}

/// UTF-16 decoding, accepted only when a byte-order mark is present.
fn decode_utf16(bytes: &[u8]) -> Option<String> {
    let (le, payload) = match bytes {
        [0xff, 0xfe, rest @ ..] => (true, rest),
        [0xfe, 0xff, rest @ ..] => (false, rest),
        _ => return None,
    };
    if payload.len() % 2 != 0 {
        return None;
    }

    let units: Vec<u16> = payload
        .chunks_exact(2)
        .map(|pair| {
            if le {
                u16::from_le_bytes([pair[0], pair[1]])
            } else {
                u16::from_be_bytes([pair[0], pair[1]])
            }
        })
        .collect();

    String::from_utf16(&units).ok()
}
