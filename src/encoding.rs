//! Reading and writing markdown files in the encodings notes are found in.
//!
//! Decoding tries each entry of [`DECODE_CHAIN`] in order; the first one that accepts the
//! bytes wins and is remembered so a rewrite keeps the file's encoding.

use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Windows1252,
}

/// Bytes windows-1252 leaves undefined
const WINDOWS_1252_UNDEFINED: &[u8] = &[0x81, 0x8D, 0x8F, 0x90, 0x9D];

/// Decode attempts, in order
pub const DECODE_CHAIN: &[TextEncoding] = &[TextEncoding::Utf8, TextEncoding::Windows1252];

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Failed to read {path}: {source}")]
    Io { path: String, source: io::Error },
    #[error("{path} is not valid text in any supported encoding")]
    Undecodable { path: String },
}

impl TextEncoding {
    fn as_encoding_rs(self) -> &'static encoding_rs::Encoding {
        match self {
            TextEncoding::Utf8 => encoding_rs::UTF_8,
            TextEncoding::Windows1252 => encoding_rs::WINDOWS_1252,
        }
    }

    /// Decode `bytes`, or `None` if they are malformed in this encoding
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        // encoding_rs maps the undefined bytes to C1 controls
        if self == TextEncoding::Windows1252 && bytes.iter().any(|b| WINDOWS_1252_UNDEFINED.contains(b)) {
            return None;
        }
        self.as_encoding_rs()
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|text| text.into_owned())
    }

    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            TextEncoding::Utf8 => text.as_bytes().to_vec(),
            TextEncoding::Windows1252 => {
                let (bytes, _, had_unmappable) = self.as_encoding_rs().encode(text);
                if had_unmappable {
                    log::warn!("Some characters can not be written as windows-1252 and were replaced");
                }
                bytes.into_owned()
            }
        }
    }
}

/// A decoded markdown file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub text: String,
    pub encoding: TextEncoding,
}

impl Document {
    /// Lines including their terminators, the way they are stored in the file
    pub fn lines(&self) -> Vec<&str> {
        self.text.split_inclusive('\n').collect()
    }
}

pub fn decode_bytes(path: &str, bytes: &[u8]) -> Result<Document, DecodeError> {
    for &encoding in DECODE_CHAIN {
        match encoding.decode(bytes) {
            Some(text) => return Ok(Document { text, encoding }),
            None => log::debug!("{path} is not valid {encoding:?}, trying next encoding"),
        }
    }
    Err(DecodeError::Undecodable {
        path: path.to_string(),
    })
}

pub fn read_document(path: &Path) -> Result<Document, DecodeError> {
    let display = path.display().to_string();
    let bytes = fs::read(path).map_err(|source| DecodeError::Io {
        path: display.clone(),
        source,
    })?;
    decode_bytes(&display, &bytes)
}

/// Truncate the file and write `lines` in `encoding`
pub fn write_document<S: AsRef<str>>(path: &Path, lines: &[S], encoding: TextEncoding) -> io::Result<()> {
    let text: String = lines.iter().map(AsRef::as_ref).collect();
    fs::write(path, encoding.encode(&text))
}
