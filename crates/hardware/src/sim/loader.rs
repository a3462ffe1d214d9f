//! Memory image loading.
//!
//! This module reads initial data-memory contents before a run. It performs:
//! 1. **Hex images:** `$readmemh`-style text, one or more hex words per line,
//!    `@<word index>` directives, `//` and `#` comments.
//! 2. **Binary images:** Raw little-endian bytes placed from word 0, with the
//!    last partial word zero-padded.
//! 3. **File dispatch:** `.hex`/`.mem`/`.txt` files parse as hex, anything else as binary.

use std::fs;
use std::path::Path;

use thiserror::Error;

use super::strip_comment;
use crate::common::WORD_BYTES;

/// Errors raised while reading a memory image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image file could not be read.
    #[error("could not read image {path}: {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A data token is not a 32-bit hex value.
    #[error("line {line}: invalid hex word '{token}'")]
    InvalidWord {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// An `@` directive does not carry a hex word index.
    #[error("line {line}: invalid address directive '{token}'")]
    InvalidAddress {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },
}

/// A run of consecutive words starting at `base_word`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Segment {
    /// Word index of the first word.
    pub base_word: usize,
    /// Word values in address order.
    pub words: Vec<u32>,
}

/// Initial memory contents as a list of segments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryImage {
    segments: Vec<Segment>,
}

impl MemoryImage {
    /// Builds an image from explicit segments.
    pub const fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// The image's segments in the order they were declared.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Total number of words across all segments.
    pub fn word_count(&self) -> usize {
        self.segments.iter().map(|s| s.words.len()).sum()
    }

    /// Packs raw little-endian bytes into words placed from word 0.
    pub fn from_le_bytes(bytes: &[u8]) -> Self {
        let words = bytes
            .chunks(WORD_BYTES)
            .map(|chunk| {
                let mut lanes = [0u8; WORD_BYTES];
                lanes[..chunk.len()].copy_from_slice(chunk);
                u32::from_le_bytes(lanes)
            })
            .collect::<Vec<_>>();
        if words.is_empty() {
            return Self::default();
        }
        Self::from_segments(vec![Segment {
            base_word: 0,
            words,
        }])
    }

    /// Parses a `$readmemh`-style hex image.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::InvalidWord`] or [`LoadError::InvalidAddress`] naming
    /// the first malformed token.
    pub fn parse_hex(text: &str) -> Result<Self, LoadError> {
        let mut segments = Vec::new();
        let mut current = Segment::default();

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            for token in strip_comment(raw).split_whitespace() {
                if let Some(addr) = token.strip_prefix('@') {
                    let base_word =
                        parse_hex_u32(addr).ok_or_else(|| LoadError::InvalidAddress {
                            line,
                            token: token.to_owned(),
                        })? as usize;
                    let next = Segment {
                        base_word,
                        words: Vec::new(),
                    };
                    let done = std::mem::replace(&mut current, next);
                    if !done.words.is_empty() {
                        segments.push(done);
                    }
                } else {
                    let word = parse_hex_u32(token).ok_or_else(|| LoadError::InvalidWord {
                        line,
                        token: token.to_owned(),
                    })?;
                    current.words.push(word);
                }
            }
        }
        if !current.words.is_empty() {
            segments.push(current);
        }
        Ok(Self::from_segments(segments))
    }
}

/// Reads a memory image from disk, choosing the format from the extension.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, or a parse error for
/// malformed hex images.
pub fn load_image_file(path: impl AsRef<Path>) -> Result<MemoryImage, LoadError> {
    let path = path.as_ref();
    let io_err = |source| LoadError::Io {
        path: path.display().to_string(),
        source,
    };
    let is_text = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| matches!(ext, "hex" | "mem" | "txt"));

    if is_text {
        let text = fs::read_to_string(path).map_err(io_err)?;
        MemoryImage::parse_hex(&text)
    } else {
        let bytes = fs::read(path).map_err(io_err)?;
        Ok(MemoryImage::from_le_bytes(&bytes))
    }
}

fn parse_hex_u32(token: &str) -> Option<u32> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token)
        .replace('_', "");
    if digits.is_empty() {
        return None;
    }
    u32::from_str_radix(&digits, 16).ok()
}
