//! Character-set handling for script files.
//!
//! Labels are resolved with `encoding_rs` (WHATWG names such as `shift-jis`, `utf-8`,
//! `euc-jp`), plus a few aliases that script tooling commonly uses. Decoding and encoding
//! are strict: malformed input or unmappable output is an error, never a replacement
//! character.
//!
//! A leading UTF-8 byte order mark is dropped on input so it cannot hide the first line's
//! command prefix. `utf-8-sig` writes one back on output.

use crate::error::WrapError;
use encoding_rs::{Encoding, SHIFT_JIS, UTF_8};
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// An encoding together with the label the user asked for
#[derive(Debug, Clone, Copy)]
pub struct ScriptEncoding<'a> {
    pub label: &'a str,
    pub encoding: &'static Encoding,
    /// Write a byte order mark in front of the output
    pub bom: bool,
}

impl<'a> ScriptEncoding<'a> {
    /// Resolve an encoding label.
    pub fn resolve(label: &'a str) -> Result<Self, WrapError> {
        let label = label.trim();
        let lowered = label.to_ascii_lowercase();
        let encoding = Encoding::for_label(label.as_bytes())
            .or_else(|| alias(&lowered))
            .ok_or_else(|| WrapError::UnknownEncoding(label.to_string()))?;
        Ok(ScriptEncoding {
            label,
            encoding,
            bom: lowered == "utf-8-sig",
        })
    }

    /// Resolve a label that will be used to write files.
    ///
    /// `encoding_rs` writes the UTF-16 family as UTF-8, so those labels are refused.
    pub fn resolve_output(label: &'a str) -> Result<Self, WrapError> {
        let resolved = Self::resolve(label)?;
        if resolved.encoding.output_encoding() != resolved.encoding {
            return Err(WrapError::UnsupportedOutputEncoding(resolved.label.to_string()));
        }
        Ok(resolved)
    }

    /// Decode `bytes` read from `path`, failing on any malformed sequence.
    pub fn decode(&self, bytes: &[u8], path: &Path) -> Result<String, WrapError> {
        let bytes = if self.encoding == UTF_8 {
            bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
        } else {
            bytes
        };
        self.encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|text| text.into_owned())
            .ok_or_else(|| WrapError::EncodingMismatch {
                path: path.to_path_buf(),
                encoding: self.label.to_string(),
            })
    }

    /// Encode `text` bound for `path`, failing on characters the encoding cannot represent.
    pub fn encode(&self, text: &str, path: &Path) -> Result<Vec<u8>, WrapError> {
        let (bytes, _, had_errors) = self.encoding.encode(text);
        if had_errors {
            return Err(WrapError::Unencodable {
                path: path.to_path_buf(),
                encoding: self.label.to_string(),
            });
        }
        if self.bom {
            let mut out = Vec::with_capacity(UTF8_BOM.len() + bytes.len());
            out.extend_from_slice(UTF8_BOM);
            out.extend_from_slice(&bytes);
            return Ok(out);
        }
        Ok(bytes.into_owned())
    }
}

/// Aliases missing from the WHATWG label table
fn alias(label: &str) -> Option<&'static Encoding> {
    match label {
        "cp932" | "ms932" | "mskanji" => Some(SHIFT_JIS),
        "utf-8-sig" | "utf_8" => Some(UTF_8),
        _ => None,
    }
}
