//! Encoding value object - text encoding used for templates and targets
//!
//! Names follow the aliases bundler tooling accepts (`utf8`, `utf-8`,
//! `latin1`, `binary`, `utf16le`, `ucs2`, ...), matched case-insensitively.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Text encoding of a template file (and of the target written from it)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Encoding {
    #[default]
    Utf8,
    /// ISO-8859-1, one byte per code point below U+0100.
    ///
    /// Encoding text with a character above U+00FF fails with
    /// [`EncodingError::Unencodable`] and the target is not written. Node's
    /// `latin1` writer would keep only the low byte and corrupt the text.
    Latin1,
    /// UTF-16 little endian, no BOM handling
    Utf16Le,
}

/// Decoding/encoding failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("unknown encoding '{name}' (expected utf8, latin1 or utf16le)")]
    Unknown { name: String },

    #[error("file content is not valid {encoding}")]
    InvalidData { encoding: String },

    #[error("character {ch:?} cannot be represented in {encoding}")]
    Unencodable { encoding: String, ch: char },
}

impl Encoding {
    /// Canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf8",
            Encoding::Latin1 => "latin1",
            Encoding::Utf16Le => "utf16le",
        }
    }

    /// Decode raw file bytes into text
    pub fn decode(&self, bytes: &[u8]) -> Result<String, EncodingError> {
        match self {
            Encoding::Utf8 => String::from_utf8(bytes.to_vec()).map_err(|_| self.invalid()),
            Encoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
            Encoding::Utf16Le => {
                if bytes.len() % 2 != 0 {
                    return Err(self.invalid());
                }
                let units: Vec<u16> = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                    .collect();
                String::from_utf16(&units).map_err(|_| self.invalid())
            }
        }
    }

    /// Encode text into bytes for writing
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, EncodingError> {
        match self {
            Encoding::Utf8 => Ok(text.as_bytes().to_vec()),
            Encoding::Latin1 => text
                .chars()
                .map(|ch| {
                    u8::try_from(u32::from(ch)).map_err(|_| EncodingError::Unencodable {
                        encoding: self.as_str().to_string(),
                        ch,
                    })
                })
                .collect(),
            Encoding::Utf16Le => Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect()),
        }
    }

    fn invalid(&self) -> EncodingError {
        EncodingError::InvalidData {
            encoding: self.as_str().to_string(),
        }
    }
}

impl FromStr for Encoding {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "latin1" | "binary" | "iso-8859-1" => Ok(Encoding::Latin1),
            "utf16le" | "utf-16le" | "ucs2" | "ucs-2" => Ok(Encoding::Utf16Le),
            _ => Err(EncodingError::Unknown {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Encoding {
    type Error = EncodingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Encoding> for String {
    fn from(encoding: Encoding) -> Self {
        encoding.as_str().to_string()
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_default_is_utf8() {
        assert_eq!(Encoding::default(), Encoding::Utf8);
    }

    #[test]
    fn encoding_parses_aliases() {
        assert_eq!("UTF-8".parse::<Encoding>().unwrap(), Encoding::Utf8);
        assert_eq!("binary".parse::<Encoding>().unwrap(), Encoding::Latin1);
        assert_eq!("ucs2".parse::<Encoding>().unwrap(), Encoding::Utf16Le);
    }

    #[test]
    fn encoding_rejects_unknown_name() {
        let err = "ebcdic".parse::<Encoding>().unwrap_err();
        assert!(err.to_string().contains("ebcdic"));
    }

    #[test]
    fn utf8_decode_rejects_invalid_bytes() {
        let err = Encoding::Utf8.decode(&[0xff, 0xfe, 0x00]).unwrap_err();
        assert_eq!(
            err,
            EncodingError::InvalidData {
                encoding: "utf8".to_string()
            }
        );
    }

    #[test]
    fn latin1_maps_high_bytes_to_code_points() {
        let text = Encoding::Latin1.decode(&[b'c', 0xe9]).unwrap();
        assert_eq!(text, "cé");
        assert_eq!(Encoding::Latin1.encode(&text).unwrap(), vec![b'c', 0xe9]);
    }

    #[test]
    fn latin1_encode_rejects_wide_chars() {
        let err = Encoding::Latin1.encode("→").unwrap_err();
        assert!(matches!(err, EncodingError::Unencodable { ch: '→', .. }));
    }

    #[test]
    fn utf16le_decodes_pairs() {
        let bytes = Encoding::Utf16Le.encode("<a>").unwrap();
        assert_eq!(bytes, vec![b'<', 0, b'a', 0, b'>', 0]);
        assert_eq!(Encoding::Utf16Le.decode(&bytes).unwrap(), "<a>");
    }

    #[test]
    fn utf16le_rejects_odd_length() {
        assert!(Encoding::Utf16Le.decode(&[b'a']).is_err());
    }

    #[test]
    fn encoding_serde_uses_canonical_name() {
        let json = serde_json::to_string(&Encoding::Latin1).unwrap();
        assert_eq!(json, "\"latin1\"");
        let parsed: Encoding = serde_json::from_str("\"utf-16le\"").unwrap();
        assert_eq!(parsed, Encoding::Utf16Le);
    }
}
