//! GSTIN structural validation.
//!
//! A GSTIN is 15 characters: a two-digit state code, the holder's
//! ten-character PAN, an entity code, the fixed letter `Z`, and a mod-36
//! check character computed over the preceding fourteen. Validation here is
//! purely structural; no registry lookup happens at this layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::gst::state::StateCode;

/// Why a GSTIN value failed structural validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GstinParseError {
    /// Not exactly fifteen characters.
    #[error("GSTIN must be 15 characters, got {length}")]
    InvalidLength {
        /// Character count of the rejected value.
        length: usize,
    },

    /// A character class rule failed (digits, PAN shape, entity code or the fixed `Z`).
    #[error("GSTIN has an invalid character at position {position}")]
    InvalidCharacter {
        /// Zero-based offset of the offending character.
        position: usize,
    },

    /// The two-digit prefix is not a published state code.
    #[error("GSTIN state prefix {code:02} is not a GST state code")]
    UnknownStateCode {
        /// The rejected prefix.
        code: u8,
    },

    /// The final character does not match the mod-36 checksum.
    #[error("GSTIN checksum mismatch: expected {expected}, found {found}")]
    ChecksumMismatch {
        /// Check character the payload implies.
        expected: char,
        /// Check character actually present.
        found: char,
    },
}

/// A structurally valid GSTIN.
///
/// Construction goes through [`Gstin::parse`], which normalizes case and
/// whitespace, so a held value always satisfies the shape, state and
/// checksum rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Gstin {
    value: String,
    state: StateCode,
}

impl Gstin {
    /// Parses and structurally validates a GSTIN.
    ///
    /// Input is trimmed and upper-cased before checking, so values keyed
    /// in lower case still pass.
    pub fn parse(value: &str) -> Result<Self, GstinParseError> {
        let normalized = value.trim().to_ascii_uppercase();
        if let Some(position) = normalized.chars().position(|c| !c.is_ascii()) {
            return Err(GstinParseError::InvalidCharacter { position });
        }
        if normalized.len() != 15 {
            return Err(GstinParseError::InvalidLength {
                length: normalized.len(),
            });
        }

        let bytes = normalized.as_bytes();
        for (position, &b) in bytes.iter().enumerate() {
            let ok = match position {
                0 | 1 | 7..=10 => b.is_ascii_digit(),
                2..=6 | 11 => b.is_ascii_uppercase(),
                12 => b.is_ascii_uppercase() || (b'1'..=b'9').contains(&b),
                13 => b == b'Z',
                _ => b.is_ascii_uppercase() || b.is_ascii_digit(),
            };
            if !ok {
                return Err(GstinParseError::InvalidCharacter { position });
            }
        }

        let code = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
        let state =
            StateCode::new(code).map_err(|_| GstinParseError::UnknownStateCode { code })?;

        let expected = checksum_char(&bytes[..14]);
        let found = bytes[14] as char;
        if expected != found {
            return Err(GstinParseError::ChecksumMismatch { expected, found });
        }

        Ok(Self {
            value: normalized,
            state,
        })
    }

    /// The state of registration embedded in the prefix.
    #[must_use]
    pub const fn state_code(&self) -> StateCode {
        self.state
    }

    /// The holder's PAN (characters 3 through 12).
    #[must_use]
    pub fn pan(&self) -> &str {
        &self.value[2..12]
    }

    /// The normalized identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Gstin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for Gstin {
    type Err = GstinParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Gstin {
    type Error = GstinParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Gstin> for String {
    fn from(gstin: Gstin) -> Self {
        gstin.value
    }
}

/// Structural GSTIN check.
///
/// Fails closed: any malformed value returns `false`, never panics.
#[must_use]
pub fn validate_gstin(value: &str) -> bool {
    Gstin::parse(value).is_ok()
}

const CHARSET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Mod-36 check character over a payload of uppercase alphanumerics.
///
/// Character values run 0-9 then A=10..Z=35; positions alternate weight
/// 1, 2 starting at 1, and each weighted product contributes its base-36
/// digit sum.
pub(crate) fn checksum_char(payload: &[u8]) -> char {
    let mut sum = 0u32;
    for (index, &b) in payload.iter().enumerate() {
        let factor = if index % 2 == 0 { 1 } else { 2 };
        let product = byte_value(b) * factor;
        sum += product / 36 + product % 36;
    }
    let check = (36 - sum % 36) % 36;
    CHARSET[check as usize] as char
}

const fn byte_value(b: u8) -> u32 {
    if b.is_ascii_digit() {
        (b - b'0') as u32
    } else {
        (b - b'A') as u32 + 10
    }
}
