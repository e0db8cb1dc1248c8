//! Card identity: stable 8-character lowercase hex identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Length of a canonical card identifier.
pub const ID_LEN: usize = 8;

/// A stable card identifier: exactly 8 lowercase hexadecimal characters.
///
/// Identifiers are assigned by the authoritative index and never minted
/// here. Connection targets that do not parse as a `CardId` are slugs
/// awaiting resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(String);

impl CardId {
    /// Parse a CardId from a string
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        s.parse()
    }

    /// Check whether a string is a well-formed card identifier.
    ///
    /// This is the "already-valid" test the resolver runs on every
    /// connection target before trying any lookup tier.
    pub fn is_valid(s: &str) -> bool {
        s.len() == ID_LEN && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CardId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_valid(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(IdParseError::Malformed(s.to_string()))
        }
    }
}

impl Serialize for CardId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CardId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when parsing card identifiers
#[derive(Debug, Error)]
pub enum IdParseError {
    #[error("malformed card id: '{0}' (expected exactly 8 lowercase hex characters)")]
    Malformed(String),
}
