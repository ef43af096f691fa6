//! Codec configuration

use crate::errors::DtoResult;

use serde::{Deserialize, Serialize};

/// What to do with a field whose wire value cannot be decoded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodePolicy {
    /// Treat the field as absent and log a warning
    #[default]
    Lenient,
    /// Fail the whole deserialization with the field error
    Strict,
}

/// Serialization and deserialization settings shared by all messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// per-field decode failure policy for results
    pub decode_policy: DecodePolicy,
    /// pretty-print JSON request bodies.
    /// Off by default: compact bodies are smaller, pretty ones read better in logs.
    pub pretty_payload: bool,
}

impl Config {
    /// Parses a configuration from a JSON document.
    /// Missing keys take their default values.
    ///
    /// # Errors
    /// Returns an `Err` if `json` is not a valid configuration document
    pub fn from_json(json: &str) -> DtoResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns a copy with `decode_policy` replaced
    #[must_use]
    pub fn with_decode_policy(mut self, decode_policy: DecodePolicy) -> Self {
        self.decode_policy = decode_policy;
        self
    }

    /// Returns a copy with `pretty_payload` replaced
    #[must_use]
    pub fn with_pretty_payload(mut self, pretty_payload: bool) -> Self {
        self.pretty_payload = pretty_payload;
        self
    }
}
