//! Codec configuration

use serde::Deserialize;

/// How the `questionType` discriminator is written on encode.
///
/// Decoding accepts both forms regardless of this setting.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TagFormat {
    /// `"questionType": 4`
    #[default]
    Numeric,
    /// `"questionType": "Rating1To10"`
    Name,
}

/// Polymorphic codec configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CodecConfig {
    /// Discriminator form used when encoding
    #[serde(default)]
    pub tag_format: TagFormat,

    /// Pretty-print JSON text produced by the `*_string` helpers
    #[serde(default)]
    pub pretty: bool,
}
