//! The output styles the emitter knows about

use std::str::FromStr;

use derive_more::Display;
use thiserror::Error;

/// The list of possible snippet styles
///
/// Usually you will want [`EncodingMode::Text`], which is also the fallback
/// for anything the operator types that is not recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum EncodingMode {
    /// A list of string literals: `"EPERM",`
    #[default]
    #[display("text")]
    Text,
    /// Enum initializers: `EPERM = 1,`
    #[display("enum")]
    Enum,
    /// Dictionary entries: `{1, "EPERM"},`
    #[display("dict")]
    Dict,
    /// Switch cases returning the name
    #[display("switch")]
    Switch,
}

impl EncodingMode {
    /// Every mode, in the order they are documented
    pub const ALL: [Self; 4] = [Self::Text, Self::Enum, Self::Dict, Self::Switch];

    /// Map free-form operator input onto a mode
    ///
    /// Input is trimmed and compared case-insensitively against `enum`,
    /// `dict` and `switch`. Anything else, including an empty line or a typo,
    /// selects [`EncodingMode::Text`].
    #[must_use]
    pub fn from_operator_input(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "enum" => Self::Enum,
            "dict" => Self::Dict,
            "switch" => Self::Switch,
            _ => Self::Text,
        }
    }
}

/// Returned by the strict [`EncodingMode::from_str`] for unknown names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown encoding mode `{0}`, expected one of: text, enum, dict, switch")]
pub struct UnknownEncodingMode(pub String);

impl FromStr for EncodingMode {
    type Err = UnknownEncodingMode;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized = input.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.to_string() == normalized)
            .ok_or_else(|| UnknownEncodingMode(input.to_string()))
    }
}
