//! Core types: form values, criteria tallies and strength tiers.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use secrecy::SecretString;
use thiserror::Error;

/// A raw value captured from a form field.
///
/// Input event layers deliver loosely typed payloads, so the evaluator
/// accepts every shape a call site can produce instead of requiring the
/// caller to pre-validate. Only the [`Text`](FieldValue::Text) variant is
/// classifiable; everything else evaluates to [`StrengthTier::Weak`].
///
/// Textual candidates are wrapped in [`SecretString`] so they stay out of
/// `Debug` output and logs.
#[derive(Debug, Clone)]
pub enum FieldValue {
    /// A textual candidate password.
    Text(SecretString),
    /// A numeric value.
    Number(f64),
    /// A boolean value.
    Bool(bool),
    /// A missing or cleared field.
    Absent,
    /// A list of nested values.
    List(Vec<FieldValue>),
    /// A keyed map of nested values.
    Map(HashMap<String, FieldValue>),
}

impl FieldValue {
    /// Returns the wrapped secret when the value is textual.
    pub fn as_text(&self) -> Option<&SecretString> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(SecretString::from(value.to_owned()))
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(SecretString::from(value))
    }
}

impl From<SecretString> for FieldValue {
    fn from(value: SecretString) -> Self {
        FieldValue::Text(value)
    }
}

/// Number of strength criteria a candidate satisfies.
///
/// Always in `0..=5`; the constructor clamps so the invariant holds for
/// any raw tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SatisfiedCount(u8);

impl SatisfiedCount {
    /// Total number of criteria the evaluator checks.
    pub const MAX: u8 = 5;

    /// Wraps a raw tally, clamping to [`SatisfiedCount::MAX`].
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    /// Returns the tally as an integer.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Maps the tally onto its strength tier.
    pub fn tier(&self) -> StrengthTier {
        StrengthTier::from_count(*self)
    }
}

impl fmt::Display for SatisfiedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Four-level strength classification, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthTier {
    /// 0 or 1 criteria satisfied.
    Weak,
    /// 2 or 3 criteria satisfied.
    Medium,
    /// 4 criteria satisfied.
    Strong,
    /// All 5 criteria satisfied.
    VeryStrong,
}

impl StrengthTier {
    /// Classifies a tally using the fixed partition over `0..=5`.
    pub fn from_count(count: SatisfiedCount) -> Self {
        match count.value() {
            0 | 1 => StrengthTier::Weak,
            2 | 3 => StrengthTier::Medium,
            4 => StrengthTier::Strong,
            _ => StrengthTier::VeryStrong,
        }
    }

    /// The label a form layer renders.
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthTier::Weak => "weak",
            StrengthTier::Medium => "medium",
            StrengthTier::Strong => "strong",
            StrengthTier::VeryStrong => "very strong",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown tier label.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown strength tier label: {0}")]
pub struct ParseTierError(String);

impl FromStr for StrengthTier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weak" => Ok(StrengthTier::Weak),
            "medium" => Ok(StrengthTier::Medium),
            "strong" => Ok(StrengthTier::Strong),
            "very strong" => Ok(StrengthTier::VeryStrong),
            other => Err(ParseTierError(other.to_string())),
        }
    }
}
