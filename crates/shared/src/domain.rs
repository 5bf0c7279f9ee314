use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Audience register the text is rewritten for.
///
/// On the wire a target travels as its display label, which is what the page
/// radio group submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Target {
    /// Reporting up to a superior.
    #[default]
    #[serde(rename = "상사")]
    Upward,
    /// Asking a colleague on another team for help.
    #[serde(rename = "타팀 동료")]
    Lateral,
    /// Addressing a customer.
    #[serde(rename = "고객")]
    External,
}

impl Target {
    pub const ALL: [Target; 3] = [Target::Upward, Target::Lateral, Target::External];

    pub fn label(self) -> &'static str {
        match self {
            Target::Upward => "상사",
            Target::Lateral => "타팀 동료",
            Target::External => "고객",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Target::Upward => "Upward",
            Target::Lateral => "Lateral",
            Target::External => "External",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|target| target.label() == label)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown target: {0}")]
pub struct UnknownTarget(pub String);

impl FromStr for Target {
    type Err = UnknownTarget;

    /// Accepts either the wire label or the English key, case-insensitively for the key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::from_label(s)
            .or_else(|| {
                Self::ALL
                    .into_iter()
                    .find(|target| target.key().eq_ignore_ascii_case(s))
            })
            .ok_or_else(|| UnknownTarget(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackKind {
    #[serde(rename = "good")]
    Positive,
    #[serde(rename = "bad")]
    Negative,
}

impl FeedbackKind {
    pub fn emoji(self) -> &'static str {
        match self {
            FeedbackKind::Positive => "👍",
            FeedbackKind::Negative => "👎",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub kind: FeedbackKind,
    pub target: Target,
    pub converted_text: String,
    pub given_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_serializes_as_wire_label() {
        let json = serde_json::to_string(&Target::Lateral).expect("json");
        assert_eq!(json, "\"타팀 동료\"");
        let parsed: Target = serde_json::from_str("\"고객\"").expect("parse");
        assert_eq!(parsed, Target::External);
    }

    #[test]
    fn target_parses_label_or_key() {
        assert_eq!("상사".parse::<Target>(), Ok(Target::Upward));
        assert_eq!("lateral".parse::<Target>(), Ok(Target::Lateral));
        assert_eq!(
            "boss".parse::<Target>(),
            Err(UnknownTarget("boss".to_string()))
        );
    }

    #[test]
    fn feedback_kind_uses_page_data_type_values() {
        assert_eq!(
            serde_json::to_string(&FeedbackKind::Positive).expect("json"),
            "\"good\""
        );
        assert_eq!(
            serde_json::to_string(&FeedbackKind::Negative).expect("json"),
            "\"bad\""
        );
    }
}
