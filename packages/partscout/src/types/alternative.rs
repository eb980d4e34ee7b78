//! Alternative parts found by the structured source and by synthesis.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse compatibility label attached to a cross-reference candidate.
///
/// Variant order is detection priority: when a context mentions several
/// phrases, the earliest variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MatchType {
    #[serde(rename = "Exact Match")]
    ExactMatch,
    #[serde(rename = "Drop-in replacement")]
    DropInReplacement,
    #[serde(rename = "Same Functionality")]
    SameFunctionality,
    #[serde(rename = "Pin Compatible")]
    PinCompatible,
    #[serde(rename = "Functional Equivalent")]
    FunctionalEquivalent,
    #[serde(rename = "Compatible")]
    Compatible,
    #[serde(rename = "Replacement")]
    Replacement,
    /// Nothing recognizable near the candidate.
    #[default]
    #[serde(rename = "Cross-Reference Match")]
    CrossReferenceMatch,
}

impl MatchType {
    /// Every label that detection can produce, in priority order.
    pub const PRIORITY: [MatchType; 7] = [
        MatchType::ExactMatch,
        MatchType::DropInReplacement,
        MatchType::SameFunctionality,
        MatchType::PinCompatible,
        MatchType::FunctionalEquivalent,
        MatchType::Compatible,
        MatchType::Replacement,
    ];

    /// Canonical display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::ExactMatch => "Exact Match",
            Self::DropInReplacement => "Drop-in replacement",
            Self::SameFunctionality => "Same Functionality",
            Self::PinCompatible => "Pin Compatible",
            Self::FunctionalEquivalent => "Functional Equivalent",
            Self::Compatible => "Compatible",
            Self::Replacement => "Replacement",
            Self::CrossReferenceMatch => "Cross-Reference Match",
        }
    }

    /// Lowercase phrases that identify this label in page text.
    pub fn phrases(self) -> &'static [&'static str] {
        match self {
            Self::ExactMatch => &["exact match"],
            Self::DropInReplacement => &["drop-in replacement", "drop in replacement"],
            Self::SameFunctionality => &["same functionality"],
            Self::PinCompatible => &["pin compatible", "pin-to-pin", "pin-compatible"],
            Self::FunctionalEquivalent => &["functional equivalent"],
            Self::Compatible => &["compatible"],
            Self::Replacement => &["replacement"],
            Self::CrossReferenceMatch => &[],
        }
    }

    /// Find the highest-priority label mentioned in already-lowercased text.
    pub fn detect(lowercase_text: &str) -> Option<MatchType> {
        Self::PRIORITY.into_iter().find(|match_type| {
            match_type
                .phrases()
                .iter()
                .any(|phrase| lowercase_text.contains(phrase))
        })
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One candidate scraped from the manufacturer's cross-reference page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossReferenceAlternative {
    pub part_number: String,
    pub match_type: MatchType,
    pub href: String,
    pub title: String,
}

impl CrossReferenceAlternative {
    pub fn new(part_number: impl Into<String>, match_type: MatchType) -> Self {
        let part_number = part_number.into();
        Self {
            title: part_number.clone(),
            part_number,
            match_type,
            href: String::new(),
        }
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = href.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// One candidate parsed from the model's `Part - Description - Manufacturer` reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizedAlternative {
    pub part_number: String,
    pub description: String,
    pub manufacturer: String,
}

impl SynthesizedAlternative {
    pub fn new(
        part_number: impl Into<String>,
        description: impl Into<String>,
        manufacturer: impl Into<String>,
    ) -> Self {
        Self {
            part_number: part_number.into(),
            description: description.into(),
            manufacturer: manufacturer.into(),
        }
    }

    /// Spreadsheet cell text, e.g. `LM1117 (Texas Instruments)`.
    pub fn cell_text(&self) -> String {
        format!("{} ({})", self.part_number, self.manufacturer)
    }
}
