//! Web evidence used to ground synthesis.

use serde::{Deserialize, Serialize};

/// One search hit: used only as prompt context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub title: String,
    pub link: String,
    pub snippet: String,
}

impl EvidenceItem {
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            snippet: snippet.into(),
        }
    }
}
