//! LLM prompts for alternative-part synthesis.
//!
//! Both prompts are grounded: the model sees the web evidence and the
//! manufacturer's own cross-reference candidates, each rendered as a numbered
//! block, or an explicit placeholder when that source returned nothing.

use crate::types::alternative::CrossReferenceAlternative;
use crate::types::evidence::EvidenceItem;

/// Placeholder when web search produced no evidence.
pub const NO_WEB_RESULTS: &str = "No web search results were available for this part.";

/// Placeholder when the cross-reference tool produced no candidates.
pub const NO_CROSS_REFERENCE_RESULTS: &str =
    "The manufacturer cross-reference tool returned no alternatives for this part.";

/// Prompt for the single-lookup narrative.
pub const NARRATIVE_PROMPT: &str = r#"You are an experienced electronic components engineer helping a buyer find substitutes for an obsolete or hard-to-source part.

Original part number: {part}

Web search evidence (datasheets and distributor listings):
{web_evidence}

Manufacturer cross-reference results:
{cross_reference}

Task:
Recommend the best alternative parts for {part}.

Requirements:
1. Prefer alternatives from a DIFFERENT manufacturer than the original part. Only list same-manufacturer parts after all viable second-source options.
2. Verify each candidate against the evidence above. Do not invent part numbers; if you are unsure a part exists, say so.
3. Rank candidates in this order of importance:
   a. Package match (same package and footprint, pin-to-pin compatible)
   b. Functional match (electrical parameters: voltage, current, frequency, tolerance, temperature range)
   c. Lifecycle status (active parts before NRND or obsolete parts)
   d. Availability at authorized distributors (Digi-Key, Mouser, Arrow, Avnet, Newark)
   e. Price
4. For each alternative give: part number, manufacturer, package, key differences from the original, and lifecycle status if known.
5. Finish with a short recommendation naming the single best drop-in candidate and any design changes it would require.

Format the answer as markdown with a heading per alternative."#;

/// Prompt for batch mode: exactly three enumerated lines.
pub const ALTERNATIVES_PROMPT: &str = r#"You are an electronic components engineer.

Original part number: {part}

Web search evidence:
{web_evidence}

Manufacturer cross-reference results:
{cross_reference}

List exactly 3 alternative parts for {part}, preferring parts from a different manufacturer than the original, ranked by package match, then functional match, then lifecycle status.

Respond with exactly three lines and nothing else, in this format:
1. PART_NUMBER - Short description - Manufacturer
2. PART_NUMBER - Short description - Manufacturer
3. PART_NUMBER - Short description - Manufacturer"#;

/// Render search hits as a numbered block.
pub fn format_web_evidence(items: &[EvidenceItem]) -> String {
    if items.is_empty() {
        return NO_WEB_RESULTS.to_string();
    }

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            format!(
                "{}. {}\n   URL: {}\n   {}",
                i + 1,
                item.title,
                item.link,
                item.snippet
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render cross-reference candidates as a numbered block.
pub fn format_cross_reference_evidence(alternatives: &[CrossReferenceAlternative]) -> String {
    if alternatives.is_empty() {
        return NO_CROSS_REFERENCE_RESULTS.to_string();
    }

    alternatives
        .iter()
        .enumerate()
        .map(|(i, alt)| {
            format!(
                "{}. {} ({}) {}",
                i + 1,
                alt.part_number,
                alt.match_type,
                alt.href
            )
            .trim_end()
            .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the single-lookup narrative prompt.
pub fn format_narrative_prompt(part: &str, web_evidence: &str, cross_reference: &str) -> String {
    NARRATIVE_PROMPT
        .replace("{web_evidence}", web_evidence)
        .replace("{cross_reference}", cross_reference)
        .replace("{part}", part)
}

/// Format the batch-mode prompt.
pub fn format_alternatives_prompt(part: &str, web_evidence: &str, cross_reference: &str) -> String {
    ALTERNATIVES_PROMPT
        .replace("{web_evidence}", web_evidence)
        .replace("{cross_reference}", cross_reference)
        .replace("{part}", part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::alternative::MatchType;

    #[test]
    fn test_empty_sources_use_placeholders() {
        assert_eq!(format_web_evidence(&[]), NO_WEB_RESULTS);
        assert_eq!(format_cross_reference_evidence(&[]), NO_CROSS_REFERENCE_RESULTS);
    }

    #[test]
    fn test_web_evidence_is_numbered() {
        let items = vec![
            EvidenceItem::new("LM317 datasheet", "https://ti.com/lm317.pdf", "3-terminal adjustable"),
            EvidenceItem::new("LM317T Mouser", "https://mouser.com/LM317T", "In stock"),
        ];
        let block = format_web_evidence(&items);
        assert!(block.starts_with("1. LM317 datasheet"));
        assert!(block.contains("2. LM317T Mouser"));
        assert!(block.contains("URL: https://mouser.com/LM317T"));
    }

    #[test]
    fn test_cross_reference_evidence_includes_match_type() {
        let alts = vec![CrossReferenceAlternative::new("LM1117", MatchType::PinCompatible)
            .with_href("https://www.ti.com/product/LM1117")];
        assert_eq!(
            format_cross_reference_evidence(&alts),
            "1. LM1117 (Pin Compatible) https://www.ti.com/product/LM1117"
        );
    }

    #[test]
    fn test_prompts_substitute_every_placeholder() {
        let narrative = format_narrative_prompt("NE555", "WEB", "XREF");
        assert!(narrative.contains("Original part number: NE555"));
        assert!(narrative.contains("WEB"));
        assert!(narrative.contains("XREF"));
        assert!(narrative.contains("DIFFERENT manufacturer"));
        assert!(!narrative.contains("{part}"));

        let batch = format_alternatives_prompt("NE555", "WEB", "XREF");
        assert!(batch.contains("exactly 3 alternative parts for NE555"));
        assert!(!batch.contains("{web_evidence}"));
        assert!(!batch.contains("{cross_reference}"));
    }
}
