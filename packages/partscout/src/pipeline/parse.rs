//! Parsing of the batch-mode model reply.
//!
//! Lossy on purpose: only numbered `Part - Description - Manufacturer` lines
//! survive. Anything else (preambles, bullet commentary, lines with a missing
//! field) is dropped without an error.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::alternative::SynthesizedAlternative;
use crate::types::result::MAX_SYNTHESIZED_PER_PART;

lazy_static! {
    // Description is greedy so a dash inside it stays in the description;
    // the manufacturer is whatever follows the last separator.
    static ref ALTERNATIVE_LINE: Regex = Regex::new(
        r"^\s*\d+[.)]\s*(.+?)\s+[-–—]\s+(.+)\s+[-–—]\s+(.+?)\s*$"
    ).unwrap();
}

/// Parse up to three alternatives from a reply.
pub fn parse_alternatives(reply: &str) -> Vec<SynthesizedAlternative> {
    reply
        .lines()
        .filter_map(parse_line)
        .take(MAX_SYNTHESIZED_PER_PART)
        .collect()
}

fn parse_line(line: &str) -> Option<SynthesizedAlternative> {
    let line = strip_emphasis(line);
    let captures = ALTERNATIVE_LINE.captures(&line)?;

    let part_number = clean_field(&captures[1]);
    let description = clean_field(&captures[2]);
    let manufacturer = clean_field(&captures[3]);

    if part_number.is_empty() || description.is_empty() || manufacturer.is_empty() {
        return None;
    }

    Some(SynthesizedAlternative::new(
        part_number,
        description,
        manufacturer,
    ))
}

fn strip_emphasis(line: &str) -> String {
    line.replace("**", "").replace('`', "")
}

fn clean_field(field: &str) -> String {
    field.trim().trim_matches(|c| c == '*' || c == '_').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_reply() {
        let reply = "1. LM1117 - 800mA LDO regulator - Texas Instruments\n\
                     2. AMS1117 - 1A LDO regulator - Advanced Monolithic Systems\n\
                     3. LD1117 - Low drop fixed and adjustable regulator - STMicroelectronics";
        let alternatives = parse_alternatives(reply);

        assert_eq!(alternatives.len(), 3);
        assert_eq!(alternatives[0].part_number, "LM1117");
        assert_eq!(alternatives[0].description, "800mA LDO regulator");
        assert_eq!(alternatives[0].manufacturer, "Texas Instruments");
        assert_eq!(alternatives[2].manufacturer, "STMicroelectronics");
    }

    #[test]
    fn test_malformed_lines_are_dropped() {
        let reply = "Here are some alternatives:\n\
                     1. TLC555 - CMOS timer - Texas Instruments\n\
                     2. ICM7555 - missing manufacturer\n\
                     3. LMC555 - Low power CMOS timer - Texas Instruments\n\
                     - MIC1555 - bullet, not numbered - Microchip";
        let alternatives = parse_alternatives(reply);

        assert_eq!(alternatives.len(), 2);
        assert_eq!(alternatives[0].part_number, "TLC555");
        assert_eq!(alternatives[1].part_number, "LMC555");
    }

    #[test]
    fn test_truncates_to_three() {
        let reply = (1..=5)
            .map(|i| format!("{i}. PART{i} - Description {i} - Maker {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let alternatives = parse_alternatives(&reply);

        assert_eq!(alternatives.len(), 3);
        assert_eq!(alternatives[2].part_number, "PART3");
    }

    #[test]
    fn test_markdown_emphasis_and_dashes_in_description() {
        let reply = "1) **LM1117-3.3** - Fixed 3.3V - 800mA LDO - Texas Instruments";
        let alternatives = parse_alternatives(reply);

        assert_eq!(alternatives.len(), 1);
        assert_eq!(alternatives[0].part_number, "LM1117-3.3");
        assert_eq!(alternatives[0].description, "Fixed 3.3V - 800mA LDO");
        assert_eq!(alternatives[0].manufacturer, "Texas Instruments");
    }

    #[test]
    fn test_every_field_non_empty() {
        let reply = "1. A1 - x - y\n2. B2 -  - z\n3. C3 - desc - Maker";
        for alt in parse_alternatives(reply) {
            assert!(!alt.part_number.is_empty());
            assert!(!alt.description.is_empty());
            assert!(!alt.manufacturer.is_empty());
        }
    }

    #[test]
    fn test_no_conforming_lines() {
        assert!(parse_alternatives("I could not find alternatives.").is_empty());
        assert!(parse_alternatives("").is_empty());
    }
}
