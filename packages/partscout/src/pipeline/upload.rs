//! Part list extraction from uploaded text or CSV.

const HEADER_NAMES: &[&str] = &["part number", "part", "partnumber", "mpn"];

/// Part numbers from an uploaded file, one per line.
///
/// Only the first comma, semicolon or tab separated column is used. Blank
/// lines are skipped, as is a leading header row. Duplicates are kept so that
/// output rows still line up with input rows.
pub fn parse_part_list(text: &str) -> Vec<String> {
    let mut parts = Vec::new();

    for line in text.lines() {
        let first = line
            .split([',', ';', '\t'])
            .next()
            .unwrap_or_default()
            .trim()
            .trim_matches('"')
            .trim();

        if first.is_empty() {
            continue;
        }
        if parts.is_empty() && is_header(first) {
            continue;
        }
        parts.push(first.to_string());
    }

    parts
}

fn is_header(cell: &str) -> bool {
    let lower = cell.to_lowercase();
    HEADER_NAMES.contains(&lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_lines() {
        assert_eq!(
            parse_part_list("LM317\n\nNE555\r\n  TL072  \n"),
            vec!["LM317", "NE555", "TL072"]
        );
    }

    #[test]
    fn test_csv_with_header_uses_first_column() {
        let text = "Part Number,Qty,Notes\nLM317,10,regulator\n\"NE555\";5\nTL072\t2\n";
        assert_eq!(parse_part_list(text), vec!["LM317", "NE555", "TL072"]);
    }

    #[test]
    fn test_header_only_skipped_at_top() {
        assert_eq!(parse_part_list("MPN\nLM317\nPart\n"), vec!["LM317", "Part"]);
    }

    #[test]
    fn test_duplicates_kept() {
        assert_eq!(parse_part_list("LM317\nLM317"), vec!["LM317", "LM317"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_part_list("").is_empty());
        assert!(parse_part_list("part\n\n").is_empty());
    }
}
