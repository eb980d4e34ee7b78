//! Tabular projection of a batch summary and its CSV rendering.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::types::result::{BatchSummary, PartResult};

/// Column headers, in order.
pub const EXPORT_HEADERS: [&str; 7] = [
    "Original Part",
    "TI Alternative",
    "Match Type",
    "AI Alternative 1",
    "AI Alternative 2",
    "AI Alternative 3",
    "Status",
];

const NOT_AVAILABLE: &str = "N/A";

/// One header row plus one row per part, all cells strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    pub fn from_summary(summary: &BatchSummary) -> Self {
        Self {
            headers: EXPORT_HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: summary.results.iter().map(row_for).collect(),
        }
    }

    /// RFC 4180 CSV with CRLF line endings.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        write_record(&mut out, &self.headers);
        for row in &self.rows {
            write_record(&mut out, row);
        }
        out
    }
}

fn row_for(result: &PartResult) -> Vec<String> {
    let first_ti = result.ti_alternatives.first();
    let ai_cell = |i: usize| {
        result
            .ai_alternatives
            .get(i)
            .map(|alt| alt.cell_text())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    };

    vec![
        result.original_part.clone(),
        first_ti
            .map(|alt| alt.part_number.clone())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        first_ti
            .map(|alt| alt.match_type.label().to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        ai_cell(0),
        ai_cell(1),
        ai_cell(2),
        result.status.as_str().to_string(),
    ]
}

fn write_record(out: &mut String, fields: &[String]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_field(out, field);
    }
    out.push_str("\r\n");
}

fn write_field(out: &mut String, field: &str) {
    let field = neutralize_formula(field);
    if field.contains([',', '"', '\r', '\n']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(&field);
    }
}

/// Spreadsheets evaluate cells starting with these as formulas.
const FORMULA_TRIGGERS: [char; 6] = ['=', '+', '-', '@', '\t', '\r'];

/// Cells come from uploads and model replies; keep them as plain text.
fn neutralize_formula(field: &str) -> Cow<'_, str> {
    if field.starts_with(FORMULA_TRIGGERS) {
        Cow::Owned(format!("'{}", field))
    } else {
        Cow::Borrowed(field)
    }
}
