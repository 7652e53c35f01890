pub mod header;
pub mod normalize;
pub mod values;

use crate::error::CropwiseError;
use crate::model::{Parameter, SampleHeader, SoilParameter, SoilSample};
use header::parse_header_line;
use normalize::resolve_parameter;
use serde::{Deserialize, Serialize};
use values::parse_value;

/// A data row that named a parameter but gave no usable value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseWarning {
    pub line_number: usize,
    pub parameter: Parameter,
    pub reason: String,
}

/// A row-like line whose name is not a known parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedLine {
    pub line_number: usize,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedSheet {
    pub sample: SoilSample,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ParseWarning>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_lines: Vec<SkippedLine>,
}

enum Row {
    Measured(SoilParameter),
    NoValue { parameter: Parameter, reason: String },
    Unknown,
}

/// Parse a plain-text soil sheet.
///
/// Recognizes `Label: value` header lines (sample, location, date) and data
/// rows of the form `<name>  <value>  [unit]` (columns separated by two or
/// more spaces or a tab), `<name>: <value> [unit]` or single-spaced words.
/// Lines starting with `#` are comments. Rows without a usable value are
/// reported as warnings and left out; rows naming an unknown parameter are
/// reported as skipped.
pub fn parse_sheet(text: &str) -> Result<ParsedSheet, CropwiseError> {
    let mut header = SampleHeader::default();
    let mut parameters = Vec::new();
    let mut warnings = Vec::new();
    let mut skipped_lines = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_number = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if parse_header_line(trimmed, &mut header) {
            continue;
        }

        let Some(row) = try_parse_row(trimmed) else {
            continue;
        };

        match row {
            Row::Measured(p) => parameters.push(p),
            Row::NoValue { parameter, reason } => {
                tracing::warn!(line_number, %parameter, %reason, "excluding parameter");
                warnings.push(ParseWarning {
                    line_number,
                    parameter,
                    reason,
                });
            }
            Row::Unknown => {
                tracing::debug!(line_number, text = trimmed, "skipping unknown row");
                skipped_lines.push(SkippedLine {
                    line_number,
                    text: trimmed.to_string(),
                });
            }
        }
    }

    if parameters.is_empty() {
        return Err(CropwiseError::ParseError(
            "no soil parameter values found".into(),
        ));
    }

    Ok(ParsedSheet {
        sample: SoilSample { header, parameters },
        warnings,
        skipped_lines,
    })
}

/// Try to read a line as a parameter row.
///
/// Returns None if the line doesn't look like a data row at all.
fn try_parse_row(line: &str) -> Option<Row> {
    let segments = split_row(line);
    if segments.len() < 2 {
        return None;
    }

    let name = segments[0];
    if !name.chars().next()?.is_alphabetic() || is_header_word(&name.to_lowercase()) {
        return None;
    }

    let Some(parameter) = resolve_parameter(name) else {
        return Some(Row::Unknown);
    };

    let unit = segments[2..].join(" ");
    let row = match parse_value(segments[1]) {
        Ok(Some(value)) => Row::Measured(SoilParameter {
            parameter,
            value,
            unit: (!unit.is_empty()).then_some(unit),
            optimal_range: None,
        }),
        Ok(None) => Row::NoValue {
            parameter,
            reason: format!("no value given ('{}')", segments[1]),
        },
        Err(e) => Row::NoValue {
            parameter,
            reason: e.to_string(),
        },
    };
    Some(row)
}

/// Split a row into name, value and unit segments.
///
/// Column gaps take precedence. Failing that, the longest run of leading
/// words that names a known parameter becomes the name (`Organic Carbon 0.6
/// %`), then `name: value unit`, then plain words with a one-word name.
fn split_row(line: &str) -> Vec<&str> {
    let segments = split_by_whitespace_gaps(line);
    if segments.len() >= 2 {
        return segments;
    }
    if let Some(segments) = split_at_parameter_name(line) {
        return segments;
    }
    match line.split_once(':') {
        Some((name, rest)) => {
            let mut segments = vec![name.trim()];
            segments.extend(rest.split_whitespace());
            segments
        }
        None => line.split_whitespace().collect(),
    }
}

/// Split a single-spaced row after the longest leading words that resolve to
/// a parameter. At least one word must remain for the value.
fn split_at_parameter_name(line: &str) -> Option<Vec<&str>> {
    let spans = word_spans(line);
    (1..spans.len()).rev().find_map(|k| {
        let name = &line[spans[0].0..spans[k - 1].1];
        resolve_parameter(name)?;
        let mut segments = vec![name];
        segments.extend(spans[k..].iter().map(|&(start, end)| &line[start..end]));
        Some(segments)
    })
}

/// Byte ranges of whitespace-separated words.
fn word_spans(line: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;
    for (i, c) in line.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                spans.push((s, i));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push((s, line.len()));
    }
    spans
}

/// Split a line by tabs or gaps of 2+ spaces.
fn split_by_whitespace_gaps(line: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = None;
    let mut space_count = 0;

    for (i, c) in line.char_indices() {
        if c.is_whitespace() {
            space_count += 1;
            if space_count == 2 || c == '\t' {
                if let Some(s) = start {
                    segments.push(line[s..i].trim_end());
                    start = None;
                }
            }
        } else {
            if start.is_none() {
                start = Some(i);
            }
            space_count = 0;
        }
    }

    if let Some(s) = start {
        segments.push(&line[s..]);
    }

    segments
}

/// Check if a word is a table header rather than parameter data.
fn is_header_word(s: &str) -> bool {
    matches!(
        s,
        "parameter" | "test" | "result" | "value" | "unit" | "units" | "method" | "rating"
    )
}
