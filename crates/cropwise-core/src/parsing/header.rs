use crate::model::SampleHeader;

const SAMPLE_LABELS: &[&str] = &["sample", "sample id", "sample no", "sample number"];
const LOCATION_LABELS: &[&str] = &["location", "field", "farm", "village", "plot"];
const DATE_LABELS: &[&str] = &["date", "sampling date", "collected", "test date"];

/// Apply a `Label: value` line to the header.
///
/// Returns true if the line was a header line. The first value seen for each
/// field wins.
pub fn parse_header_line(line: &str, header: &mut SampleHeader) -> bool {
    let Some((label, value)) = split_label(line) else {
        return false;
    };

    let slot = if SAMPLE_LABELS.contains(&label.as_str()) {
        &mut header.sample_id
    } else if LOCATION_LABELS.contains(&label.as_str()) {
        &mut header.location
    } else if DATE_LABELS.contains(&label.as_str()) {
        &mut header.date
    } else {
        return false;
    };

    if slot.is_none() && !value.is_empty() {
        *slot = Some(value.to_string());
    }
    true
}

/// Split "Label: value" into a lowercased label and the trimmed value.
fn split_label(line: &str) -> Option<(String, &str)> {
    let (label, value) = line.split_once(':')?;
    let label = label.trim().to_lowercase();
    if label.is_empty() {
        return None;
    }
    Some((label, value.trim()))
}
