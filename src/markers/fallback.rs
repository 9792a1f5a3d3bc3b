use super::timecode::seconds_from_value;
use super::types::Candidate;
use crate::document::DocValue;

/// Field names that make an unknown object look like it carries a time,
/// in the priority order they are consulted.
pub const TIME_FIELDS: [&str; 5] = ["time", "position", "offset", "sample", "frame"];

/// Field names that make an unknown object look like it carries a label.
pub const LABEL_FIELDS: [&str; 6] = ["name", "label", "title", "text", "marker", "comment"];

/// Recursion guard against pathological nesting.
const MAX_DEPTH: usize = 64;

/// Last-resort structural search: walk the whole tree and emit a marker for
/// every object that plausibly represents one. There is no early exit, so
/// documents with coincidental field names may over- or under-match.
pub(crate) fn locate_generic(document: &DocValue) -> Vec<Candidate> {
    let mut found = Vec::new();
    walk(document, 0, &mut found);
    found
}

fn walk(value: &DocValue, depth: usize, found: &mut Vec<Candidate>) {
    if depth > MAX_DEPTH {
        return;
    }
    match value {
        DocValue::Map(pairs) => {
            let (matches, time, label) = looks_like_marker(value, &TIME_FIELDS, &LABEL_FIELDS);
            if matches {
                // A label with no time field is not enough to place a point.
                if let Some(time) = time {
                    found.push((seconds_from_value(time), label));
                }
            }
            for (_, child) in pairs {
                walk(child, depth + 1, found);
            }
        }
        DocValue::List(items) => {
            for item in items {
                walk(item, depth + 1, found);
            }
        }
        _ => {}
    }
}

/// Whether a node exposes any of the given time-like or label-like field
/// names, checked both as plain keys and as `@` attribute keys. Returns the
/// first matched time value and label text alongside the verdict.
pub(crate) fn looks_like_marker<'a>(
    value: &'a DocValue,
    time_fields: &[&str],
    label_fields: &[&str],
) -> (bool, Option<&'a DocValue>, Option<String>) {
    let time = time_fields.iter().find_map(|key| dual_get(value, key));
    let label = label_fields.iter().find_map(|key| {
        dual_get(value, key)
            .and_then(|v| v.scalar())
            .filter(|text| !text.is_empty())
    });
    (time.is_some() || label.is_some(), time, label)
}

fn dual_get<'a>(value: &'a DocValue, key: &str) -> Option<&'a DocValue> {
    value.get(key).or_else(|| value.attr(key))
}
