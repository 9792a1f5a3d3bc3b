use super::fallback::locate_generic;
use super::timecode::{parse_seconds, seconds_from_value};
use super::types::{Candidate, Marker, MarkerSchema};
use crate::document::DocValue;
use log::{debug, warn};

/// How deep to look for a schema's anchor element before giving up on it.
const ANCHOR_DEPTH: usize = 8;

/// How deep to search a broadcast-extension block for nested cue points.
const CUE_POINT_DEPTH: usize = 16;

/// Sample rate assumed when a cue list does not declare one.
const DEFAULT_SAMPLE_RATE: f64 = 44100.0;

/// Find every (time, label) point in a parsed metadata document.
///
/// Schema-specific passes run in a fixed priority order and the first one to
/// yield anything wins; the generic structural search only runs when all of
/// them come up empty. Never fails — an unrecognized document is simply an
/// empty result.
pub fn locate_markers(document: &DocValue) -> Vec<Marker> {
    locate_with_schema(document).0
}

pub(crate) fn locate_with_schema(document: &DocValue) -> (Vec<Marker>, Option<MarkerSchema>) {
    let passes: [(MarkerSchema, fn(&DocValue) -> Vec<Candidate>); 6] = [
        (MarkerSchema::ConformancePoints, conformance_points),
        (MarkerSchema::MarkerBlock, marker_block),
        (MarkerSchema::LooseMarkers, loose_markers),
        (MarkerSchema::SampledCues, sampled_cues),
        (MarkerSchema::EmbeddedCuePoints, embedded_cue_points),
        (MarkerSchema::Generic, locate_generic),
    ];

    for (schema, pass) in passes {
        let candidates = pass(document);
        if candidates.is_empty() {
            debug!("no markers under the {} schema", schema.name());
            continue;
        }
        if schema == MarkerSchema::Generic {
            warn!("no known schema matched, using generic structural search");
        }
        debug!("{} markers via {} schema", candidates.len(), schema.name());
        return (finish(candidates), Some(schema));
    }
    (Vec::new(), None)
}

/// Placeholder labels are numbered by extraction order, then the whole
/// sequence is stable-sorted by time so that ties keep discovery order.
fn finish(candidates: Vec<Candidate>) -> Vec<Marker> {
    let mut markers: Vec<Marker> = candidates
        .into_iter()
        .enumerate()
        .map(|(index, (time, label))| Marker {
            time,
            label: label.unwrap_or_else(|| format!("Marker {}", index + 1)),
        })
        .collect();
    markers.sort_by(|a, b| {
        a.time
            .partial_cmp(&b.time)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    markers
}

/// `conformance_point_document` → `File` → `ConformancePoint` entries with a
/// `time` attribute (required) and a `name` attribute (optional).
fn conformance_points(document: &DocValue) -> Vec<Candidate> {
    let Some(root) = document.find("conformance_point_document", ANCHOR_DEPTH) else {
        return Vec::new();
    };
    let mut found = Vec::new();
    for file in root.get("File").map(|f| f.entries()).unwrap_or_default() {
        for point in file
            .get("ConformancePoint")
            .map(|p| p.entries())
            .unwrap_or_default()
        {
            let Some(time) = point.attr("time").and_then(|v| v.scalar()) else {
                continue;
            };
            found.push((parse_seconds(&time), entry_label(point, &["name"])));
        }
    }
    found
}

/// A `Markers` block whose `Marker` entries form a proper list; `Position`
/// is required, `Name`/`Label` optional.
fn marker_block(document: &DocValue) -> Vec<Candidate> {
    let Some(block) = document.find("Markers", ANCHOR_DEPTH) else {
        return Vec::new();
    };
    let Some(DocValue::List(entries)) = block.get("Marker") else {
        return Vec::new();
    };
    let mut found = Vec::new();
    for entry in entries {
        let Some(position) = entry.get("Position") else {
            continue;
        };
        found.push((
            seconds_from_value(position),
            entry_label(entry, &["Name", "Label"]),
        ));
    }
    found
}

/// Like [`marker_block`] but tolerant of a singular object (or one-element
/// array) at each nesting level, and of `Time` in place of `Position`.
fn loose_markers(document: &DocValue) -> Vec<Candidate> {
    let Some(block) = document.find("Markers", ANCHOR_DEPTH) else {
        return Vec::new();
    };
    let mut found = Vec::new();
    for container in block.entries() {
        let Some(marker) = container.get("Marker") else {
            continue;
        };
        for entry in marker.entries() {
            let Some(position) = entry.get("Position").or_else(|| entry.get("Time")) else {
                continue;
            };
            found.push((
                seconds_from_value(position),
                entry_label(entry, &["Name", "Label"]),
            ));
        }
    }
    found
}

/// `File` → `Cues` → `Cue` entries where `Position` is a raw sample index.
/// The one pass that converts samples to seconds itself, using the cue
/// list's `samplerate` attribute (44.1 kHz when absent).
fn sampled_cues(document: &DocValue) -> Vec<Candidate> {
    let Some(file) = document.find("File", ANCHOR_DEPTH) else {
        return Vec::new();
    };
    let Some(cues) = file.get("Cues") else {
        return Vec::new();
    };
    let mut found = Vec::new();
    for block in cues.entries() {
        let rate = block
            .attr("samplerate")
            .and_then(|v| v.scalar())
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|rate| *rate > 0.0)
            .unwrap_or(DEFAULT_SAMPLE_RATE);
        let Some(cue) = block.get("Cue") else {
            continue;
        };
        for entry in cue.entries() {
            let Some(position) = entry.get("Position").or_else(|| entry.attr("position")) else {
                continue;
            };
            let sample = position
                .scalar()
                .and_then(|s| s.parse::<f64>().ok())
                .unwrap_or(0.0);
            found.push((sample / rate, entry_label(entry, &["Label", "Name"])));
        }
    }
    found
}

/// `CuePoint` entries nested anywhere inside a broadcast-extension block;
/// `Position` (field or attribute) required, label optional.
fn embedded_cue_points(document: &DocValue) -> Vec<Candidate> {
    let Some(block) = document
        .find("bext", ANCHOR_DEPTH)
        .or_else(|| document.find("BroadcastExtension", ANCHOR_DEPTH))
    else {
        return Vec::new();
    };
    let mut points = Vec::new();
    block.find_all("CuePoint", CUE_POINT_DEPTH, &mut points);
    let mut found = Vec::new();
    for entry in points.iter().flat_map(|point| point.entries()) {
        let Some(position) = entry.get("Position").or_else(|| entry.attr("position")) else {
            continue;
        };
        found.push((
            seconds_from_value(position),
            entry_label(entry, &["Name", "Label", "Text"]),
        ));
    }
    found
}

/// First non-blank label among the given field names, checked as child
/// elements and as attributes.
fn entry_label(entry: &DocValue, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        entry
            .get(key)
            .or_else(|| entry.attr(key))
            .and_then(|value| value.scalar())
            .filter(|text| !text.is_empty())
    })
}
