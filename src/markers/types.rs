use serde::Serialize;

/// A single named, timestamped point extracted from a metadata document.
/// `time` is always seconds, whichever schema the document used.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Marker {
    pub time: f64,
    pub label: String,
}

/// Raw extraction result, before placeholder labels are assigned.
pub(crate) type Candidate = (f64, Option<String>);

/// Which document schema the locator matched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum MarkerSchema {
    ConformancePoints,
    MarkerBlock,
    LooseMarkers,
    SampledCues,
    EmbeddedCuePoints,
    Generic,
}

impl MarkerSchema {
    pub fn name(&self) -> &str {
        match self {
            MarkerSchema::ConformancePoints => "conformance_points",
            MarkerSchema::MarkerBlock => "marker_block",
            MarkerSchema::LooseMarkers => "loose_markers",
            MarkerSchema::SampledCues => "sampled_cues",
            MarkerSchema::EmbeddedCuePoints => "embedded_cue_points",
            MarkerSchema::Generic => "generic",
        }
    }
}
