use crate::markers::Marker;
use std::io::{self, Write};

/// Render markers in the audio-editor label track format: start time, end
/// time, and label text separated by tabs, one marker per line. Markers are
/// points, so both time columns carry the same value. Label text is written
/// verbatim; embedded tabs or newlines are not escaped. Callers pre-sort.
///
/// The output always ends with a trailing newline; an empty marker list
/// renders as a single newline.
pub fn format_labels(markers: &[Marker]) -> String {
    let lines: Vec<String> = markers
        .iter()
        .map(|marker| format!("{:.6}\t{:.6}\t{}", marker.time, marker.time, marker.label))
        .collect();
    format!("{}\n", lines.join("\n"))
}

/// Stream the same label format to `writer`.
pub fn write_labels(mut writer: impl Write, markers: &[Marker]) -> io::Result<()> {
    writer.write_all(format_labels(markers).as_bytes())?;
    writer.flush()
}
