pub mod document;
pub use document::{parse_document, DocValue};

pub mod markers;
pub use markers::{locate_markers, parse_seconds, Marker, MarkerSchema};

pub mod labels;
pub use labels::{format_labels, write_labels};

pub mod convert;
pub use convert::{
    convert_batch, convert_document, convert_document_strict, convert_local_document,
    label_file_name, BatchOutcome, BatchStatus, Conversion, DocumentInput,
};

pub mod errors;
pub use errors::{DocumentError, MarkerParserError, MarkerParserResult, NoMarkersError};

/// Parse a metadata document and locate its markers in one call.
pub fn extract_markers(xml: &str) -> MarkerParserResult<Vec<Marker>> {
    let document = parse_document(xml)?;
    Ok(locate_markers(&document))
}
