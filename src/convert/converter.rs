use super::naming::label_file_name;
use crate::document::parse_document;
use crate::errors::{MarkerParserError, MarkerParserResult, NoMarkersError};
use crate::labels::format_labels;
use crate::markers::{locate_with_schema, Marker, MarkerSchema};
use log::info;
use serde::Serialize;
use std::path::Path;

/// Result of converting one metadata document into a label file.
#[derive(Serialize, Debug)]
pub struct Conversion {
    /// Display name for the output, derived from the input name.
    pub file_name: String,
    /// The label-file body, ready to persist.
    pub body: String,
    pub markers: Vec<Marker>,
    /// The schema the locator matched, `None` when nothing did.
    pub schema: Option<MarkerSchema>,
}

impl Conversion {
    pub fn has_markers(&self) -> bool {
        !self.markers.is_empty()
    }
}

/// One document in a batch conversion request.
#[derive(Debug, Clone)]
pub struct DocumentInput {
    pub name: String,
    pub xml: String,
}

/// Per-document outcome of a batch conversion.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub enum BatchStatus {
    Converted,
    NoMarkers,
    Failed,
}

#[derive(Serialize, Debug)]
pub struct BatchOutcome {
    pub file_name: String,
    pub output_name: Option<String>,
    pub marker_count: usize,
    pub status: BatchStatus,
    pub error: Option<String>,
}

/// Convert a metadata document into a label-file body and output name.
///
/// Malformed XML is a [`MarkerParserError::Document`] error; a document that
/// parses but contains no markers is a valid, empty conversion at this layer.
pub fn convert_document(xml: &str, original_name: &str) -> MarkerParserResult<Conversion> {
    let document = parse_document(xml)?;
    let (markers, schema) = locate_with_schema(&document);
    match schema {
        Some(schema) => info!(
            "{}: {} markers via the {} schema",
            original_name,
            markers.len(),
            schema.name()
        ),
        None => info!("{}: no markers found", original_name),
    }
    Ok(Conversion {
        file_name: label_file_name(original_name),
        body: format_labels(&markers),
        markers,
        schema,
    })
}

/// Like [`convert_document`], but reports the zero-marker case as a distinct
/// [`MarkerParserError::NoMarkers`] error for callers that treat it as one.
pub fn convert_document_strict(xml: &str, original_name: &str) -> MarkerParserResult<Conversion> {
    let conversion = convert_document(xml, original_name)?;
    if !conversion.has_markers() {
        return Err(MarkerParserError::NoMarkers(NoMarkersError::new(format!(
            "no markers found in {}",
            original_name
        ))));
    }
    Ok(conversion)
}

/// Convert a metadata document stored in a local file, deriving the output
/// name from the file's own name.
pub fn convert_local_document<P: AsRef<Path>>(path: P) -> MarkerParserResult<Conversion> {
    let path = path.as_ref();
    let xml = std::fs::read_to_string(path)?;
    let original_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("document.xml");
    convert_document(&xml, original_name)
}

/// Convert each document independently; one bad input never aborts its
/// siblings, it just reports as failed in its own outcome.
pub fn convert_batch(documents: &[DocumentInput]) -> Vec<BatchOutcome> {
    documents
        .iter()
        .map(|input| match convert_document(&input.xml, &input.name) {
            Ok(conversion) if conversion.has_markers() => BatchOutcome {
                file_name: input.name.clone(),
                output_name: Some(conversion.file_name),
                marker_count: conversion.markers.len(),
                status: BatchStatus::Converted,
                error: None,
            },
            Ok(_) => BatchOutcome {
                file_name: input.name.clone(),
                output_name: None,
                marker_count: 0,
                status: BatchStatus::NoMarkers,
                error: None,
            },
            Err(err) => BatchOutcome {
                file_name: input.name.clone(),
                output_name: None,
                marker_count: 0,
                status: BatchStatus::Failed,
                error: Some(err.to_string()),
            },
        })
        .collect()
}
