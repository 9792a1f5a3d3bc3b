use markerparser::{convert_local_document, MarkerParserError, MarkerSchema};

fn testdata(name: &str) -> String {
    format!(
        concat!(env!("CARGO_MANIFEST_DIR"), "/tests/testdata/{}"),
        name
    )
}

#[test]
fn test_convert_conformance_point_document() {
    let conversion = convert_local_document(testdata("conformance_points.xml"));

    assert!(
        conversion.is_ok(),
        "conversion failed: {:?}",
        conversion.err()
    );
    let conversion = conversion.unwrap();

    assert_eq!(conversion.file_name, "conformance_points_markers.txt");
    assert_eq!(conversion.schema, Some(MarkerSchema::ConformancePoints));
    assert_eq!(conversion.markers.len(), 3);
    // Placeholder numbering comes from discovery order, sorting from time.
    assert_eq!(
        conversion.body,
        "5.000000\t5.000000\tMarker 2\n\
         10.000000\t10.000000\tIntro\n\
         62.500000\t62.500000\tVerse\n"
    );
}

#[test]
fn test_convert_marker_block_document() {
    let conversion = convert_local_document(testdata("marker_block.xml")).unwrap();

    assert_eq!(conversion.schema, Some(MarkerSchema::MarkerBlock));
    assert_eq!(
        conversion.body,
        "7.500000\t7.500000\tMarker 3\n\
         12.250000\t12.250000\tVerse\n\
         90.000000\t90.000000\tChorus\n"
    );
}

#[test]
fn test_convert_loose_marker_document() {
    let conversion = convert_local_document(testdata("loose_markers.xml")).unwrap();

    assert_eq!(conversion.schema, Some(MarkerSchema::LooseMarkers));
    assert_eq!(conversion.body, "130.000000\t130.000000\tBridge\n");
}

#[test]
fn test_convert_sample_indexed_cues() {
    let conversion = convert_local_document(testdata("sampled_cues.xml")).unwrap();

    assert_eq!(conversion.schema, Some(MarkerSchema::SampledCues));
    assert_eq!(
        conversion.body,
        "0.500000\t0.500000\tHit\n2.000000\t2.000000\tMarker 2\n"
    );
}

#[test]
fn test_convert_broadcast_extension_cue_points() {
    let conversion = convert_local_document(testdata("bext_cue_points.xml")).unwrap();

    assert_eq!(conversion.schema, Some(MarkerSchema::EmbeddedCuePoints));
    assert_eq!(
        conversion.body,
        "2.500000\t2.500000\tSlate\n45.000000\t45.000000\tMarker 2\n"
    );
}

#[test]
fn test_convert_unrecognized_vendor_document() {
    let conversion = convert_local_document(testdata("vendor_generic.xml")).unwrap();

    assert_eq!(conversion.schema, Some(MarkerSchema::Generic));
    assert_eq!(
        conversion.body,
        "3.750000\t3.750000\tPickup\n120.000000\t120.000000\tScene change\n"
    );
}

#[test]
fn test_marker_free_document_is_an_empty_conversion() {
    let conversion = convert_local_document(testdata("no_markers.xml")).unwrap();

    assert!(!conversion.has_markers());
    assert_eq!(conversion.schema, None);
    assert_eq!(conversion.body, "\n");
}

#[test]
fn test_malformed_document_is_a_document_error() {
    let result = convert_local_document(testdata("malformed.xml"));

    match result {
        Err(MarkerParserError::Document(_)) => {}
        other => panic!("expected a document error, got {:?}", other),
    }
}

#[test]
fn test_convert_from_a_scratch_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("field_take.xml");
    std::fs::write(
        &path,
        r#"<conformance_point_document>
             <File name="field_take.wav">
               <ConformancePoint time="1.5" name="A"/>
             </File>
           </conformance_point_document>"#,
    )
    .unwrap();

    let conversion = convert_local_document(&path).unwrap();
    assert_eq!(conversion.file_name, "field_take_markers.txt");
    assert_eq!(conversion.body, "1.500000\t1.500000\tA\n");

    let out_path = dir.path().join(&conversion.file_name);
    std::fs::write(&out_path, &conversion.body).unwrap();
    assert_eq!(std::fs::read_to_string(out_path).unwrap(), conversion.body);
}
