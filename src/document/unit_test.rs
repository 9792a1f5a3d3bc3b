use crate::document::{parse_document, DocValue};

#[test]
fn test_parse_nested_elements_and_attributes() {
    let doc = parse_document(
        r#"<File name="take01.wav"><Markers><Marker><Position>1.5</Position><Name>Intro</Name></Marker><Marker><Position>3</Position></Marker></Markers></File>"#,
    )
    .unwrap();

    let file = doc.get("File").unwrap();
    assert_eq!(file.attr("name").and_then(|v| v.text()), Some("take01.wav"));

    let markers = file.get("Markers").unwrap().get("Marker").unwrap();
    match markers {
        DocValue::List(items) => assert_eq!(items.len(), 2),
        other => panic!("repeated elements should collapse into a list, got {:?}", other),
    }
}

#[test]
fn test_single_child_stays_singular() {
    let doc = parse_document("<Markers><Marker><Position>2</Position></Marker></Markers>").unwrap();
    let marker = doc.get("Markers").unwrap().get("Marker").unwrap();
    assert!(matches!(marker, DocValue::Map(_)));
    assert_eq!(marker.entries().len(), 1);
}

#[test]
fn test_text_alongside_attributes_lands_under_text_key() {
    let doc = parse_document(r#"<Cue id="4">hit point</Cue>"#).unwrap();
    let cue = doc.get("Cue").unwrap();
    assert_eq!(cue.attr("id").and_then(|v| v.text()), Some("4"));
    assert_eq!(cue.text(), Some("hit point"));
    assert_eq!(cue.scalar().as_deref(), Some("hit point"));
}

#[test]
fn test_lookups_are_case_insensitive() {
    let doc = parse_document(r#"<FILE NAME="a.wav"><MARKERS/></FILE>"#).unwrap();
    let file = doc.get("file").unwrap();
    assert!(file.get("markers").is_some());
    assert_eq!(file.attr("name").and_then(|v| v.text()), Some("a.wav"));
}

#[test]
fn test_find_reaches_nested_keys() {
    let doc =
        parse_document("<a><b><c><Markers><Marker/></Markers></c></b></a>").unwrap();
    assert!(doc.find("Markers", 8).is_some());
    assert!(doc.find("Markers", 1).is_none());
    assert!(doc.find("absent", 8).is_none());
}

#[test]
fn test_entities_are_unescaped() {
    let doc = parse_document("<Marker><Name>Q &amp; A</Name></Marker>").unwrap();
    let name = doc.get("Marker").unwrap().get("Name").unwrap();
    assert_eq!(name.text(), Some("Q & A"));
}

#[test]
fn test_malformed_documents_are_errors() {
    assert!(parse_document("<a><b></a>").is_err());
    assert!(parse_document("<a>").is_err());
    assert!(parse_document("").is_err());
    assert!(parse_document("plain text, not a document").is_err());
    assert!(parse_document("<a/><b/>").is_err());
}
