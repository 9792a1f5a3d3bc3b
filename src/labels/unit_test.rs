use crate::labels::{format_labels, write_labels};
use crate::markers::Marker;
use regex::Regex;

fn marker(time: f64, label: &str) -> Marker {
    Marker {
        time,
        label: label.to_string(),
    }
}

#[test]
fn test_empty_list_renders_as_a_single_newline() {
    assert_eq!(format_labels(&[]), "\n");
}

#[test]
fn test_single_marker_line() {
    assert_eq!(
        format_labels(&[marker(1.5, "A")]),
        "1.500000\t1.500000\tA\n"
    );
}

#[test]
fn test_point_markers_repeat_the_time_in_both_columns() {
    let output = format_labels(&[marker(0.0, "start"), marker(62.375, "verse 2")]);
    assert_eq!(
        output,
        "0.000000\t0.000000\tstart\n62.375000\t62.375000\tverse 2\n"
    );

    let line = Regex::new(r"^(\d+\.\d{6})\t(\d+\.\d{6})\t.+$").unwrap();
    for text in output.lines() {
        let captures = line.captures(text).expect("line should match the format");
        assert_eq!(&captures[1], &captures[2]);
    }
}

#[test]
fn test_labels_are_written_verbatim() {
    // Embedded separators are not escaped; importers see extra columns.
    assert_eq!(
        format_labels(&[marker(1.0, "a\tb")]),
        "1.000000\t1.000000\ta\tb\n"
    );
}

#[test]
fn test_write_labels_streams_the_same_bytes() {
    let markers = vec![marker(0.5, "one"), marker(1.0, "two")];
    let mut sink = Vec::new();
    write_labels(&mut sink, &markers).unwrap();
    assert_eq!(String::from_utf8(sink).unwrap(), format_labels(&markers));
}
