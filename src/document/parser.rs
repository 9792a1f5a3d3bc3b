use super::value::DocValue;
use crate::errors::DocumentError;
use quick_xml::events::Event;
use quick_xml::Reader;

/// Parse the metadata tool's XML output into a generic [`DocValue`] tree.
///
/// Convention: attributes land under `@name` keys, repeated sibling elements
/// collapse into a `List`, an element with children or attributes keeps its
/// own text under `#text`, and a childless element becomes plain `Text`.
/// The returned root is a one-entry map keyed by the root element's name.
pub fn parse_document(xml: &str) -> Result<DocValue, DocumentError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    // One frame per open element: (name, child pairs, accumulated text)
    let mut stack: Vec<(String, Vec<(String, DocValue)>, String)> = Vec::new();
    let mut root: Option<(String, DocValue)> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                let pairs = read_attributes(e, &name)?;
                stack.push((name, pairs, String::new()));
            }
            Ok(Event::Empty(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                let pairs = read_attributes(e, &name)?;
                let value = finish_node(pairs, String::new());
                attach(&mut stack, &mut root, name, value)?;
            }
            Ok(Event::End(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                let Some((open_name, pairs, text)) = stack.pop() else {
                    return Err(DocumentError::new(format!(
                        "closing tag </{}> without opening tag",
                        name
                    )));
                };
                if open_name != name {
                    return Err(DocumentError::new(format!(
                        "mismatched closing tag </{}> for <{}>",
                        name, open_name
                    )));
                }
                let value = finish_node(pairs, text);
                attach(&mut stack, &mut root, open_name, value)?;
            }
            Ok(Event::Text(ref e)) => {
                if let (Ok(text), Some(top)) = (e.unescape(), stack.last_mut()) {
                    top.2.push_str(&text);
                }
            }
            Ok(Event::CData(ref e)) => {
                if let Some(top) = stack.last_mut() {
                    top.2.push_str(&String::from_utf8_lossy(e));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {} // declarations, comments, processing instructions
            Err(err) => {
                return Err(DocumentError::new(format!("malformed XML: {}", err)));
            }
        }
        buf.clear();
    }

    if let Some((open_name, _, _)) = stack.last() {
        return Err(DocumentError::new(format!(
            "unterminated element <{}>",
            open_name
        )));
    }
    let (name, value) =
        root.ok_or_else(|| DocumentError::new("document has no root element"))?;
    Ok(DocValue::Map(vec![(name, value)]))
}

fn read_attributes(
    element: &quick_xml::events::BytesStart<'_>,
    element_name: &str,
) -> Result<Vec<(String, DocValue)>, DocumentError> {
    let mut pairs = Vec::new();
    for attribute in element.attributes() {
        let attribute = attribute.map_err(|err| {
            DocumentError::new(format!("bad attribute in <{}>: {}", element_name, err))
        })?;
        let key = format!("@{}", String::from_utf8_lossy(attribute.key.as_ref()));
        let value = attribute.unescape_value().map_err(|err| {
            DocumentError::new(format!("bad attribute in <{}>: {}", element_name, err))
        })?;
        pairs.push((key, DocValue::Text(value.into_owned())));
    }
    Ok(pairs)
}

fn finish_node(mut pairs: Vec<(String, DocValue)>, text: String) -> DocValue {
    if pairs.is_empty() {
        return DocValue::Text(text);
    }
    if !text.trim().is_empty() {
        pairs.push(("#text".to_string(), DocValue::Text(text)));
    }
    DocValue::Map(pairs)
}

fn attach(
    stack: &mut [(String, Vec<(String, DocValue)>, String)],
    root: &mut Option<(String, DocValue)>,
    name: String,
    value: DocValue,
) -> Result<(), DocumentError> {
    match stack.last_mut() {
        Some((_, pairs, _)) => {
            insert_child(pairs, name, value);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some((name, value));
            Ok(())
        }
        None => Err(DocumentError::new("document has multiple root elements")),
    }
}

/// Repeated sibling elements of the same name collapse into a `List`.
fn insert_child(pairs: &mut Vec<(String, DocValue)>, name: String, value: DocValue) {
    if let Some((_, existing)) = pairs.iter_mut().find(|(k, _)| *k == name) {
        match existing {
            DocValue::List(items) => items.push(value),
            _ => {
                let first = std::mem::replace(existing, DocValue::List(Vec::new()));
                if let DocValue::List(items) = existing {
                    items.push(first);
                    items.push(value);
                }
            }
        }
    } else {
        pairs.push((name, value));
    }
}
