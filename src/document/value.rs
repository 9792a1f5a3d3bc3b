/// Generic metadata-document tree produced by parsing the extraction tool's
/// XML output. No schema is assumed; the marker locator probes this value.
///
/// Maps keep insertion order, so traversal order matches document order.
#[derive(Debug, Clone, PartialEq)]
pub enum DocValue {
    Text(String),
    Number(f64),
    List(Vec<DocValue>),
    Map(Vec<(String, DocValue)>),
}

impl DocValue {
    /// Look up a child entry by element name (ASCII-case-insensitive, since
    /// producers disagree on casing).
    pub fn get(&self, key: &str) -> Option<&DocValue> {
        match self {
            DocValue::Map(pairs) => pairs
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v),
            _ => None,
        }
    }

    /// Look up an attribute value; attributes are stored under `@name` keys.
    pub fn attr(&self, name: &str) -> Option<&DocValue> {
        match self {
            DocValue::Map(pairs) => pairs
                .iter()
                .find(|(k, _)| {
                    k.strip_prefix('@')
                        .is_some_and(|rest| rest.eq_ignore_ascii_case(name))
                })
                .map(|(_, v)| v),
            _ => None,
        }
    }

    /// The element's own text content, if any (`Text` nodes directly, maps
    /// through their `#text` entry).
    pub fn text(&self) -> Option<&str> {
        match self {
            DocValue::Text(s) => Some(s),
            DocValue::Map(_) => self.get("#text").and_then(|v| v.text()),
            _ => None,
        }
    }

    /// Trimmed display text for scalar-ish values. Lists have none.
    pub fn scalar(&self) -> Option<String> {
        match self {
            DocValue::Text(_) | DocValue::Map(_) => {
                self.text().map(|s| s.trim().to_string())
            }
            DocValue::Number(n) => Some(n.to_string()),
            DocValue::List(_) => None,
        }
    }

    /// View a value as a sequence of entries: lists yield their items, any
    /// other value yields itself. Producers emit a lone child where others
    /// emit a one-element collection, so callers iterate through this.
    pub fn entries(&self) -> Vec<&DocValue> {
        match self {
            DocValue::List(items) => items.iter().collect(),
            _ => vec![self],
        }
    }

    /// Depth-first search for the first value stored under `key`, down to
    /// `max_depth` levels.
    pub fn find(&self, key: &str, max_depth: usize) -> Option<&DocValue> {
        match self {
            DocValue::Map(pairs) => {
                if let Some(hit) = self.get(key) {
                    return Some(hit);
                }
                if max_depth == 0 {
                    return None;
                }
                pairs.iter().find_map(|(_, v)| v.find(key, max_depth - 1))
            }
            DocValue::List(items) => {
                if max_depth == 0 {
                    return None;
                }
                items.iter().find_map(|v| v.find(key, max_depth - 1))
            }
            _ => None,
        }
    }

    /// Collect every value stored under `key` anywhere below this node,
    /// down to `max_depth` levels, in document order.
    pub fn find_all<'a>(&'a self, key: &str, max_depth: usize, found: &mut Vec<&'a DocValue>) {
        match self {
            DocValue::Map(pairs) => {
                for (k, v) in pairs {
                    if k.eq_ignore_ascii_case(key) {
                        found.push(v);
                    }
                }
                if max_depth == 0 {
                    return;
                }
                for (_, v) in pairs {
                    v.find_all(key, max_depth - 1, found);
                }
            }
            DocValue::List(items) => {
                if max_depth == 0 {
                    return;
                }
                for item in items {
                    item.find_all(key, max_depth - 1, found);
                }
            }
            _ => {}
        }
    }
}
