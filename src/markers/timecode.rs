use crate::document::DocValue;

/// Convert a textual time value to fractional seconds.
///
/// Plain decimals parse directly; `h:m:s[.f]` and `m:s[.f]` clock notations
/// are expanded. Anything unparsable degrades to `0.0` instead of failing
/// the marker it belongs to.
pub fn parse_seconds(text: &str) -> f64 {
    let trimmed = text.trim();
    if let Ok(value) = trimmed.parse::<f64>() {
        return value;
    }
    if trimmed.contains(':') {
        let mut fields = Vec::new();
        for part in trimmed.split(':') {
            match part.trim().parse::<f64>() {
                Ok(value) => fields.push(value),
                Err(_) => return 0.0,
            }
        }
        return match fields.as_slice() {
            [hours, minutes, seconds] => hours * 3600.0 + minutes * 60.0 + seconds,
            [minutes, seconds] => minutes * 60.0 + seconds,
            _ => 0.0,
        };
    }
    0.0
}

/// Seconds carried by a document value: numbers pass through unchanged,
/// text goes through [`parse_seconds`].
pub(crate) fn seconds_from_value(value: &DocValue) -> f64 {
    match value {
        DocValue::Number(n) => *n,
        DocValue::Text(_) | DocValue::Map(_) => {
            value.text().map(parse_seconds).unwrap_or(0.0)
        }
        DocValue::List(_) => 0.0,
    }
}
