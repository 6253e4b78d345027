//! Element property writer
//!
//! Serializes a property map into HTML attribute syntax:
//!
//! ```text
//! class="a b" id="y" defer
//! ```

use crate::nodes::{Properties, PropertyValue};

/// Whether writing `properties` produces any attribute text
///
/// `Bool(false)` entries are dropped, so a map holding only those writes nothing.
pub fn has_attributes(properties: &Properties) -> bool {
    properties
        .values()
        .any(|v| !matches!(v, PropertyValue::Bool(false)))
}

/// Append `properties` as space-separated attributes in insertion order
///
/// Values are wrapped in double quotes. With `escape` unset the value is
/// written as-is, so an embedded `"` ends the attribute early.
pub fn write_properties(properties: &Properties, escape: bool, out: &mut String) {
    let mut first = true;
    for (key, value) in properties {
        if matches!(value, PropertyValue::Bool(false)) {
            continue;
        }
        if !first {
            out.push(' ');
        }
        first = false;
        out.push_str(key);
        match value {
            PropertyValue::Bool(_) => {}
            PropertyValue::String(s) => write_value(s, escape, out),
            PropertyValue::List(items) => write_value(&items.join(" "), escape, out),
        }
    }
}

fn write_value(value: &str, escape: bool, out: &mut String) {
    out.push_str("=\"");
    if escape {
        out.push_str(&html_escape::encode_double_quoted_attribute(value));
    } else {
        out.push_str(value);
    }
    out.push('"');
}
