use geojson::JsonValue;

/// Year token of a datetime string: everything before the first `-`.
///
/// A string without a hyphen is returned whole, and a leading hyphen gives
/// an empty year.
pub fn year_prefix(datetime: &str) -> &str {
    datetime
        .split_once('-')
        .map_or(datetime, |(year, _)| year)
}

/// Render a property value the way it is printed in a label.
///
/// Follows JavaScript string conversion: strings come out bare, numbers use
/// `Number#toString` form, array elements are joined with `,` (nulls become
/// empty), and objects print as `[object Object]`.
pub fn render_value(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => "null".to_string(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::String(s) => s.clone(),
        JsonValue::Number(n) => n.as_f64().map_or_else(|| n.to_string(), number_text),
        JsonValue::Array(items) => items
            .iter()
            .map(|item| match item {
                JsonValue::Null => String::new(),
                other => render_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        JsonValue::Object(_) => "[object Object]".to_string(),
    }
}

/// Shortest round-trip text of a number, switching to exponent form below
/// 1e-6 and from 1e21 up. Negative zero prints as `0`.
fn number_text(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value < 0.0 {
        return format!("-{}", number_text(-value));
    }

    let sci = format!("{value:e}");
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    // decimal point sits after `point` digits
    let point = exponent.parse::<i32>().unwrap_or(0) + 1;
    let len = digits.len() as i32;

    if len <= point && point <= 21 {
        format!("{digits}{}", "0".repeat((point - len) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{int}.{frac}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat(-point as usize))
    } else {
        let sign = if point > 0 { '+' } else { '-' };
        let (lead, rest) = digits.split_at(1);
        let dot = if rest.is_empty() { "" } else { "." };
        format!("{lead}{dot}{rest}e{sign}{}", (point - 1).abs())
    }
}

/// Name of a JSON value's type, for error messages
pub fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
