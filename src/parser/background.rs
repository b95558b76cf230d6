//! Background declaration matching.
//!
//! Locates `background`/`background-image` declarations in rule text and
//! pulls out the `url(...)` payload. Matching is purely textual and
//! total: text with no matching declaration yields `None`, never an
//! error.

/// Whether the rule contains a background declaration with a `url(...)`.
pub fn has_image_in_rule(rule: &str) -> bool {
    background_image_value(rule).is_some()
}

/// Value of the first `background`/`background-image` declaration whose
/// value contains a `url(` token.
///
/// Robust to multi-line blocks, surrounding declarations, and trailing
/// background sub-values (position, repeat). Longhands such as
/// `background-color` or `background-repeat` are not matched.
pub fn background_image_value(rule: &str) -> Option<&str> {
    let mut search = 0;
    while let Some(value) = next_background_value(rule, &mut search) {
        if value.contains("url(") {
            return Some(value);
        }
    }
    None
}

/// Image reference from the first background declaration, with a
/// wrapping quote pair stripped and any query string removed.
pub fn image_url(rule: &str) -> Option<String> {
    background_image_value(rule).and_then(url_in_value)
}

/// Extract and normalize the `url(...)` payload from a declaration value.
pub fn url_in_value(value: &str) -> Option<String> {
    let open = value.find("url(")? + "url(".len();
    let close = value[open..].find(')').map(|i| open + i).unwrap_or(value.len());
    let mut payload = value[open..close].trim();

    if payload.len() >= 2 {
        let bytes = payload.as_bytes();
        let quoted = (bytes[0] == b'\'' && bytes[payload.len() - 1] == b'\'')
            || (bytes[0] == b'"' && bytes[payload.len() - 1] == b'"');
        if quoted {
            payload = &payload[1..payload.len() - 1];
        }
    }

    let payload = payload.split('?').next().unwrap_or(payload);
    Some(payload.to_string())
}

/// Value of the next `background`/`background-image` declaration at or
/// after `*search`, advancing the cursor.
fn next_background_value<'a>(rule: &'a str, search: &mut usize) -> Option<&'a str> {
    let bytes = rule.as_bytes();

    while let Some(found) = rule[*search..].find("background") {
        let prop_start = *search + found;
        *search = prop_start + 1;

        // Must be a whole property name, not part of another identifier
        if prop_start > 0 && is_ident_byte(bytes[prop_start - 1]) {
            continue;
        }
        let mut after = prop_start + "background".len();
        if rule[after..].starts_with("-image") {
            after += "-image".len();
        }
        if after < rule.len() && is_ident_byte(bytes[after]) {
            continue;
        }

        // Property name must be followed by a colon
        let mut pos = after;
        while pos < rule.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos >= rule.len() || bytes[pos] != b':' {
            continue;
        }
        pos += 1;

        let end = rule[pos..]
            .find(|c: char| c == ';' || c == '}')
            .map(|i| pos + i)
            .unwrap_or(rule.len());
        *search = end;
        return Some(rule[pos..end].trim());
    }

    None
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}
