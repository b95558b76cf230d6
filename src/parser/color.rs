//! Colour token extraction from declaration values.

/// Extract the first colour token from a declaration value.
///
/// Recognizes `#` followed by exactly 3 or exactly 6 hex digits, and
/// `rgb(`/`rgba(` captured verbatim through the closing paren. The
/// matched substring is returned untouched (case and whitespace
/// preserved); values with no such token yield `None`.
pub fn extract_color(value: &str) -> Option<&str> {
    let bytes = value.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'#' => {
                let digits = value[pos + 1..]
                    .bytes()
                    .take_while(|b| b.is_ascii_hexdigit())
                    .count();
                if digits == 3 || digits == 6 {
                    return Some(&value[pos..pos + 1 + digits]);
                }
                // A run of any other length is not a colour literal
                pos += 1 + digits;
            }
            b'r' if !preceded_by_ident(bytes, pos) => {
                if let Some(token) = match_rgb(value, pos) {
                    return Some(token);
                }
                pos += 1;
            }
            _ => pos += 1,
        }
    }

    None
}

/// Match `rgb(...)`/`rgba(...)` starting at `pos`, argument list verbatim.
fn match_rgb(value: &str, pos: usize) -> Option<&str> {
    let rest = &value[pos..];
    let open = if rest.starts_with("rgba(") {
        pos + "rgba(".len()
    } else if rest.starts_with("rgb(") {
        pos + "rgb(".len()
    } else {
        return None;
    };

    let close = value[open..].find(')')?;
    Some(&value[pos..open + close + 1])
}

fn preceded_by_ident(bytes: &[u8], pos: usize) -> bool {
    pos > 0 && (bytes[pos - 1].is_ascii_alphanumeric() || bytes[pos - 1] == b'-' || bytes[pos - 1] == b'_')
}
