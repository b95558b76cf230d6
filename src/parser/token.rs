//! Directive comment parsing.
//!
//! The pipeline is steered by specially formatted comments such as
//! `/* @replace|circle.png */`: an optional `@` marker, a directive
//! keyword, a `|` separator, and a payload (usually an image filename).
//! Ordinary comments are not directives.

/// A directive found in a stylesheet comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub kind: DirectiveKind,
    /// Payload after the `|` separator, usually an image filename.
    pub payload: String,
}

/// Recognized directive keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    /// Substitute the named image's spot in the output.
    Replace,
    /// Keep the named image out of the spritesheet.
    Exclude,
}

impl DirectiveKind {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "replace" => Some(DirectiveKind::Replace),
            "exclude" => Some(DirectiveKind::Exclude),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DirectiveKind::Replace => "replace",
            DirectiveKind::Exclude => "exclude",
        }
    }
}

/// Parse a comment (delimiters included) into a directive.
pub fn parse_directive(comment: &str) -> Option<Directive> {
    let (keyword, payload) = directive_parts(comment)?;
    let kind = DirectiveKind::from_keyword(keyword)?;
    Some(Directive {
        kind,
        payload: payload.to_string(),
    })
}

/// Whether a comment is a directive marker rather than plain text.
pub fn is_token(comment: &str) -> bool {
    parse_directive(comment).is_some()
}

/// Keyword of a directive-shaped comment that is not recognized.
///
/// Lets validation flag typos (`/* @replaec|a.png */`) without treating
/// every plain comment as suspect.
pub fn unknown_directive_keyword(comment: &str) -> Option<&str> {
    let (keyword, _) = directive_parts(comment)?;
    if DirectiveKind::from_keyword(keyword).is_none() {
        Some(keyword)
    } else {
        None
    }
}

/// Split a comment body into keyword and payload, or `None` when the
/// body is not directive-shaped.
fn directive_parts(comment: &str) -> Option<(&str, &str)> {
    let body = comment
        .trim()
        .strip_prefix("/*")?
        .strip_suffix("*/")?
        .trim();
    let body = body.strip_prefix('@').unwrap_or(body);

    let (keyword, payload) = body.split_once('|')?;
    let keyword = keyword.trim();
    let payload = payload.trim();

    let word = !keyword.is_empty()
        && keyword.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    if !word || payload.is_empty() {
        return None;
    }

    Some((keyword, payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_is_a_token() {
        assert!(is_token("/* @replace|circle.png */"));
    }

    #[test]
    fn test_plain_comment_is_not_a_token() {
        assert!(!is_token("/* circle.png */"));
    }

    #[test]
    fn test_parse_replace() {
        let directive = parse_directive("/* @replace|circle.png */").unwrap();
        assert_eq!(directive.kind, DirectiveKind::Replace);
        assert_eq!(directive.payload, "circle.png");
    }

    #[test]
    fn test_parse_exclude() {
        let directive = parse_directive("/* @exclude|logo@2x.png */").unwrap();
        assert_eq!(directive.kind, DirectiveKind::Exclude);
        assert_eq!(directive.payload, "logo@2x.png");
    }

    #[test]
    fn test_at_marker_is_optional() {
        let directive = parse_directive("/* replace|circle.png */").unwrap();
        assert_eq!(directive.kind, DirectiveKind::Replace);
    }

    #[test]
    fn test_payload_whitespace_trimmed() {
        let directive = parse_directive("/* @replace | circle.png */").unwrap();
        assert_eq!(directive.payload, "circle.png");
    }

    #[test]
    fn test_empty_payload_rejected() {
        assert!(!is_token("/* @replace| */"));
    }

    #[test]
    fn test_unknown_keyword_rejected() {
        assert!(!is_token("/* @skip|circle.png */"));
    }

    #[test]
    fn test_unknown_keyword_reported() {
        assert_eq!(
            unknown_directive_keyword("/* @replaec|a.png */"),
            Some("replaec")
        );
        assert_eq!(unknown_directive_keyword("/* @replace|a.png */"), None);
        assert_eq!(unknown_directive_keyword("/* free text */"), None);
    }

    #[test]
    fn test_non_word_keyword_is_plain_text() {
        // A `|` in prose should not turn a comment into a near-directive
        assert_eq!(unknown_directive_keyword("/* a thing | another */"), None);
    }

    #[test]
    fn test_missing_delimiters() {
        assert!(!is_token("@replace|circle.png"));
    }

    #[test]
    fn test_directive_kind_names() {
        assert_eq!(DirectiveKind::Replace.name(), "replace");
        assert_eq!(DirectiveKind::Exclude.name(), "exclude");
    }
}
