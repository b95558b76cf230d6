//! Validation checks over stylesheet text.
//!
//! Everything here reports through [`Diagnostic`] values; extraction
//! itself never fails, so these checks exist to tell authors why an
//! image will not end up in the spritesheet.

use std::collections::HashMap;

use crate::parser::span::Location;
use crate::parser::{
    background_image_value, extract_color, parse_stylesheet, unknown_directive_keyword,
    url_in_value, Item,
};
use crate::types::{Colour, RefKind};

use super::{Diagnostic, ValidationResult};

/// Run all checks against one stylesheet's text.
pub fn validate_stylesheet(source: &str) -> ValidationResult {
    let mut result = ValidationResult::new();
    // First colour seen per reference, to catch conflicting fallbacks
    let mut colors: HashMap<String, String> = HashMap::new();

    for item in parse_stylesheet(source) {
        match item {
            Item::Comment(comment) => {
                if let Some(keyword) = unknown_directive_keyword(&comment.text) {
                    result.push(
                        Diagnostic::error(
                            "sprig::validate::unknown-directive",
                            format!("Unknown directive '{}'", keyword),
                        )
                        .with_help("Supported directives are 'replace' and 'exclude'")
                        .at(comment.span.start),
                    );
                }
            }
            Item::Rule(rule) => {
                let Some(value) = background_image_value(&rule.block) else {
                    continue;
                };
                check_declaration(&rule.selector, value, rule.span.start, &mut colors, &mut result);
            }
        }
    }

    result
}

fn check_declaration(
    selector: &str,
    value: &str,
    location: Location,
    colors: &mut HashMap<String, String>,
    result: &mut ValidationResult,
) {
    let Some(url) = url_in_value(value) else {
        return;
    };

    if url.is_empty() {
        result.push(
            Diagnostic::warning(
                "sprig::validate::empty-url",
                format!("{} has a background url() with no reference", selector),
            )
            .at(location),
        );
        return;
    }

    match RefKind::classify(&url) {
        RefKind::Remote => {
            result.push(
                Diagnostic::warning(
                    "sprig::validate::remote-image",
                    format!("{} references remote image {}", selector, url),
                )
                .with_help("Remote images are skipped; host the file locally to sprite it")
                .at(location),
            );
            return;
        }
        RefKind::Data => {
            result.push(
                Diagnostic::warning(
                    "sprig::validate::data-uri",
                    format!("{} references an inline data URI", selector),
                )
                .with_help("Data URIs are already inlined and are skipped")
                .at(location),
            );
            return;
        }
        RefKind::Local => {}
    }

    if let Some(color) = extract_color(value) {
        if Colour::from_css(color).is_err() {
            result.push(
                Diagnostic::warning(
                    "sprig::validate::invalid-colour",
                    format!("{} has unparseable colour literal '{}'", selector, color),
                )
                .at(location),
            );
        }

        match colors.get(&url).cloned() {
            Some(previous) if previous != color => {
                result.push(
                    Diagnostic::warning(
                        "sprig::validate::conflicting-colour",
                        format!(
                            "{} pairs {} with '{}' but it was first seen with '{}'",
                            selector, url, color, previous
                        ),
                    )
                    .with_help("One reference gets one spot in the sheet; align the fallback colours")
                    .at(location),
                );
            }
            Some(_) => {}
            None => {
                colors.insert(url, color.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Severity;

    #[test]
    fn test_clean_stylesheet() {
        let css = "
            .a { background: #fff url(sprite/a.png) no-repeat; }
            .b { background-image: url(sprite/b@2x.png); }
        ";
        assert!(validate_stylesheet(css).is_ok());
    }

    #[test]
    fn test_remote_image_warns() {
        let css = ".a { background: url(https://cdn.example.com/a.png); }";
        let result = validate_stylesheet(css);

        assert_eq!(result.warning_count(), 1);
        let diagnostic = result.iter().next().unwrap();
        assert_eq!(diagnostic.code, "sprig::validate::remote-image");
        assert_eq!(diagnostic.severity, Severity::Warning);
    }

    #[test]
    fn test_data_uri_warns() {
        let css = ".a { background: url(data:image/png;base64,AAAA); }";
        let result = validate_stylesheet(css);

        assert_eq!(result.warning_count(), 1);
        assert_eq!(
            result.iter().next().unwrap().code,
            "sprig::validate::data-uri"
        );
    }

    #[test]
    fn test_empty_url_warns() {
        let css = ".a { background: url(); }";
        let result = validate_stylesheet(css);

        assert_eq!(
            result.iter().next().unwrap().code,
            "sprig::validate::empty-url"
        );
    }

    #[test]
    fn test_unknown_directive_is_an_error() {
        let css = "/* @replaec|a.png */\n.a { background: url(a.png); }";
        let result = validate_stylesheet(css);

        assert!(result.has_errors());
        let diagnostic = result.iter().next().unwrap();
        assert_eq!(diagnostic.code, "sprig::validate::unknown-directive");
        assert_eq!(diagnostic.location.unwrap().line, 1);
    }

    #[test]
    fn test_known_directive_passes() {
        let css = "/* @exclude|a.png */\n.a { background: url(a.png); }";
        assert!(validate_stylesheet(css).is_ok());
    }

    #[test]
    fn test_invalid_colour_warns() {
        let css = ".a { background: #ab url(a.png); }";
        // #ab is a 2-digit run: not extracted, so nothing to lint
        assert!(validate_stylesheet(css).is_ok());

        let css = ".a { background: rgb(300, 0, 0) url(a.png); }";
        let result = validate_stylesheet(css);
        assert_eq!(
            result.iter().next().unwrap().code,
            "sprig::validate::invalid-colour"
        );
    }

    #[test]
    fn test_conflicting_colours_warn() {
        let css = "
            .a { background: #fff url(shared.png); }
            .b { background: #000 url(shared.png); }
        ";
        let result = validate_stylesheet(css);

        assert_eq!(result.warning_count(), 1);
        assert_eq!(
            result.iter().next().unwrap().code,
            "sprig::validate::conflicting-colour"
        );
    }

    #[test]
    fn test_matching_colours_do_not_warn() {
        let css = "
            .a { background: #fff url(shared.png); }
            .b { background: #fff url(shared.png); }
        ";
        assert!(validate_stylesheet(css).is_ok());
    }

    #[test]
    fn test_locations_reported() {
        let css = ".ok { color: red; }\n.bad { background: url(http://x/y.png); }";
        let result = validate_stylesheet(css);

        assert_eq!(result.iter().next().unwrap().location.unwrap().line, 2);
    }
}
