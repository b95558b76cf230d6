//! Descriptor collection from stylesheets.
//!
//! Walks a stylesheet's rules and comments, applies the extraction
//! routines, and produces one [`SpriteImage`] descriptor per matched
//! rule. Rules with remote or data-URI references are skipped here and
//! reported by validation instead.

mod group;

pub use group::{group_by_ratio, DensityGroup};

use crate::parser::{
    background_image_value, extract_color, parse_directive, parse_stylesheet, url_in_value,
    Directive, DirectiveKind, Item,
};
use crate::types::{is_supported, retina_ratio, SpriteImage};

/// Everything extracted from one stylesheet.
#[derive(Debug, Clone, Default)]
pub struct CollectResult {
    /// Descriptors for supported background images, in source order.
    pub images: Vec<SpriteImage>,
    /// Replace directives, surfaced for the downstream rewriter.
    pub replacements: Vec<Directive>,
}

/// Collect sprite image descriptors from stylesheet text.
///
/// `@exclude` directives drop matching descriptors (payload matches the
/// reference or its basename); `@replace` directives are passed through
/// untouched in the result.
pub fn collect_images(source: &str) -> CollectResult {
    let mut images: Vec<SpriteImage> = Vec::new();
    let mut excluded: Vec<String> = Vec::new();
    let mut replacements: Vec<Directive> = Vec::new();

    for item in parse_stylesheet(source) {
        match item {
            Item::Comment(comment) => {
                if let Some(directive) = parse_directive(&comment.text) {
                    match directive.kind {
                        DirectiveKind::Exclude => excluded.push(directive.payload),
                        DirectiveKind::Replace => replacements.push(directive),
                    }
                }
            }
            Item::Rule(rule) => {
                let Some(value) = background_image_value(&rule.block) else {
                    continue;
                };
                let Some(url) = url_in_value(value) else {
                    continue;
                };
                if url.is_empty() || !is_supported(&url) {
                    continue;
                }

                images.push(SpriteImage {
                    ratio: retina_ratio(&url),
                    color: extract_color(value).map(str::to_string),
                    line: rule.span.start.line,
                    selector: rule.selector,
                    url,
                });
            }
        }
    }

    if !excluded.is_empty() {
        images.retain(|image| !excluded.iter().any(|payload| matches_reference(&image.url, payload)));
    }

    CollectResult { images, replacements }
}

/// An exclude payload matches a reference exactly or by basename.
fn matches_reference(url: &str, payload: &str) -> bool {
    url == payload || url.rsplit('/').next() == Some(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collect_basic() {
        let css = "
            .selector-a { background-image: url(circle.png); }
            .selector-b { background: url(square.png) no-repeat 0 0; }
        ";
        let result = collect_images(css);

        assert_eq!(result.images.len(), 2);
        assert_eq!(result.images[0].selector, ".selector-a");
        assert_eq!(result.images[0].url, "circle.png");
        assert_eq!(result.images[0].ratio, 1);
        assert_eq!(result.images[1].url, "square.png");
    }

    #[test]
    fn test_collect_skips_plain_rules() {
        let css = ".a { background: #fff; }\n.b { color: red; }";
        assert!(collect_images(css).images.is_empty());
    }

    #[test]
    fn test_collect_skips_unsupported_references() {
        let css = "
            .remote { background: url(http://example.com/test.png); }
            .inline { background: url(data:image/png;base64,AAAA); }
            .local { background: url(sprite/test.png); }
        ";
        let result = collect_images(css);

        assert_eq!(result.images.len(), 1);
        assert_eq!(result.images[0].url, "sprite/test.png");
    }

    #[test]
    fn test_collect_skips_empty_url() {
        let css = ".a { background: url() no-repeat; }";
        assert!(collect_images(css).images.is_empty());
    }

    #[test]
    fn test_collect_captures_density_and_colour() {
        let css = ".icon { background: #fff url(sprite/icon@2x.png) no-repeat; }";
        let result = collect_images(css);

        assert_eq!(result.images.len(), 1);
        assert_eq!(result.images[0].ratio, 2);
        assert_eq!(result.images[0].color.as_deref(), Some("#fff"));
    }

    #[test]
    fn test_collect_records_line_numbers() {
        let css = ".a { color: red; }\n.b { background: url(b.png); }";
        let result = collect_images(css);

        assert_eq!(result.images[0].line, 2);
    }

    #[test]
    fn test_exclude_directive_by_basename() {
        let css = "
            /* @exclude|circle.png */
            .a { background: url(sprite/circle.png); }
            .b { background: url(sprite/square.png); }
        ";
        let result = collect_images(css);

        assert_eq!(result.images.len(), 1);
        assert_eq!(result.images[0].url, "sprite/square.png");
    }

    #[test]
    fn test_exclude_directive_by_full_reference() {
        let css = "
            /* @exclude|sprite/circle.png */
            .a { background: url(sprite/circle.png); }
        ";
        assert!(collect_images(css).images.is_empty());
    }

    #[test]
    fn test_exclude_applies_regardless_of_order() {
        let css = "
            .a { background: url(circle.png); }
            /* @exclude|circle.png */
        ";
        assert!(collect_images(css).images.is_empty());
    }

    #[test]
    fn test_replace_directives_surfaced() {
        let css = "
            /* @replace|circle.png */
            .a { background: url(circle.png); }
        ";
        let result = collect_images(css);

        assert_eq!(result.images.len(), 1);
        assert_eq!(result.replacements.len(), 1);
        assert_eq!(result.replacements[0].payload, "circle.png");
    }

    #[test]
    fn test_plain_comments_ignored() {
        let css = "/* just a note */\n.a { background: url(a.png); }";
        let result = collect_images(css);

        assert_eq!(result.images.len(), 1);
        assert!(result.replacements.is_empty());
    }

    #[test]
    fn test_collect_inside_media_query() {
        let css = "@media (min-width: 600px) { .a { background: url(wide.png); } }";
        let result = collect_images(css);

        assert_eq!(result.images.len(), 1);
        assert_eq!(result.images[0].url, "wide.png");
    }
}
