//! Stylesheet splitting.
//!
//! Splits raw CSS text into rule and comment items without building an
//! AST. At-rule blocks (`@media`, `@supports`) are recursed into, so
//! their inner rules surface as ordinary rules. Comments inside a
//! declaration block are dropped from the block text.
//!
//! Splitting is total: malformed input (stray braces, unclosed blocks or
//! comments) degrades to fewer or truncated items, never an error.

use super::span::Span;

/// One item found while scanning a stylesheet.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Rule(Rule),
    Comment(Comment),
}

/// A CSS rule: selector plus the text of its declaration block.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub selector: String,
    /// Declaration block text, braces and comments removed.
    pub block: String,
    pub span: Span,
}

/// A CSS comment, delimiters included.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub text: String,
    pub span: Span,
}

/// Split a stylesheet into rules and comments.
pub fn parse_stylesheet(source: &str) -> Vec<Item> {
    let mut items = Vec::new();
    scan_items(source, 0, source.len(), &mut items);
    items
}

/// Scan `source[start..end]` for rules and comments.
///
/// Offsets are always absolute into the full source so spans stay
/// correct through at-rule recursion.
fn scan_items(source: &str, start: usize, end: usize, items: &mut Vec<Item>) {
    let bytes = source.as_bytes();
    let mut pos = start;
    // Selector text accumulated since the last item boundary, with the
    // offset of its first non-whitespace character.
    let mut selector = String::new();
    let mut selector_start: Option<usize> = None;
    let mut run_start = start;

    while pos < end {
        match bytes[pos] {
            b'/' if pos + 1 < end && bytes[pos + 1] == b'*' => {
                note_selector_start(&mut selector_start, source, run_start, pos);
                selector.push_str(&source[run_start..pos]);
                let comment_end = find_comment_end(bytes, pos + 2, end);
                items.push(Item::Comment(Comment {
                    text: source[pos..comment_end].to_string(),
                    span: Span::from_offsets(source, pos, comment_end),
                }));
                pos = comment_end;
                run_start = pos;
            }
            b'\'' | b'"' => {
                // Strings stay part of the selector run (attribute selectors)
                pos = find_string_end(bytes, pos, end);
            }
            b'{' => {
                note_selector_start(&mut selector_start, source, run_start, pos);
                selector.push_str(&source[run_start..pos]);
                let inner_start = pos + 1;
                let (inner_end, block_end, nested) = find_block_end(bytes, inner_start, end);

                if nested {
                    // At-rule wrapper: surface the inner rules directly
                    scan_items(source, inner_start, inner_end, items);
                } else {
                    let span_start = selector_start.unwrap_or(pos);
                    items.push(Item::Rule(Rule {
                        selector: selector.trim().to_string(),
                        block: strip_comments(source, inner_start, inner_end),
                        span: Span::from_offsets(source, span_start, block_end),
                    }));
                }

                selector.clear();
                selector_start = None;
                pos = block_end;
                run_start = pos;
            }
            b'}' | b';' => {
                // Stray close brace or a block-less statement (@import ...;)
                selector.clear();
                selector_start = None;
                pos += 1;
                run_start = pos;
            }
            _ => pos += 1,
        }
    }
}

/// Record the offset of the first non-whitespace selector character.
fn note_selector_start(anchor: &mut Option<usize>, source: &str, from: usize, to: usize) {
    if anchor.is_none() {
        if let Some(i) = source[from..to].find(|c: char| !c.is_whitespace()) {
            *anchor = Some(from + i);
        }
    }
}

/// Offset just past the `*/` closing a comment, or `end` when unclosed.
fn find_comment_end(bytes: &[u8], mut pos: usize, end: usize) -> usize {
    while pos + 1 < end {
        if bytes[pos] == b'*' && bytes[pos + 1] == b'/' {
            return pos + 2;
        }
        pos += 1;
    }
    end
}

/// Offset just past the closing quote, or `end` when unterminated.
fn find_string_end(bytes: &[u8], start: usize, end: usize) -> usize {
    let quote = bytes[start];
    let mut pos = start + 1;
    while pos < end {
        match bytes[pos] {
            b'\\' => pos += 2,
            b if b == quote => return pos + 1,
            _ => pos += 1,
        }
    }
    end
}

/// Find the close brace matching an open brace at `inner_start - 1`.
///
/// Returns (inner end, offset past the close brace, whether any nested
/// block was seen). An unclosed block runs to the end of input.
fn find_block_end(bytes: &[u8], inner_start: usize, end: usize) -> (usize, usize, bool) {
    let mut pos = inner_start;
    let mut depth = 1usize;
    let mut nested = false;

    while pos < end {
        match bytes[pos] {
            b'/' if pos + 1 < end && bytes[pos + 1] == b'*' => {
                pos = find_comment_end(bytes, pos + 2, end);
            }
            b'\'' | b'"' => pos = find_string_end(bytes, pos, end),
            b'{' => {
                depth += 1;
                nested = true;
                pos += 1;
            }
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return (pos, pos + 1, nested);
                }
                pos += 1;
            }
            _ => pos += 1,
        }
    }

    (end, end, nested)
}

/// Copy `source[start..end]` with comments removed.
fn strip_comments(source: &str, start: usize, end: usize) -> String {
    let bytes = source.as_bytes();
    let mut out = String::with_capacity(end - start);
    let mut pos = start;
    let mut run_start = start;

    while pos < end {
        match bytes[pos] {
            b'/' if pos + 1 < end && bytes[pos + 1] == b'*' => {
                out.push_str(&source[run_start..pos]);
                pos = find_comment_end(bytes, pos + 2, end);
                run_start = pos;
            }
            b'\'' | b'"' => pos = find_string_end(bytes, pos, end),
            _ => pos += 1,
        }
    }

    out.push_str(&source[run_start..end.min(source.len())]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(source: &str) -> Vec<Rule> {
        parse_stylesheet(source)
            .into_iter()
            .filter_map(|item| match item {
                Item::Rule(rule) => Some(rule),
                _ => None,
            })
            .collect()
    }

    fn comments(source: &str) -> Vec<Comment> {
        parse_stylesheet(source)
            .into_iter()
            .filter_map(|item| match item {
                Item::Comment(comment) => Some(comment),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_single_rule() {
        let found = rules(".selector-a { background: url(circle.png); }");

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].selector, ".selector-a");
        assert_eq!(found[0].block.trim(), "background: url(circle.png);");
    }

    #[test]
    fn test_multiple_rules() {
        let found = rules(".a { color: red; }\n.b { color: blue; }");

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].selector, ".a");
        assert_eq!(found[1].selector, ".b");
    }

    #[test]
    fn test_multiline_rule() {
        let source = "
            .selector-b {
                color: #fff;
                background: url(square.png) no-repeat 0 0
            }
        ";
        let found = rules(source);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].selector, ".selector-b");
        assert!(found[0].block.contains("url(square.png)"));
    }

    #[test]
    fn test_rule_span_tracks_lines() {
        let source = ".a { color: red; }\n.b {\n  color: blue;\n}";
        let found = rules(source);

        assert_eq!(found[0].span.start.line, 1);
        assert_eq!(found[1].span.start.line, 2);
        assert_eq!(found[1].span.end.line, 4);
    }

    #[test]
    fn test_top_level_comment() {
        let found = comments("/* @replace|circle.png */\n.a { color: red; }");

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "/* @replace|circle.png */");
        assert_eq!(found[0].span.start.line, 1);
    }

    #[test]
    fn test_comment_stripped_from_block() {
        let found = rules(".a { /* note */ color: red; }");

        assert_eq!(found.len(), 1);
        assert!(!found[0].block.contains("note"));
        assert!(found[0].block.contains("color: red;"));
    }

    #[test]
    fn test_media_query_rules_surface() {
        let source = "@media (min-width: 600px) { .a { background: url(a.png); } .b { color: red; } }";
        let found = rules(source);

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].selector, ".a");
        assert_eq!(found[1].selector, ".b");
    }

    #[test]
    fn test_import_statement_does_not_leak_into_selector() {
        let found = rules("@import \"base.css\";\n.a { color: red; }");

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].selector, ".a");
    }

    #[test]
    fn test_unclosed_block_runs_to_end() {
        let found = rules(".a { color: red;");

        assert_eq!(found.len(), 1);
        assert!(found[0].block.contains("color: red;"));
    }

    #[test]
    fn test_brace_inside_string_ignored() {
        let found = rules(".a { content: \"{\"; color: red; }");

        assert_eq!(found.len(), 1);
        assert!(found[0].block.contains("color: red;"));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_stylesheet("").is_empty());
    }

    #[test]
    fn test_stray_close_brace() {
        let found = rules("} .a { color: red; }");

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].selector, ".a");
    }
}
