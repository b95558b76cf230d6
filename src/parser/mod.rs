//! CSS scanning and extraction.
//!
//! Textual matching over stylesheet text: no AST is built and nothing is
//! mutated. Every routine here is total over its string input — a value
//! that is not found comes back as `None`/`false`, never as an error.
//!
//! # Usage
//!
//! ```ignore
//! use sprig::parser::{parse_stylesheet, has_image_in_rule, image_url};
//!
//! for item in parse_stylesheet(&css) {
//!     if let sprig::parser::Item::Rule(rule) = item {
//!         if has_image_in_rule(&rule.block) {
//!             println!("{} -> {:?}", rule.selector, image_url(&rule.block));
//!         }
//!     }
//! }
//! ```

mod background;
mod color;
mod stylesheet;
mod token;
pub mod span;

pub use background::{background_image_value, has_image_in_rule, image_url, url_in_value};
pub use color::extract_color;
pub use stylesheet::{parse_stylesheet, Comment, Item, Rule};
pub use token::{
    is_token, parse_directive, unknown_directive_keyword, Directive, DirectiveKind,
};
