//! sprig - CSS sprite extraction toolkit
//!
//! A library for locating background-image declarations in CSS text and
//! extracting the structured data a spritesheet assembly pipeline needs:
//! image references, pixel densities, fallback colours, and directive
//! markers. Compositing, packing, and CSS rewriting happen downstream.

pub mod cli;
pub mod collect;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod types;
pub mod validation;

pub use collect::{collect_images, group_by_ratio, CollectResult, DensityGroup};
pub use discovery::{discover, discover_paths, DiscoveryResult, Manifest};
pub use error::{Result, SprigError};
pub use parser::{
    background_image_value, extract_color, has_image_in_rule, image_url, is_token,
    parse_directive, parse_stylesheet, Comment, Directive, DirectiveKind, Item, Rule,
};
pub use types::{
    is_retina, is_supported, retina_ratio, Colour, RefKind, SheetOptions, SpriteImage,
};
pub use validation::{validate_stylesheet, Diagnostic, Severity, ValidationResult};
