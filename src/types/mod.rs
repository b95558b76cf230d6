//! Core value types shared across the pipeline.

mod colour;
mod image;
mod sheet;

pub use colour::Colour;
pub use image::{is_retina, is_supported, retina_ratio, RefKind, SpriteImage};
pub use sheet::{SheetOptions, DEFAULT_SHEET_NAME};
