//! Colour literal parsing.
//!
//! Descriptors keep colour tokens verbatim; this type exists so
//! validation can check that a literal actually denotes a colour.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SprigError};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a CSS colour literal as the colour extractor produces them.
    ///
    /// Supports `#RGB`, `#RRGGBB`, `rgb(r, g, b)` and `rgba(r, g, b, a)`
    /// (a fourth component is also accepted in the `rgb()` form). The
    /// alpha component is a float in 0..=1.
    pub fn from_css(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            return Self::from_hex_digits(hex, s);
        }
        if let Some(args) = functional_args(s) {
            return Self::from_components(args);
        }

        Err(SprigError::Parse {
            message: format!("Invalid colour literal: {}", s),
            help: Some("Use #RGB, #RRGGBB, rgb(...) or rgba(...)".to_string()),
        })
    }

    fn from_hex_digits(hex: &str, original: &str) -> Result<Self> {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SprigError::Parse {
                message: format!("Invalid hex colour: {}", original),
                help: None,
            });
        }

        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let r = parse_hex_digit(hex.as_bytes()[0], original)?;
                let g = parse_hex_digit(hex.as_bytes()[1], original)?;
                let b = parse_hex_digit(hex.as_bytes()[2], original)?;
                Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                let r = parse_hex_byte(&hex[0..2], original)?;
                let g = parse_hex_byte(&hex[2..4], original)?;
                let b = parse_hex_byte(&hex[4..6], original)?;
                Ok(Self::rgb(r, g, b))
            }
            _ => Err(SprigError::Parse {
                message: format!("Invalid hex colour: {}", original),
                help: Some("Use #RGB or #RRGGBB format".to_string()),
            }),
        }
    }

    fn from_components(args: &str) -> Result<Self> {
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(SprigError::Parse {
                message: format!("Expected 3 or 4 colour components, got {}", parts.len()),
                help: None,
            });
        }

        let r = parse_channel(parts[0])?;
        let g = parse_channel(parts[1])?;
        let b = parse_channel(parts[2])?;
        let a = if parts.len() == 4 {
            parse_alpha(parts[3])?
        } else {
            255
        };

        Ok(Self::new(r, g, b, a))
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl FromStr for Colour {
    type Err = SprigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_css(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Argument list of an `rgb(...)`/`rgba(...)` literal.
fn functional_args(s: &str) -> Option<&str> {
    s.strip_prefix("rgba(")
        .or_else(|| s.strip_prefix("rgb("))?
        .strip_suffix(')')
}

/// Parse a single hex digit.
fn parse_hex_digit(byte: u8, original: &str) -> Result<u8> {
    (byte as char)
        .to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| SprigError::Parse {
            message: format!("Invalid hex colour: {}", original),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str, original: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| SprigError::Parse {
        message: format!("Invalid hex colour: {}", original),
        help: None,
    })
}

/// Parse an integer channel component (0-255).
fn parse_channel(part: &str) -> Result<u8> {
    part.parse::<u8>().map_err(|_| SprigError::Parse {
        message: format!("Invalid colour component: {}", part),
        help: Some("Channel components are integers 0-255".to_string()),
    })
}

/// Parse an alpha component (float 0..=1) into a byte.
fn parse_alpha(part: &str) -> Result<u8> {
    let value = part.parse::<f32>().map_err(|_| SprigError::Parse {
        message: format!("Invalid alpha component: {}", part),
        help: None,
    })?;

    if !(0.0..=1.0).contains(&value) {
        return Err(SprigError::Parse {
            message: format!("Alpha component out of range: {}", part),
            help: Some("Alpha is a float between 0 and 1".to_string()),
        });
    }

    Ok((value * 255.0).round() as u8)
}
