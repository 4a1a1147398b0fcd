// SPDX-License-Identifier: MIT
//
// Color string parsing: hex literals and CSS `rgb()` / `rgba()` functions.
//
// Accepted forms:
//
//   #RGB  #RGBA  #RRGGBB  #RRGGBBAA     (leading `#` optional)
//   rgb(r, g, b)                        (channels 0–255)
//   rgba(r, g, b, a)                    (alpha 0–1 or a percentage)

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::color::Color;

/// Errors produced when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,

    #[error("invalid hex length: {0} digits")]
    InvalidLength(usize),

    #[error("invalid hex digits in {0:?}")]
    InvalidHex(String),

    #[error("invalid rgb()/rgba() function: {0:?}")]
    InvalidFunction(String),

    #[error("component out of range: {0}")]
    OutOfRange(String),
}

static CSS_RGB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(rgba?)\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*(\d*\.?\d+%?)\s*)?\)$",
    )
    .expect("CSS rgb() pattern is valid")
});

/// Parse any supported color notation.
///
/// # Errors
///
/// Returns a [`ColorParseError`] describing why the string was rejected.
pub fn parse_color(s: &str) -> Result<Color, ColorParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ColorParseError::Empty);
    }
    if s.get(..3).is_some_and(|prefix| prefix.eq_ignore_ascii_case("rgb")) {
        return parse_css_rgb(s);
    }
    parse_hex(s)
}

/// Parse a hex color string (`#` optional).
///
/// # Errors
///
/// Fails on an empty string, a digit count other than 3, 4, 6 or 8, or a
/// non-hex digit.
pub fn parse_hex(s: &str) -> Result<Color, ColorParseError> {
    let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
    if digits.is_empty() {
        return Err(ColorParseError::Empty);
    }
    let bytes = digits.as_bytes();
    let invalid = || ColorParseError::InvalidHex(s.to_string());

    let nibble = |i: usize| parse_hex_digit(bytes[i]).ok_or_else(invalid);
    let byte = |i: usize| -> Result<u8, ColorParseError> { Ok(nibble(i)? << 4 | nibble(i + 1)?) };

    match bytes.len() {
        // #RGB
        3 => {
            let (r, g, b) = (nibble(0)?, nibble(1)?, nibble(2)?);
            Ok(Color::rgb(r * 17, g * 17, b * 17))
        }
        // #RGBA
        4 => {
            let (r, g, b, a) = (nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?);
            Ok(Color::rgba(r * 17, g * 17, b * 17, a * 17))
        }
        // #RRGGBB
        6 => Ok(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
        // #RRGGBBAA
        8 => Ok(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        n => Err(ColorParseError::InvalidLength(n)),
    }
}

/// Parse a CSS `rgb(r, g, b)` or `rgba(r, g, b, a)` function.
fn parse_css_rgb(s: &str) -> Result<Color, ColorParseError> {
    let caps = CSS_RGB
        .captures(s)
        .ok_or_else(|| ColorParseError::InvalidFunction(s.to_string()))?;

    let is_rgba = caps[1].eq_ignore_ascii_case("rgba");
    if is_rgba && caps.get(5).is_none() {
        return Err(ColorParseError::InvalidFunction(s.to_string()));
    }

    let channel = |i: usize| -> Result<u8, ColorParseError> {
        caps[i]
            .parse::<u8>()
            .map_err(|_| ColorParseError::OutOfRange(caps[i].to_string()))
    };
    let alpha = match caps.get(5) {
        Some(m) => parse_alpha(m.as_str())?,
        None => 255,
    };

    Ok(Color::rgba(channel(2)?, channel(3)?, channel(4)?, alpha))
}

/// Parse a CSS alpha value: a number in 0–1 or a percentage.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_alpha(text: &str) -> Result<u8, ColorParseError> {
    let out_of_range = || ColorParseError::OutOfRange(text.to_string());
    let (number, scale) = text
        .strip_suffix('%')
        .map_or((text, 1.0), |n| (n, 100.0));
    let value: f32 = number.parse().map_err(|_| out_of_range())?;
    let unit = value / scale;
    if !(0.0..=1.0).contains(&unit) {
        return Err(out_of_range());
    }
    // Safe: unit is in 0.0–1.0, so the product is in 0.5–255.5.
    Ok(unit.mul_add(255.0, 0.5).min(255.0) as u8)
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
