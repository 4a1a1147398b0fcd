// SPDX-License-Identifier: MIT
//
// tinct color algebra: exact 8-bit channels, perceptual adjustments.
//
// The theme engine detects collisions with exact equality, so `Color` is a
// plain RGBA byte quadruple: two colors are the same color only when every
// channel matches. Blending is integer alpha compositing with a single
// rounding step, which keeps every derived palette bit-for-bit
// reproducible across platforms.
//
// Perceptual operations (lighten, darken, hue rotation) go through OKLCH
// (see `oklch.rs`) and are quantized back to bytes at the end.

use std::fmt;
use std::str::FromStr;

use crate::oklch::Oklch;
use crate::parse::{ColorParseError, parse_color, parse_hex};

// ─── Color ───────────────────────────────────────────────────────────────────

/// An sRGB color with an independent alpha channel, 8 bits per channel.
///
/// # Examples
///
/// ```
/// use tinct_color::Color;
///
/// let accent = Color::rgb(200, 50, 50);
/// let page = Color::WHITE;
///
/// // Paint the accent over the page at alpha 8/255.
/// let tinted = page.blend(accent, 8);
/// assert_eq!(tinted, Color::rgb(253, 249, 249));
///
/// // Perceptual adjustments round-trip through OKLCH.
/// let deeper = accent.darken(0.1);
/// assert_ne!(deeper, accent);
///
/// assert_eq!(Color::hex("#2196f3").unwrap(), Color::rgb(33, 150, 243));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity: 0 is fully transparent, 255 fully opaque.
    pub a: u8,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Pure black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Fully transparent (invisible).
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Create an opaque color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color from 8-bit channels with alpha.
    #[inline]
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from a packed `0xAARRGGBB` value.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Pack into a `0xAARRGGBB` value.
    #[inline]
    #[must_use]
    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Create a color from a hex string.
    ///
    /// Supports: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (with or without `#`).
    ///
    /// # Errors
    ///
    /// Returns a [`ColorParseError`] if the string is not a valid hex color.
    pub fn hex(s: &str) -> Result<Self, ColorParseError> {
        parse_hex(s)
    }

    /// Parse hex notation or a CSS `rgb()` / `rgba()` function.
    ///
    /// # Errors
    ///
    /// Returns a [`ColorParseError`] if no supported notation matches.
    pub fn parse(s: &str) -> Result<Self, ColorParseError> {
        parse_color(s)
    }

    // ─── Alpha ───────────────────────────────────────────────────────────

    /// Return a copy with the given alpha value.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Whether this color is fully opaque.
    #[inline]
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Whether this color is fully transparent.
    #[inline]
    #[must_use]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    // ─── Alpha Blending ──────────────────────────────────────────────────

    /// Paint `overlay` on top of `self` at `alpha` (0–255).
    ///
    /// Per color channel: `base + (overlay - base) * alpha / 255`, rounded
    /// to the nearest integer. The overlay's own alpha is ignored; `alpha`
    /// is the only opacity that applies. The result's alpha is the
    /// source-over composite, so an opaque base stays opaque.
    #[inline]
    #[must_use]
    pub const fn blend(self, overlay: Self, alpha: u8) -> Self {
        Self {
            r: mix_channel(self.r, overlay.r, alpha),
            g: mix_channel(self.g, overlay.g, alpha),
            b: mix_channel(self.b, overlay.b, alpha),
            a: mix_channel(self.a, 255, alpha),
        }
    }

    // ─── Perceptual Operations ───────────────────────────────────────────
    //
    // These adjust OKLCH lightness or hue and quantize back to bytes.

    /// Convert to OKLCH (alpha is dropped).
    #[must_use]
    pub fn to_oklch(self) -> Oklch {
        Oklch::from(self)
    }

    /// Increase OKLCH lightness by `amount` (result clamped to 0.0–1.0).
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        self.to_oklch().shift_lightness(amount).to_color(self.a)
    }

    /// Decrease OKLCH lightness by `amount` (result clamped to 0.0–1.0).
    #[must_use]
    pub fn darken(self, amount: f32) -> Self {
        self.to_oklch().shift_lightness(-amount).to_color(self.a)
    }

    /// Rotate the OKLCH hue by `degrees`, keeping lightness and chroma
    /// (chroma is reduced if the rotated color leaves the sRGB gamut).
    ///
    /// Achromatic colors have no hue to rotate and are returned unchanged.
    #[must_use]
    pub fn shift_hue(self, degrees: f32) -> Self {
        let lch = self.to_oklch();
        if lch.is_achromatic() {
            return self;
        }
        lch.shift_hue(degrees).to_color(self.a)
    }

    /// The complementary color (hue rotated 180°).
    #[must_use]
    pub fn complement(self) -> Self {
        self.shift_hue(180.0)
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Channels as sRGB floats in 0.0–1.0 (alpha dropped).
    #[must_use]
    pub fn to_srgb(self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }

    /// Convert to hex string (`#rrggbb`, or `#rrggbbaa` if not opaque).
    #[must_use]
    pub fn to_hex(self) -> String {
        let Self { r, g, b, a } = self;
        if self.is_opaque() {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

/// Paint `overlay` on top of `base` at `alpha` (0–255).
///
/// Free-function form of [`Color::blend`], with the overlay first.
#[inline]
#[must_use]
pub const fn blend(overlay: Color, base: Color, alpha: u8) -> Color {
    base.blend(overlay, alpha)
}

/// `base + (over - base) * alpha / 255`, rounded to nearest.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn mix_channel(base: u8, over: u8, alpha: u8) -> u8 {
    let base = base as i32;
    // Stays within 0..=255*255, so the rounded quotient fits in a byte.
    let scaled = base * 255 + (over as i32 - base) * alpha as i32;
    ((scaled + 127) / 255) as u8
}

// ─── Trait impls ─────────────────────────────────────────────────────────────

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "Color::rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            write!(f, "Color::rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Default for Color {
    /// Default is fully opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Self::from_argb(argb)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        parse_color(&text).map_err(serde::de::Error::custom)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
