//! WCAG contrast math, used to pick readable "on" colors.
//!
//! Luminance is computed in linear sRGB per WCAG 2.1. Nothing here enforces
//! a minimum ratio; the only consumer is [`on_color_for`], which chooses
//! between black and white.

use tinct_color::Color;
use tinct_color::oklch::srgb_to_linear;

/// Compute the relative luminance of a color per WCAG 2.1.
///
/// Uses the standard sRGB linearization + weighted sum formula:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Alpha is ignored. Returns a value in [0.0, 1.0].
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = color.to_srgb();
    let r_lin = f64::from(srgb_to_linear(r));
    let g_lin = f64::from(srgb_to_linear(g));
    let b_lin = f64::from(srgb_to_linear(b));
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0], independent of argument order.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Black or white, whichever contrasts more with `background`.
///
/// Ties go to black.
#[must_use]
pub fn on_color_for(background: Color) -> Color {
    let opaque = background.with_alpha(255);
    if contrast_ratio(Color::WHITE, opaque) > contrast_ratio(Color::BLACK, opaque) {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

/// Whether light text reads better on `color` than dark text.
#[must_use]
pub fn is_dark_color(color: Color) -> bool {
    on_color_for(color) == Color::WHITE
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
