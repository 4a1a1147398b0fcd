// SPDX-License-Identifier: MIT
//
// tinct-color: the color algebra underneath tinct's theme engine.
//
// Colors are exact 8-bit RGBA values so that "are these two colors the
// same?" has one reproducible answer. On top of that sit three kinds of
// operation:
//
//   blend        integer alpha compositing (overlay painted over base)
//   adjust       OKLCH lightness and hue shifts, quantized back to bytes
//   parse        hex literals and CSS rgb()/rgba() functions
//
// Nothing here knows about roles, modes or branding; that lives in
// tinct-theme.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod color;
pub mod oklch;
pub mod parse;

pub use color::{Color, blend};
pub use oklch::Oklch;
pub use parse::ColorParseError;
