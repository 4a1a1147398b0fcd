//! Error types for scheme derivation and configuration.
//!
//! Blending, surface branding and region derivation are total functions and
//! never fail. Errors only come from the edges: an unusable seed, or a
//! configuration value that doesn't name anything.

use thiserror::Error;
use tinct_color::ColorParseError;

/// Errors raised while resolving seeds or applying configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// The primary seed color is fully transparent, so no role can be
    /// anchored on it.
    #[error("invalid seed: primary color is fully transparent")]
    InvalidSeed,

    /// No builtin scheme has this name.
    #[error("unknown scheme: {0}")]
    UnknownScheme(String),

    /// No option has this name.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// The option exists but the value doesn't fit it.
    #[error("invalid value for {option}: {value}")]
    InvalidValue { option: String, value: String },

    #[error(transparent)]
    Color(#[from] ColorParseError),
}

/// An enum name that didn't match any variant.
///
/// Raised at construction time (`FromStr`) so that out-of-range modes and
/// strengths never reach the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} {name:?} (expected one of: {expected})")]
pub struct ParseError {
    pub kind: &'static str,
    pub name: String,
    pub expected: String,
}
