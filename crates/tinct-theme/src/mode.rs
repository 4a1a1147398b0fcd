//! The two styling knobs every derivation takes: brightness and branding
//! strength.
//!
//! Both are closed enums. String names are validated at construction time
//! ([`FromStr`]) so the engine itself never sees an out-of-range value.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

// ---------------------------------------------------------------------------
// Brightness
// ---------------------------------------------------------------------------

/// Light or dark scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Brightness {
    #[default]
    Light,
    Dark,
}

impl Brightness {
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Build from a dark/light flag.
    #[must_use]
    pub const fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a mode from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        [Self::Light, Self::Dark].into_iter().find(|m| m.name() == lower)
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Brightness {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseError {
            kind: "brightness",
            name: s.to_string(),
            expected: "light, dark".to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// BrandingStrength
// ---------------------------------------------------------------------------

/// How strongly the primary color tints surfaces and backgrounds.
///
/// Ordered from no tint to the heaviest tint. `None` is the escape hatch:
/// colors pass through unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BrandingStrength {
    #[default]
    None,
    Light,
    Medium,
    Strong,
    /// The only tier that also tints the scaffold (page) background.
    Heavy,
}

impl BrandingStrength {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Strong => "strong",
            Self::Heavy => "heavy",
        }
    }

    /// Parse a strength from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|s| s.name() == lower).copied()
    }

    /// All strengths, weakest first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::None, Self::Light, Self::Medium, Self::Strong, Self::Heavy]
    }
}

impl fmt::Display for BrandingStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BrandingStrength {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseError {
            kind: "branding strength",
            name: s.to_string(),
            expected: Self::all()
                .iter()
                .map(|s| s.name())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
