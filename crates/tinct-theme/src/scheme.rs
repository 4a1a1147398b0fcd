//! Scheme assembly: one call from configuration to every derived color.
//!
//! [`Scheme::generate`] runs the three engines in order:
//!
//! ```text
//! SchemeConfig (seed + mode + strength + true black)
//!     │
//!     ▼
//! roles.rs:   complete RoleSet from the seed
//!     │
//!     ▼
//! surface.rs: branded surface / background / scaffold / dialog
//!     │
//!     ▼
//! region.rs:  card container + header against the scaffold
//! ```
//!
//! The result is a plain value bundle. Consumers that paint widgets read
//! colors out of it; nothing here is cached between calls.

use tinct_color::Color;
use tracing::debug;

use crate::builtin::{DEFAULT_SCHEME, builtin_seed};
use crate::error::ThemeError;
use crate::mode::{BrandingStrength, Brightness};
use crate::region::{RegionBlend, RegionColors};
use crate::roles::{RoleSet, Seed, resolve_roles};
use crate::surface::{DerivedSurfaces, SurfaceBranding};

/// Where a scheme's seed comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeedSource {
    /// A builtin preset, looked up per mode.
    Builtin(String),
    /// A caller-supplied seed, used for both modes.
    Custom(Seed),
}

// ---------------------------------------------------------------------------
// SchemeConfig
// ---------------------------------------------------------------------------

/// Everything needed to generate a scheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchemeConfig {
    pub seed: SeedSource,
    pub mode: Brightness,
    pub strength: BrandingStrength,
    pub true_black: bool,
}

impl Default for SchemeConfig {
    fn default() -> Self {
        Self {
            seed: SeedSource::Builtin(DEFAULT_SCHEME.to_string()),
            mode: Brightness::Light,
            strength: BrandingStrength::Medium,
            true_black: false,
        }
    }
}

impl SchemeConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: seed from a builtin preset.
    #[must_use]
    pub fn builtin(mut self, name: impl Into<String>) -> Self {
        self.seed = SeedSource::Builtin(name.into());
        self
    }

    /// Builder: seed from a single accent color.
    #[must_use]
    pub fn primary(self, color: Color) -> Self {
        self.seed(Seed::Primary(color))
    }

    /// Builder: seed from an explicit seed.
    #[must_use]
    pub fn seed(mut self, seed: Seed) -> Self {
        self.seed = SeedSource::Custom(seed);
        self
    }

    #[must_use]
    pub const fn mode(mut self, mode: Brightness) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn strength(mut self, strength: BrandingStrength) -> Self {
        self.strength = strength;
        self
    }

    #[must_use]
    pub const fn true_black(mut self, enabled: bool) -> Self {
        self.true_black = enabled;
        self
    }

    /// Display name: the preset name, or `custom`.
    #[must_use]
    pub fn name(&self) -> &str {
        match &self.seed {
            SeedSource::Builtin(name) => name,
            SeedSource::Custom(_) => "custom",
        }
    }

    /// The seed for the configured mode.
    ///
    /// # Errors
    ///
    /// [`ThemeError::UnknownScheme`] if the preset name doesn't exist.
    pub fn resolve_seed(&self) -> Result<Seed, ThemeError> {
        match &self.seed {
            SeedSource::Builtin(name) => builtin_seed(name, self.mode)
                .ok_or_else(|| ThemeError::UnknownScheme(name.clone())),
            SeedSource::Custom(seed) => Ok(*seed),
        }
    }
}

// ---------------------------------------------------------------------------
// Scheme
// ---------------------------------------------------------------------------

/// A fully derived color scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scheme {
    pub name: String,
    pub mode: Brightness,
    pub strength: BrandingStrength,
    pub roles: RoleSet,
    pub surfaces: DerivedSurfaces,
    /// Card region, derived over the surface against the scaffold.
    pub card: RegionColors,
}

impl Scheme {
    /// Generate a scheme from configuration.
    ///
    /// # Errors
    ///
    /// [`ThemeError::UnknownScheme`] for an unknown preset, and
    /// [`ThemeError::InvalidSeed`] for a seed the resolver rejects.
    pub fn generate(config: &SchemeConfig) -> Result<Self, ThemeError> {
        let seed = config.resolve_seed()?;
        let roles = resolve_roles(&seed, config.mode)?;

        let surfaces = SurfaceBranding::new(config.mode, config.strength)
            .true_black(config.true_black)
            .derive(&roles);
        let card = RegionBlend::new(roles.primary, config.mode)
            .base(surfaces.surface)
            .derive(surfaces.scaffold_background);

        debug!(
            name = config.name(),
            mode = config.mode.name(),
            strength = config.strength.name(),
            true_black = config.true_black,
            scaffold = %surfaces.scaffold_background,
            card = %card.container,
            "generated scheme"
        );

        Ok(Self {
            name: config.name().to_string(),
            mode: config.mode,
            strength: config.strength,
            roles,
            surfaces,
            card,
        })
    }

    /// Every color in the scheme, labelled, in display order.
    #[must_use]
    pub fn swatches(&self) -> Vec<(&'static str, Color)> {
        let mut out: Vec<(&'static str, Color)> = self.roles.iter().map(|(r, c)| (r.name(), c)).collect();
        out.extend([
            ("branded-surface", self.surfaces.surface),
            ("branded-background", self.surfaces.background),
            ("scaffold-background", self.surfaces.scaffold_background),
            ("dialog-background", self.surfaces.dialog_background),
            ("card-container", self.card.container),
            ("card-header", self.card.header),
        ]);
        out
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::builtin_names;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config() {
        let config = SchemeConfig::default();
        assert_eq!(config.name(), "material");
        assert_eq!(config.mode, Brightness::Light);
        assert_eq!(config.strength, BrandingStrength::Medium);
        assert!(!config.true_black);
    }

    #[test]
    fn default_generates() {
        let scheme = Scheme::generate(&SchemeConfig::default()).unwrap();
        assert_eq!(scheme.name, "material");
        assert_eq!(scheme.roles.primary, Color::rgb(0x62, 0x00, 0xee));
        assert_ne!(scheme.card.container, scheme.surfaces.scaffold_background);
    }

    #[test]
    fn every_builtin_generates_in_both_modes() {
        for name in builtin_names() {
            for mode in [Brightness::Light, Brightness::Dark] {
                let config = SchemeConfig::new().builtin(name).mode(mode);
                let scheme = Scheme::generate(&config);
                assert!(scheme.is_ok(), "{name} {mode}");
            }
        }
    }

    #[test]
    fn unknown_builtin_fails() {
        let config = SchemeConfig::new().builtin("nope");
        assert_eq!(
            Scheme::generate(&config),
            Err(ThemeError::UnknownScheme("nope".into()))
        );
    }

    #[test]
    fn custom_primary() {
        let config = SchemeConfig::new()
            .primary(Color::rgb(200, 50, 50))
            .strength(BrandingStrength::None);
        let scheme = Scheme::generate(&config).unwrap();
        assert_eq!(scheme.name, "custom");
        assert_eq!(scheme.surfaces.surface, Color::WHITE);
        // Card is blended over the white surface against the #fafafa page.
        assert_eq!(scheme.card.container, Color::rgb(253, 249, 249));
        assert_eq!(scheme.card.header, Color::rgb(249, 233, 233));
    }

    #[test]
    fn transparent_primary_rejected() {
        let config = SchemeConfig::new().primary(Color::TRANSPARENT);
        assert_eq!(Scheme::generate(&config), Err(ThemeError::InvalidSeed));
    }

    #[test]
    fn true_black_flows_through() {
        let config = SchemeConfig::new()
            .mode(Brightness::Dark)
            .strength(BrandingStrength::Light)
            .true_black(true);
        let scheme = Scheme::generate(&config).unwrap();
        assert_eq!(scheme.surfaces.scaffold_background, Color::BLACK);
    }

    #[test]
    fn unbranded_true_black_keeps_role_colors() {
        let config = SchemeConfig::new()
            .primary(Color::rgb(0x21, 0x96, 0xf3))
            .mode(Brightness::Dark)
            .strength(BrandingStrength::None)
            .true_black(true);
        let scheme = Scheme::generate(&config).unwrap();
        assert_eq!(scheme.surfaces.background, scheme.roles.background);
        assert_eq!(scheme.surfaces.scaffold_background, Color::rgb(24, 24, 24));
        assert_eq!(scheme.surfaces.surface, scheme.roles.surface);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_serializes_by_name() {
        let config = SchemeConfig::new()
            .primary(Color::rgb(200, 50, 50))
            .strength(BrandingStrength::Heavy);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["strength"], "heavy");
        assert_eq!(json["mode"], "light");
        assert_eq!(json["seed"]["Custom"]["Primary"], "#c83232");
        let back: SchemeConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn swatches_cover_everything() {
        let scheme = Scheme::generate(&SchemeConfig::default()).unwrap();
        let swatches = scheme.swatches();
        assert_eq!(swatches.len(), 18);
        assert_eq!(swatches[0], ("primary", scheme.roles.primary));
        assert_eq!(swatches.last(), Some(&("card-header", scheme.card.header)));
    }
}
