//! Surface branding: tinting surfaces and backgrounds with the primary.
//!
//! # Blend ladder
//!
//! Each strength maps to three alpha intensities (0–255) at which the
//! primary is painted over the surface, the background and the scaffold
//! (page) background. Dark mode uses roughly 1.5× the light intensities so
//! the tint stays visible on dark bases.
//!
//! ```text
//!              light            dark
//!   strength   surf  bg  scaf   surf  bg  scaf
//!   light        5   10    0      8   15    0
//!   medium      10   20    0     15   30    0
//!   strong      15   30    0     23   45    0
//!   heavy       20   40   15     30   60   23
//! ```
//!
//! The background must stay distinguishable from the scaffold it sits on.
//! If the two come out identical, the background is re-blended once at a
//! higher intensity.

use tinct_color::{Color, blend};

use crate::collision::avoid_collision;
use crate::mode::{BrandingStrength, Brightness};
use crate::roles::RoleSet;

/// Extra background alpha applied when it collides with the scaffold.
pub const BACKGROUND_ESCALATION_STEP: u8 = 10;

/// OKLCH lightness removed from the background base in true-black mode.
pub const TRUE_BLACK_DARKEN: f32 = 0.04;

// ---------------------------------------------------------------------------
// Intensities
// ---------------------------------------------------------------------------

/// Alpha intensities for one strength/mode pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlendIntensity {
    pub surface: u8,
    pub background: u8,
    pub scaffold: u8,
}

impl BlendIntensity {
    const fn new(surface: u8, background: u8, scaffold: u8) -> Self {
        Self { surface, background, scaffold }
    }
}

/// Look up the blend intensities for `strength` in `mode`.
///
/// `None` maps to all zeros.
#[must_use]
pub const fn blend_intensity(strength: BrandingStrength, mode: Brightness) -> BlendIntensity {
    match (strength, mode) {
        (BrandingStrength::None, _) => BlendIntensity::new(0, 0, 0),
        (BrandingStrength::Light, Brightness::Light) => BlendIntensity::new(5, 10, 0),
        (BrandingStrength::Light, Brightness::Dark) => BlendIntensity::new(8, 15, 0),
        (BrandingStrength::Medium, Brightness::Light) => BlendIntensity::new(10, 20, 0),
        (BrandingStrength::Medium, Brightness::Dark) => BlendIntensity::new(15, 30, 0),
        (BrandingStrength::Strong, Brightness::Light) => BlendIntensity::new(15, 30, 0),
        (BrandingStrength::Strong, Brightness::Dark) => BlendIntensity::new(23, 45, 0),
        (BrandingStrength::Heavy, Brightness::Light) => BlendIntensity::new(20, 40, 15),
        (BrandingStrength::Heavy, Brightness::Dark) => BlendIntensity::new(30, 60, 23),
    }
}

// ---------------------------------------------------------------------------
// DerivedSurfaces
// ---------------------------------------------------------------------------

/// The four branded surface colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedSurfaces {
    pub surface: Color,
    pub background: Color,
    pub scaffold_background: Color,
    pub dialog_background: Color,
}

// ---------------------------------------------------------------------------
// SurfaceBranding
// ---------------------------------------------------------------------------

/// Surface branding configuration.
///
/// ```
/// use tinct_color::Color;
/// use tinct_theme::{BrandingStrength, Brightness, Seed, SurfaceBranding, resolve_roles};
///
/// let roles = resolve_roles(&Seed::Primary(Color::rgb(33, 150, 243)), Brightness::Dark)?;
/// let surfaces = SurfaceBranding::new(Brightness::Dark, BrandingStrength::Heavy)
///     .true_black(true)
///     .derive(&roles);
/// assert_ne!(surfaces.scaffold_background, Color::BLACK);
/// # Ok::<(), tinct_theme::ThemeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SurfaceBranding {
    mode: Brightness,
    strength: BrandingStrength,
    true_black: bool,
}

impl SurfaceBranding {
    #[must_use]
    pub const fn new(mode: Brightness, strength: BrandingStrength) -> Self {
        Self { mode, strength, true_black: false }
    }

    /// Builder: use pure black as the page baseline. Ignored in light mode.
    #[must_use]
    pub const fn true_black(mut self, enabled: bool) -> Self {
        self.true_black = enabled;
        self
    }

    #[must_use]
    pub const fn mode(&self) -> Brightness {
        self.mode
    }

    #[must_use]
    pub const fn strength(&self) -> BrandingStrength {
        self.strength
    }

    /// Whether the true-black baseline is used (dark mode only). `None`
    /// strength ignores it.
    #[must_use]
    pub const fn uses_true_black(&self) -> bool {
        self.true_black && self.mode.is_dark()
    }

    /// Derive the branded surfaces for `roles`.
    #[must_use]
    pub fn derive(&self, roles: &RoleSet) -> DerivedSurfaces {
        // None hands the role colors back untouched, true black included.
        if self.strength == BrandingStrength::None {
            return DerivedSurfaces {
                surface: roles.surface,
                background: roles.background,
                scaffold_background: roles.background,
                dialog_background: roles.surface,
            };
        }

        let (background_base, scaffold_base) = if self.uses_true_black() {
            (roles.background.darken(TRUE_BLACK_DARKEN), Color::BLACK)
        } else {
            (roles.background, roles.background)
        };

        let primary = roles.primary;
        let intensity = blend_intensity(self.strength, self.mode);

        let surface = blend(primary, roles.surface, intensity.surface);
        let scaffold = if intensity.scaffold > 0 {
            blend(primary, scaffold_base, intensity.scaffold)
        } else {
            scaffold_base
        };

        let escalated = intensity
            .background
            .saturating_add(BACKGROUND_ESCALATION_STEP);
        let ([background], _) = avoid_collision(
            "surface-background",
            scaffold,
            [blend(primary, background_base, intensity.background)],
            |_| [blend(primary, background_base, escalated)],
        );

        DerivedSurfaces {
            surface,
            background,
            scaffold_background: scaffold,
            dialog_background: surface,
        }
    }
}

/// Derive branded surfaces without true black.
#[must_use]
pub fn derive_surfaces(
    roles: &RoleSet,
    mode: Brightness,
    strength: BrandingStrength,
) -> DerivedSurfaces {
    SurfaceBranding::new(mode, strength).derive(roles)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
