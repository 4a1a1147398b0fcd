//! Semantic color roles and the seed resolver.
//!
//! A [`RoleSet`] names the twelve colors a UI is painted with. The resolver
//! builds one from a [`Seed`]: either a single accent color, or a partial
//! role set whose missing entries are derived from the accent.
//!
//! # Derivation rules
//!
//! | Role              | Light                    | Dark                      |
//! |-------------------|--------------------------|---------------------------|
//! | primary variant   | primary darkened 0.10 L  | primary lightened 0.10 L  |
//! | secondary         | primary hue + 180°       | primary hue + 180°        |
//! | secondary variant | secondary darkened       | secondary lightened       |
//! | surface           | `#ffffff`                | `#121212`                 |
//! | background        | `#fafafa`                | `#181818`                 |
//! | error             | `#b00020`                | `#cf6679`                 |
//!
//! Every missing `on_*` role is black or white, whichever contrasts more
//! with the color it sits on.

use std::fmt;

use tinct_color::Color;
use tracing::{debug, warn};

use crate::contrast::{is_dark_color, on_color_for};
use crate::error::ThemeError;
use crate::mode::Brightness;

/// OKLCH lightness shift between a base color and its variant.
pub const VARIANT_SHIFT: f32 = 0.10;

/// Hue rotation from primary to the derived secondary.
pub const SECONDARY_HUE_SHIFT: f32 = 180.0;

const LIGHT_SURFACE: Color = Color::rgb(0xff, 0xff, 0xff);
const LIGHT_BACKGROUND: Color = Color::rgb(0xfa, 0xfa, 0xfa);
const LIGHT_ERROR: Color = Color::rgb(0xb0, 0x00, 0x20);
const DARK_SURFACE: Color = Color::rgb(0x12, 0x12, 0x12);
const DARK_BACKGROUND: Color = Color::rgb(0x18, 0x18, 0x18);
const DARK_ERROR: Color = Color::rgb(0xcf, 0x66, 0x79);

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// One of the twelve semantic color roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Primary,
    PrimaryVariant,
    Secondary,
    SecondaryVariant,
    Surface,
    Background,
    Error,
    OnPrimary,
    OnSecondary,
    OnSurface,
    OnBackground,
    OnError,
}

impl Role {
    /// Every role, in display order.
    pub const ALL: [Self; 12] = [
        Self::Primary,
        Self::PrimaryVariant,
        Self::Secondary,
        Self::SecondaryVariant,
        Self::Surface,
        Self::Background,
        Self::Error,
        Self::OnPrimary,
        Self::OnSecondary,
        Self::OnSurface,
        Self::OnBackground,
        Self::OnError,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::PrimaryVariant => "primary-variant",
            Self::Secondary => "secondary",
            Self::SecondaryVariant => "secondary-variant",
            Self::Surface => "surface",
            Self::Background => "background",
            Self::Error => "error",
            Self::OnPrimary => "on-primary",
            Self::OnSecondary => "on-secondary",
            Self::OnSurface => "on-surface",
            Self::OnBackground => "on-background",
            Self::OnError => "on-error",
        }
    }

    /// Look a role up by name. Underscores are accepted in place of dashes.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.to_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|r| r.name() == normalized)
    }

    /// The role an `on_*` role is drawn on top of.
    #[must_use]
    pub const fn paired(self) -> Option<Self> {
        match self {
            Self::OnPrimary => Some(Self::Primary),
            Self::OnSecondary => Some(Self::Secondary),
            Self::OnSurface => Some(Self::Surface),
            Self::OnBackground => Some(Self::Background),
            Self::OnError => Some(Self::Error),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// RoleSet
// ---------------------------------------------------------------------------

/// A complete set of role colors. Never has a missing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoleSet {
    pub primary: Color,
    pub primary_variant: Color,
    pub secondary: Color,
    pub secondary_variant: Color,
    pub surface: Color,
    pub background: Color,
    pub error: Color,
    pub on_primary: Color,
    pub on_secondary: Color,
    pub on_surface: Color,
    pub on_background: Color,
    pub on_error: Color,
}

impl RoleSet {
    /// The color assigned to `role`.
    #[must_use]
    pub const fn get(&self, role: Role) -> Color {
        match role {
            Role::Primary => self.primary,
            Role::PrimaryVariant => self.primary_variant,
            Role::Secondary => self.secondary,
            Role::SecondaryVariant => self.secondary_variant,
            Role::Surface => self.surface,
            Role::Background => self.background,
            Role::Error => self.error,
            Role::OnPrimary => self.on_primary,
            Role::OnSecondary => self.on_secondary,
            Role::OnSurface => self.on_surface,
            Role::OnBackground => self.on_background,
            Role::OnError => self.on_error,
        }
    }

    /// `(role, color)` pairs in [`Role::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, Color)> + '_ {
        Role::ALL.into_iter().map(|role| (role, self.get(role)))
    }
}

// ---------------------------------------------------------------------------
// PartialRoles
// ---------------------------------------------------------------------------

/// A role set where only the primary is mandatory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartialRoles {
    pub primary: Color,
    pub primary_variant: Option<Color>,
    pub secondary: Option<Color>,
    pub secondary_variant: Option<Color>,
    pub surface: Option<Color>,
    pub background: Option<Color>,
    pub error: Option<Color>,
    pub on_primary: Option<Color>,
    pub on_secondary: Option<Color>,
    pub on_surface: Option<Color>,
    pub on_background: Option<Color>,
    pub on_error: Option<Color>,
}

impl PartialRoles {
    /// Only the primary; everything else is derived.
    #[must_use]
    pub const fn new(primary: Color) -> Self {
        Self {
            primary,
            primary_variant: None,
            secondary: None,
            secondary_variant: None,
            surface: None,
            background: None,
            error: None,
            on_primary: None,
            on_secondary: None,
            on_surface: None,
            on_background: None,
            on_error: None,
        }
    }

    /// Builder: pin `role` to `color`.
    #[must_use]
    pub const fn with(mut self, role: Role, color: Color) -> Self {
        self.set(role, color);
        self
    }

    /// Pin `role` to `color`.
    pub const fn set(&mut self, role: Role, color: Color) {
        match role {
            Role::Primary => self.primary = color,
            Role::PrimaryVariant => self.primary_variant = Some(color),
            Role::Secondary => self.secondary = Some(color),
            Role::SecondaryVariant => self.secondary_variant = Some(color),
            Role::Surface => self.surface = Some(color),
            Role::Background => self.background = Some(color),
            Role::Error => self.error = Some(color),
            Role::OnPrimary => self.on_primary = Some(color),
            Role::OnSecondary => self.on_secondary = Some(color),
            Role::OnSurface => self.on_surface = Some(color),
            Role::OnBackground => self.on_background = Some(color),
            Role::OnError => self.on_error = Some(color),
        }
    }
}

impl From<RoleSet> for PartialRoles {
    fn from(r: RoleSet) -> Self {
        Self {
            primary: r.primary,
            primary_variant: Some(r.primary_variant),
            secondary: Some(r.secondary),
            secondary_variant: Some(r.secondary_variant),
            surface: Some(r.surface),
            background: Some(r.background),
            error: Some(r.error),
            on_primary: Some(r.on_primary),
            on_secondary: Some(r.on_secondary),
            on_surface: Some(r.on_surface),
            on_background: Some(r.on_background),
            on_error: Some(r.on_error),
        }
    }
}

// ---------------------------------------------------------------------------
// Seed
// ---------------------------------------------------------------------------

/// What a scheme is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Seed {
    /// A single accent color.
    Primary(Color),
    /// A full or partial role set.
    Roles(PartialRoles),
}

impl Seed {
    /// The accent color every derivation anchors on.
    #[must_use]
    pub const fn primary(&self) -> Color {
        match self {
            Self::Primary(c) => *c,
            Self::Roles(r) => r.primary,
        }
    }
}

impl From<Color> for Seed {
    fn from(c: Color) -> Self {
        Self::Primary(c)
    }
}

impl From<PartialRoles> for Seed {
    fn from(r: PartialRoles) -> Self {
        Self::Roles(r)
    }
}

impl From<RoleSet> for Seed {
    fn from(r: RoleSet) -> Self {
        Self::Roles(r.into())
    }
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Build a complete role set from a seed.
///
/// # Errors
///
/// [`ThemeError::InvalidSeed`] if the primary is fully transparent and a
/// missing role would have to be derived from it.
pub fn resolve_roles(seed: &Seed, mode: Brightness) -> Result<RoleSet, ThemeError> {
    let partial = match *seed {
        Seed::Primary(c) => PartialRoles::new(c),
        Seed::Roles(r) => r,
    };
    let primary = partial.primary;

    let anchored_on_primary = partial.primary_variant.is_none()
        || partial.secondary.is_none()
        || partial.on_primary.is_none();
    if primary.is_transparent() && anchored_on_primary {
        return Err(ThemeError::InvalidSeed);
    }

    let primary_variant = partial
        .primary_variant
        .unwrap_or_else(|| variant_of(primary, mode));
    let secondary = partial
        .secondary
        .unwrap_or_else(|| primary.shift_hue(SECONDARY_HUE_SHIFT));
    let secondary_variant = partial
        .secondary_variant
        .unwrap_or_else(|| variant_of(secondary, mode));

    let (default_surface, default_background, default_error) = if mode.is_dark() {
        (DARK_SURFACE, DARK_BACKGROUND, DARK_ERROR)
    } else {
        (LIGHT_SURFACE, LIGHT_BACKGROUND, LIGHT_ERROR)
    };
    let surface = partial.surface.unwrap_or(default_surface);
    let background = partial.background.unwrap_or(default_background);
    let error = partial.error.unwrap_or(default_error);

    let roles = RoleSet {
        primary,
        primary_variant,
        secondary,
        secondary_variant,
        surface,
        background,
        error,
        on_primary: partial.on_primary.unwrap_or_else(|| on_color_for(primary)),
        on_secondary: partial.on_secondary.unwrap_or_else(|| on_color_for(secondary)),
        on_surface: partial.on_surface.unwrap_or_else(|| on_color_for(surface)),
        on_background: partial
            .on_background
            .unwrap_or_else(|| on_color_for(background)),
        on_error: partial.on_error.unwrap_or_else(|| on_color_for(error)),
    };

    if is_dark_color(roles.background) != mode.is_dark() {
        warn!(
            mode = mode.name(),
            background = %roles.background,
            "background does not match the brightness mode"
        );
    }

    debug!(
        mode = mode.name(),
        primary = %roles.primary,
        secondary = %roles.secondary,
        surface = %roles.surface,
        background = %roles.background,
        "resolved role set"
    );
    Ok(roles)
}

/// Darker in light mode, lighter in dark mode.
fn variant_of(color: Color, mode: Brightness) -> Color {
    if mode.is_dark() {
        color.lighten(VARIANT_SHIFT)
    } else {
        color.darken(VARIANT_SHIFT)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    const BLUE: Color = Color::rgb(33, 150, 243);

    fn is_black_or_white(c: Color) -> bool {
        c == Color::BLACK || c == Color::WHITE
    }

    #[test]
    fn role_names_roundtrip() {
        for role in Role::ALL {
            assert_eq!(Role::from_name(role.name()), Some(role));
        }
        assert_eq!(Role::from_name("on_surface"), Some(Role::OnSurface));
        assert_eq!(Role::from_name("tertiary"), None);
    }

    #[test]
    fn only_on_roles_are_paired() {
        let paired: Vec<_> = Role::ALL.into_iter().filter(|r| r.paired().is_some()).collect();
        assert_eq!(paired.len(), 5);
        assert!(paired.iter().all(|r| r.name().starts_with("on-")));
    }

    #[test]
    fn primary_only_dark_yields_twelve_roles() {
        let roles = resolve_roles(&Seed::Primary(BLUE), Brightness::Dark).unwrap();
        assert_eq!(roles.iter().count(), 12);
        assert_eq!(roles.primary, BLUE);
        assert_eq!(roles.surface, Color::rgb(0x12, 0x12, 0x12));
        assert_eq!(roles.background, Color::rgb(0x18, 0x18, 0x18));
        assert_eq!(roles.error, Color::rgb(0xcf, 0x66, 0x79));
        for role in Role::ALL.into_iter().filter(|r| r.paired().is_some()) {
            assert!(is_black_or_white(roles.get(role)), "{role} not black/white");
        }
        assert_eq!(roles.on_surface, Color::WHITE);
    }

    #[test]
    fn light_defaults() {
        let roles = resolve_roles(&BLUE.into(), Brightness::Light).unwrap();
        assert_eq!(roles.surface, Color::WHITE);
        assert_eq!(roles.background, Color::rgb(0xfa, 0xfa, 0xfa));
        assert_eq!(roles.error, Color::rgb(0xb0, 0x00, 0x20));
        assert_eq!(roles.on_surface, Color::BLACK);
        assert_eq!(roles.on_error, Color::WHITE);
    }

    #[test]
    fn variant_direction_follows_mode() {
        let light = resolve_roles(&BLUE.into(), Brightness::Light).unwrap();
        let dark = resolve_roles(&BLUE.into(), Brightness::Dark).unwrap();
        let l = |c: Color| c.to_oklch().l;
        assert!(l(light.primary_variant) < l(BLUE));
        assert!(l(dark.primary_variant) > l(BLUE));
        assert!(l(light.secondary_variant) < l(light.secondary));
        assert!(l(dark.secondary_variant) > l(dark.secondary));
    }

    #[test]
    fn secondary_is_complement() {
        let roles = resolve_roles(&BLUE.into(), Brightness::Light).unwrap();
        assert_eq!(roles.secondary, BLUE.complement());
        assert_ne!(roles.secondary, BLUE);
    }

    #[test]
    fn partial_roles_keep_supplied_colors() {
        let teal = Color::rgb(3, 218, 198);
        let seed = PartialRoles::new(BLUE)
            .with(Role::Secondary, teal)
            .with(Role::Surface, Color::rgb(240, 240, 250));
        let roles = resolve_roles(&seed.into(), Brightness::Light).unwrap();
        assert_eq!(roles.secondary, teal);
        assert_eq!(roles.surface, Color::rgb(240, 240, 250));
        assert_eq!(roles.on_secondary, Color::BLACK);
        // Missing background still comes from the mode default.
        assert_eq!(roles.background, Color::rgb(0xfa, 0xfa, 0xfa));
    }

    #[test]
    fn full_role_set_passes_through() {
        let full = resolve_roles(&BLUE.into(), Brightness::Dark).unwrap();
        let again = resolve_roles(&full.into(), Brightness::Light).unwrap();
        assert_eq!(again, full);
    }

    #[test]
    fn transparent_primary_is_invalid() {
        let seed = Seed::Primary(Color::TRANSPARENT);
        assert_eq!(
            resolve_roles(&seed, Brightness::Light),
            Err(ThemeError::InvalidSeed)
        );
    }

    #[test]
    fn transparent_primary_invalid_when_any_anchored_role_is_missing() {
        let full = PartialRoles::new(Color::TRANSPARENT)
            .with(Role::PrimaryVariant, Color::rgb(1, 2, 3))
            .with(Role::Secondary, Color::rgb(200, 50, 50))
            .with(Role::OnPrimary, Color::WHITE);
        for missing in [Role::PrimaryVariant, Role::Secondary, Role::OnPrimary] {
            let mut seed = full;
            match missing {
                Role::PrimaryVariant => seed.primary_variant = None,
                Role::Secondary => seed.secondary = None,
                _ => seed.on_primary = None,
            }
            assert_eq!(
                resolve_roles(&seed.into(), Brightness::Dark),
                Err(ThemeError::InvalidSeed),
                "{missing}"
            );
        }
    }

    #[test]
    #[traced_test]
    fn mismatched_background_is_reported() {
        let seed = PartialRoles::new(BLUE).with(Role::Background, Color::rgb(18, 18, 18));
        let roles = resolve_roles(&seed.into(), Brightness::Light).unwrap();
        assert_eq!(roles.background, Color::rgb(18, 18, 18));
        assert!(logs_contain("background does not match the brightness mode"));
    }

    #[test]
    #[traced_test]
    fn default_backgrounds_match_their_mode() {
        for mode in [Brightness::Light, Brightness::Dark] {
            resolve_roles(&Seed::Primary(BLUE), mode).unwrap();
        }
        assert!(!logs_contain("background does not match"));
    }

    #[test]
    fn transparent_primary_allowed_when_nothing_derives_from_it() {
        let seed = PartialRoles::new(Color::TRANSPARENT)
            .with(Role::PrimaryVariant, Color::rgb(1, 2, 3))
            .with(Role::Secondary, Color::rgb(200, 50, 50))
            .with(Role::OnPrimary, Color::WHITE);
        let roles = resolve_roles(&seed.into(), Brightness::Light).unwrap();
        assert_eq!(roles.primary, Color::TRANSPARENT);
        assert_eq!(roles.primary_variant, Color::rgb(1, 2, 3));
    }

    #[test]
    fn resolution_is_deterministic() {
        let seed = Seed::Primary(Color::rgb(200, 50, 50));
        for mode in [Brightness::Light, Brightness::Dark] {
            assert_eq!(resolve_roles(&seed, mode), resolve_roles(&seed, mode));
        }
    }

    #[test]
    fn seed_primary_accessor() {
        assert_eq!(Seed::from(BLUE).primary(), BLUE);
        assert_eq!(Seed::from(PartialRoles::new(BLUE)).primary(), BLUE);
    }
}
