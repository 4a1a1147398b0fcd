//! Laws every derivation must satisfy, for arbitrary accents and modes.

use proptest::prelude::*;
use tinct_color::{Color, blend};
use tinct_theme::surface::blend_intensity;
use tinct_theme::{
    BrandingStrength, Brightness, RegionBlend, RoleSet, Seed, derive_region_colors,
    derive_surfaces, resolve_roles,
};

fn arb_opaque() -> impl Strategy<Value = Color> {
    any::<(u8, u8, u8)>().prop_map(|(r, g, b)| Color::rgb(r, g, b))
}

fn arb_mode() -> impl Strategy<Value = Brightness> {
    prop_oneof![Just(Brightness::Light), Just(Brightness::Dark)]
}

fn arb_strength() -> impl Strategy<Value = BrandingStrength> {
    proptest::sample::select(BrandingStrength::all().to_vec())
}

fn roles_for(primary: Color, mode: Brightness) -> RoleSet {
    resolve_roles(&Seed::Primary(primary), mode).unwrap()
}

/// Largest per-channel distance between two colors.
fn max_channel_gap(a: Color, b: Color) -> u8 {
    [a.r.abs_diff(b.r), a.g.abs_diff(b.g), a.b.abs_diff(b.b)]
        .into_iter()
        .max()
        .unwrap_or(0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// No branding leaves the resolved surface and background untouched.
    #[test]
    fn none_strength_is_identity(primary in arb_opaque(), mode in arb_mode()) {
        let roles = roles_for(primary, mode);
        let s = derive_surfaces(&roles, mode, BrandingStrength::None);
        prop_assert_eq!(s.surface, roles.surface);
        prop_assert_eq!(s.background, roles.background);
    }

    /// Heavy is the only strength that moves the scaffold.
    #[test]
    fn heavy_moves_scaffold(
        primary in arb_opaque(),
        mode in arb_mode(),
        strength in arb_strength(),
    ) {
        let roles = roles_for(primary, mode);
        // Alpha 15 needs a gap of at least 9 to move a channel.
        prop_assume!(max_channel_gap(primary, roles.background) >= 9);
        let s = derive_surfaces(&roles, mode, strength);
        if strength == BrandingStrength::Heavy {
            prop_assert_ne!(s.scaffold_background, roles.background);
        } else {
            prop_assert_eq!(s.scaffold_background, roles.background);
        }
    }

    #[test]
    fn background_tinted_more_than_surface(mode in arb_mode(), strength in arb_strength()) {
        prop_assume!(strength != BrandingStrength::None);
        let i = blend_intensity(strength, mode);
        prop_assert!(i.background > i.surface);
    }

    #[test]
    fn surfaces_are_idempotent(
        primary in arb_opaque(),
        mode in arb_mode(),
        strength in arb_strength(),
    ) {
        let roles = roles_for(primary, mode);
        prop_assert_eq!(
            derive_surfaces(&roles, mode, strength),
            derive_surfaces(&roles, mode, strength)
        );
    }

    /// Dialogs always share the branded surface.
    #[test]
    fn dialog_matches_surface(
        primary in arb_opaque(),
        mode in arb_mode(),
        strength in arb_strength(),
    ) {
        let s = derive_surfaces(&roles_for(primary, mode), mode, strength);
        prop_assert_eq!(s.dialog_background, s.surface);
    }

    /// With any visible gap between accent and page, neither region color
    /// lands on the page.
    #[test]
    fn region_never_collides(
        primary in arb_opaque(),
        reference in arb_opaque(),
        mode in arb_mode(),
    ) {
        // Alpha 8 needs a gap of at least 16 to move a channel.
        prop_assume!(max_channel_gap(primary, reference) >= 16);
        let region = derive_region_colors(primary, reference, mode, None);
        prop_assert_ne!(region.container, reference);
        prop_assert_ne!(region.header, reference);
    }

    /// The second stage keeps the container off the page even when the
    /// container starts from a different base.
    #[test]
    fn region_container_escapes_reference(
        primary in arb_opaque(),
        base in arb_opaque(),
        mode in arb_mode(),
    ) {
        prop_assume!(max_channel_gap(primary, base) >= 40);
        // Page color equal to where the container would land.
        let reference = blend(primary, base, if mode.is_dark() { 16 } else { 8 });
        let region = RegionBlend::new(primary, mode).base(base).derive(reference);
        prop_assert_ne!(region.container, reference);
    }

    #[test]
    fn override_is_trusted(
        primary in arb_opaque(),
        reference in arb_opaque(),
        container in arb_opaque(),
        mode in arb_mode(),
    ) {
        let region = derive_region_colors(primary, reference, mode, Some(container));
        prop_assert_eq!(region.container, container);
        let same = derive_region_colors(primary, reference, mode, Some(reference));
        prop_assert_eq!(same.container, reference);
    }

    /// Every on-color is pure black or pure white.
    #[test]
    fn on_colors_are_black_or_white(primary in arb_opaque(), mode in arb_mode()) {
        let roles = roles_for(primary, mode);
        for on in [
            roles.on_primary,
            roles.on_secondary,
            roles.on_surface,
            roles.on_background,
            roles.on_error,
        ] {
            prop_assert!(on == Color::BLACK || on == Color::WHITE);
        }
    }
}

#[test]
fn worked_region_scenarios() {
    let red = Color::rgb(200, 50, 50);
    let plain = derive_region_colors(red, Color::WHITE, Brightness::Light, None);
    assert_eq!(plain.container, blend(red, Color::WHITE, 8));
    assert_eq!(plain.container, Color::rgb(253, 249, 249));

    let escalated = RegionBlend::new(red, Brightness::Light)
        .base(Color::WHITE)
        .derive(plain.container);
    assert_eq!(escalated.container, Color::rgb(251, 241, 241));
    assert_eq!(escalated.header, Color::rgb(247, 226, 226));
}

#[test]
fn blue_seed_in_dark_mode() {
    let roles = roles_for(Color::rgb(33, 150, 243), Brightness::Dark);
    assert_eq!(roles.iter().count(), 12);
    assert!(roles.iter().all(|(_, c)| c.is_opaque()));
}
