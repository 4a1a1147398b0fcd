//! Region colors: a container body and a header band for a bounded area
//! (a card, a panel), derived so that they don't vanish into the page.
//!
//! The container is the primary painted lightly over a base; the header is
//! the primary painted again over the container. Both are then checked
//! against the reference page background in two stages:
//!
//! 1. If either color equals the reference, both are re-blended toward the
//!    primary at the escalation alpha.
//! 2. If the container still equals the reference, it is re-blended once
//!    more. The header is not checked again.
//!
//! Every color is blended at most three times, so derivation always
//! terminates. A caller-supplied container skips all of this.

use tinct_color::{Color, blend};

use crate::collision::avoid_collision;
use crate::mode::Brightness;

/// Dark mode scales every region alpha by this factor.
pub const DARK_REGION_MULTIPLIER: u8 = 2;

const LIGHT_FACTORS: RegionFactors = RegionFactors {
    container: 8,
    header: 20,
    escalation: 10,
};

/// Alpha values used for region blending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionFactors {
    pub container: u8,
    pub header: u8,
    pub escalation: u8,
}

/// Region alphas for `mode`.
#[must_use]
pub const fn region_factors(mode: Brightness) -> RegionFactors {
    match mode {
        Brightness::Light => LIGHT_FACTORS,
        Brightness::Dark => RegionFactors {
            container: LIGHT_FACTORS.container.saturating_mul(DARK_REGION_MULTIPLIER),
            header: LIGHT_FACTORS.header.saturating_mul(DARK_REGION_MULTIPLIER),
            escalation: LIGHT_FACTORS.escalation.saturating_mul(DARK_REGION_MULTIPLIER),
        },
    }
}

/// Container body and header band of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionColors {
    pub container: Color,
    pub header: Color,
}

/// Region color configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionBlend {
    primary: Color,
    mode: Brightness,
    base: Option<Color>,
    container_override: Option<Color>,
}

impl RegionBlend {
    #[must_use]
    pub const fn new(primary: Color, mode: Brightness) -> Self {
        Self { primary, mode, base: None, container_override: None }
    }

    /// Builder: blend the container over `base` (typically the theme
    /// surface) instead of over the reference background.
    #[must_use]
    pub const fn base(mut self, base: Color) -> Self {
        self.base = Some(base);
        self
    }

    /// Builder: use `container` verbatim when present.
    #[must_use]
    pub const fn container_override(mut self, container: Option<Color>) -> Self {
        self.container_override = container;
        self
    }

    /// Derive the region colors against the page background `reference`.
    #[must_use]
    pub fn derive(&self, reference: Color) -> RegionColors {
        let primary = self.primary;
        let factors = region_factors(self.mode);

        if let Some(container) = self.container_override {
            return RegionColors {
                container,
                header: blend(primary, container, factors.header),
            };
        }

        let container = blend(primary, self.base.unwrap_or(reference), factors.container);
        let header = blend(primary, container, factors.header);

        let escalate = |c: Color| blend(primary, c, factors.escalation);
        let ([container, header], _) =
            avoid_collision("region", reference, [container, header], |[c, h]| {
                [escalate(c), escalate(h)]
            });
        let ([container], _) =
            avoid_collision("region-container", reference, [container], |[c]| [escalate(c)]);

        RegionColors { container, header }
    }
}

/// Derive a region's container and header against `reference`.
///
/// The container is blended over `reference` itself. A `container_override`
/// is used as-is and the header is blended over it without any checks.
#[must_use]
pub fn derive_region_colors(
    primary: Color,
    reference: Color,
    mode: Brightness,
    container_override: Option<Color>,
) -> RegionColors {
    RegionBlend::new(primary, mode)
        .container_override(container_override)
        .derive(reference)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    const RED: Color = Color::rgb(200, 50, 50);

    fn grey(v: u8) -> Color {
        Color::rgb(v, v, v)
    }

    #[test]
    fn factors_per_mode() {
        assert_eq!(
            region_factors(Brightness::Light),
            RegionFactors { container: 8, header: 20, escalation: 10 }
        );
        assert_eq!(
            region_factors(Brightness::Dark),
            RegionFactors { container: 16, header: 40, escalation: 20 }
        );
    }

    #[test]
    fn light_card_on_white() {
        let region = derive_region_colors(RED, Color::WHITE, Brightness::Light, None);
        assert_eq!(region.container, Color::rgb(253, 249, 249));
        assert_eq!(region.header, Color::rgb(249, 233, 233));
    }

    #[test]
    fn container_matching_reference_escalates_both() {
        let reference = Color::rgb(253, 249, 249);
        let region = RegionBlend::new(RED, Brightness::Light)
            .base(Color::WHITE)
            .derive(reference);
        assert_eq!(region.container, Color::rgb(251, 241, 241));
        assert_eq!(region.header, Color::rgb(247, 226, 226));
    }

    #[test]
    fn dark_card_uses_doubled_alphas() {
        let region = derive_region_colors(RED, grey(18), Brightness::Dark, None);
        assert_eq!(region.container, Color::rgb(29, 20, 20));
        assert_eq!(region.header, Color::rgb(56, 25, 25));
    }

    #[test]
    fn dark_escalation_blends_at_twenty() {
        // Container over white at 16 lands on the reference, so both
        // colors move again at the dark escalation alpha.
        let reference = Color::rgb(252, 242, 242);
        let region = RegionBlend::new(RED, Brightness::Dark)
            .base(Color::WHITE)
            .derive(reference);
        assert_eq!(region.container, Color::rgb(248, 227, 227));
        assert_eq!(region.header, Color::rgb(241, 199, 199));
        // The light escalation step would have stopped short.
        assert_ne!(region.container, blend(RED, reference, 10));
    }

    #[test]
    fn header_collision_then_container_second_stage() {
        // header == reference; the first escalation drags the container
        // onto the reference, so the second stage moves it again.
        let region = RegionBlend::new(grey(180), Brightness::Light)
            .base(grey(200))
            .derive(grey(198));
        assert_eq!(region.container, grey(197));
        assert_eq!(region.header, grey(197));
    }

    #[test]
    fn header_is_not_rechecked() {
        let region = RegionBlend::new(grey(160), Brightness::Light)
            .base(grey(150))
            .derive(grey(151));
        assert_eq!(region.container, grey(150));
        assert_eq!(region.header, grey(151));
    }

    #[test]
    fn override_is_used_verbatim() {
        let card = Color::rgb(240, 240, 255);
        let region = derive_region_colors(RED, Color::WHITE, Brightness::Light, Some(card));
        assert_eq!(region.container, card);
        assert_eq!(region.header, blend(RED, card, 20));
    }

    #[test]
    fn override_skips_collision_checks() {
        let region =
            derive_region_colors(RED, Color::WHITE, Brightness::Dark, Some(Color::WHITE));
        assert_eq!(region.container, Color::WHITE);
        assert_eq!(region.header, blend(RED, Color::WHITE, 40));
    }

    #[test]
    fn dark_mode_blends_twice_as_hard() {
        let reference = Color::rgb(18, 18, 18);
        let region = derive_region_colors(RED, reference, Brightness::Dark, None);
        assert_eq!(region.container, blend(RED, reference, 16));
        assert_eq!(region.header, blend(RED, region.container, 40));
        assert_ne!(region.container, reference);
        assert_ne!(region.header, reference);
    }

    #[test]
    #[traced_test]
    fn escalation_is_logged() {
        let _ = RegionBlend::new(RED, Brightness::Light)
            .base(Color::WHITE)
            .derive(Color::rgb(253, 249, 249));
        assert!(logs_contain("collision escalated"));
        assert!(logs_contain("stage=\"region\""));
        assert!(!logs_contain("stage=\"region-container\""));
    }

    #[test]
    #[traced_test]
    fn quiet_without_collision() {
        let _ = derive_region_colors(RED, Color::WHITE, Brightness::Light, None);
        assert!(!logs_contain("collision escalated"));
    }

    #[test]
    fn base_defaults_to_reference() {
        let reference = Color::rgb(250, 250, 250);
        assert_eq!(
            RegionBlend::new(RED, Brightness::Light).derive(reference),
            RegionBlend::new(RED, Brightness::Light).base(reference).derive(reference)
        );
    }
}
