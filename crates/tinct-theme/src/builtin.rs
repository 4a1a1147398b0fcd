//! Named preset seeds: ready-to-use accent families.
//!
//! Each preset pins the four accent roles separately for light and dark
//! mode. Everything else (surfaces, error, on-colors) is left to the
//! resolver.

use tinct_color::Color;

use crate::mode::Brightness;
use crate::roles::{PartialRoles, Role, Seed};

/// The preset used when nothing else is configured.
pub const DEFAULT_SCHEME: &str = "material";

/// Accent quartet: primary, primary variant, secondary, secondary variant.
type Accents = [u32; 4];

struct Preset {
    name: &'static str,
    light: Accents,
    dark: Accents,
}

const PRESETS: &[Preset] = &[
    Preset {
        name: "material",
        light: [0x6200ee, 0x3700b3, 0x03dac6, 0x018786],
        dark: [0xbb86fc, 0x3700b3, 0x03dac6, 0x03dac6],
    },
    Preset {
        name: "blue",
        light: [0x1565c0, 0x0d47a1, 0x039be5, 0x01579b],
        dark: [0x90caf9, 0x0d47a1, 0x81d4fa, 0xe1f5fe],
    },
    Preset {
        name: "indigo",
        light: [0x303f9f, 0x1a237e, 0x448aff, 0x0d47a1],
        dark: [0x7986cb, 0x3949ab, 0x82b1ff, 0x2962ff],
    },
    Preset {
        name: "hippie-blue",
        light: [0x4e7f9a, 0x2b5d76, 0xf98d94, 0xc45b63],
        dark: [0x8db4c8, 0x4e7f9a, 0xfcc4c8, 0xf98d94],
    },
    Preset {
        name: "aqua-blue",
        light: [0x35a0cb, 0x1d7aa0, 0xfd8c45, 0xc85f17],
        dark: [0x5fb9dd, 0x35a0cb, 0xfdab77, 0xfd8c45],
    },
    Preset {
        name: "sakura",
        light: [0xe45c7a, 0xb0304f, 0x946a57, 0x6a4536],
        dark: [0xeeb0c0, 0xe45c7a, 0xc99d86, 0x946a57],
    },
    Preset {
        name: "mandy-red",
        light: [0xcd5758, 0x9b2b2e, 0x57c8d3, 0x1f98a3],
        dark: [0xda8585, 0xcd5758, 0x68cdd7, 0x57c8d3],
    },
    Preset {
        name: "green",
        light: [0x2e7d32, 0x1b5e20, 0x00897b, 0x00574e],
        dark: [0x81c784, 0x2e7d32, 0x80cbc4, 0x00897b],
    },
    Preset {
        name: "money",
        light: [0x264e36, 0x173626, 0x77a37a, 0x4f7a52],
        dark: [0x7bab89, 0x264e36, 0xa8cdaa, 0x77a37a],
    },
    Preset {
        name: "deep-purple",
        light: [0x4527a0, 0x311b92, 0xb388ff, 0x7c4dff],
        dark: [0xb39ddb, 0x4527a0, 0xd1c4e9, 0xb388ff],
    },
];

/// Look up a builtin seed by name for `mode`.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_seed(name: &str, mode: Brightness) -> Option<Seed> {
    let preset = PRESETS.iter().find(|p| p.name == name)?;
    let [primary, primary_variant, secondary, secondary_variant] = if mode.is_dark() {
        preset.dark
    } else {
        preset.light
    };
    let roles = PartialRoles::new(Color::from_argb(opaque(primary)))
        .with(Role::PrimaryVariant, Color::from_argb(opaque(primary_variant)))
        .with(Role::Secondary, Color::from_argb(opaque(secondary)))
        .with(Role::SecondaryVariant, Color::from_argb(opaque(secondary_variant)));
    Some(Seed::Roles(roles))
}

/// List all available builtin scheme names.
#[must_use]
pub fn builtin_names() -> Vec<&'static str> {
    PRESETS.iter().map(|p| p.name).collect()
}

const fn opaque(rgb: u32) -> u32 {
    0xff00_0000 | rgb
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::resolve_roles;

    #[test]
    fn all_builtins_resolve() {
        for name in builtin_names() {
            for mode in [Brightness::Light, Brightness::Dark] {
                let seed = builtin_seed(name, mode);
                assert!(seed.is_some(), "Builtin '{name}' missing");
                assert!(resolve_roles(&seed.unwrap(), mode).is_ok());
            }
        }
    }

    #[test]
    fn unknown_returns_none() {
        assert!(builtin_seed("nonexistent", Brightness::Light).is_none());
    }

    #[test]
    fn default_is_a_builtin() {
        assert!(builtin_names().contains(&DEFAULT_SCHEME));
        assert_eq!(builtin_names().len(), 10);
    }

    #[test]
    fn material_light_accents() {
        let seed = builtin_seed("material", Brightness::Light).unwrap();
        let roles = resolve_roles(&seed, Brightness::Light).unwrap();
        assert_eq!(roles.primary, Color::rgb(0x62, 0x00, 0xee));
        assert_eq!(roles.secondary_variant, Color::rgb(0x01, 0x87, 0x86));
        assert_eq!(roles.on_primary, Color::WHITE);
        assert_eq!(roles.on_secondary, Color::BLACK);
    }

    #[test]
    fn modes_differ() {
        for name in builtin_names() {
            assert_ne!(
                builtin_seed(name, Brightness::Light),
                builtin_seed(name, Brightness::Dark),
                "{name}"
            );
        }
    }

    #[test]
    fn presets_are_opaque() {
        for name in builtin_names() {
            let seed = builtin_seed(name, Brightness::Dark).unwrap();
            assert!(seed.primary().is_opaque(), "{name}");
        }
    }
}
