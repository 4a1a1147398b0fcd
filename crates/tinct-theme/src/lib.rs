//! # tinct-theme: Branded Color Scheme Engine
//!
//! Derives a complete, internally consistent set of UI colors from one
//! accent color (or a partial role set) and a few styling knobs. The same
//! seed, mode and strength always produce the same colors.
//!
//! # Architecture
//!
//! ```text
//! Seed + Brightness
//!     │
//!     ▼
//! roles.rs:     complete RoleSet (variants, secondary, on-colors)
//!     │
//!     ▼  + BrandingStrength + true black
//! surface.rs:   branded surface / background / scaffold / dialog
//!     │
//!     ▼
//! region.rs:    container + header for cards and panels
//!     │
//!     ▼
//! scheme.rs:    Scheme bundle (builtin presets, `:set` options)
//! ```
//!
//! Surface and region derivation both rely on [`collision`]: a derived
//! color that lands exactly on the page color underneath is re-blended
//! once toward the primary.
//!
//! # Color Space
//!
//! Blending is integer alpha compositing on 8-bit channels, so equality is
//! exact. Lightness and hue adjustments go through OKLCH in `tinct-color`.

pub mod builtin;
pub mod collision;
pub mod contrast;
pub mod error;
pub mod mode;
pub mod options;
pub mod panel;
pub mod region;
pub mod roles;
pub mod scheme;
pub mod surface;

pub use builtin::{builtin_names, builtin_seed};
pub use error::{ParseError, ThemeError};
pub use mode::{BrandingStrength, Brightness};
pub use options::{SetDirective, parse_set};
pub use panel::{Panel, PanelCommand, PanelState};
pub use region::{RegionBlend, RegionColors, derive_region_colors};
pub use roles::{PartialRoles, Role, RoleSet, Seed, resolve_roles};
pub use scheme::{Scheme, SchemeConfig, SeedSource};
pub use surface::{DerivedSurfaces, SurfaceBranding, derive_surfaces};
