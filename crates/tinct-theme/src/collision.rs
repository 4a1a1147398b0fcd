//! The shared collision check used by surface branding and region colors.
//!
//! A derived color "collides" when it is exactly equal (all four channels)
//! to the color it must stay distinguishable from. Each caller decides how
//! many colors it checks and how to rebuild them; this module only runs the
//! one-shot check and logs the escalation.

use tinct_color::Color;
use tracing::trace;

/// Check `colors` against `reference` and rebuild them once on a collision.
///
/// If any color equals `reference`, `rebuild` is called with the current
/// colors and its result is returned unchecked. Returns the (possibly
/// rebuilt) colors and whether an escalation happened.
pub fn avoid_collision<const N: usize>(
    label: &'static str,
    reference: Color,
    colors: [Color; N],
    rebuild: impl FnOnce([Color; N]) -> [Color; N],
) -> ([Color; N], bool) {
    if !colors.contains(&reference) {
        return (colors, false);
    }
    let rebuilt = rebuild(colors);
    trace!(
        stage = label,
        reference = %reference,
        before = ?colors,
        after = ?rebuilt,
        "collision escalated"
    );
    (rebuilt, true)
}
