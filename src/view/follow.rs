//! Follow-scroll policy: keep the newest output in view, non-intrusively.

use crate::surface::Surface;

/// How close to the bottom (in display rows) still counts as "following".
///
/// Roughly one short paragraph.
pub const FOLLOW_SLACK_ROWS: usize = 4;

/// Snap the scroll position to the bottom if the viewer is near it.
///
/// Stateless by design: the distance to the maximum scroll extent is
/// recomputed on every call rather than tracking "was at bottom before
/// this chunk". A reader who has scrolled away further than the slack is
/// never force-scrolled.
pub fn snap_if_near_bottom(surface: &mut Surface) {
    let max = surface.max_scroll();
    if max.saturating_sub(surface.scroll_top()) <= FOLLOW_SLACK_ROWS {
        surface.set_scroll_top(max);
    }
}
