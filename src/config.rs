//! Behavior tunables for the landing page, gathered in one place.

/// Height of the fixed header, compensated when scrolling to an anchor.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// A section counts as current once `scrollY >= top - margin`.
pub const SCROLL_SPY_MARGIN_PX: f64 = 200.0;

/// Scroll depth past which the header background turns more opaque.
pub const HEADER_SHADE_AT_PX: f64 = 100.0;

pub const HEADER_BG_TOP: &str = "background: rgba(255, 255, 255, 0.95)";
pub const HEADER_BG_SCROLLED: &str = "background: rgba(255, 255, 255, 0.98)";

/// Entrance animations fire at 10% visibility, pulled in 50px from the
/// viewport bottom so elements start moving slightly before they fully show.
pub const ENTRANCE_THRESHOLD: f64 = 0.1;
pub const ENTRANCE_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Hero stats animate once half the hero is on screen.
pub const HERO_STATS_THRESHOLD: f64 = 0.5;

/// Projections animate at 10% visibility of their section.
pub const PROJECTIONS_THRESHOLD: f64 = 0.1;

/// Total counter run time.
pub const COUNTER_DURATION_MS: u32 = 2000;

/// Projections still animate this long after mount in case the watcher
/// never fires (section already in view, no intersection transition).
pub const PROJECTIONS_FALLBACK_MS: u32 = 2000;

/// The hero scrolls at half speed against the page.
pub const PARALLAX_RATE: f64 = -0.5;

/// How far cards rise while hovered.
pub const HOVER_LIFT_PX: f64 = 5.0;
