// Frontend wiring and timing constants. Pure numeric contracts live in
// observatory-core; everything here only tunes the DOM glue.

// Navbar gains the `scrolled` class past this scroll depth
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 50.0;

// Hero parallax: fraction of the scroll offset applied, and a hard cap so
// the background never drifts far enough to introduce overflow
pub const PARALLAX_SPEED: f64 = 0.5;
pub const PARALLAX_MAX_OFFSET_PX: f64 = 400.0;

// Intersection thresholds (fraction of the element visible)
pub const STATS_VISIBILITY_THRESHOLD: f64 = 0.5;
pub const TIMELINE_VISIBILITY_THRESHOLD: f64 = 0.3;

// Timeline items slide in from alternating sides by this much
pub const TIMELINE_SLIDE_PX: f64 = 50.0;

// Typewriter effect
pub const TYPEWRITER_CHAR_MS: i32 = 50;
pub const TYPEWRITER_START_DELAY_MS: i32 = 100;

// Charts paint after the page has settled
pub const CHART_SETTLE_DELAY_MS: i32 = 1000;

// `.loading` placeholders disappear after this long
pub const LOADING_HIDE_DELAY_MS: i32 = 2000;

// Page-leave fade duration; must match the overlay's CSS transition
pub const PAGE_FADE_MS: i32 = 300;
