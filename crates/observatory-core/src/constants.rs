// Shared numeric contracts used by both the core logic and the web frontend.

// Distance conversion factors (per light-year)
pub const KM_PER_LIGHT_YEAR: f64 = 9.461e12;
pub const MILES_PER_LIGHT_YEAR: f64 = 5.879e12;
pub const SHUTTLE_YEARS_PER_LIGHT_YEAR: f64 = 37_000.0; // Space Shuttle at ~28,000 km/h

// Logarithmic size scaling
pub const SIZE_BASE_UNIT: f64 = 20.0; // pixels per natural-log unit
pub const SIZE_CAP_PX: f64 = 200.0; // largest rendered circle regardless of magnitude

// Statistic counters
pub const COUNTER_DURATION_MS: f64 = 2000.0;
pub const COUNTER_TICK_MS: f64 = 16.0; // ~60 fps
pub const COUNTER_GROUPING_MIN: f64 = 1000.0; // targets at or above render as grouped integers

// Decorative particles
pub const PARTICLE_COUNT: usize = 50;
pub const PARTICLE_MAX_ORIGIN_PCT: f64 = 95.0; // keep origins inside the container
pub const PARTICLE_MIN_SIZE_PX: f64 = 1.0;
pub const PARTICLE_SIZE_SPAN_PX: f64 = 4.0;
pub const PARTICLE_MIN_OPACITY: f64 = 0.2;
pub const PARTICLE_OPACITY_SPAN: f64 = 0.8;
pub const PARTICLE_MIN_DURATION_SEC: f64 = 5.0;
pub const PARTICLE_DURATION_SPAN_SEC: f64 = 10.0;
pub const PARTICLE_MAX_DELAY_SEC: f64 = 5.0;
