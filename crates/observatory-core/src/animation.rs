//! Deterministic frame machines behind the timer-driven effects.
//!
//! The web crate owns the actual interval timers; these types only know how
//! to advance one frame at a time, so tests can drive them without a clock.

use crate::constants::{COUNTER_DURATION_MS, COUNTER_GROUPING_MIN, COUNTER_TICK_MS};
use crate::format::group_thousands;

/// Interpolates a displayed statistic from 0 to `target` over the fixed
/// counter duration. The final frame always renders the exact target.
pub struct CounterAnimation {
    target: f64,
    increment: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: f64) -> Self {
        let steps = COUNTER_DURATION_MS / COUNTER_TICK_MS;
        Self {
            target,
            increment: target / steps,
            current: 0.0,
            done: false,
        }
    }

    /// Advance one tick and return the display string for the new frame.
    pub fn step(&mut self) -> String {
        if !self.done {
            self.current += self.increment;
            if self.current >= self.target {
                self.current = self.target;
                self.done = true;
            }
        }
        format_counter_value(self.target, self.current)
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn target(&self) -> f64 {
        self.target
    }
}

/// Parse a counter target attribute. Non-numeric and non-finite values are
/// rejected; a NaN or infinite target could never reach its final frame.
pub fn parse_counter_target(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|t| t.is_finite())
}

/// Counter display policy: large targets render as grouped integers, small
/// ones keep one decimal place.
pub fn format_counter_value(target: f64, current: f64) -> String {
    if target >= COUNTER_GROUPING_MIN {
        group_thousands(current.max(0.0).floor() as u64)
    } else {
        format!("{current:.1}")
    }
}

/// Reveals a text one character per frame, char-boundary safe.
pub struct Typewriter {
    chars: Vec<char>,
    emitted: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            emitted: 0,
        }
    }

    /// Advance one frame and return the currently visible prefix.
    pub fn step(&mut self) -> String {
        if self.emitted < self.chars.len() {
            self.emitted += 1;
        }
        self.chars[..self.emitted].iter().collect()
    }

    pub fn is_done(&self) -> bool {
        self.emitted >= self.chars.len()
    }
}
