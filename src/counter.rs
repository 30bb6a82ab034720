//! Animated count-up state for a single displayed statistic.
//!
//! Each statistic on screen owns one [`Counter`]. The counter starts idle,
//! is triggered exactly once when its page first becomes visible, interpolates
//! from zero to its target along a cubic ease-out, and then stays done.
//! Triggering again after completion is a no-op, matching a run-once
//! visibility policy.
//!
//! The counter takes the current time as an explicit argument so that the
//! frame loop and tests drive it the same way; it performs O(1) work per call
//! and shares no state with other counters.

use std::time::{Duration, Instant};

use crate::numeric::{compute_eased_value, extract_numeric, format_value, ParsedValue};

/// Default animation length.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);

/// Animation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Not yet triggered.
    Idle,
    /// Counting up since `started`.
    Animating { started: Instant },
    /// Terminal; the display equals the canonical target text.
    Done,
}

/// Count-up animation state for one display value.
#[derive(Debug, Clone)]
pub struct Counter {
    raw: String,
    parsed: Option<ParsedValue>,
    duration: Duration,
    phase: Phase,
}

impl Counter {
    /// Create a counter for a display string.
    ///
    /// A string without digits cannot be animated: the counter is born in
    /// its terminal state and always displays the string verbatim.
    pub fn new(display: &str) -> Self {
        let parsed = extract_numeric(display);
        let phase = if parsed.is_some() {
            Phase::Idle
        } else {
            Phase::Done
        };
        Self {
            raw: display.to_string(),
            parsed,
            duration: DEFAULT_DURATION,
            phase,
        }
    }

    /// Override the animation duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Start the animation if it has not run yet.
    ///
    /// Idempotent: calling while animating or after completion does nothing,
    /// so re-entering the viewport never restarts a finished count-up.
    pub fn trigger(&mut self, now: Instant) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Animating { started: now };
        }
    }

    /// Whether the counter has reached its terminal state.
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Whether the counter has not been triggered yet.
    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// The text to display at time `now`, advancing the phase if the
    /// animation has completed.
    pub fn display(&mut self, now: Instant) -> String {
        match self.phase {
            Phase::Idle => match self.parsed {
                Some(_) => "0".to_string(),
                None => self.raw.clone(),
            },
            Phase::Animating { started } => {
                let elapsed = now.saturating_duration_since(started);
                if elapsed >= self.duration || self.duration.is_zero() {
                    self.phase = Phase::Done;
                    return self.final_text();
                }
                let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
                match &self.parsed {
                    Some(p) => {
                        let current = compute_eased_value(p.numeric, progress);
                        format_value(current, &p.prefix, &p.suffix, p.has_decimal)
                    }
                    None => self.raw.clone(),
                }
            }
            Phase::Done => self.final_text(),
        }
    }

    /// Canonical formatting of the target value.
    ///
    /// Rendered from the parsed target rather than the last animation frame,
    /// so floating rounding during interpolation cannot drift the end state.
    fn final_text(&self) -> String {
        match &self.parsed {
            Some(p) => format_value(p.numeric, &p.prefix, &p.suffix, p.has_decimal),
            None => self.raw.clone(),
        }
    }
}
