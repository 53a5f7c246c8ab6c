//! Count-up animation for price amounts

use std::time::Duration;

/// Integer shown by a price element, ignoring every non-digit character.
///
/// `"1.500"`, `"R$ 1 500"` and `"1,500/mês"` all give `1500`. Returns `None`
/// when there is no digit or the value overflows.
pub fn parse_amount(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Cubic ease-out: `1 - (1 - p)^3`, with `p` clamped to `[0, 1]`
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// A single count from zero to `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    duration_ms: f64,
}

impl CounterAnimation {
    pub fn new(target: u64, duration: Duration) -> Self {
        Self {
            target,
            duration_ms: duration.as_secs_f64() * 1000.0,
        }
    }

    /// Linear progress after `elapsed_ms`, in `[0, 1]`
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Displayed value after `elapsed_ms`; exactly `target` once finished
    pub fn value_at(&self, elapsed_ms: f64) -> u64 {
        let eased = ease_out_cubic(self.progress(elapsed_ms));
        let value = (self.target as f64 * eased).floor() as u64;
        value.min(self.target)
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }

    /// Text shown after `elapsed_ms`.
    ///
    /// Grouping is left to `format`; in the browser that is the page locale's
    /// `Number.prototype.toLocaleString`.
    pub fn label_at<F>(&self, elapsed_ms: f64, format: F) -> String
    where
        F: Fn(u64) -> String,
    {
        format(self.value_at(elapsed_ms))
    }
}
