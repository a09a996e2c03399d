//! Critically damped spring used by the metric counters.
//!
//! Starting at rest from zero, a critically damped spring follows
//! `x(t) = target * (1 - (1 + wt) * e^(-wt))`. It never overshoots and
//! decelerates into the target.

/// `(1 + x) * e^(-x) = 1e-3` at this x: the spring is within 0.1% of its
/// travel, so it snaps to the target there.
const SETTLE_FACTOR: f64 = 9.233;

/// Decimal places to show for a target value: 0 for whole numbers, 1 otherwise.
pub fn decimals_for(target: f64) -> usize {
    if target.fract() == 0.0 {
        0
    } else {
        1
    }
}

pub fn format_value(value: f64, decimals: usize) -> String {
    if decimals == 0 {
        format!("{}", value.round() as i64)
    } else {
        format!("{:.*}", decimals, value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringCounter {
    target: f64,
    omega: f64,
    decimals: usize,
}

impl SpringCounter {
    /// A counter that settles on `target` after `duration_secs`.
    pub fn new(target: f64, duration_secs: f64) -> Self {
        let omega = if duration_secs > 0.0 {
            SETTLE_FACTOR / duration_secs
        } else {
            f64::INFINITY
        };
        Self {
            target,
            omega,
            decimals: decimals_for(target),
        }
    }

    pub fn decimals(&self) -> usize {
        self.decimals
    }

    pub fn value_at(&self, elapsed_secs: f64) -> f64 {
        if elapsed_secs <= 0.0 {
            return 0.0;
        }
        let wt = self.omega * elapsed_secs;
        if wt >= SETTLE_FACTOR {
            return self.target;
        }
        let remaining = (1.0 + wt) * (-wt).exp();
        self.target * (1.0 - remaining)
    }

    pub fn is_settled(&self, elapsed_secs: f64) -> bool {
        elapsed_secs > 0.0 && self.omega * elapsed_secs >= SETTLE_FACTOR
    }

    pub fn display_at(&self, elapsed_secs: f64) -> String {
        format_value(self.value_at(elapsed_secs), self.decimals)
    }

    pub fn display_at_rest(&self) -> String {
        format_value(self.target, self.decimals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_decimal_target_rests_on_one_decimal() {
        let counter = SpringCounter::new(4.8, 2.0);
        assert_eq!(counter.decimals(), 1);
        assert_eq!(counter.display_at_rest(), "4.8");
        assert_eq!(counter.display_at(2.0), "4.8");
        assert_eq!(counter.display_at(10.0), "4.8");
    }

    #[test]
    fn whole_targets_show_no_decimals() {
        let counter = SpringCounter::new(320.0, 2.0);
        assert_eq!(counter.display_at_rest(), "320");
        assert!(!counter.display_at(0.7).contains('.'));
    }

    #[test]
    fn intermediate_values_keep_target_precision() {
        let counter = SpringCounter::new(4.8, 2.0);
        let shown = counter.display_at(0.4);
        assert_eq!(shown.split('.').nth(1).map(str::len), Some(1), "{shown}");
    }

    #[test]
    fn starts_at_zero_and_lands_exactly_on_target() {
        let counter = SpringCounter::new(50.0, 2.0);
        assert_eq!(counter.value_at(0.0), 0.0);
        assert!(!counter.is_settled(1.9));
        assert!(counter.is_settled(2.0));
        assert_eq!(counter.value_at(2.0), 50.0);
    }

    #[test]
    fn rises_monotonically_without_overshoot() {
        let counter = SpringCounter::new(14.0, 2.0);
        let mut last = 0.0;
        for step in 1..=60 {
            let value = counter.value_at(step as f64 / 30.0);
            assert!(value >= last);
            assert!(value <= 14.0);
            last = value;
        }
    }

    #[test]
    fn decelerates_into_the_target() {
        let counter = SpringCounter::new(100.0, 2.0);
        let early = counter.value_at(0.6) - counter.value_at(0.5);
        let late = counter.value_at(1.6) - counter.value_at(1.5);
        assert!(late < early);
    }

    #[test]
    fn zero_duration_settles_on_first_frame() {
        let counter = SpringCounter::new(4.8, 0.0);
        assert_eq!(counter.value_at(0.016), 4.8);
    }
}
