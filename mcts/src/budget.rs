use std::time::{Duration, Instant};

/// How long a search may run. At least one simulation always runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Budget {
    /// Wall-clock time.
    Time(Duration),
    /// A fixed number of simulations, for reproducible runs.
    Simulations(u64),
}

impl Budget {
    /// Time budget from a number of seconds. Negative and NaN budgets clamp to zero.
    pub fn from_secs_f64(seconds: f64) -> Self {
        Budget::Time(Duration::try_from_secs_f64(seconds.max(0.0)).unwrap_or(Duration::MAX))
    }

    pub(crate) fn exhausted(&self, start: Instant, simulations: u64) -> bool {
        match *self {
            Budget::Time(duration) => start.elapsed() >= duration,
            Budget::Simulations(limit) => simulations >= limit,
        }
    }
}

impl From<Duration> for Budget {
    fn from(duration: Duration) -> Self {
        Budget::Time(duration)
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::Budget;

    #[test]
    fn seconds_clamp() {
        assert_eq!(Budget::from_secs_f64(1.5), Budget::Time(Duration::from_millis(1500)));
        assert_eq!(Budget::from_secs_f64(-3.0), Budget::Time(Duration::ZERO));
        assert_eq!(Budget::from_secs_f64(f64::NAN), Budget::Time(Duration::ZERO));
        assert_eq!(Budget::from_secs_f64(f64::INFINITY), Budget::Time(Duration::MAX));
    }

    #[test]
    fn exhaustion() {
        let start = Instant::now();
        assert!(Budget::Time(Duration::ZERO).exhausted(start, 0));
        assert!(!Budget::Time(Duration::from_secs(3600)).exhausted(start, 1_000_000));
        assert!(!Budget::Simulations(3).exhausted(start, 2));
        assert!(Budget::Simulations(3).exhausted(start, 3));
    }
}
