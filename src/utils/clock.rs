// Wall-clock source used by the ETA estimator

/// Current time as unix seconds
pub trait Clock {
    fn now_seconds(&self) -> f64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_seconds(&self) -> f64 {
        // Whole seconds, matching the floored record timestamps
        chrono::Utc::now().timestamp() as f64
    }
}

/// Clock pinned to a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub f64);

impl Clock for FixedClock {
    fn now_seconds(&self) -> f64 {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_seconds(&self) -> f64 {
        (**self).now_seconds()
    }
}
