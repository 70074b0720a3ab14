//! Blink-period ramp advanced on every press

use portable_atomic::{AtomicU32, Ordering};

/// Period increment per press, in milliseconds
pub const RAMP_STEP_MS: u32 = 100;

/// Largest period before the ramp wraps back to [`RAMP_STEP_MS`]
pub const RAMP_CEILING_MS: u32 = 1000;

/// Period that follows `current`
///
/// Below the ceiling the period grows by one step (so 0 folds up to the first
/// step); at or above it the ramp starts over.
pub const fn next_period(current: u32, step: u32, ceiling: u32) -> u32 {
    if current < ceiling {
        current + step
    } else {
        step
    }
}

/// Per-channel ramp state
///
/// Only ever touched from the edge handler. The atomic keeps the compiler from
/// treating the value as single-context; plain load/store is enough since
/// there is a single writer.
#[derive(Debug)]
pub struct PeriodRamp {
    period: AtomicU32,
    step: u32,
    ceiling: u32,
}

impl PeriodRamp {
    pub const fn new() -> Self {
        Self::with_limits(RAMP_STEP_MS, RAMP_CEILING_MS)
    }

    pub const fn with_limits(step: u32, ceiling: u32) -> Self {
        Self {
            period: AtomicU32::new(0),
            step,
            ceiling,
        }
    }

    /// Advance the ramp and return the new period
    pub fn bump(&self) -> u32 {
        let next = next_period(self.period.load(Ordering::Relaxed), self.step, self.ceiling);
        self.period.store(next, Ordering::Relaxed);
        next
    }

    /// Last period handed out, 0 before the first press
    pub fn current(&self) -> u32 {
        self.period.load(Ordering::Relaxed)
    }
}

impl Default for PeriodRamp {
    fn default() -> Self {
        Self::new()
    }
}
