//! Inter-context communication channels
//!
//! Every queue and signal the pipelines use lives here for the whole program.
//! They are never touched by name from the tasks: `hardware` hands out
//! `&'static` references at spawn time.

use edgeblink_core::{ActivationSignal, PeriodQueue, TagQueue};

use crate::config::{BUTTON_QUEUE_DEPTH, PERIOD_QUEUE_DEPTH};

// ===================================================================
// Period Ramp
// ===================================================================

/// Periods for the red LED, filled from the edge handler
pub static PERIOD_QUEUE_RED: PeriodQueue<PERIOD_QUEUE_DEPTH> = PeriodQueue::new();

/// Periods for the green LED, filled from the edge handler
pub static PERIOD_QUEUE_GREEN: PeriodQueue<PERIOD_QUEUE_DEPTH> = PeriodQueue::new();

// ===================================================================
// Toggle Blink
// ===================================================================

/// Channel tags from the edge handler to the dispatch task
pub static BUTTON_QUEUE: TagQueue<BUTTON_QUEUE_DEPTH> = TagQueue::new();

/// Activation signal for the red LED task
pub static LED_SIGNAL_RED: ActivationSignal = ActivationSignal::new();

/// Activation signal for the yellow LED task
pub static LED_SIGNAL_YELLOW: ActivationSignal = ActivationSignal::new();
