//! Button edge handling and dispatch
//!
//! The edge tasks run on the high-priority interrupt executor and are the
//! only code that observes the button pins. Each button has its own task, so
//! an edge on one pin never re-arms the wait on the other. Both tasks of a
//! pipeline hand their edges to the same handler, which routes by GPIO
//! number. Nothing on this path can block.

use defmt::*;
use edgeblink_core::{Dispatcher, EdgeWatcher, PeriodEdgeHandler, TagEdgeHandler};

use crate::config::{BUTTON_QUEUE_DEPTH, PERIOD_QUEUE_DEPTH};
use crate::types::EdgeInput;

/// Edge handler of the period-ramp pipeline
pub type PeriodEdges = PeriodEdgeHandler<'static, 2, PERIOD_QUEUE_DEPTH>;

/// Edge handler of the toggle-blink pipeline
pub type ToggleEdges = TagEdgeHandler<'static, 2, BUTTON_QUEUE_DEPTH>;

/// Tag fan-out of the toggle-blink pipeline
pub type ButtonDispatcher = Dispatcher<'static, BUTTON_QUEUE_DEPTH, 2>;

// ===================================================================
// Edge Tasks
// ===================================================================

/// One button of the period-ramp pipeline
#[embassy_executor::task(pool_size = 2)]
pub async fn period_edge_task(input: EdgeInput, handler: &'static PeriodEdges) {
    EdgeWatcher::new(input, handler).run().await
}

/// One button of the toggle-blink pipeline
#[embassy_executor::task(pool_size = 2)]
pub async fn toggle_edge_task(input: EdgeInput, handler: &'static ToggleEdges) {
    EdgeWatcher::new(input, handler).run().await
}

// ===================================================================
// Dispatch Task
// ===================================================================

#[embassy_executor::task]
pub async fn dispatch_task(dispatcher: &'static ButtonDispatcher) {
    info!("Dispatch task started");
    dispatcher.run().await
}
