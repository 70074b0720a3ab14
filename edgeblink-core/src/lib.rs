//! EdgeBlink core - hardware-independent half of the button-to-LED pipeline
//!
//! Everything here is plain `no_std` logic over `embassy-sync` primitives and
//! `embedded-hal` traits, so it runs unchanged on the RP2040 and under host
//! unit tests.
//!
//! ## Pipeline
//! - **Edge watchers**: one per button, each forwarding its falling edges to
//!   the pipeline's shared edge handler
//! - **Edge handlers**: run in interrupt context, filter falling edges, route
//!   by pin and push into a bounded queue without blocking
//! - **Dispatcher**: fans a shared tag queue out to per-channel signals
//! - **Blinkers**: per-channel timing state machines that own one LED each
//!
//! ## Variants
//! - **Period ramp**: every press bumps the channel's blink period
//! - **Toggle blink**: every press switches a fixed-rate blink on or off

#![no_std]

mod fmt;

pub mod blink;
pub mod channel;
pub mod dispatch;
pub mod edge;
pub mod handler;
pub mod queue;
pub mod ramp;
pub mod watch;

#[cfg(test)]
mod testing;

pub use blink::{PeriodBlinker, ToggleBlinker, PERIOD_POLL_MS, TOGGLE_TICK_MS};
pub use channel::ChannelId;
pub use dispatch::Dispatcher;
pub use edge::{DropCounter, EdgeFlags, EdgeHandler, EdgeOutcome, PinMap, Route};
pub use handler::{PeriodEdgeHandler, TagEdgeHandler};
pub use queue::{ActivationSignal, EventSource, PeriodQueue, TagQueue, WaitOutcome};
pub use ramp::{PeriodRamp, RAMP_CEILING_MS, RAMP_STEP_MS};
pub use watch::{EdgeSource, EdgeWatcher};
