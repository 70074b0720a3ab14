//! Interrupt-side edge handlers for both pipelines
//!
//! Both handlers share the same shape: drop anything that is not a falling
//! edge on a routed pin, then `try_send` one message. A full queue loses the
//! message and bumps the drop counter; nothing here can block.

use crate::edge::{DropCounter, EdgeFlags, EdgeHandler, EdgeOutcome, PinMap, Route};
use crate::queue::{PeriodQueue, TagQueue};
use crate::ramp::PeriodRamp;

/// Period-ramp producer: one ramp and one queue per routed pin
pub struct PeriodEdgeHandler<'a, const N: usize, const Q: usize> {
    pins: PinMap<N>,
    ramps: [PeriodRamp; N],
    queues: [&'a PeriodQueue<Q>; N],
    dropped: DropCounter,
}

impl<'a, const N: usize, const Q: usize> PeriodEdgeHandler<'a, N, Q> {
    /// `queues[i]` receives the periods of `pins` slot `i`
    pub fn new(pins: PinMap<N>, queues: [&'a PeriodQueue<Q>; N]) -> Self {
        Self {
            pins,
            ramps: core::array::from_fn(|_| PeriodRamp::new()),
            queues,
            dropped: DropCounter::new(),
        }
    }
}

impl<const N: usize, const Q: usize> EdgeHandler for PeriodEdgeHandler<'_, N, Q> {
    fn on_edge(&self, pin: u8, flags: EdgeFlags) -> EdgeOutcome {
        if !flags.is_falling() {
            return EdgeOutcome::Ignored;
        }
        let Some((slot, channel)) = self.pins.lookup(pin) else {
            return EdgeOutcome::Ignored;
        };

        let period = self.ramps[slot].bump();
        match self.queues[slot].try_send(period) {
            Ok(()) => EdgeOutcome::Queued(channel),
            Err(_) => {
                self.dropped.record();
                EdgeOutcome::Dropped(channel)
            }
        }
    }

    fn dropped(&self) -> u32 {
        self.dropped.get()
    }

    fn routes(&self) -> &[Route] {
        self.pins.routes()
    }
}

/// Toggle-blink producer: every routed pin feeds its tag into one shared queue
pub struct TagEdgeHandler<'a, const N: usize, const Q: usize> {
    pins: PinMap<N>,
    queue: &'a TagQueue<Q>,
    dropped: DropCounter,
}

impl<'a, const N: usize, const Q: usize> TagEdgeHandler<'a, N, Q> {
    pub const fn new(pins: PinMap<N>, queue: &'a TagQueue<Q>) -> Self {
        Self {
            pins,
            queue,
            dropped: DropCounter::new(),
        }
    }
}

impl<const N: usize, const Q: usize> EdgeHandler for TagEdgeHandler<'_, N, Q> {
    fn on_edge(&self, pin: u8, flags: EdgeFlags) -> EdgeOutcome {
        if !flags.is_falling() {
            return EdgeOutcome::Ignored;
        }
        let Some((_, channel)) = self.pins.lookup(pin) else {
            return EdgeOutcome::Ignored;
        };

        match self.queue.try_send(channel.tag()) {
            Ok(()) => EdgeOutcome::Queued(channel),
            Err(_) => {
                self.dropped.record();
                EdgeOutcome::Dropped(channel)
            }
        }
    }

    fn dropped(&self) -> u32 {
        self.dropped.get()
    }

    fn routes(&self) -> &[Route] {
        self.pins.routes()
    }
}
