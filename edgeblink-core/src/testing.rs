//! Virtual-time runtime for host tests
//!
//! Every fake shares one [`Clock`]; delays and timeouts advance it instantly,
//! so futures are always ready and `embassy_futures::block_on` drives them.

extern crate std;

use core::convert::Infallible;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::digital::{ErrorType, OutputPin};
use embedded_hal_async::delay::DelayNs;

use crate::edge::EdgeFlags;
use crate::queue::{ActivationSignal, EventSource, PeriodQueue, WaitOutcome};
use crate::watch::EdgeSource;

const NS_PER_MS: u64 = 1_000_000;

#[derive(Clone, Default)]
pub struct Clock(Rc<Cell<u64>>);

impl Clock {
    pub fn now_ms(&self) -> u64 {
        self.0.get() / NS_PER_MS
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance_ns(ms * NS_PER_MS);
    }

    fn advance_ns(&self, ns: u64) {
        self.0.set(self.0.get() + ns);
    }
}

pub struct FakeDelay {
    clock: Clock,
}

impl FakeDelay {
    pub fn new(clock: &Clock) -> Self {
        Self { clock: clock.clone() }
    }
}

impl DelayNs for FakeDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.clock.advance_ns(u64::from(ns));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.clock.advance_ms(u64::from(ms));
    }
}

/// Events that become available at fixed virtual times
pub struct ScriptedSource<T> {
    clock: Clock,
    events: VecDeque<(u64, T)>,
}

impl<T> ScriptedSource<T> {
    pub fn new(clock: &Clock, events: impl IntoIterator<Item = (u64, T)>) -> Self {
        Self {
            clock: clock.clone(),
            events: events.into_iter().collect(),
        }
    }
}

impl<T> EventSource for ScriptedSource<T> {
    type Event = T;

    async fn wait_for(&mut self, timeout_ms: u32) -> WaitOutcome<T> {
        let now = self.clock.now_ms();
        let deadline = now + u64::from(timeout_ms);
        match self.events.front() {
            Some(&(at, _)) if at <= deadline => {
                if at > now {
                    self.clock.advance_ms(at - now);
                }
                match self.events.pop_front() {
                    Some((_, event)) => WaitOutcome::Event(event),
                    None => WaitOutcome::Timeout,
                }
            }
            _ => {
                self.clock.advance_ms(u64::from(timeout_ms));
                WaitOutcome::Timeout
            }
        }
    }
}

/// Button input that replays a fixed list of edges, then never fires again
pub struct ScriptedEdges {
    pin: u8,
    edges: VecDeque<EdgeFlags>,
}

impl ScriptedEdges {
    pub fn new(pin: u8, edges: impl IntoIterator<Item = EdgeFlags>) -> Self {
        Self {
            pin,
            edges: edges.into_iter().collect(),
        }
    }

    /// `count` clean presses, each seen with the pin still low
    pub fn presses(pin: u8, count: usize) -> Self {
        Self::new(pin, core::iter::repeat(EdgeFlags::falling(true)).take(count))
    }
}

impl EdgeSource for ScriptedEdges {
    fn pin(&self) -> u8 {
        self.pin
    }

    async fn next_edge(&mut self) -> EdgeFlags {
        match self.edges.pop_front() {
            Some(flags) => flags,
            None => core::future::pending().await,
        }
    }
}

/// A real period queue with virtual-time timeouts
pub struct QueueSource<'a, const N: usize> {
    clock: Clock,
    queue: &'a PeriodQueue<N>,
}

impl<'a, const N: usize> QueueSource<'a, N> {
    pub fn new(clock: &Clock, queue: &'a PeriodQueue<N>) -> Self {
        Self { clock: clock.clone(), queue }
    }
}

impl<const N: usize> EventSource for QueueSource<'_, N> {
    type Event = u32;

    async fn wait_for(&mut self, timeout_ms: u32) -> WaitOutcome<u32> {
        match self.queue.try_receive() {
            Ok(period) => WaitOutcome::Event(period),
            Err(_) => {
                self.clock.advance_ms(u64::from(timeout_ms));
                WaitOutcome::Timeout
            }
        }
    }
}

/// A real activation signal with virtual-time timeouts
pub struct SignalSource<'a> {
    clock: Clock,
    signal: &'a ActivationSignal,
}

impl<'a> SignalSource<'a> {
    pub fn new(clock: &Clock, signal: &'a ActivationSignal) -> Self {
        Self { clock: clock.clone(), signal }
    }
}

impl EventSource for SignalSource<'_> {
    type Event = ();

    async fn wait_for(&mut self, timeout_ms: u32) -> WaitOutcome<()> {
        match self.signal.try_take() {
            Some(()) => WaitOutcome::Event(()),
            None => {
                self.clock.advance_ms(u64::from(timeout_ms));
                WaitOutcome::Timeout
            }
        }
    }
}

/// Output pin that logs `(time_ms, level)` for every write
#[derive(Clone)]
pub struct RecordingPin {
    clock: Clock,
    log: Rc<RefCell<Vec<(u64, bool)>>>,
}

impl RecordingPin {
    pub fn new(clock: &Clock) -> Self {
        Self {
            clock: clock.clone(),
            log: Rc::default(),
        }
    }

    pub fn writes(&self) -> Vec<(u64, bool)> {
        self.log.borrow().clone()
    }

    pub fn last(&self) -> Option<(u64, bool)> {
        self.log.borrow().last().copied()
    }

    fn record(&self, level: bool) {
        self.log.borrow_mut().push((self.clock.now_ms(), level));
    }
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.record(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.record(true);
        Ok(())
    }
}
