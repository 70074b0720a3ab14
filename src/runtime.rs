//! Embassy implementations of the bounded-wait contract
//!
//! The core pipeline only knows [`EventSource`]; these adapters put an
//! `embassy_time` deadline on a channel receive or a signal wait.

use edgeblink_core::{ActivationSignal, EventSource, WaitOutcome};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver};
use embassy_time::{with_timeout, Duration};

/// Channel receiver with a per-call timeout
pub struct TimedReceiver<'a, T, const N: usize> {
    rx: Receiver<'a, CriticalSectionRawMutex, T, N>,
}

impl<'a, T, const N: usize> TimedReceiver<'a, T, N> {
    pub fn new(channel: &'a Channel<CriticalSectionRawMutex, T, N>) -> Self {
        Self {
            rx: channel.receiver(),
        }
    }
}

impl<T, const N: usize> EventSource for TimedReceiver<'_, T, N> {
    type Event = T;

    async fn wait_for(&mut self, timeout_ms: u32) -> WaitOutcome<T> {
        match with_timeout(Duration::from_millis(timeout_ms.into()), self.rx.receive()).await {
            Ok(value) => WaitOutcome::Event(value),
            Err(_) => WaitOutcome::Timeout,
        }
    }
}

/// Activation signal with a per-call timeout
pub struct TimedSignal<'a> {
    signal: &'a ActivationSignal,
}

impl<'a> TimedSignal<'a> {
    pub fn new(signal: &'a ActivationSignal) -> Self {
        Self { signal }
    }
}

impl EventSource for TimedSignal<'_> {
    type Event = ();

    async fn wait_for(&mut self, timeout_ms: u32) -> WaitOutcome<()> {
        match with_timeout(Duration::from_millis(timeout_ms.into()), self.signal.wait()).await {
            Ok(()) => WaitOutcome::Event(()),
            Err(_) => WaitOutcome::Timeout,
        }
    }
}
