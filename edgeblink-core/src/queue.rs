//! Inter-context queues, signals and the bounded-wait contract
//!
//! All primitives use `CriticalSectionRawMutex`: producers run on a
//! higher-priority executor than consumers, so thread-mode-only locking is
//! not an option.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

/// Per-channel queue of blink periods (period-ramp pipeline)
pub type PeriodQueue<const N: usize> = Channel<CriticalSectionRawMutex, u32, N>;

/// Shared queue of channel tags (toggle-blink pipeline)
pub type TagQueue<const N: usize> = Channel<CriticalSectionRawMutex, u8, N>;

/// Binary activation signal; giving it twice before a take counts once
pub type ActivationSignal = Signal<CriticalSectionRawMutex, ()>;

/// Result of a bounded wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WaitOutcome<T> {
    Event(T),
    Timeout,
}

impl<T> WaitOutcome<T> {
    pub fn event(self) -> Option<T> {
        match self {
            Self::Event(value) => Some(value),
            Self::Timeout => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }
}

/// Something a task can wait on for at most `timeout_ms`
///
/// The firmware backs this with `embassy_time::with_timeout` over a channel
/// receiver or a signal.
#[allow(async_fn_in_trait)]
pub trait EventSource {
    type Event;

    async fn wait_for(&mut self, timeout_ms: u32) -> WaitOutcome<Self::Event>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors() {
        assert_eq!(WaitOutcome::Event(7u32).event(), Some(7));
        assert!(WaitOutcome::<u32>::Timeout.is_timeout());
        assert_eq!(WaitOutcome::<u32>::Timeout.event(), None);
    }

    #[test]
    fn test_signal_saturates() {
        let signal = ActivationSignal::new();
        signal.signal(());
        signal.signal(());
        assert_eq!(signal.try_take(), Some(()));
        assert_eq!(signal.try_take(), None);
    }

    #[test]
    fn test_queue_is_bounded_fifo() {
        let queue = PeriodQueue::<2>::new();
        assert!(queue.try_send(100).is_ok());
        assert!(queue.try_send(200).is_ok());
        assert!(queue.try_send(300).is_err());
        assert_eq!(queue.try_receive().ok(), Some(100));
        assert_eq!(queue.try_receive().ok(), Some(200));
        assert!(queue.try_receive().is_err());
    }
}
