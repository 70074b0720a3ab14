//! Fan-out from the shared tag queue to per-channel activation signals

use crate::channel::ChannelId;
use crate::queue::{ActivationSignal, TagQueue};

/// Routes channel tags to the matching activation signal
///
/// Stateless; runs above the blinkers so a press reaches its LED task with
/// minimal latency.
pub struct Dispatcher<'a, const Q: usize, const N: usize> {
    queue: &'a TagQueue<Q>,
    signals: [(ChannelId, &'a ActivationSignal); N],
}

impl<'a, const Q: usize, const N: usize> Dispatcher<'a, Q, N> {
    pub const fn new(
        queue: &'a TagQueue<Q>,
        signals: [(ChannelId, &'a ActivationSignal); N],
    ) -> Self {
        Self { queue, signals }
    }

    /// Give the signal for `tag`; unknown tags are dropped
    pub fn route(&self, tag: u8) -> Option<ChannelId> {
        let channel = ChannelId::from_tag(tag)?;
        let (_, signal) = self.signals.iter().find(|(id, _)| *id == channel)?;
        signal.signal(());
        debug!("[{}] activation signalled", channel.label());
        Some(channel)
    }

    /// Wait for the next tag and route it
    pub async fn dispatch_next(&self) -> Option<ChannelId> {
        let tag = self.queue.receive().await;
        self.route(tag)
    }

    pub async fn run(&self) -> ! {
        loop {
            if self.dispatch_next().await.is_none() {
                trace!("ignoring unrouted tag");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;

    #[test]
    fn test_routes_tag_to_its_signal() {
        let queue = TagQueue::<16>::new();
        let red = ActivationSignal::new();
        let yellow = ActivationSignal::new();
        let dispatcher =
            Dispatcher::new(&queue, [(ChannelId::Red, &red), (ChannelId::Yellow, &yellow)]);

        queue.try_send(b'Y').unwrap();
        assert_eq!(block_on(dispatcher.dispatch_next()), Some(ChannelId::Yellow));
        assert!(yellow.signaled());
        assert!(!red.signaled());
    }

    #[test]
    fn test_repeated_give_saturates() {
        let queue = TagQueue::<16>::new();
        let red = ActivationSignal::new();
        let dispatcher = Dispatcher::new(&queue, [(ChannelId::Red, &red)]);

        for _ in 0..3 {
            queue.try_send(b'R').unwrap();
            block_on(dispatcher.dispatch_next());
        }
        assert_eq!(red.try_take(), Some(()));
        assert_eq!(red.try_take(), None);
    }

    #[test]
    fn test_unknown_and_unrouted_tags() {
        let queue = TagQueue::<16>::new();
        let red = ActivationSignal::new();
        let dispatcher = Dispatcher::new(&queue, [(ChannelId::Red, &red)]);

        assert_eq!(dispatcher.route(b'?'), None);
        assert_eq!(dispatcher.route(ChannelId::Green.tag()), None);
        assert!(!red.signaled());
    }

    #[test]
    fn test_dispatch_preserves_queue_order() {
        let queue = TagQueue::<16>::new();
        let red = ActivationSignal::new();
        let yellow = ActivationSignal::new();
        let dispatcher =
            Dispatcher::new(&queue, [(ChannelId::Red, &red), (ChannelId::Yellow, &yellow)]);

        queue.try_send(b'R').unwrap();
        queue.try_send(b'Y').unwrap();
        assert_eq!(block_on(dispatcher.dispatch_next()), Some(ChannelId::Red));
        assert_eq!(block_on(dispatcher.dispatch_next()), Some(ChannelId::Yellow));
    }
}
