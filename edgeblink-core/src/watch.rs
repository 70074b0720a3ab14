//! Per-pin edge watching
//!
//! Every button gets its own [`EdgeWatcher`], so an edge on one pin can never
//! cancel or re-arm the wait on another. All watchers of a pipeline share one
//! [`EdgeHandler`], which stays the single routing point by GPIO number.

use crate::edge::{EdgeFlags, EdgeHandler, EdgeOutcome};

/// One button input that reports its falling edges
#[allow(async_fn_in_trait)]
pub trait EdgeSource {
    /// GPIO number the handler routes on
    fn pin(&self) -> u8;

    /// Wait for the next falling edge
    async fn next_edge(&mut self) -> EdgeFlags;
}

/// Feeds the edges of one input into a shared handler
pub struct EdgeWatcher<'a, S, H> {
    source: S,
    handler: &'a H,
}

impl<'a, S: EdgeSource, H: EdgeHandler> EdgeWatcher<'a, S, H> {
    pub fn new(source: S, handler: &'a H) -> Self {
        Self { source, handler }
    }

    pub fn pin(&self) -> u8 {
        self.source.pin()
    }

    /// Wait for one edge and hand it to the handler
    pub async fn step(&mut self) -> EdgeOutcome {
        let flags = self.source.next_edge().await;
        self.handler.on_edge(self.source.pin(), flags)
    }

    pub async fn run(mut self) -> ! {
        info!("GPIO {} edge watcher started", self.pin());
        loop {
            // Full queues are counted by the handler and reported elsewhere
            if let EdgeOutcome::Queued(channel) = self.step().await {
                trace!("GPIO {} -> [{}]", self.source.pin(), channel.label());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::ChannelId;
    use crate::edge::{PinMap, Route};
    use crate::handler::{PeriodEdgeHandler, TagEdgeHandler};
    use crate::queue::{PeriodQueue, TagQueue};
    use crate::testing::ScriptedEdges;
    use embassy_futures::block_on;
    use embassy_futures::join::join;

    const RED_PIN: u8 = 28;
    const YELLOW_PIN: u8 = 21;

    fn toggle_pins() -> PinMap<2> {
        PinMap::new([
            Route::new(RED_PIN, ChannelId::Red),
            Route::new(YELLOW_PIN, ChannelId::Yellow),
        ])
    }

    #[test]
    fn test_simultaneous_edges_on_both_pins_are_kept() {
        let queue = TagQueue::<16>::new();
        let handler = TagEdgeHandler::new(toggle_pins(), &queue);
        let mut red = EdgeWatcher::new(ScriptedEdges::presses(RED_PIN, 1), &handler);
        let mut yellow = EdgeWatcher::new(ScriptedEdges::presses(YELLOW_PIN, 1), &handler);

        let (first, second) = block_on(join(red.step(), yellow.step()));
        assert_eq!(first, EdgeOutcome::Queued(ChannelId::Red));
        assert_eq!(second, EdgeOutcome::Queued(ChannelId::Yellow));

        let mut tags = [queue.try_receive().ok(), queue.try_receive().ok()];
        tags.sort();
        assert_eq!(tags, [Some(b'R'), Some(b'Y')]);
        assert_eq!(handler.dropped(), 0);
    }

    #[test]
    fn test_interleaved_presses_reach_the_queue_in_order() {
        let queue = TagQueue::<16>::new();
        let handler = TagEdgeHandler::new(toggle_pins(), &queue);
        let mut red = EdgeWatcher::new(ScriptedEdges::presses(RED_PIN, 2), &handler);
        let mut yellow = EdgeWatcher::new(ScriptedEdges::presses(YELLOW_PIN, 2), &handler);

        for _ in 0..2 {
            block_on(red.step());
            block_on(yellow.step());
        }
        for tag in [b'R', b'Y', b'R', b'Y'] {
            assert_eq!(queue.try_receive().ok(), Some(tag));
        }
    }

    #[test]
    fn test_release_before_read_still_counts_as_press() {
        let red = PeriodQueue::<4>::new();
        let handler =
            PeriodEdgeHandler::new(PinMap::new([Route::new(RED_PIN, ChannelId::Red)]), [&red]);
        let source = ScriptedEdges::new(RED_PIN, [EdgeFlags::falling(false)]);
        let mut watcher = EdgeWatcher::new(source, &handler);

        assert_eq!(block_on(watcher.step()), EdgeOutcome::Queued(ChannelId::Red));
        assert_eq!(red.try_receive().ok(), Some(100));
    }

    #[test]
    fn test_watcher_reports_its_pin() {
        let queue = TagQueue::<4>::new();
        let handler = TagEdgeHandler::new(toggle_pins(), &queue);
        let watcher = EdgeWatcher::new(ScriptedEdges::presses(YELLOW_PIN, 0), &handler);
        assert_eq!(watcher.pin(), YELLOW_PIN);
    }
}
