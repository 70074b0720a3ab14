//! Edge events, pin routing and the interrupt-side handler contract

use core::ops::BitOr;

use portable_atomic::{AtomicU32, Ordering};

use crate::channel::ChannelId;

/// Events reported for one GPIO interrupt, in the RP2040 `IO_IRQ` encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeFlags(u32);

impl EdgeFlags {
    pub const LEVEL_LOW: Self = Self(0x1);
    pub const LEVEL_HIGH: Self = Self(0x2);
    pub const EDGE_FALL: Self = Self(0x4);
    pub const EDGE_RISE: Self = Self(0x8);

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Flags for a falling edge, plus the level the pin was read at afterwards
    ///
    /// The level is informational only. A button released before the read
    /// still reports `EDGE_FALL`.
    pub const fn falling(is_low: bool) -> Self {
        let level = if is_low { Self::LEVEL_LOW } else { Self::LEVEL_HIGH };
        Self(Self::EDGE_FALL.0 | level.0)
    }

    /// Flags for a rising edge that left the pin high
    pub const fn rising() -> Self {
        Self(Self::EDGE_RISE.0 | Self::LEVEL_HIGH.0)
    }

    pub const fn is_falling(self) -> bool {
        self.contains(Self::EDGE_FALL)
    }
}

impl BitOr for EdgeFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// One monitored input and the channel it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Route {
    pub pin: u8,
    pub channel: ChannelId,
}

impl Route {
    pub const fn new(pin: u8, channel: ChannelId) -> Self {
        Self { pin, channel }
    }
}

/// Fixed routing table from GPIO number to channel
#[derive(Debug, Clone, Copy)]
pub struct PinMap<const N: usize> {
    routes: [Route; N],
}

impl<const N: usize> PinMap<N> {
    pub const fn new(routes: [Route; N]) -> Self {
        Self { routes }
    }

    /// Slot index and channel for `pin`, if it is routed
    pub fn lookup(&self, pin: u8) -> Option<(usize, ChannelId)> {
        self.routes
            .iter()
            .position(|route| route.pin == pin)
            .map(|slot| (slot, self.routes[slot].channel))
    }

    pub fn routes(&self) -> &[Route; N] {
        &self.routes
    }
}

/// Result of handing one edge to a handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeOutcome {
    /// Not a falling edge, or the pin is not routed
    Ignored,
    /// Message accepted; the consumer may have been woken
    Queued(ChannelId),
    /// Queue full, message lost
    Dropped(ChannelId),
}

/// Interrupt-side edge consumer
///
/// `on_edge` runs in interrupt context: it must return in bounded time and
/// must never await or block.
pub trait EdgeHandler: Sync {
    fn on_edge(&self, pin: u8, flags: EdgeFlags) -> EdgeOutcome;

    /// Total edges lost to a full queue since start-up
    fn dropped(&self) -> u32;

    /// Inputs this handler listens to
    fn routes(&self) -> &[Route];
}

/// Count of edge events lost to queue overflow
#[derive(Debug, Default)]
pub struct DropCounter(AtomicU32);

impl DropCounter {
    pub const fn new() -> Self {
        Self(AtomicU32::new(0))
    }

    pub fn record(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(&self) -> u32 {
        self.0.load(Ordering::Relaxed)
    }
}
