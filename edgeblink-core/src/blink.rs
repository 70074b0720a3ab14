//! Per-channel LED timing state machines
//!
//! Each blinker owns exactly one LED and its timing state. The only inputs are
//! the bounded waits on its [`EventSource`], whose timeout branch doubles as
//! the blink clock for the toggle pipeline.

use embedded_hal::digital::{OutputPin, PinState};
use embedded_hal_async::delay::DelayNs;

use crate::channel::ChannelId;
use crate::queue::{EventSource, WaitOutcome};

/// How long the period blinker waits for a new period per cycle
pub const PERIOD_POLL_MS: u32 = 10;

/// Wait timeout of the toggle blinker, and therefore its half-period
pub const TOGGLE_TICK_MS: u32 = 100;

// ===================================================================
// Period-driven blink
// ===================================================================

/// Blinks at the last period received; idle until the first one arrives
pub struct PeriodBlinker<P> {
    channel: ChannelId,
    led: P,
    period_ms: u32,
}

impl<P: OutputPin> PeriodBlinker<P> {
    pub fn new(channel: ChannelId, led: P) -> Self {
        Self {
            channel,
            led,
            period_ms: 0,
        }
    }

    /// Current half-period, 0 while inactive
    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Adopt a received period unconditionally
    pub fn accept(&mut self, outcome: WaitOutcome<u32>) -> bool {
        match outcome {
            WaitOutcome::Event(period) => {
                self.period_ms = period;
                info!("[{}] new period: {} ms", self.channel.label(), period);
                true
            }
            WaitOutcome::Timeout => false,
        }
    }

    /// One poll plus one full on/off cycle
    ///
    /// The period is latched before the LED goes high, so a value arriving
    /// mid-cycle waits for the next cycle.
    pub async fn cycle<S, D>(&mut self, source: &mut S, delay: &mut D) -> Result<(), P::Error>
    where
        S: EventSource<Event = u32>,
        D: DelayNs,
    {
        let outcome = source.wait_for(PERIOD_POLL_MS).await;
        self.accept(outcome);

        let period = self.period_ms;
        if period == 0 {
            delay.delay_ms(PERIOD_POLL_MS).await;
            return Ok(());
        }

        self.led.set_high()?;
        delay.delay_ms(period).await;
        self.led.set_low()?;
        delay.delay_ms(period).await;
        Ok(())
    }

    pub async fn run<S, D>(mut self, mut source: S, mut delay: D) -> !
    where
        S: EventSource<Event = u32>,
        D: DelayNs,
    {
        info!("[{}] period blinker started", self.channel.label());
        loop {
            if self.cycle(&mut source, &mut delay).await.is_err() {
                warn!("[{}] failed to drive LED", self.channel.label());
            }
        }
    }
}

// ===================================================================
// Toggle-active blink
// ===================================================================

/// Fixed-rate blink switched on and off by activation signals
pub struct ToggleBlinker<P> {
    channel: ChannelId,
    led: P,
    active: bool,
    level: bool,
}

impl<P: OutputPin> ToggleBlinker<P> {
    pub fn new(channel: ChannelId, led: P) -> Self {
        Self {
            channel,
            led,
            active: false,
            level: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn level(&self) -> bool {
        self.level
    }

    /// Drive the LED low and clear the level
    pub fn force_off(&mut self) -> Result<(), P::Error> {
        self.level = false;
        self.led.set_low()
    }

    /// Apply the result of one wait
    ///
    /// A signal flips `active`; deactivating forces the LED low right away. A
    /// timeout is a clock tick and flips the level while active.
    pub fn apply(&mut self, outcome: WaitOutcome<()>) -> Result<(), P::Error> {
        match outcome {
            WaitOutcome::Event(()) => {
                self.active = !self.active;
                debug!(
                    "[{}] blink {}",
                    self.channel.label(),
                    if self.active { "on" } else { "off" }
                );
                if !self.active {
                    self.force_off()?;
                }
            }
            WaitOutcome::Timeout => {
                if self.active {
                    self.level = !self.level;
                    self.led.set_state(PinState::from(self.level))?;
                }
            }
        }
        Ok(())
    }

    pub async fn step<S>(&mut self, source: &mut S) -> Result<(), P::Error>
    where
        S: EventSource<Event = ()>,
    {
        let outcome = source.wait_for(TOGGLE_TICK_MS).await;
        self.apply(outcome)
    }

    pub async fn run<S>(mut self, mut source: S) -> !
    where
        S: EventSource<Event = ()>,
    {
        info!("[{}] toggle blinker started", self.channel.label());
        if self.force_off().is_err() {
            warn!("[{}] failed to drive LED", self.channel.label());
        }
        loop {
            if self.step(&mut source).await.is_err() {
                warn!("[{}] failed to drive LED", self.channel.label());
            }
        }
    }
}
