//! LED actuation tasks
//!
//! One task per LED, on the thread-mode executor. Each owns its `Output` and
//! the blinker state; the only way in is its queue or signal.

use edgeblink_core::{ActivationSignal, ChannelId, PeriodBlinker, PeriodQueue, ToggleBlinker};
use embassy_rp::gpio::Output;
use embassy_time::Delay;

use crate::config::PERIOD_QUEUE_DEPTH;
use crate::runtime::{TimedReceiver, TimedSignal};

#[embassy_executor::task(pool_size = 2)]
pub async fn period_led_task(
    channel: ChannelId,
    led: Output<'static>,
    queue: &'static PeriodQueue<PERIOD_QUEUE_DEPTH>,
) {
    PeriodBlinker::new(channel, led)
        .run(TimedReceiver::new(queue), Delay)
        .await
}

#[embassy_executor::task(pool_size = 2)]
pub async fn toggle_led_task(
    channel: ChannelId,
    led: Output<'static>,
    signal: &'static ActivationSignal,
) {
    ToggleBlinker::new(channel, led)
        .run(TimedSignal::new(signal))
        .await
}
