//! Hardware bring-up and task spawning
//!
//! Each pipeline gets one init function that claims its pins, builds the
//! edge handler (and dispatcher) over the static channels, and spawns every
//! task on the executor matching its priority.

use defmt::*;
use edgeblink_core::{ChannelId, Dispatcher, EdgeHandler, PeriodEdgeHandler, TagEdgeHandler};
use embassy_executor::{SendSpawner, SpawnError, Spawner};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::Peripherals;
use static_cell::StaticCell;

use crate::buttons::{
    dispatch_task, period_edge_task, toggle_edge_task, ButtonDispatcher, PeriodEdges, ToggleEdges,
};
use crate::channels::{
    BUTTON_QUEUE, LED_SIGNAL_RED, LED_SIGNAL_YELLOW, PERIOD_QUEUE_GREEN, PERIOD_QUEUE_RED,
};
use crate::config::{self, PipelineVariant};
use crate::leds::{period_led_task, toggle_led_task};
use crate::types::EdgeInput;

static PERIOD_EDGES: StaticCell<PeriodEdges> = StaticCell::new();
static TOGGLE_EDGES: StaticCell<ToggleEdges> = StaticCell::new();
static BUTTON_DISPATCHER: StaticCell<ButtonDispatcher> = StaticCell::new();

/// Bring up the period-ramp pipeline
///
/// Edge handling goes to `edge_spawner` (interrupt executor), LED tasks to
/// `spawner` (thread mode). Returns the edge handler for supervision.
pub fn init_period_pipeline(
    edge_spawner: SendSpawner,
    spawner: Spawner,
    p: Peripherals,
) -> Result<&'static dyn EdgeHandler, SpawnError> {
    info!("Initializing {} pipeline", PipelineVariant::PeriodRamp.name());

    let btn_red = EdgeInput::new(config::PERIOD_BTN_RED_PIN, Input::new(p.PIN_28, Pull::Up));
    let btn_green = EdgeInput::new(config::PERIOD_BTN_GREEN_PIN, Input::new(p.PIN_26, Pull::Up));
    let led_red = Output::new(p.PIN_4, Level::Low);
    let led_green = Output::new(p.PIN_6, Level::Low);

    let edges: &'static PeriodEdges = PERIOD_EDGES.init(PeriodEdgeHandler::new(
        config::PERIOD_BUTTONS,
        [&PERIOD_QUEUE_RED, &PERIOD_QUEUE_GREEN],
    ));

    // Consumers first so no press lands before its task exists
    spawner.spawn(period_led_task(ChannelId::Red, led_red, &PERIOD_QUEUE_RED))?;
    spawner.spawn(period_led_task(ChannelId::Green, led_green, &PERIOD_QUEUE_GREEN))?;
    edge_spawner.spawn(period_edge_task(btn_red, edges))?;
    edge_spawner.spawn(period_edge_task(btn_green, edges))?;

    Ok(edges)
}

/// Bring up the toggle-blink pipeline
///
/// Edge handling goes to `edge_spawner`, the dispatcher to
/// `dispatch_spawner` (below edges, above LEDs), LED tasks to `spawner`.
pub fn init_toggle_pipeline(
    edge_spawner: SendSpawner,
    dispatch_spawner: SendSpawner,
    spawner: Spawner,
    p: Peripherals,
) -> Result<&'static dyn EdgeHandler, SpawnError> {
    info!("Initializing {} pipeline", PipelineVariant::ToggleBlink.name());

    let btn_red = EdgeInput::new(config::TOGGLE_BTN_RED_PIN, Input::new(p.PIN_28, Pull::Up));
    let btn_yellow = EdgeInput::new(config::TOGGLE_BTN_YELLOW_PIN, Input::new(p.PIN_21, Pull::Up));
    let led_red = Output::new(p.PIN_5, Level::Low);
    let led_yellow = Output::new(p.PIN_10, Level::Low);

    let edges: &'static ToggleEdges =
        TOGGLE_EDGES.init(TagEdgeHandler::new(config::TOGGLE_BUTTONS, &BUTTON_QUEUE));
    let dispatcher: &'static ButtonDispatcher = BUTTON_DISPATCHER.init(Dispatcher::new(
        &BUTTON_QUEUE,
        [
            (ChannelId::Red, &LED_SIGNAL_RED),
            (ChannelId::Yellow, &LED_SIGNAL_YELLOW),
        ],
    ));

    spawner.spawn(toggle_led_task(ChannelId::Red, led_red, &LED_SIGNAL_RED))?;
    spawner.spawn(toggle_led_task(ChannelId::Yellow, led_yellow, &LED_SIGNAL_YELLOW))?;
    dispatch_spawner.spawn(dispatch_task(dispatcher))?;
    edge_spawner.spawn(toggle_edge_task(btn_red, edges))?;
    edge_spawner.spawn(toggle_edge_task(btn_yellow, edges))?;

    Ok(edges)
}
