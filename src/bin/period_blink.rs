//! EdgeBlink - Period Ramp Firmware
//!
//! Two buttons, two LEDs:
//! - Button GPIO 28 -> red LED GPIO 4
//! - Button GPIO 26 -> green LED GPIO 6
//!
//! Every press raises that LED's blink period by 100 ms (100..=1000 ms, then
//! back to 100 ms). Edges are handled on a high-priority interrupt executor,
//! the LED tasks run in thread mode.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{Executor, InterruptExecutor};
use embassy_rp::interrupt;
use embassy_rp::interrupt::InterruptExt;
use panic_halt as _;
use defmt_rtt as _;
use static_cell::StaticCell;

// Set compile-time pipeline selection
const VARIANT: edgeblink::config::PipelineVariant = edgeblink::config::PipelineVariant::PeriodRamp;

// Import all modules from library
extern crate edgeblink;
use edgeblink::*;

static EDGE_EXECUTOR: InterruptExecutor = InterruptExecutor::new();
static THREAD_EXECUTOR: StaticCell<Executor> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EDGE_EXECUTOR.on_interrupt()
}

/// Main application entry point for the period ramp pipeline
#[cortex_m_rt::entry]
fn main() -> ! {
    // Initialize hardware
    let p = embassy_rp::init(Default::default());

    let supervisor = supervisor::AppSupervisor::new(VARIANT);
    supervisor.print_startup_banner();

    // Edge handling preempts everything in thread mode
    interrupt::SWI_IRQ_1.set_priority(config::EDGE_IRQ_PRIORITY);
    let edge_spawner = EDGE_EXECUTOR.start(interrupt::SWI_IRQ_1);

    let executor = THREAD_EXECUTOR.init(Executor::new());
    executor.run(move |spawner| {
        match hardware::init_period_pipeline(edge_spawner, spawner, p) {
            Ok(edges) => {
                unwrap!(spawner.spawn(supervisor::supervisor_task(supervisor, edges)));
            }
            Err(e) => {
                error!("Failed to spawn pipeline tasks: {:?}", e);
                core::panic!("Hardware initialization failed");
            }
        }
    })
}
