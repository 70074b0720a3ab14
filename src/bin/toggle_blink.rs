//! EdgeBlink - Toggle Blink Firmware
//!
//! Two buttons, two LEDs:
//! - Button GPIO 28 -> red LED GPIO 5
//! - Button GPIO 21 -> yellow LED GPIO 10
//!
//! Every press toggles a 100 ms blink on that LED. Edges feed one shared tag
//! queue; a dispatch task fans the tags out to per-LED signals. Priorities:
//! edges > dispatch > LEDs.

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
const VARIANT: edgeblink::config::PipelineVariant = edgeblink::config::PipelineVariant::ToggleBlink;

// Import all modules from library
extern crate edgeblink;
use edgeblink::*;

static EDGE_EXECUTOR: InterruptExecutor = InterruptExecutor::new();
static DISPATCH_EXECUTOR: InterruptExecutor = InterruptExecutor::new();
static THREAD_EXECUTOR: StaticCell<Executor> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EDGE_EXECUTOR.on_interrupt()
}

#[interrupt]
unsafe fn SWI_IRQ_0() {
    DISPATCH_EXECUTOR.on_interrupt()
}

/// Main application entry point for the toggle blink pipeline
#[cortex_m_rt::entry]
fn main() -> ! {
    // Initialize hardware
    let p = embassy_rp::init(Default::default());

    let supervisor = supervisor::AppSupervisor::new(VARIANT);
    supervisor.print_startup_banner();

    interrupt::SWI_IRQ_1.set_priority(config::EDGE_IRQ_PRIORITY);
    let edge_spawner = EDGE_EXECUTOR.start(interrupt::SWI_IRQ_1);

    interrupt::SWI_IRQ_0.set_priority(config::DISPATCH_IRQ_PRIORITY);
    let dispatch_spawner = DISPATCH_EXECUTOR.start(interrupt::SWI_IRQ_0);

    let executor = THREAD_EXECUTOR.init(Executor::new());
    executor.run(move |spawner| {
        match hardware::init_toggle_pipeline(edge_spawner, dispatch_spawner, spawner, p) {
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
