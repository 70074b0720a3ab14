//! Hardware configuration for EdgeBlink
//! Raspberry Pi Pico (RP2040), two buttons and two LEDs per pipeline

use edgeblink_core::{ChannelId, PinMap, Route};
use embassy_rp::interrupt::Priority;

pub use edgeblink_core::{PERIOD_POLL_MS, RAMP_CEILING_MS, RAMP_STEP_MS, TOGGLE_TICK_MS};

use crate::types::{TaskContext, TaskSpec};

// ===================================================================
// Pipeline Selection
// ===================================================================

/// Which of the two pipelines a binary runs
#[derive(Debug, Clone, Copy, PartialEq, defmt::Format)]
pub enum PipelineVariant {
    /// Every press bumps the channel's blink period (100..=1000 ms)
    PeriodRamp,
    /// Every press toggles a fixed 100 ms blink
    ToggleBlink,
}

impl PipelineVariant {
    pub const fn name(self) -> &'static str {
        match self {
            Self::PeriodRamp => "period ramp",
            Self::ToggleBlink => "toggle blink",
        }
    }

    pub const fn buttons(self) -> PinMap<2> {
        match self {
            Self::PeriodRamp => PERIOD_BUTTONS,
            Self::ToggleBlink => TOGGLE_BUTTONS,
        }
    }

    pub const fn leds(self) -> [Route; 2] {
        match self {
            Self::PeriodRamp => PERIOD_LEDS,
            Self::ToggleBlink => TOGGLE_LEDS,
        }
    }

    pub const fn tasks(self) -> &'static [TaskSpec] {
        match self {
            Self::PeriodRamp => &PERIOD_TASKS,
            Self::ToggleBlink => &TOGGLE_TASKS,
        }
    }
}

// ===================================================================
// GPIO Pin Assignments - Raspberry Pi Pico
// ===================================================================

// Period ramp: red and green
pub const PERIOD_BTN_RED_PIN: u8 = 28;
pub const PERIOD_BTN_GREEN_PIN: u8 = 26;
pub const PERIOD_LED_RED_PIN: u8 = 4;
pub const PERIOD_LED_GREEN_PIN: u8 = 6;

// Toggle blink: red and yellow
pub const TOGGLE_BTN_RED_PIN: u8 = 28;
pub const TOGGLE_BTN_YELLOW_PIN: u8 = 21;
pub const TOGGLE_LED_RED_PIN: u8 = 5;
pub const TOGGLE_LED_YELLOW_PIN: u8 = 10;

pub const PERIOD_BUTTONS: PinMap<2> = PinMap::new([
    Route::new(PERIOD_BTN_RED_PIN, ChannelId::Red),
    Route::new(PERIOD_BTN_GREEN_PIN, ChannelId::Green),
]);

pub const TOGGLE_BUTTONS: PinMap<2> = PinMap::new([
    Route::new(TOGGLE_BTN_RED_PIN, ChannelId::Red),
    Route::new(TOGGLE_BTN_YELLOW_PIN, ChannelId::Yellow),
]);

pub const PERIOD_LEDS: [Route; 2] = [
    Route::new(PERIOD_LED_RED_PIN, ChannelId::Red),
    Route::new(PERIOD_LED_GREEN_PIN, ChannelId::Green),
];

pub const TOGGLE_LEDS: [Route; 2] = [
    Route::new(TOGGLE_LED_RED_PIN, ChannelId::Red),
    Route::new(TOGGLE_LED_YELLOW_PIN, ChannelId::Yellow),
];

// ===================================================================
// Interrupt Priorities (P0 highest)
// ===================================================================

pub const EDGE_IRQ_PRIORITY: Priority = Priority::P1; // Edge handling on SWI_IRQ_1
pub const DISPATCH_IRQ_PRIORITY: Priority = Priority::P2; // Button dispatch on SWI_IRQ_0

// ===================================================================
// Queue Depths
// ===================================================================

pub const PERIOD_QUEUE_DEPTH: usize = 32; // Pending periods per channel
pub const BUTTON_QUEUE_DEPTH: usize = 16; // Pending tags, shared by both buttons

// ===================================================================
// Task Table
// ===================================================================

// Priorities come from the context: see the interrupt priorities above.
pub const PERIOD_TASKS: [TaskSpec; 4] = [
    TaskSpec::new("EDGE_R", TaskContext::Edge),
    TaskSpec::new("EDGE_G", TaskContext::Edge),
    TaskSpec::new("LED_R", TaskContext::Thread),
    TaskSpec::new("LED_G", TaskContext::Thread),
];

pub const TOGGLE_TASKS: [TaskSpec; 5] = [
    TaskSpec::new("EDGE_R", TaskContext::Edge),
    TaskSpec::new("EDGE_Y", TaskContext::Edge),
    TaskSpec::new("BTN", TaskContext::Dispatch),
    TaskSpec::new("LED_R", TaskContext::Thread),
    TaskSpec::new("LED_Y", TaskContext::Thread),
];

// ===================================================================
// Supervisor
// ===================================================================

pub const SUPERVISOR_TICK_SECS: u64 = 10;
pub const STATUS_INTERVAL_SECS: u32 = 60;
