//! EdgeBlink - interrupt-driven button-to-LED pipelines for RP2040
//!
//! Firmware half of the project: pin bring-up, executors and Embassy
//! adapters around the hardware-independent `edgeblink-core` crate.
//!
//! ## Pipelines
//! - **Period ramp** (`period-blink`): each press raises a channel's blink
//!   period by 100 ms, wrapping at 1000 ms
//! - **Toggle blink** (`toggle-blink`): each press switches a channel's
//!   100 ms blink on or off through a dispatch task
//!
//! ## Architecture
//! - **Edges**: high-priority interrupt executor, never blocks
//! - **Dispatch**: medium-priority interrupt executor (toggle blink only)
//! - **LEDs and supervisor**: thread-mode executor
//! - **Channels**: bounded queues and binary signals, the only path between them

#![no_std]

pub mod buttons;
pub mod channels;
pub mod config;
pub mod hardware;
pub mod leds;
pub mod runtime;
pub mod supervisor;
pub mod types;
