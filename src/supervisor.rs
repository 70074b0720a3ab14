//! Application supervisor and monitoring
//!
//! This module provides the start-up banner and the uptime loop, which also
//! reports edges lost to full queues.

use crate::config::{self, PipelineVariant};
use defmt::*;
use edgeblink_core::EdgeHandler;
use embassy_time::{Duration, Timer};

/// Application supervisor responsible for monitoring and lifecycle management
pub struct AppSupervisor {
    variant: PipelineVariant,
    uptime_seconds: u32,
    last_heartbeat: u32,
    last_dropped: u32,
}

impl AppSupervisor {
    /// Create a new application supervisor for a pipeline
    pub fn new(variant: PipelineVariant) -> Self {
        Self {
            variant,
            uptime_seconds: 0,
            last_heartbeat: 0,
            last_dropped: 0,
        }
    }

    /// Print application startup banner with pin and task information
    pub fn print_startup_banner(&self) {
        info!("========================================");
        info!("EdgeBlink v{}", env!("CARGO_PKG_VERSION"));
        info!("Hardware: RP2040 (Raspberry Pi Pico)");
        info!("Pipeline: {}", self.variant.name());
        info!("========================================");
        for route in self.variant.buttons().routes() {
            info!("Button [{}] on GPIO {}", route.channel.label(), route.pin);
        }
        for route in self.variant.leds() {
            info!("LED    [{}] on GPIO {}", route.channel.label(), route.pin);
        }
        for task in self.variant.tasks() {
            info!("Task {}: {}", task.name, task.context.label());
        }
        info!("========================================");
    }

    /// Print successful initialization message
    pub fn print_init_success(&self) {
        info!("EdgeBlink initialized successfully");
        info!("Waiting for button presses...");
    }

    /// Run the main supervisor loop
    pub async fn run(&mut self, edges: &dyn EdgeHandler) -> ! {
        info!("Application supervisor started");
        for route in edges.routes() {
            debug!("Watching GPIO {} for [{}]", route.pin, route.channel.label());
        }

        loop {
            Timer::after(Duration::from_secs(config::SUPERVISOR_TICK_SECS)).await;
            self.uptime_seconds += config::SUPERVISOR_TICK_SECS as u32;

            if self.uptime_seconds - self.last_heartbeat >= config::STATUS_INTERVAL_SECS {
                self.print_status(edges.dropped());
                self.last_heartbeat = self.uptime_seconds;
            }
        }
    }

    /// Print current application status
    fn print_status(&mut self, dropped: u32) {
        let minutes = self.uptime_seconds / 60;
        let hours = minutes / 60;
        let remaining_minutes = minutes % 60;

        if hours > 0 {
            info!("Status: Uptime {}h{}m, dropped edges {}", hours, remaining_minutes, dropped);
        } else {
            info!("Status: Uptime {}m, dropped edges {}", minutes, dropped);
        }

        if dropped > self.last_dropped {
            warn!(
                "{} button edges lost to full queues since last status",
                dropped - self.last_dropped
            );
            self.last_dropped = dropped;
        }
    }
}

/// Supervisor loop as a thread-mode task
#[embassy_executor::task]
pub async fn supervisor_task(mut supervisor: AppSupervisor, edges: &'static dyn EdgeHandler) {
    supervisor.print_init_success();
    supervisor.run(edges).await
}
