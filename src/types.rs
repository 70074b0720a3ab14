//! Common types shared by the EdgeBlink firmware modules

use edgeblink_core::{EdgeFlags, EdgeSource};
use embassy_rp::gpio::Input;

/// Where a task runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum TaskContext {
    /// Interrupt executor on `SWI_IRQ_1`, priority `config::EDGE_IRQ_PRIORITY`
    Edge,
    /// Interrupt executor on `SWI_IRQ_0`, priority `config::DISPATCH_IRQ_PRIORITY`
    Dispatch,
    /// Thread-mode executor, preempted by both interrupt executors
    Thread,
}

impl TaskContext {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Edge => "SWI_IRQ_1 (edges)",
            Self::Dispatch => "SWI_IRQ_0 (dispatch)",
            Self::Thread => "thread mode",
        }
    }
}

/// Static description of a spawned task, reported in the start-up banner
#[derive(Debug, Clone, Copy, defmt::Format)]
pub struct TaskSpec {
    pub name: &'static str,
    pub context: TaskContext,
}

impl TaskSpec {
    pub const fn new(name: &'static str, context: TaskContext) -> Self {
        Self { name, context }
    }
}

/// A button input together with its GPIO number
///
/// The number is what the edge handler routes on.
pub struct EdgeInput {
    pin: u8,
    input: Input<'static>,
}

impl EdgeInput {
    pub fn new(pin: u8, input: Input<'static>) -> Self {
        Self { pin, input }
    }
}

impl EdgeSource for EdgeInput {
    fn pin(&self) -> u8 {
        self.pin
    }

    /// The GPIO block latches the falling edge itself, so the direction is
    /// known even if the button is already released when the task runs.
    async fn next_edge(&mut self) -> EdgeFlags {
        self.input.wait_for_falling_edge().await;
        EdgeFlags::falling(self.input.is_low())
    }
}
