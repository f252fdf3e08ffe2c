//! Simulation domain models.
//!
//! Provides the data types shared by the workload generator, the
//! simulators and the metrics calculator.
//!
//! # Domain Mappings
//!
//! | cpu-sched-sim | Operating system | Scheduling theory |
//! |---------------|------------------|-------------------|
//! | Process | Task / thread | Job |
//! | ExecutionTrace | CPU timeline | Gantt chart |
//! | Ticks | Timer interrupts | Time units |

mod process;
mod trace;

pub use process::{total_burst, Process, ProcessId, Ticks};
pub use trace::{ExecutionTrace, TraceSegment};
