// Application layer: drives the adapters for one CLI invocation.

pub mod runner;

pub use runner::{RunSettings, RunSummary, Runner, Task};
