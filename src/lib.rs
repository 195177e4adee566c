//! This crate provides a deterministic single-tape Turing machine interpreter.
//! A machine owns an immutable transition table and produces a lazy, step-wise
//! execution trace for any input; a bounded acceptance evaluator reduces the
//! trace to an accepted/rejected/indeterminate verdict. Modules cover the tape
//! model, the interpreter itself, trace rendering, loading machine definitions
//! from JSON, and a catalogue of embedded example machines.

pub mod loader;
pub mod machine;
pub mod programs;
pub mod render;
pub mod tape;
pub mod types;

/// Re-exports the `MachineLoader` struct from the loader module.
pub use loader::MachineLoader;
/// Re-exports the `Machine` and `Execution` types from the machine module.
pub use machine::{Execution, Machine};
/// Re-exports `MachineManager` and `MACHINES` from the programs module.
pub use programs::{MachineManager, MACHINES};
/// Re-exports the trace renderer from the render module.
pub use render::{Renderer, TraceStyle};
/// Re-exports the `Tape` struct from the tape module.
pub use tape::Tape;
/// Re-exports the core machine types from the types module.
pub use types::{
    Action, Configuration, Direction, MachineDef, MachineError, RuleDef, Transition,
    TransitionTable, Verdict, DEFAULT_STEP_LIMIT,
};
