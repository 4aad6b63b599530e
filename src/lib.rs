//! gridlife: a managed-object lifecycle facility and a grid automaton engine
//!
//! The two components are independent of each other; a host combines them by
//! registering its domain objects (cells, typically) with an
//! [`ObjectRegistry`] and driving [`Automaton::step`] on a timer. This crate
//! re-exports both and owns process-level logging setup.

pub mod logging;

pub use gridlife_engine::{Automaton, Cell, EngineError, Grid, GridConfig, PATTERNS, Pattern};
pub use gridlife_memory::{
    CollectStats, Managed, MemoryError, ObjectId, ObjectRegistry, auto_footprint,
};

pub use logging::init_logging;
