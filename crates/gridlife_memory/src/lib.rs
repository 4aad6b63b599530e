//! Managed object lifecycle system for gridlife
//!
//! Provides reference counting with deferred two-phase collection: releasing
//! the last reference marks an object dead, destruction happens in a separate
//! batched sweep at a point the caller controls.

pub mod error;
pub mod object;
pub mod registry;

pub use error::MemoryError;
pub use object::{Managed, ObjectId};
pub use registry::{CollectStats, ObjectRegistry};
