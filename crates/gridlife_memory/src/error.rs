use thiserror::Error;

use crate::object::ObjectId;

/// Contract violations reported by the object registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// The id was never minted by this registry, or the object it named has
    /// already been destroyed by a collection pass.
    #[error("object {0} is not registered here")]
    UnknownObject(ObjectId),

    /// The object has been moved to the dead set and awaits collection.
    #[error("object {0} has already been released to the dead set")]
    AlreadyDead(ObjectId),

    /// Over-release: the reference count is already zero.
    #[error("object {0} has no outstanding references to release")]
    NoOutstandingReferences(ObjectId),
}
