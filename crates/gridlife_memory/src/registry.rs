//! Object registry with deferred two-phase collection
//!
//! Releasing the last reference only moves an object from the live set to the
//! dead set; memory is reclaimed later by an explicit sweep. This keeps
//! destructor work off the reference-count hot path and lets the caller batch
//! collection at controlled points, typically once per tick.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::error::MemoryError;
use crate::object::{Managed, ObjectId};

/// Statistics from a collection pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectStats {
    /// Number of objects destroyed.
    pub objects_collected: usize,
    /// Subset of `objects_collected` that still had outstanding references
    /// and were destroyed anyway by [`ObjectRegistry::collect_remaining`].
    pub objects_forced: usize,
    /// Bytes freed, as reported by each object's footprint.
    pub bytes_freed: usize,
    /// Duration of the pass in milliseconds.
    pub duration_ms: u64,
}

struct LiveEntry {
    object: Box<dyn Managed>,
    references: usize,
}

type DeadEntry = (u64, Box<dyn Managed>);

#[derive(Default)]
struct Inner {
    live: HashMap<u64, LiveEntry>,
    // Destruction order within a sweep is unspecified; insertion order is an
    // implementation detail.
    dead: Vec<DeadEntry>,
}

/// Registry of managed objects, partitioned into a live set and a dead set.
///
/// An explicit context object rather than process-global state: independent
/// registries are fully isolated, which is what lets tests instantiate their
/// own. A single lock guards both sets so that moves between them are atomic.
pub struct ObjectRegistry {
    inner: Mutex<Inner>,
    next_id: AtomicU64,
}

impl ObjectRegistry {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Takes ownership of an object and adds it to the live set with a
    /// reference count of zero.
    pub fn register(&self, object: Box<dyn Managed>) -> ObjectId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .lock()
            .live
            .insert(id, LiveEntry { object, references: 0 });
        ObjectId(id)
    }

    /// Increments the reference count of a live object.
    pub fn add_reference(&self, id: ObjectId) -> Result<(), MemoryError> {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        match inner.live.get_mut(&id.0) {
            Some(entry) => {
                entry.references += 1;
                Ok(())
            }
            None => Err(Self::missing(&inner.dead, id)),
        }
    }

    /// Decrements the reference count of a live object. On reaching zero the
    /// object is moved to the dead set; it is not destroyed until the next
    /// [`collect_garbage`](Self::collect_garbage) pass.
    ///
    /// Over-release is a contract violation and is reported, never clamped:
    /// releasing an object whose count is already zero yields
    /// [`MemoryError::NoOutstandingReferences`].
    pub fn release_reference(&self, id: ObjectId) -> Result<(), MemoryError> {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        let Some(entry) = inner.live.get_mut(&id.0) else {
            return Err(Self::missing(&inner.dead, id));
        };
        if entry.references == 0 {
            return Err(MemoryError::NoOutstandingReferences(id));
        }
        entry.references -= 1;
        if entry.references > 0 {
            return Ok(());
        }
        if let Some(entry) = inner.live.remove(&id.0) {
            inner.dead.push((id.0, entry.object));
            debug!(id = id.0, "object released to dead set");
        }
        Ok(())
    }

    /// Destroys every object in the dead set and empties it. Safe to call
    /// with an empty dead set; a second consecutive call is a no-op.
    pub fn collect_garbage(&self) -> CollectStats {
        let mut guard = self.inner.lock();
        Self::sweep_dead(&mut guard)
    }

    /// Runs [`collect_garbage`](Self::collect_garbage), then force-destroys
    /// every object still live regardless of outstanding references, and
    /// empties the live set. Intended only for subsystem shutdown: holders of
    /// references to force-destroyed objects are left dangling.
    ///
    /// With `emit_warnings` set, each force-destroyed object is reported via
    /// `tracing::warn!`; the count is also returned in
    /// [`CollectStats::objects_forced`].
    pub fn collect_remaining(&self, emit_warnings: bool) -> CollectStats {
        let start = Instant::now();
        let mut guard = self.inner.lock();
        let mut stats = Self::sweep_dead(&mut guard);
        for (id, entry) in guard.live.drain() {
            let footprint = entry.object.footprint();
            if emit_warnings {
                warn!(
                    id,
                    references = entry.references,
                    footprint,
                    "force-destroying object that still has outstanding references"
                );
            }
            stats.objects_collected += 1;
            stats.objects_forced += 1;
            stats.bytes_freed += footprint;
        }
        stats.duration_ms = start.elapsed().as_millis() as u64;
        stats
    }

    /// Current reference count of a live object.
    pub fn reference_count(&self, id: ObjectId) -> Result<usize, MemoryError> {
        let guard = self.inner.lock();
        match guard.live.get(&id.0) {
            Some(entry) => Ok(entry.references),
            None => Err(Self::missing(&guard.dead, id)),
        }
    }

    /// Whether the object has been moved to the dead set and awaits
    /// collection.
    pub fn is_dead(&self, id: ObjectId) -> bool {
        self.inner.lock().dead.iter().any(|(dead, _)| *dead == id.0)
    }

    pub fn live_count(&self) -> usize {
        self.inner.lock().live.len()
    }

    pub fn dead_count(&self) -> usize {
        self.inner.lock().dead.len()
    }

    /// Combined footprint of the live set, for accounting.
    pub fn total_footprint(&self) -> usize {
        self.inner
            .lock()
            .live
            .values()
            .map(|entry| entry.object.footprint())
            .sum()
    }

    fn sweep_dead(inner: &mut Inner) -> CollectStats {
        let start = Instant::now();
        let mut stats = CollectStats::default();
        for (_, object) in inner.dead.drain(..) {
            stats.objects_collected += 1;
            stats.bytes_freed += object.footprint();
        }
        stats.duration_ms = start.elapsed().as_millis() as u64;
        if stats.objects_collected > 0 {
            debug!(
                objects_collected = stats.objects_collected,
                bytes_freed = stats.bytes_freed,
                "collected dead set"
            );
        }
        stats
    }

    fn missing(dead: &[DeadEntry], id: ObjectId) -> MemoryError {
        if dead.iter().any(|(entry, _)| *entry == id.0) {
            MemoryError::AlreadyDead(id)
        } else {
            MemoryError::UnknownObject(id)
        }
    }
}

impl Default for ObjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}
