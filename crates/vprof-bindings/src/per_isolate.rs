//! Per-isolate constructor cache
//!
//! Each isolate gets one [`PerIsolateData`] holding the cached constructor
//! handles for the CpuProfiler, Location, and Sample classes. The cache
//! exists so a constructor is created once per isolate and then looked up in
//! O(1) on every later object construction, instead of being re-created on
//! each call.
//!
//! Instances are created lazily on first lookup and torn down by
//! [`PerIsolateData::dispose`], which the host's isolate-destruction
//! notification calls. The registry stores only non-owning handles; the host
//! runtime owns the constructors themselves.

use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use vprof_sdk::{FunctionHandle, IsolateId};

/// Process-wide registry of per-isolate data, keyed by isolate ID
static REGISTRY: Lazy<DashMap<IsolateId, Arc<PerIsolateData>>> = Lazy::new(DashMap::new);

/// A single constructor cache slot
///
/// Holds at most one constructor handle. Empty until first assigned; last
/// write wins and the first read after a write observes it. The slot performs
/// no validation of what is stored.
pub struct ConstructorSlot {
    handle: RwLock<Option<FunctionHandle>>,
}

impl ConstructorSlot {
    fn new() -> Self {
        Self {
            handle: RwLock::new(None),
        }
    }

    /// Get the cached handle, if any
    pub fn get(&self) -> Option<FunctionHandle> {
        *self.handle.read()
    }

    /// Store a handle, replacing any previous one
    pub fn set(&self, handle: FunctionHandle) {
        *self.handle.write() = Some(handle);
    }

    /// Clear the slot back to empty
    pub fn clear(&self) {
        *self.handle.write() = None;
    }

    /// Check if the slot is empty
    pub fn is_empty(&self) -> bool {
        self.handle.read().is_none()
    }

    /// Get the cached handle, populating the slot on first use
    ///
    /// If the slot is empty, `init` runs and its result is stored. An error
    /// from `init` leaves the slot empty.
    pub fn get_or_try_init<E>(
        &self,
        init: impl FnOnce() -> Result<FunctionHandle, E>,
    ) -> Result<FunctionHandle, E> {
        if let Some(handle) = self.get() {
            return Ok(handle);
        }
        let mut guard = self.handle.write();
        // Re-check under the write lock
        if let Some(handle) = *guard {
            return Ok(handle);
        }
        let handle = init()?;
        *guard = Some(handle);
        Ok(handle)
    }
}

/// Per-isolate cache of constructor handles
///
/// Exactly one instance exists per live isolate, enforced by the
/// [`for_isolate`](PerIsolateData::for_isolate) factory. The three slots are
/// fully independent: writing one never disturbs the other two, and
/// mutations in one isolate's instance are invisible to every other
/// isolate's.
pub struct PerIsolateData {
    id: IsolateId,
    cpu_profiler_constructor: ConstructorSlot,
    location_constructor: ConstructorSlot,
    sample_constructor: ConstructorSlot,
}

impl PerIsolateData {
    fn new(id: IsolateId) -> Self {
        Self {
            id,
            cpu_profiler_constructor: ConstructorSlot::new(),
            location_constructor: ConstructorSlot::new(),
            sample_constructor: ConstructorSlot::new(),
        }
    }

    /// Get the data associated with `id`, creating an empty instance if none
    /// exists yet
    ///
    /// Two consecutive calls for the same isolate return the same instance.
    pub fn for_isolate(id: IsolateId) -> Arc<PerIsolateData> {
        REGISTRY
            .entry(id)
            .or_insert_with(|| Arc::new(PerIsolateData::new(id)))
            .value()
            .clone()
    }

    /// Get the data associated with `id` without creating it
    ///
    /// Teardown-path lookups go through this so they observe absence instead
    /// of resurrecting state.
    pub fn existing(id: IsolateId) -> Option<Arc<PerIsolateData>> {
        REGISTRY.get(&id).map(|entry| entry.value().clone())
    }

    /// Drop the data associated with `id`
    ///
    /// Called from the host's isolate-destruction notification. Returns
    /// whether an entry existed. Outstanding `Arc`s stay readable until
    /// dropped; only the factory association is severed.
    pub fn dispose(id: IsolateId) -> bool {
        REGISTRY.remove(&id).is_some()
    }

    /// The isolate this data belongs to
    pub fn isolate(&self) -> IsolateId {
        self.id
    }

    /// Cached CpuProfiler constructor slot
    pub fn cpu_profiler_constructor(&self) -> &ConstructorSlot {
        &self.cpu_profiler_constructor
    }

    /// Cached Location constructor slot
    pub fn location_constructor(&self) -> &ConstructorSlot {
        &self.location_constructor
    }

    /// Cached Sample constructor slot
    pub fn sample_constructor(&self) -> &ConstructorSlot {
        &self.sample_constructor
    }
}
