//! Mock host runtime shared by the integration tests
//!
//! Implements `HostContext` over in-memory storage with generational slots,
//! so tests can observe constructor caching (via define-call counts) and
//! non-owning handle semantics (via explicit reclamation).

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use vprof_sdk::{
    FunctionHandle, HostContext, HostError, HostResult, HostValue, IsolateId, ObjectRef,
    RawTimeProfile,
};

struct ClassSlot {
    generation: u32,
    name: Option<String>,
}

/// An object built through `construct`, kept for test assertions
#[derive(Clone)]
pub struct ConstructedObject {
    pub constructor: FunctionHandle,
    pub args: Vec<HostValue>,
}

struct HostInner {
    classes: Vec<ClassSlot>,
    objects: Vec<ConstructedObject>,
    define_calls: FxHashMap<String, usize>,
    sampling_interval: Option<u64>,
    canned_profile: RawTimeProfile,
}

/// In-memory host runtime for one isolate
pub struct MockHost {
    isolate: IsolateId,
    inner: Mutex<HostInner>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::with_profile(RawTimeProfile::default())
    }

    /// Host whose sampling engine returns `profile` on stop
    pub fn with_profile(profile: RawTimeProfile) -> Self {
        Self {
            isolate: IsolateId::new(),
            inner: Mutex::new(HostInner {
                classes: Vec::new(),
                objects: Vec::new(),
                define_calls: FxHashMap::default(),
                sampling_interval: None,
                canned_profile: profile,
            }),
        }
    }

    /// How many times `define_class` ran for `name`
    pub fn define_calls(&self, name: &str) -> usize {
        self.inner
            .lock()
            .define_calls
            .get(name)
            .copied()
            .unwrap_or(0)
    }

    /// Reclaim the function behind `handle`, as the host GC would. The slot's
    /// generation moves on, so the handle dangles afterwards.
    pub fn reclaim(&self, handle: FunctionHandle) {
        let mut inner = self.inner.lock();
        let slot = &mut inner.classes[handle.index() as usize];
        if slot.generation == handle.generation() {
            slot.name = None;
            slot.generation += 1;
        }
    }

    /// Look up an object built through `construct`
    pub fn object(&self, reference: ObjectRef) -> ConstructedObject {
        self.inner.lock().objects[reference.index() as usize].clone()
    }

    /// The interval sampling currently runs at, if any
    pub fn sampling_interval(&self) -> Option<u64> {
        self.inner.lock().sampling_interval
    }

    fn resolves(inner: &HostInner, handle: FunctionHandle) -> bool {
        inner
            .classes
            .get(handle.index() as usize)
            .map(|slot| slot.generation == handle.generation() && slot.name.is_some())
            .unwrap_or(false)
    }
}

impl HostContext for MockHost {
    fn isolate(&self) -> IsolateId {
        self.isolate
    }

    fn define_class(&self, name: &str, _field_names: &[&str]) -> HostResult<FunctionHandle> {
        let mut inner = self.inner.lock();
        *inner.define_calls.entry(name.to_string()).or_insert(0) += 1;

        let index = inner.classes.len() as u32;
        inner.classes.push(ClassSlot {
            generation: 0,
            name: Some(name.to_string()),
        });
        Ok(FunctionHandle::new(index, 0))
    }

    fn is_live(&self, constructor: FunctionHandle) -> bool {
        Self::resolves(&self.inner.lock(), constructor)
    }

    fn construct(&self, constructor: FunctionHandle, args: &[HostValue]) -> HostResult<ObjectRef> {
        let mut inner = self.inner.lock();
        if !Self::resolves(&inner, constructor) {
            return Err(HostError::StaleHandle(constructor));
        }
        let index = inner.objects.len() as u32;
        inner.objects.push(ConstructedObject {
            constructor,
            args: args.to_vec(),
        });
        Ok(ObjectRef::new(index, 0))
    }

    fn start_sampling(&self, interval_micros: u64) -> HostResult<()> {
        let mut inner = self.inner.lock();
        if inner.sampling_interval.is_some() {
            return Err(HostError::AlreadySampling);
        }
        inner.sampling_interval = Some(interval_micros);
        Ok(())
    }

    fn stop_sampling(&self) -> HostResult<RawTimeProfile> {
        let mut inner = self.inner.lock();
        if inner.sampling_interval.take().is_none() {
            return Err(HostError::NotSampling);
        }
        Ok(inner.canned_profile.clone())
    }
}
