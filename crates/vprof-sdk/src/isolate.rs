//! Isolate identity
//!
//! An isolate is one independent instance of the host runtime, with its own
//! heap and set of live constructors. Ids are minted from a process-wide
//! counter and never reused, so the id of a destroyed isolate can never
//! collide with a later isolate's.

use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a host-runtime isolate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IsolateId(u64);

impl IsolateId {
    /// Mint a new unique isolate ID
    pub fn new() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        IsolateId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Default for IsolateId {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isolate_id_uniqueness() {
        let id1 = IsolateId::new();
        let id2 = IsolateId::new();
        let id3 = IsolateId::new();

        assert_ne!(id1, id2);
        assert_ne!(id2, id3);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_isolate_id_copy_semantics() {
        let id = IsolateId::new();
        let copy = id;

        assert_eq!(id, copy);
        assert_eq!(id.as_u64(), copy.as_u64());
    }
}
