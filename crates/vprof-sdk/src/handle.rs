//! Non-owning references to host-owned runtime objects
//!
//! The host runtime is the sole owner of constructor functions and object
//! instances, and it controls their lifetime and garbage collection. An
//! extension never holds a constructor by value; it holds an index into
//! host-managed storage plus the generation of the occupant at the time the
//! handle was minted. Once the host reclaims the occupant and the slot's
//! generation moves on, the handle dangles and every host operation through
//! it fails.

use std::fmt;

/// Non-owning handle to a constructor function in host storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FunctionHandle {
    index: u32,
    generation: u32,
}

impl FunctionHandle {
    /// Create a handle (used by host implementations)
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index in host storage
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Generation of the slot occupant when the handle was minted
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for FunctionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fn#{}@{}", self.index, self.generation)
    }
}

/// Non-owning handle to an object instance on the host heap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    index: u32,
    generation: u32,
}

impl ObjectRef {
    /// Create an object reference (used by host implementations)
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index in host storage
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Generation of the slot occupant when the reference was minted
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "obj#{}@{}", self.index, self.generation)
    }
}
