//! Argument values for host calls
//!
//! Values handed to the host when constructing objects. Unlike a real FFI
//! boundary there is no C ABI here, so a plain enum is used instead of a
//! tagged word.

use crate::handle::ObjectRef;

/// A value passed to the host when constructing objects
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    /// Null / absent
    Null,
    /// Boolean
    Bool(bool),
    /// 64-bit integer
    Int(i64),
    /// 64-bit float
    Float(f64),
    /// String
    Str(String),
    /// Reference to a host-heap object
    Object(ObjectRef),
    /// Array of values
    Array(Vec<HostValue>),
}

impl HostValue {
    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, HostValue::Null)
    }

    /// Get as boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            HostValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as 64-bit integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            HostValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as 64-bit float (integers widen)
    pub fn as_float(&self) -> Option<f64> {
        match self {
            HostValue::Float(f) => Some(*f),
            HostValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            HostValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get as object reference
    pub fn as_object(&self) -> Option<ObjectRef> {
        match self {
            HostValue::Object(r) => Some(*r),
            _ => None,
        }
    }

    /// Get as array slice
    pub fn as_array(&self) -> Option<&[HostValue]> {
        match self {
            HostValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Type name for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            HostValue::Null => "null",
            HostValue::Bool(_) => "bool",
            HostValue::Int(_) => "int",
            HostValue::Float(_) => "float",
            HostValue::Str(_) => "string",
            HostValue::Object(_) => "object",
            HostValue::Array(_) => "array",
        }
    }
}
