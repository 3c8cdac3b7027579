//! Rich comparison operator codes

use std::os::raw::c_int;

use crate::ffi;

/// Relational operator applied by `Object::rich_compare`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum CompareOp {
    Lt = ffi::Py_LT,
    Le = ffi::Py_LE,
    Eq = ffi::Py_EQ,
    Ne = ffi::Py_NE,
    Gt = ffi::Py_GT,
    Ge = ffi::Py_GE,
}

impl CompareOp {
    /// Native operator code.
    #[inline(always)]
    pub fn as_raw(self) -> c_int {
        self as c_int
    }

    /// Operator for a native code, if it names one.
    pub fn from_raw(op: c_int) -> Option<Self> {
        match op {
            ffi::Py_LT => Some(Self::Lt),
            ffi::Py_LE => Some(Self::Le),
            ffi::Py_EQ => Some(Self::Eq),
            ffi::Py_NE => Some(Self::Ne),
            ffi::Py_GT => Some(Self::Gt),
            ffi::Py_GE => Some(Self::Ge),
            _ => None,
        }
    }
}
