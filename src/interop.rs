//! Conversions to and from PyO3's smart pointers

use pyo3::prelude::*;
use pyo3::PyErr;

use crate::error::PyErrOccurred;
use crate::object::Object;
use crate::owned::Owned;

impl Owned {
    /// Hand the reference over to PyO3.
    pub fn into_py_any(self, py: Python<'_>) -> Py<PyAny> {
        unsafe { Bound::from_owned_ptr(py, self.into_object().as_ptr()).unbind() }
    }

    /// Take the reference held by a PyO3 pointer.
    pub fn from_py_any(obj: Py<PyAny>) -> Owned {
        unsafe { Owned::from_new_unchecked(Object::from_ptr(obj.into_ptr())) }
    }
}

impl PyErrOccurred {
    /// Move the pending exception out of the error indicator.
    pub fn fetch(self, py: Python<'_>) -> Option<PyErr> {
        PyErr::take(py)
    }
}
