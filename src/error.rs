//! The interpreter's error indicator
//!
//! CPython reports failures through per-thread ambient state: a call returns
//! null or `-1` and sets the indicator. The raw functions here query and
//! manipulate that state and nothing in the crate clears it behind the
//! caller's back.
//!
//! [`PyResult`] is an additive layer on top: `Err(PyErrOccurred)` only says
//! "the indicator is set", the exception itself stays in the interpreter.

use std::ffi::CStr;
use std::os::raw::c_int;

use crate::ffi::{self, Py_ssize_t};
use crate::object::Object;

/// Sentinel that the error indicator is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PyErrOccurred;

pub type PyResult<T> = Result<T, PyErrOccurred>;

/// Borrowed reference to the pending exception type, or null.
pub unsafe fn occurred() -> Object {
    Object::from_ptr(ffi::PyErr_Occurred())
}

pub unsafe fn clear() {
    ffi::PyErr_Clear();
}

/// Whether the pending exception matches `exc` (a type or tuple of types).
pub unsafe fn exception_matches(exc: Object) -> bool {
    ffi::PyErr_ExceptionMatches(exc.as_ptr()) != 0
}

pub unsafe fn given_exception_matches(given: Object, exc: Object) -> bool {
    ffi::PyErr_GivenExceptionMatches(given.as_ptr(), exc.as_ptr()) != 0
}

pub unsafe fn set_string(exc: Object, message: &CStr) {
    ffi::PyErr_SetString(exc.as_ptr(), message.as_ptr());
}

pub unsafe fn set_none(exc: Object) {
    ffi::PyErr_SetNone(exc.as_ptr());
}

pub unsafe fn set_object(exc: Object, value: Object) {
    ffi::PyErr_SetObject(exc.as_ptr(), value.as_ptr());
}

/// Print the pending exception to `sys.stderr` and clear it.
pub unsafe fn print() {
    ffi::PyErr_Print();
}

/// `-1` statuses are errors.
#[inline]
pub fn check_status(status: c_int) -> PyResult<c_int> {
    if status == -1 {
        Err(PyErrOccurred)
    } else {
        Ok(status)
    }
}

/// Sizes and hashes use `-1` both as a value and an error marker, so the
/// indicator decides.
#[inline]
pub unsafe fn check_ssize(value: Py_ssize_t) -> PyResult<Py_ssize_t> {
    if value == -1 && !occurred().is_null() {
        Err(PyErrOccurred)
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalars::{long_as_c_long, long_from_i64, unicode_from_str};
    use crate::testing::with_python;
    use crate::types;

    #[test]
    fn test_check_status() {
        assert_eq!(check_status(0), Ok(0));
        assert_eq!(check_status(1), Ok(1));
        assert_eq!(check_status(-1), Err(PyErrOccurred));
    }

    #[test]
    fn test_set_and_match() {
        with_python(|| unsafe {
            assert!(occurred().is_null());

            set_string(types::value_error(), c"bad value");
            assert_eq!(occurred(), types::value_error());
            assert!(exception_matches(types::value_error()));
            assert!(exception_matches(types::exception()));
            assert!(!exception_matches(types::type_error()));
            clear();
            assert!(occurred().is_null());

            set_none(types::stop_iteration());
            assert!(given_exception_matches(occurred(), types::stop_iteration()));
            clear();

            let message = unicode_from_str(c"missing");
            set_object(types::key_error(), message);
            assert!(exception_matches(types::key_error()));
            assert!(exception_matches(types::base_exception()));
            clear();
            message.dec_ref();
        });
    }

    #[test]
    fn test_print_clears() {
        with_python(|| unsafe {
            set_string(types::value_error(), c"printed by test_print_clears");
            print();
            assert!(occurred().is_null());
        });
    }

    #[test]
    fn test_check_ssize() {
        with_python(|| unsafe {
            assert_eq!(check_ssize(-1), Ok(-1));

            let big = ffi::PyLong_FromUnsignedLongLong(u64::MAX);
            let value = long_as_c_long(Object::from_ptr(big));
            assert_eq!(check_ssize(value as Py_ssize_t), Err(PyErrOccurred));
            assert!(exception_matches(types::overflow_error()));
            clear();
            ffi::Py_DecRef(big);

            let minus_one = long_from_i64(-1);
            assert_eq!(check_ssize(long_as_c_long(minus_one) as Py_ssize_t), Ok(-1));
            minus_one.dec_ref();
        });
    }

    #[test]
    fn test_given_exception_matches_tuple() {
        with_python(|| unsafe {
            let pair = ffi::PyTuple_Pack(
                2,
                types::key_error().as_ptr(),
                types::index_error().as_ptr(),
            );
            assert!(given_exception_matches(types::index_error(), Object::from_ptr(pair)));
            assert!(!given_exception_matches(types::type_error(), Object::from_ptr(pair)));
            ffi::Py_DecRef(pair);
        });
    }
}
