//! Strings, integers, floats and the interpreter singletons

use std::ffi::CStr;
use std::os::raw::{c_double, c_long};

use crate::ffi::{self, Py_ssize_t};
use crate::object::Object;

/// New reference to a `str` decoded from UTF-8.
pub unsafe fn unicode_from_str(s: &CStr) -> Object {
    Object::from_ptr(ffi::PyUnicode_FromString(s.as_ptr()))
}

/// UTF-8 view of a `str`, cached inside the object.
///
/// Returns `None` with the error indicator set if `obj` is not a `str` or
/// cannot be encoded. The slice lives as long as `obj` does.
pub unsafe fn unicode_as_utf8<'a>(obj: Object) -> Option<&'a str> {
    let mut size: Py_ssize_t = 0;
    let data = ffi::PyUnicode_AsUTF8AndSize(obj.as_ptr(), &mut size);
    if data.is_null() {
        return None;
    }
    let bytes = std::slice::from_raw_parts(data.cast::<u8>(), size as usize);
    // CPython guarantees the cached buffer is valid UTF-8
    Some(std::str::from_utf8_unchecked(bytes))
}

/// New reference.
pub unsafe fn long_from_c_long(v: c_long) -> Object {
    Object::from_ptr(ffi::PyLong_FromLong(v))
}

/// New reference.
pub unsafe fn long_from_i64(v: i64) -> Object {
    Object::from_ptr(ffi::PyLong_FromLongLong(v))
}

/// `-1` with the error indicator set on overflow or a non-integer.
pub unsafe fn long_as_c_long(obj: Object) -> c_long {
    ffi::PyLong_AsLong(obj.as_ptr())
}

/// New reference.
pub unsafe fn float_from_f64(v: f64) -> Object {
    Object::from_ptr(ffi::PyFloat_FromDouble(v as c_double))
}

pub unsafe fn float_as_f64(obj: Object) -> f64 {
    ffi::PyFloat_AsDouble(obj.as_ptr())
}

/// Borrowed reference to `None`.
#[inline(always)]
pub unsafe fn none() -> Object {
    Object::from_ptr(ffi::Py_None())
}

/// Borrowed reference to `True`.
#[inline(always)]
pub unsafe fn py_true() -> Object {
    Object::from_ptr(ffi::Py_True())
}

/// Borrowed reference to `False`.
#[inline(always)]
pub unsafe fn py_false() -> Object {
    Object::from_ptr(ffi::Py_False())
}
