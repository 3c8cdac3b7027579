//! List, tuple and dict entry points
//!
//! `*_get_item*` results are borrowed from the container. `list_set_item` and
//! `tuple_set_item` steal the reference to `item`, even on failure.

use std::ffi::CStr;
use std::os::raw::c_int;

use crate::ffi::{self, Py_ssize_t};
use crate::object::Object;

// List

/// New reference to a list of `len` slots. Slots start out null and must be
/// filled with `list_set_item` before the list escapes.
pub unsafe fn list_new(len: Py_ssize_t) -> Object {
    Object::from_ptr(ffi::PyList_New(len))
}

pub unsafe fn list_size(list: Object) -> Py_ssize_t {
    ffi::PyList_Size(list.as_ptr())
}

/// Borrowed reference, or null with `IndexError` set.
pub unsafe fn list_get_item(list: Object, index: Py_ssize_t) -> Object {
    Object::from_ptr(ffi::PyList_GetItem(list.as_ptr(), index))
}

/// Steals `item`.
pub unsafe fn list_set_item(list: Object, index: Py_ssize_t, item: Object) -> c_int {
    ffi::PyList_SetItem(list.as_ptr(), index, item.as_ptr())
}

/// Does not steal `item`.
pub unsafe fn list_append(list: Object, item: Object) -> c_int {
    ffi::PyList_Append(list.as_ptr(), item.as_ptr())
}

// Tuple

/// New reference to a tuple of `len` null slots.
pub unsafe fn tuple_new(len: Py_ssize_t) -> Object {
    Object::from_ptr(ffi::PyTuple_New(len))
}

pub unsafe fn tuple_size(tuple: Object) -> Py_ssize_t {
    ffi::PyTuple_Size(tuple.as_ptr())
}

/// Borrowed reference, or null with `IndexError` set.
pub unsafe fn tuple_get_item(tuple: Object, index: Py_ssize_t) -> Object {
    Object::from_ptr(ffi::PyTuple_GetItem(tuple.as_ptr(), index))
}

/// Steals `item`.
pub unsafe fn tuple_set_item(tuple: Object, index: Py_ssize_t, item: Object) -> c_int {
    ffi::PyTuple_SetItem(tuple.as_ptr(), index, item.as_ptr())
}

// Dict

/// New reference.
pub unsafe fn dict_new() -> Object {
    Object::from_ptr(ffi::PyDict_New())
}

pub unsafe fn dict_size(dict: Object) -> Py_ssize_t {
    ffi::PyDict_Size(dict.as_ptr())
}

/// Borrowed reference, or null without an exception when the key is missing.
pub unsafe fn dict_get_item(dict: Object, key: Object) -> Object {
    Object::from_ptr(ffi::PyDict_GetItem(dict.as_ptr(), key.as_ptr()))
}

/// Borrowed reference, or null without an exception when the key is missing.
pub unsafe fn dict_get_item_string(dict: Object, key: &CStr) -> Object {
    Object::from_ptr(ffi::PyDict_GetItemString(dict.as_ptr(), key.as_ptr()))
}

pub unsafe fn dict_set_item(dict: Object, key: Object, value: Object) -> c_int {
    ffi::PyDict_SetItem(dict.as_ptr(), key.as_ptr(), value.as_ptr())
}

pub unsafe fn dict_set_item_string(dict: Object, key: &CStr, value: Object) -> c_int {
    ffi::PyDict_SetItemString(dict.as_ptr(), key.as_ptr(), value.as_ptr())
}

pub unsafe fn dict_del_item(dict: Object, key: Object) -> c_int {
    ffi::PyDict_DelItem(dict.as_ptr(), key.as_ptr())
}
