//! Type objects, exception types and type-check predicates

use crate::ffi::{self, PyTypeObject};
use crate::object::Object;
use std::ptr::addr_of_mut;
use std::sync::OnceLock;

/// Cached builtin type objects for exact-type comparisons
pub struct TypeCache {
    pub type_: *mut PyTypeObject,
    pub long: *mut PyTypeObject,
    pub float: *mut PyTypeObject,
    pub bool_: *mut PyTypeObject,
    pub unicode: *mut PyTypeObject,
    pub bytes: *mut PyTypeObject,
    pub list: *mut PyTypeObject,
    pub tuple: *mut PyTypeObject,
    pub dict: *mut PyTypeObject,
    pub set: *mut PyTypeObject,
    pub frozenset: *mut PyTypeObject,
}

// SAFETY: only holds addresses of statically allocated type objects
unsafe impl Send for TypeCache {}
unsafe impl Sync for TypeCache {}

static TYPE_CACHE: OnceLock<TypeCache> = OnceLock::new();

/// Type cache, filled on first use
#[inline(always)]
pub fn type_cache() -> &'static TypeCache {
    TYPE_CACHE.get_or_init(|| unsafe {
        TypeCache {
            type_: addr_of_mut!(ffi::PyType_Type),
            long: addr_of_mut!(ffi::PyLong_Type),
            float: addr_of_mut!(ffi::PyFloat_Type),
            bool_: addr_of_mut!(ffi::PyBool_Type),
            unicode: addr_of_mut!(ffi::PyUnicode_Type),
            bytes: addr_of_mut!(ffi::PyBytes_Type),
            list: addr_of_mut!(ffi::PyList_Type),
            tuple: addr_of_mut!(ffi::PyTuple_Type),
            dict: addr_of_mut!(ffi::PyDict_Type),
            set: addr_of_mut!(ffi::PySet_Type),
            frozenset: addr_of_mut!(ffi::PyFrozenSet_Type),
        }
    })
}

#[inline(always)]
fn type_object(tp: *mut PyTypeObject) -> Object {
    Object::from_ptr(tp.cast())
}

// Borrowed references to builtin types

pub fn type_type() -> Object {
    type_object(type_cache().type_)
}

pub fn long_type() -> Object {
    type_object(type_cache().long)
}

pub fn float_type() -> Object {
    type_object(type_cache().float)
}

pub fn bool_type() -> Object {
    type_object(type_cache().bool_)
}

pub fn unicode_type() -> Object {
    type_object(type_cache().unicode)
}

pub fn bytes_type() -> Object {
    type_object(type_cache().bytes)
}

pub fn list_type() -> Object {
    type_object(type_cache().list)
}

pub fn tuple_type() -> Object {
    type_object(type_cache().tuple)
}

pub fn dict_type() -> Object {
    type_object(type_cache().dict)
}

pub fn set_type() -> Object {
    type_object(type_cache().set)
}

pub fn frozenset_type() -> Object {
    type_object(type_cache().frozenset)
}

// Borrowed references to builtin exception types. The globals are only
// meaningful once the interpreter is initialized, so they are read on demand.

macro_rules! exception_types {
    ($($name:ident => $global:ident),* $(,)?) => {
        $(
            #[inline]
            pub unsafe fn $name() -> Object {
                Object::from_ptr(ffi::$global)
            }
        )*
    };
}

exception_types! {
    base_exception => PyExc_BaseException,
    exception => PyExc_Exception,
    warning => PyExc_Warning,
    type_error => PyExc_TypeError,
    value_error => PyExc_ValueError,
    attribute_error => PyExc_AttributeError,
    key_error => PyExc_KeyError,
    index_error => PyExc_IndexError,
    overflow_error => PyExc_OverflowError,
    stop_iteration => PyExc_StopIteration,
    unicode_decode_error => PyExc_UnicodeDecodeError,
}

// Predicates

pub unsafe fn is_callable(obj: Object) -> bool {
    ffi::PyCallable_Check(obj.as_ptr()) != 0
}

pub unsafe fn is_type(obj: Object) -> bool {
    ffi::PyType_Check(obj.as_ptr()) != 0
}

pub unsafe fn is_long(obj: Object) -> bool {
    ffi::PyLong_Check(obj.as_ptr()) != 0
}

pub unsafe fn is_float(obj: Object) -> bool {
    ffi::PyFloat_Check(obj.as_ptr()) != 0
}

pub unsafe fn is_bool(obj: Object) -> bool {
    ffi::PyBool_Check(obj.as_ptr()) != 0
}

pub unsafe fn is_unicode(obj: Object) -> bool {
    ffi::PyUnicode_Check(obj.as_ptr()) != 0
}

pub unsafe fn is_bytes(obj: Object) -> bool {
    ffi::PyBytes_Check(obj.as_ptr()) != 0
}

pub unsafe fn is_list(obj: Object) -> bool {
    ffi::PyList_Check(obj.as_ptr()) != 0
}

pub unsafe fn is_list_exact(obj: Object) -> bool {
    ffi::Py_TYPE(obj.as_ptr()) == type_cache().list
}

pub unsafe fn is_tuple(obj: Object) -> bool {
    ffi::PyTuple_Check(obj.as_ptr()) != 0
}

pub unsafe fn is_tuple_exact(obj: Object) -> bool {
    ffi::Py_TYPE(obj.as_ptr()) == type_cache().tuple
}

pub unsafe fn is_dict(obj: Object) -> bool {
    ffi::PyDict_Check(obj.as_ptr()) != 0
}

pub unsafe fn is_dict_exact(obj: Object) -> bool {
    ffi::Py_TYPE(obj.as_ptr()) == type_cache().dict
}

pub unsafe fn is_iter(obj: Object) -> bool {
    ffi::PyIter_Check(obj.as_ptr()) != 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::{dict_new, list_new, tuple_new};
    use crate::runtime::import_module;
    use crate::scalars::{float_from_f64, long_from_i64, py_true, unicode_from_str};
    use crate::testing::with_python;

    #[test]
    fn test_type_cache_stable() {
        let first = type_cache() as *const TypeCache;
        assert_eq!(first, type_cache() as *const TypeCache);
        assert_ne!(type_cache().list, type_cache().tuple);
    }

    #[test]
    fn test_builtin_types_are_types() {
        with_python(|| unsafe {
            let builtins = [
                type_type(),
                long_type(),
                float_type(),
                bool_type(),
                unicode_type(),
                bytes_type(),
                list_type(),
                tuple_type(),
                dict_type(),
                set_type(),
                frozenset_type(),
            ];
            for tp in builtins {
                assert!(is_type(tp));
                assert!(is_callable(tp));
            }
            assert!(is_type(type_error()));
            assert_eq!(type_error().is_subclass(exception()), 1);
            assert_eq!(exception().is_subclass(base_exception()), 1);
            assert_eq!(key_error().is_subclass(value_error()), 0);
        });
    }

    #[test]
    fn test_predicates() {
        with_python(|| unsafe {
            let int = long_from_i64(1);
            let float = float_from_f64(1.0);
            let text = unicode_from_str(c"x");
            let list = list_new(0);
            let tuple = tuple_new(0);
            let dict = dict_new();

            assert!(is_long(int) && !is_float(int) && !is_bool(int));
            assert!(is_long(py_true()) && is_bool(py_true()));
            assert!(is_float(float) && !is_long(float));
            assert!(is_unicode(text) && !is_bytes(text));
            assert!(is_list(list) && is_list_exact(list) && !is_tuple(list));
            assert!(is_tuple(tuple) && is_tuple_exact(tuple));
            assert!(is_dict(dict) && is_dict_exact(dict));
            assert!(!is_callable(int) && !is_iter(list));

            for obj in [dict, tuple, list, text, float, int] {
                obj.dec_ref();
            }
        });
    }

    #[test]
    fn test_exact_checks_reject_subclasses() {
        with_python(|| unsafe {
            let collections = import_module(c"collections");
            let ordered_dict = collections.get_attr_string(c"OrderedDict");
            let instance = ordered_dict.call_function_obj_args(&[]);

            assert!(is_dict(instance));
            assert!(!is_dict_exact(instance));

            instance.dec_ref();
            ordered_dict.dec_ref();
            collections.dec_ref();
        });
    }
}
