//! Object handle and the object protocol
//!
//! [`Object`] is a raw, nullable handle to a value owned by the interpreter.
//! Every method forwards to exactly one C API entry point and returns its
//! result unchanged, including null handles and `-1` statuses. Nothing here
//! inspects or clears the error indicator; see [`crate::error`].
//!
//! All methods are `unsafe`: the caller must hold the GIL and pass handles
//! that are either null where the C API allows it, or point to live objects.
//! Methods documented as returning a *new reference* hand ownership of one
//! reference to the caller; everything else is borrowed.

use std::ffi::CStr;
use std::fmt;
use std::os::raw::c_int;
use std::ptr;

use crate::compare::CompareOp;
use crate::ffi::{self, Py_hash_t, Py_ssize_t, PyObject};
use crate::shim::MAX_VARIADIC_LENGTH;

/// Opaque handle to an interpreter object.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Object(*mut PyObject);

impl Object {
    /// The null handle, returned by failing calls.
    pub const NULL: Object = Object(ptr::null_mut());

    #[inline(always)]
    pub fn from_ptr(ptr: *mut PyObject) -> Self {
        Object(ptr)
    }

    #[inline(always)]
    pub fn as_ptr(self) -> *mut PyObject {
        self.0
    }

    #[inline(always)]
    pub fn is_null(self) -> bool {
        self.0.is_null()
    }

    /// `Py_IncRef`; a null handle is ignored.
    #[inline(always)]
    pub unsafe fn inc_ref(self) {
        ffi::Py_IncRef(self.0);
    }

    /// `Py_DecRef`; a null handle is ignored.
    #[inline(always)]
    pub unsafe fn dec_ref(self) {
        ffi::Py_DecRef(self.0);
    }

    /// Current reference count.
    pub unsafe fn ref_count(self) -> Py_ssize_t {
        ffi::Py_REFCNT(self.0)
    }

    // Attributes

    pub unsafe fn has_attr(self, name: Object) -> bool {
        ffi::PyObject_HasAttr(self.0, name.0) != 0
    }

    pub unsafe fn has_attr_string(self, name: &CStr) -> bool {
        ffi::PyObject_HasAttrString(self.0, name.as_ptr()) != 0
    }

    /// New reference, or null with the error indicator set.
    pub unsafe fn get_attr(self, name: Object) -> Object {
        Object(ffi::PyObject_GetAttr(self.0, name.0))
    }

    /// New reference, or null with the error indicator set.
    pub unsafe fn get_attr_string(self, name: &CStr) -> Object {
        Object(ffi::PyObject_GetAttrString(self.0, name.as_ptr()))
    }

    /// Does not steal `value`.
    pub unsafe fn set_attr(self, name: Object, value: Object) -> c_int {
        ffi::PyObject_SetAttr(self.0, name.0, value.0)
    }

    pub unsafe fn set_attr_string(self, name: &CStr, value: Object) -> c_int {
        ffi::PyObject_SetAttrString(self.0, name.as_ptr(), value.0)
    }

    pub unsafe fn del_attr(self, name: Object) -> c_int {
        ffi::PyObject_SetAttr(self.0, name.0, ptr::null_mut())
    }

    pub unsafe fn del_attr_string(self, name: &CStr) -> c_int {
        ffi::PyObject_SetAttrString(self.0, name.as_ptr(), ptr::null_mut())
    }

    // Comparison and conversion

    /// New reference.
    pub unsafe fn rich_compare(self, other: Object, op: CompareOp) -> Object {
        Object(ffi::PyObject_RichCompare(self.0, other.0, op.as_raw()))
    }

    /// `1` if true, `0` if false, `-1` on error.
    pub unsafe fn rich_compare_bool(self, other: Object, op: CompareOp) -> c_int {
        ffi::PyObject_RichCompareBool(self.0, other.0, op.as_raw())
    }

    /// New reference.
    pub unsafe fn repr(self) -> Object {
        Object(ffi::PyObject_Repr(self.0))
    }

    /// New reference.
    pub unsafe fn str(self) -> Object {
        Object(ffi::PyObject_Str(self.0))
    }

    /// New reference.
    pub unsafe fn ascii(self) -> Object {
        Object(ffi::PyObject_ASCII(self.0))
    }

    /// New reference.
    pub unsafe fn bytes(self) -> Object {
        Object(ffi::PyObject_Bytes(self.0))
    }

    // Calls

    /// `kwargs` may be null. New reference.
    pub unsafe fn call(self, args: Object, kwargs: Object) -> Object {
        Object(ffi::PyObject_Call(self.0, args.0, kwargs.0))
    }

    /// `args` may be null for no arguments. New reference.
    pub unsafe fn call_object(self, args: Object) -> Object {
        Object(ffi::PyObject_CallObject(self.0, args.0))
    }

    /// Calls `self` with `args` as positional arguments. New reference.
    ///
    /// # Panics
    ///
    /// If more than [`MAX_VARIADIC_LENGTH`] arguments are passed.
    pub unsafe fn call_function_obj_args(self, args: &[Object]) -> Object {
        let argv = pack_args("call_function_obj_args", args);
        Object(ffi::variadic::call_function_obj_args(
            self.0,
            args.len(),
            argv.as_ptr(),
        ))
    }

    /// Calls the method `name` of `self` with `args`. New reference.
    ///
    /// # Panics
    ///
    /// If more than [`MAX_VARIADIC_LENGTH`] arguments are passed.
    pub unsafe fn call_method_obj_args(self, name: Object, args: &[Object]) -> Object {
        let argv = pack_args("call_method_obj_args", args);
        Object(ffi::variadic::call_method_obj_args(
            self.0,
            name.0,
            args.len(),
            argv.as_ptr(),
        ))
    }

    /// [`Object::call_method_obj_args`] with the method name given as a C
    /// string. New reference.
    pub unsafe fn call_method_args(self, name: &CStr, args: &[Object]) -> Object {
        let name = Object(ffi::PyUnicode_FromString(name.as_ptr()));
        if name.is_null() {
            return Object::NULL;
        }
        let result = self.call_method_obj_args(name, args);
        name.dec_ref();
        result
    }

    // Truth and type

    pub unsafe fn is_true(self) -> c_int {
        ffi::PyObject_IsTrue(self.0)
    }

    pub unsafe fn not(self) -> c_int {
        ffi::PyObject_Not(self.0)
    }

    /// New reference to the type of `self`.
    pub unsafe fn type_of(self) -> Object {
        Object(ffi::PyObject_Type(self.0))
    }

    pub unsafe fn is_instance(self, cls: Object) -> c_int {
        ffi::PyObject_IsInstance(self.0, cls.0)
    }

    pub unsafe fn is_subclass(self, cls: Object) -> c_int {
        ffi::PyObject_IsSubclass(self.0, cls.0)
    }

    // Mapping and sequence

    pub unsafe fn length(self) -> Py_ssize_t {
        ffi::PyObject_Size(self.0)
    }

    pub unsafe fn length_hint(self, default: Py_ssize_t) -> Py_ssize_t {
        ffi::PyObject_LengthHint(self.0, default)
    }

    /// New reference.
    pub unsafe fn get_item(self, key: Object) -> Object {
        Object(ffi::PyObject_GetItem(self.0, key.0))
    }

    pub unsafe fn set_item(self, key: Object, value: Object) -> c_int {
        ffi::PyObject_SetItem(self.0, key.0, value.0)
    }

    pub unsafe fn del_item(self, key: Object) -> c_int {
        ffi::PyObject_DelItem(self.0, key.0)
    }

    /// New reference to a sorted list of attribute names.
    pub unsafe fn dir(self) -> Object {
        Object(ffi::PyObject_Dir(self.0))
    }

    /// New reference.
    pub unsafe fn get_iter(self) -> Object {
        Object(ffi::PyObject_GetIter(self.0))
    }

    // Hashing

    pub unsafe fn hash(self) -> Py_hash_t {
        ffi::PyObject_Hash(self.0)
    }

    /// Always `-1` with `TypeError` set.
    pub unsafe fn hash_not_implemented(self) -> Py_hash_t {
        ffi::PyObject_HashNotImplemented(self.0)
    }

    // Recursive repr guard

    /// `0` on first entry, positive if `self` is already being repr'd.
    pub unsafe fn repr_enter(self) -> c_int {
        ffi::Py_ReprEnter(self.0)
    }

    pub unsafe fn repr_leave(self) {
        ffi::Py_ReprLeave(self.0)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Object").field(&self.0).finish()
    }
}

/// Copy `args` into a fixed-size buffer for the generated dispatch table.
#[inline]
fn pack_args(caller: &str, args: &[Object]) -> [*mut PyObject; MAX_VARIADIC_LENGTH] {
    assert!(
        args.len() <= MAX_VARIADIC_LENGTH,
        "{caller}: {} arguments exceed the limit of {MAX_VARIADIC_LENGTH}",
        args.len()
    );
    let mut argv = [ptr::null_mut(); MAX_VARIADIC_LENGTH];
    for (slot, arg) in argv.iter_mut().zip(args) {
        *slot = arg.0;
    }
    argv
}
