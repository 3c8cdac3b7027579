//! Ownership wrappers for new and borrowed references
//!
//! [`Owned`] holds exactly one reference and releases it when dropped, on
//! every exit path. [`Borrowed`] is a non-null view that can never release
//! the object it points to; promote it with [`Borrowed::to_owned`] to keep
//! the object past the lender's lifetime.
//!
//! Both must only be created, cloned and dropped while the GIL is held. They
//! are `!Send` so they cannot leave the thread that created them.

use std::ffi::CStr;
use std::fmt;
use std::marker::PhantomData;
use std::mem::ManuallyDrop;
use std::ptr::NonNull;

use crate::error::{PyErrOccurred, PyResult};
use crate::ffi::{self, PyObject};
use crate::object::Object;

/// A new reference, released on drop.
pub struct Owned(NonNull<PyObject>);

impl Owned {
    /// Take ownership of the result of a new-reference call. Null means the
    /// call failed and the error indicator is set.
    #[inline]
    pub unsafe fn from_new(obj: Object) -> PyResult<Self> {
        NonNull::new(obj.as_ptr()).map(Owned).ok_or(PyErrOccurred)
    }

    /// Take ownership of a handle known to be non-null.
    #[inline(always)]
    pub unsafe fn from_new_unchecked(obj: Object) -> Self {
        Owned(NonNull::new_unchecked(obj.as_ptr()))
    }

    #[inline(always)]
    pub fn handle(&self) -> Object {
        Object::from_ptr(self.0.as_ptr())
    }

    #[inline(always)]
    pub fn as_ptr(&self) -> *mut PyObject {
        self.0.as_ptr()
    }

    #[inline(always)]
    pub fn borrow(&self) -> Borrowed<'_> {
        Borrowed {
            ptr: self.0,
            _lender: PhantomData,
        }
    }

    /// Give up ownership without releasing; the caller now owns the reference.
    #[inline(always)]
    pub fn into_object(self) -> Object {
        let this = ManuallyDrop::new(self);
        this.handle()
    }

    pub unsafe fn getattr(&self, name: &CStr) -> PyResult<Owned> {
        Owned::from_new(self.handle().get_attr_string(name))
    }

    /// Call with positional `args`.
    ///
    /// # Panics
    ///
    /// If more than [`MAX_VARIADIC_LENGTH`](crate::MAX_VARIADIC_LENGTH) arguments are passed.
    pub unsafe fn call(&self, args: &[&Owned]) -> PyResult<Owned> {
        let args = handles(args);
        Owned::from_new(self.handle().call_function_obj_args(&args))
    }

    /// Call the method `name` with positional `args`.
    ///
    /// # Panics
    ///
    /// If more than [`MAX_VARIADIC_LENGTH`](crate::MAX_VARIADIC_LENGTH) arguments are passed.
    pub unsafe fn call_method(&self, name: &CStr, args: &[&Owned]) -> PyResult<Owned> {
        let args = handles(args);
        Owned::from_new(self.handle().call_method_args(name, &args))
    }

    pub unsafe fn str(&self) -> PyResult<Owned> {
        Owned::from_new(self.handle().str())
    }

    pub unsafe fn repr(&self) -> PyResult<Owned> {
        Owned::from_new(self.handle().repr())
    }
}

fn handles(args: &[&Owned]) -> Vec<Object> {
    args.iter().map(|arg| arg.handle()).collect()
}

impl Clone for Owned {
    fn clone(&self) -> Self {
        unsafe { ffi::Py_IncRef(self.0.as_ptr()) };
        Owned(self.0)
    }
}

impl Drop for Owned {
    fn drop(&mut self) {
        unsafe { ffi::Py_DecRef(self.0.as_ptr()) };
    }
}

impl fmt::Debug for Owned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Owned").field(&self.0).finish()
    }
}

/// A borrowed reference valid for `'a`. Has no release operation.
#[derive(Clone, Copy)]
pub struct Borrowed<'a> {
    ptr: NonNull<PyObject>,
    _lender: PhantomData<&'a PyObject>,
}

impl<'a> Borrowed<'a> {
    /// Wrap the result of a borrowed-reference call. Null is reported as an
    /// error; some entry points (`dict_get_item`) return null without setting
    /// the indicator, so check it before propagating.
    #[inline]
    pub unsafe fn from_borrowed(obj: Object) -> PyResult<Self> {
        NonNull::new(obj.as_ptr())
            .map(|ptr| Borrowed {
                ptr,
                _lender: PhantomData,
            })
            .ok_or(PyErrOccurred)
    }

    #[inline(always)]
    pub fn handle(self) -> Object {
        Object::from_ptr(self.ptr.as_ptr())
    }

    /// Take a new reference to the same object.
    #[inline]
    pub fn to_owned(self) -> Owned {
        unsafe { ffi::Py_IncRef(self.ptr.as_ptr()) };
        Owned(self.ptr)
    }
}

impl fmt::Debug for Borrowed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Borrowed").field(&self.ptr).finish()
    }
}
