//! Interpreter lifecycle, thread state and module access

use std::ffi::CStr;
use std::marker::PhantomData;
use std::os::raw::c_int;

use crate::ffi::{self, PyGILState_STATE, PyThreadState};
use crate::object::Object;

/// `Py_Initialize`; a no-op if the interpreter is already running.
pub unsafe fn initialize() {
    ffi::Py_Initialize();
}

/// `Py_InitializeEx`; `install_signal_handlers` mirrors `initsigs`.
pub unsafe fn initialize_ex(install_signal_handlers: bool) {
    ffi::Py_InitializeEx(c_int::from(install_signal_handlers));
}

pub fn is_initialized() -> bool {
    unsafe { ffi::Py_IsInitialized() != 0 }
}

/// `0` on success, `-1` if flushing buffered data failed.
pub unsafe fn finalize_ex() -> c_int {
    ffi::Py_FinalizeEx()
}

/// Borrowed reference to the builtins of the current frame.
pub unsafe fn eval_get_builtins() -> Object {
    Object::from_ptr(ffi::PyEval_GetBuiltins())
}

/// New reference to the imported module.
pub unsafe fn import_module(name: &CStr) -> Object {
    Object::from_ptr(ffi::PyImport_ImportModule(name.as_ptr()))
}

/// Release the GIL, returning the thread state to hand back to
/// [`restore_thread`].
pub unsafe fn save_thread() -> *mut PyThreadState {
    ffi::PyEval_SaveThread()
}

pub unsafe fn restore_thread(state: *mut PyThreadState) {
    ffi::PyEval_RestoreThread(state);
}

/// Holds the GIL for the current thread until dropped.
///
/// Guards nest; each releases exactly what it acquired. Not `Send`: the
/// state must be released on the thread that acquired it.
pub struct GilGuard {
    state: PyGILState_STATE,
    _not_send: PhantomData<*mut ()>,
}

impl GilGuard {
    /// `PyGILState_Ensure`. The interpreter must be initialized.
    pub unsafe fn acquire() -> Self {
        Self {
            state: ffi::PyGILState_Ensure(),
            _not_send: PhantomData,
        }
    }
}

impl Drop for GilGuard {
    fn drop(&mut self) {
        unsafe { ffi::PyGILState_Release(self.state) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error;
    use crate::testing::with_python;
    use crate::types;

    #[test]
    fn test_initialized() {
        with_python(|| {
            assert!(is_initialized());
            // Repeated initialization is harmless
            unsafe { initialize() };
            assert!(is_initialized());
        });
    }

    #[test]
    fn test_import_module() {
        with_python(|| unsafe {
            let sys = import_module(c"sys");
            assert!(!sys.is_null());
            assert!(sys.has_attr_string(c"version_info"));
            sys.dec_ref();

            assert!(import_module(c"no_such_module_cpy").is_null());
            assert!(!error::occurred().is_null());
            error::clear();
        });
    }

    #[test]
    fn test_builtins() {
        with_python(|| unsafe {
            let builtins = eval_get_builtins();
            assert!(types::is_dict(builtins));
        });
    }

    #[test]
    fn test_save_and_restore_thread() {
        with_python(|| unsafe {
            let state = save_thread();
            assert!(!state.is_null());
            assert_eq!(ffi::PyGILState_Check(), 0);
            restore_thread(state);
            assert_ne!(ffi::PyGILState_Check(), 0);
        });
    }

    #[test]
    fn test_gil_guard_nests() {
        with_python(|| unsafe {
            let inner = GilGuard::acquire();
            assert_ne!(ffi::PyGILState_Check(), 0);
            drop(inner);
            assert_ne!(ffi::PyGILState_Check(), 0);
        });
    }
}
