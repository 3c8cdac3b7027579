//! Shared interpreter setup for unit tests

use std::sync::Once;

use crate::runtime::{self, GilGuard};

static INIT: Once = Once::new();

/// Run `f` with the interpreter initialized and the GIL held.
///
/// The first caller initializes the interpreter and releases the GIL so
/// every test thread can take it through [`GilGuard`], which serializes them.
pub(crate) fn with_python<R>(f: impl FnOnce() -> R) -> R {
    INIT.call_once(|| unsafe {
        runtime::initialize_ex(false);
        runtime::save_thread();
    });
    let _gil = unsafe { GilGuard::acquire() };
    f()
}
