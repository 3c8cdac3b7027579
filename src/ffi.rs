//! Raw FFI bindings to the CPython C API

#![allow(non_camel_case_types)]
#![allow(non_upper_case_globals)]

pub use pyo3_ffi::*;

/// Fixed-arity dispatch over the variadic call API, generated by `build.rs`
/// from [`crate::shim::TARGETS`].
pub mod variadic {
    include!(concat!(env!("OUT_DIR"), "/variadic.rs"));
}
