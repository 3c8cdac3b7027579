//! cpy: CPython object and type API bindings
//!
//! Thin forwarding layer over the interpreter's C API. [`Object`] is the raw
//! handle every entry point takes and returns; [`Owned`] and [`Borrowed`]
//! encode the new/borrowed reference conventions for code that wants scoped
//! release, and [`error::PyResult`] lifts the ambient error indicator into a
//! `Result` without replacing it.
//!
//! The variadic call entry points are reached through a fixed-arity dispatch
//! table generated at build time by [`shim`]; the same generator produces the
//! C rendition through the `cpy-variadic` binary.

pub mod compare;
pub mod containers;
pub mod error;
pub mod ffi;
pub mod generate;
pub mod interop;
pub mod object;
pub mod owned;
pub mod runtime;
pub mod scalars;
pub mod shim;
pub mod types;

#[cfg(test)]
mod testing;

pub use compare::CompareOp;
pub use error::{PyErrOccurred, PyResult};
pub use object::Object;
pub use owned::{Borrowed, Owned};
pub use shim::MAX_VARIADIC_LENGTH;
