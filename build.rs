//! Emits the fixed-arity dispatch table for the variadic call API into OUT_DIR.

use std::env;
use std::fs;
use std::path::PathBuf;

#[allow(dead_code)]
#[path = "src/shim.rs"]
mod shim;

fn main() {
    pyo3_build_config::use_pyo3_cfgs();
    println!("cargo:rerun-if-changed=src/shim.rs");

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("cargo sets OUT_DIR"));
    let source = shim::render_rust(shim::TARGETS, shim::MAX_VARIADIC_LENGTH);
    fs::write(out_dir.join("variadic.rs"), source)
        .expect("failed to write variadic dispatch table");
}
