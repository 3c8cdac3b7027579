//! Variadic shim generator
//!
//! Neither Rust nor a C caller holding a runtime-sized argument array can
//! spread that array into a C variadic call. For every variadic entry point we
//! need, the generator emits one dispatch function taking the fixed leading
//! parameters, an argument count and an argument array, which branches on the
//! count and spells the call out with exactly that many arguments followed by
//! the `NULL` terminator.
//!
//! Rendering is pure: the same `(targets, arity)` pair always produces the same
//! bytes. Counts above the arity bound have no branch and fall through to a
//! null result; callers guarantee `argc <= arity`.
//!
//! This file is also compiled into `build.rs`, so it only depends on `std`.

/// Default arity bound, also the size of the argument buffers used by
/// `Object::call_function_obj_args` and `Object::call_method_obj_args`.
pub const MAX_VARIADIC_LENGTH: usize = 6;

/// Prefix of the generated C dispatch functions.
pub const C_PREFIX: &str = "_cpy_";

const C_INCLUDE: &str = "#include \"Python.h\"\n\n";

/// A native variadic entry point to shim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    /// Name of the native variadic function.
    pub entry_point: &'static str,
    /// Name of the generated Rust dispatch function.
    pub dispatch_name: &'static str,
    /// Fixed leading `PyObject *` parameters, in call order.
    pub fixed: &'static [&'static str],
}

/// Entry points the binding surface dispatches through.
pub const TARGETS: &[Target] = &[
    Target {
        entry_point: "PyObject_CallFunctionObjArgs",
        dispatch_name: "call_function_obj_args",
        fixed: &["callable"],
    },
    Target {
        entry_point: "PyObject_CallMethodObjArgs",
        dispatch_name: "call_method_obj_args",
        fixed: &["obj", "name"],
    },
];

/// Argument list for the branch handling `count` arguments.
fn call_args(
    target: &Target,
    count: usize,
    element: impl Fn(usize) -> String,
    terminator: &str,
) -> String {
    let mut args: Vec<String> = target.fixed.iter().map(|p| (*p).to_string()).collect();
    args.extend((0..count).map(element));
    args.push(terminator.to_string());
    args.join(", ")
}

/// Render the C source artifact: the include directive followed by one
/// dispatch function per target.
pub fn render_c(targets: &[Target], arity: usize) -> String {
    let mut out = String::from(C_INCLUDE);
    for target in targets {
        render_c_dispatch(&mut out, target, arity);
    }
    out
}

fn render_c_dispatch(out: &mut String, target: &Target, arity: usize) {
    let params: String = target.fixed.iter().map(|p| format!("PyObject *{p}, ")).collect();

    out.push_str(&format!(
        "PyObject* {C_PREFIX}{}({params}int argc, PyObject **argv) {{\n",
        target.entry_point
    ));
    out.push_str("    PyObject *result = NULL;\n\n");
    out.push_str("    switch (argc) {\n");
    for count in 0..=arity {
        let args = call_args(target, count, |j| format!("argv[{j}]"), "NULL");
        out.push_str(&format!("        case {count}:\n"));
        out.push_str(&format!("            return {}({args});\n", target.entry_point));
    }
    out.push_str("    }\n\n");
    out.push_str("    return result;\n");
    out.push_str("}\n\n");
}

/// Render the Rust dispatch table included by `crate::ffi::variadic`.
pub fn render_rust(targets: &[Target], arity: usize) -> String {
    let mut out = format!(
        "// @generated by the cpy variadic shim generator, arity bound {arity}. Do not edit.\n"
    );
    for target in targets {
        render_rust_dispatch(&mut out, target, arity);
    }
    out
}

fn render_rust_dispatch(out: &mut String, target: &Target, arity: usize) {
    const OBJECT: &str = "*mut ::pyo3_ffi::PyObject";
    let params: String = target.fixed.iter().map(|p| format!("{p}: {OBJECT}, ")).collect();

    out.push('\n');
    out.push_str(&format!(
        "/// Calls `{}` with the first `argc` entries of `argv`.\n",
        target.entry_point
    ));
    out.push_str("///\n/// # Safety\n///\n");
    out.push_str(&format!(
        "/// The GIL must be held, `argv` must point to `argc` valid objects and `argc <= {arity}`.\n"
    ));
    out.push_str(&format!(
        "pub unsafe fn {}({params}argc: usize, argv: *const {OBJECT}) -> {OBJECT} {{\n",
        target.dispatch_name
    ));
    out.push_str("    match argc {\n");
    for count in 0..=arity {
        let args = call_args(
            target,
            count,
            |j| format!("*argv.add({j})"),
            "::std::ptr::null_mut::<::pyo3_ffi::PyObject>()",
        );
        out.push_str(&format!(
            "        {count} => ::pyo3_ffi::{}({args}),\n",
            target.entry_point
        ));
    }
    out.push_str("        _ => ::std::ptr::null_mut(),\n");
    out.push_str("    }\n");
    out.push_str("}\n");
}
