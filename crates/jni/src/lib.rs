// NativeCrasher - Deliberate crash injection for JVM diagnostics testing
// Copyright (C) 2026 NativeCrasher contributors
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! JNI surface of the shim.
//!
//! Each export below is the mangled symbol the JVM resolves for an
//! `external fun` on `com.example.demo.native.NativeCrasher`, so the
//! names are a bit-exact contract and must not change. The env and
//! receiver parameters are required by the calling convention but carry
//! no state; the env is touched only to build the placeholder string on
//! the two paths whose Java signature declares a return value.

use jni::objects::JObject;
use jni::sys::jstring;
use jni::JNIEnv;
use nativecrasher_core::{faults, UNREACHABLE};
use std::ptr;

/// Builds the Java-side `"unreachable"` placeholder. Reached only when
/// the preceding fault failed to terminate the process, in which case
/// the value (null on allocation failure) is garbage by contract.
fn unreachable_jstring(env: &mut JNIEnv) -> jstring {
    match env.new_string(UNREACHABLE) {
        Ok(s) => s.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// `NativeCrasher.crashWithAbort()` — raises `SIGABRT`; never returns.
#[no_mangle]
pub extern "system" fn Java_com_example_demo_native_NativeCrasher_crashWithAbort<'local>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
) {
    faults::raise_abort()
}

/// `NativeCrasher.crashWithInvalidFree()` — frees a stack address.
/// Usually fatal; if the allocator tolerates it, the returned string is
/// the meaningless placeholder.
#[no_mangle]
pub extern "system" fn Java_com_example_demo_native_NativeCrasher_crashWithInvalidFree<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
) -> jstring {
    unsafe { faults::free_stack_address() };
    unreachable_jstring(&mut env)
}

/// `NativeCrasher.crashWithNullPointer()` — writes through null and
/// faults with `SIGSEGV` before the declared return value can exist.
#[no_mangle]
pub extern "system" fn Java_com_example_demo_native_NativeCrasher_crashWithNullPointer<'local>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
) -> jstring {
    unsafe { faults::write_null() }
}
