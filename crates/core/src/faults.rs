// NativeCrasher - Deliberate crash injection for JVM diagnostics testing
// Copyright (C) 2026 NativeCrasher contributors
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! The three fault primitives. Each emits one tracing event and then
//! executes its terminating operation; none of them is expected to hand
//! control back to the caller.

use std::ffi::c_int;
use std::ptr;
use tracing::info;

/// Raises `SIGABRT` through the platform abort primitive.
///
/// Never returns. Process supervisors observe an abnormal-termination
/// status distinct from any normal exit code.
pub fn raise_abort() -> ! {
    info!("raising SIGABRT via libc::abort");
    unsafe { libc::abort() }
}

/// Hands the address of a stack local to the C allocator's `free`.
///
/// Undefined behavior by construction: the address never came from the
/// heap allocator, so its bookkeeping is violated. glibc aborts with
/// `free(): invalid pointer`; other allocators may fault differently,
/// corrupt state silently, or return. Anything the caller observes after
/// this call is garbage.
///
/// # Safety
///
/// There is no safe precondition. Calling this at all invokes undefined
/// behavior; that is its entire purpose.
pub unsafe fn free_stack_address() {
    let mut slot: c_int = 0;
    // Volatile write pins `slot` to real stack memory so the optimizer
    // cannot promote it to a register and hand `free` a dangling address
    // of its own invention.
    ptr::write_volatile(&mut slot, 42);
    info!(address = ?ptr::addr_of!(slot), "passing stack address to libc::free");
    libc::free(ptr::addr_of_mut!(slot).cast());
}

/// Writes through the null address.
///
/// On every mainstream platform page zero is unmapped, so the store traps
/// with a memory-protection fault (`SIGSEGV`), distinguishable from the
/// `SIGABRT` raised by [`raise_abort`].
///
/// # Safety
///
/// There is no safe precondition. Calling this at all invokes undefined
/// behavior; that is its entire purpose.
pub unsafe fn write_null() -> ! {
    let target: *mut c_int = ptr::null_mut();
    info!("writing through the null pointer");
    // Volatile keeps the store in the emitted code; a plain write through
    // a known-null pointer is something the compiler may delete outright.
    ptr::write_volatile(target, 42);
    unreachable!("volatile write through null returned without faulting")
}
