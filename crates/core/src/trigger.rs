// NativeCrasher - Deliberate crash injection for JVM diagnostics testing
// Copyright (C) 2026 NativeCrasher contributors
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! Named catalog over the fault primitives, for hosts and harnesses that
//! select a crash class by string.

use crate::faults;
use std::fmt;
use std::str::FromStr;

/// Placeholder handed back when a declared return type forces a value out
/// of a path that is not supposed to complete. Never meaningful.
pub const UNREACHABLE: &str = "unreachable";

/// One deliberate crash class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Raise `SIGABRT`; the process terminates before the call returns.
    Abort,
    /// Free a non-heap address. Usually aborts, but the exact signature
    /// is allocator dependent and may include not crashing at all.
    InvalidFree,
    /// Write through the null address; terminates with `SIGSEGV`.
    NullWrite,
}

/// Parse error for [`Trigger::from_str`], the only recoverable error in
/// the workspace.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown trigger '{0}' (expected one of: abort, invalid-free, null-write)")]
pub struct UnknownTrigger(String);

impl Trigger {
    /// Every trigger, in the order the harness lists them.
    pub fn all() -> [Trigger; 3] {
        [Trigger::Abort, Trigger::InvalidFree, Trigger::NullWrite]
    }

    /// One-line description of the expected crash signature.
    pub fn describe(self) -> &'static str {
        match self {
            Trigger::Abort => "terminates the process with SIGABRT",
            Trigger::InvalidFree => {
                "frees a stack address; allocator-dependent crash, usually an abort"
            }
            Trigger::NullWrite => "writes through the null pointer; terminates with SIGSEGV",
        }
    }

    /// Fires the fault. `Abort` and `NullWrite` do not return; the
    /// declared return type exists because `InvalidFree` may, allocator
    /// permitting, hand control back. The returned sentinel is always
    /// [`UNREACHABLE`] and must never be treated as a real result.
    pub fn fire(self) -> &'static str {
        match self {
            Trigger::Abort => faults::raise_abort(),
            Trigger::InvalidFree => {
                unsafe { faults::free_stack_address() };
                UNREACHABLE
            }
            Trigger::NullWrite => unsafe { faults::write_null() },
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Trigger::Abort => "abort",
            Trigger::InvalidFree => "invalid-free",
            Trigger::NullWrite => "null-write",
        };
        f.write_str(name)
    }
}

impl FromStr for Trigger {
    type Err = UnknownTrigger;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "abort" => Ok(Trigger::Abort),
            "invalid-free" => Ok(Trigger::InvalidFree),
            "null-write" => Ok(Trigger::NullWrite),
            other => Err(UnknownTrigger(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Only the non-firing surface is testable in-process; the crash
    // contract itself is covered by the harness integration tests, one
    // child process per trigger.

    #[test]
    fn names_round_trip_through_from_str() {
        for trigger in Trigger::all() {
            assert_eq!(trigger.to_string().parse::<Trigger>(), Ok(trigger));
        }
    }

    #[test]
    fn unknown_name_is_rejected_with_the_valid_names_listed() {
        let err = "stack-overflow".parse::<Trigger>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("stack-overflow"));
        for trigger in Trigger::all() {
            assert!(message.contains(&trigger.to_string()));
        }
    }

    #[test]
    fn catalog_lists_each_trigger_once() {
        let all = Trigger::all();
        assert_eq!(all.len(), 3);
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn descriptions_name_the_expected_signature() {
        assert!(Trigger::Abort.describe().contains("SIGABRT"));
        assert!(Trigger::NullWrite.describe().contains("SIGSEGV"));
        assert!(Trigger::InvalidFree.describe().contains("allocator"));
    }

    #[test]
    fn sentinel_matches_the_java_side_placeholder() {
        assert_eq!(UNREACHABLE, "unreachable");
    }
}
