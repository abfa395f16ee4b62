// NativeCrasher - Deliberate crash injection for JVM diagnostics testing
// Copyright (C) 2026 NativeCrasher contributors
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! Deliberate process-fatal faults for exercising crash reporting.
//!
//! Every operation in this crate is designed to terminate or corrupt the
//! calling process. The intentional undefined behavior is confined to the
//! `unsafe` functions in [`faults`]; [`trigger`] is the safe-to-parse,
//! fatal-to-fire catalog on top of them.

pub mod faults;
pub mod trigger;

pub use trigger::{Trigger, UnknownTrigger, UNREACHABLE};
