// NativeCrasher - Deliberate crash injection for JVM diagnostics testing
// Copyright (C) 2026 NativeCrasher contributors
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

//! `crash-harness`: fires one crash trigger per process invocation.
//!
//! The JNI layer cannot be exercised without a JVM, but the crash
//! contract lives entirely in the fault primitives. This harness gives
//! each trigger a disposable process so the expected signals can be
//! asserted from integration tests and from supervisor tooling.

use clap::Parser;
use nativecrasher_core::Trigger;
use std::process::ExitCode;
use tracing::{error, info};

// Never produced by a crashing run; a supervisor seeing this code knows
// the allocator tolerated the invalid free instead of crashing.
const EXIT_TRIGGER_RETURNED: u8 = 3;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Fires one deliberate crash trigger; a surviving process is a failure",
    long_about = None
)]
struct Cli {
    /// Crash trigger to fire (abort, invalid-free, null-write)
    #[arg(required_unless_present = "list")]
    trigger: Option<Trigger>,

    /// List the triggers with their expected crash signatures
    #[arg(long)]
    list: bool,

    /// Enable debug-level logging
    #[arg(short, long)]
    trace: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    if cli.list {
        for trigger in Trigger::all() {
            println!("{:<14} {}", trigger.to_string(), trigger.describe());
        }
        return ExitCode::SUCCESS;
    }

    let Some(trigger) = cli.trigger else {
        // Clap rejects this combination before main runs.
        error!("no trigger given");
        return ExitCode::from(2);
    };

    info!(%trigger, "firing crash trigger; this process should not survive");
    let leaked = trigger.fire();

    // Reachable only when the allocator tolerated the invalid free.
    error!(
        %trigger,
        value = leaked,
        "trigger returned without crashing; treat this run as failed"
    );
    ExitCode::from(EXIT_TRIGGER_RETURNED)
}
