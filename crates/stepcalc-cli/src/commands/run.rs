//! Run command
//!
//! Usage: stepcalc run [--slot <PATH>] [--log <PROFILE>]

use crate::console::LineConsole;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use stepcalc_core::logging_facility::{init, Profile};
use stepcalc_engine::{Dispatcher, SessionOutcome};
use stepcalc_store::FileSlot;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Checkpoint file
    #[arg(long, default_value = super::DEFAULT_SLOT_PATH)]
    pub slot: PathBuf,

    /// Log output on stderr (RUST_LOG overrides the level)
    #[arg(long, value_enum, default_value_t = LogProfile::Quiet)]
    pub log: LogProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogProfile {
    Quiet,
    Development,
    Production,
}

impl From<LogProfile> for Profile {
    fn from(profile: LogProfile) -> Self {
        match profile {
            LogProfile::Quiet => Profile::Quiet,
            LogProfile::Development => Profile::Development,
            LogProfile::Production => Profile::Production,
        }
    }
}

/// Execute run command
pub fn execute(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    init(args.log.into());

    let stdin = std::io::stdin();
    let console = LineConsole::new(stdin.lock(), std::io::stdout());
    let mut dispatcher = Dispatcher::new(console, FileSlot::new(args.slot));

    let outcome = dispatcher.run()?;
    if outcome == SessionOutcome::InputClosed {
        eprintln!("input closed; run again to continue where the session stopped");
    }
    Ok(())
}
