//! Slot maintenance commands
//!
//! Usage: stepcalc inspect [--slot <PATH>]
//!        stepcalc reset [--slot <PATH>]

use clap::Args;
use std::path::PathBuf;
use stepcalc_core::snapshot::{decode, CommandSnapshot};
use stepcalc_core::Slot;
use stepcalc_store::FileSlot;

#[derive(Debug, Args)]
pub struct SlotArgs {
    /// Checkpoint file
    #[arg(long, default_value = super::DEFAULT_SLOT_PATH)]
    pub slot: PathBuf,
}

/// Print the in-flight checkpoint as pretty JSON
pub fn execute_inspect(args: SlotArgs) -> Result<(), Box<dyn std::error::Error>> {
    let slot = FileSlot::new(args.slot);

    match decode(&slot.read()?)? {
        Some(command) => {
            let snapshot = CommandSnapshot::from(&command);
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
            if command.is_done() {
                println!("(completed; the next run only restores its accumulator)");
            }
        }
        None => println!("no session in progress"),
    }

    Ok(())
}

/// Clear the slot
pub fn execute_reset(args: SlotArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut slot = FileSlot::new(args.slot);
    slot.clear()?;
    println!("✓ Session cleared");
    Ok(())
}
