pub mod run;
pub mod slot;

/// Default checkpoint location, relative to the working directory
pub const DEFAULT_SLOT_PATH: &str = ".stepcalc/session.json";
