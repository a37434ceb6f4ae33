//! `user-filter` command-line front end.
//!
//! Reads a JSON array of user records, applies an advanced filter (from a
//! file or a saved preset), optional targeted edits and the quick filter bar,
//! and prints the matching records.

pub mod argparse;
pub mod cli;
pub mod logger;
pub mod preset_dir;

pub use argparse::{Cli, ConditionEdit, GroupLogicEdit};
pub use cli::run;
pub use preset_dir::PresetDir;
