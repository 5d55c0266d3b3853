//! # CLI Behavior
//!
//! This is **one possible UI client** for mixtape. The CLI is the only place
//! that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Streams
//!
//! - **stdin**: the record document, unless `--input` names a file
//! - **stdout**: the final document, unless `--output` names a file. Nothing
//!   else is ever written there, so the output can be piped straight on.
//! - **stderr**: one line per skipped record or rejected/failed operation,
//!   plus logs (`-v`, `RUST_LOG`)
//!
//! ## Module Structure
//!
//! - `commands`: Reads inputs, drives the API, writes the output
//! - `print`: Diagnostic lines
//! - `setup`: Argument parsing via clap, logging setup
//! - `styles`: Terminal styling constants

mod commands;
mod print;
pub mod setup;
mod styles;

pub use commands::run;
