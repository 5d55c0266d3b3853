//! # Mixtape CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and turns its outcome into a process exit.
//!
//! Exit codes:
//! - `0`: the replay completed
//! - `1`: a fatal error (unreadable or malformed input, bad config)
//! - `2`: `--strict` was set and some record or operation did not go through;
//!   the full output is still written

mod cli;

fn main() {
    match cli::run() {
        Ok(status) => std::process::exit(status),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
