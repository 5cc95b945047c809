//! # EduHub CLI
//!
//! The binary is thin: the terminal client lives in `src/eduhub/cli/` and this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/eduhub/cli/)                                │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Query state wiring + dispatch (commands.rs)              │
//! │  - Terminal rendering via minijinja templates (render.rs)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (src/eduhub/api.rs)                              │
//! │  - Owns the catalog store, favorites and downloads          │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (src/eduhub/commands/*)                      │
//! │  - Query pipeline, favorites, downloads, config             │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Templates live in `src/eduhub/cli/templates/` and are embedded at compile
//! time via `include_str!()`.

use colored::Colorize;

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}
