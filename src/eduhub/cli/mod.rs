//! # CLI Behavior
//!
//! This is **one possible UI client** for eduhub, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and
//! output formatting.
//!
//! ## Naked Execution (`eduhub`)
//!
//! Running `eduhub` with no arguments defaults to `eduhub list`, which shows
//! the whole catalog in the configured sort and view.
//!
//! ## Query Flags
//!
//! `list` and `search` share the query flags. Each flag becomes one reducer
//! action applied on top of the configured initial state:
//!
//! - `--search <TEXT>` / `eduhub search <TERM...>`: case-insensitive substring
//!   of name or description
//! - `--category <NAME>`: exact category, `all` for no filter
//! - `--type <TYPE>`: one of the resource types, `all` for no filter
//! - `--sort <KEY>`: `recent`, `popular`, `rating` or `name`; anything else
//!   sorts by recency
//! - `--view <MODE>`: `grid` or `list`
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print output
//! - `render`: Layout math and template data
//! - `setup`: Argument parsing via clap, grouped help text
//! - `styles`: Named styles used by the templates
//! - `templates`: Output templates
//! - `theme`: The `style` template filter and template environment

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;
mod theme;

pub use commands::run;
