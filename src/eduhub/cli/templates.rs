//! # CLI Templates
//!
//! Templates live in stand-alone `.tmp` files next to this module and are
//! embedded as string constants. Layout math (widths, truncation, number and
//! date formatting) happens in `render.rs`; templates only arrange the
//! pre-computed values and pick styles.
//!
//! `summary.tmp` and `empty.tmp` are shared by the grid and list layouts via
//! `{% include %}`.

pub const SUMMARY_TEMPLATE: &str = include_str!("templates/summary.tmp");
pub const EMPTY_TEMPLATE: &str = include_str!("templates/empty.tmp");
pub const GRID_TEMPLATE: &str = include_str!("templates/grid.tmp");
pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const PREVIEW_TEMPLATE: &str = include_str!("templates/preview.tmp");
pub const NAV_TEMPLATE: &str = include_str!("templates/nav.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");

/// Every template by the name it is registered (and included) under.
pub const TEMPLATES: [(&str, &str); 8] = [
    ("summary.tmp", SUMMARY_TEMPLATE),
    ("empty.tmp", EMPTY_TEMPLATE),
    ("grid.tmp", GRID_TEMPLATE),
    ("list.tmp", LIST_TEMPLATE),
    ("preview.tmp", PREVIEW_TEMPLATE),
    ("nav.tmp", NAV_TEMPLATE),
    ("text_list.tmp", TEXT_LIST_TEMPLATE),
    ("messages.tmp", MESSAGES_TEMPLATE),
];
