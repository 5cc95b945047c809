//! # Eduhub Architecture
//!
//! Eduhub is a **UI-agnostic catalog library** for educational resources. The
//! `eduhub` binary is one client of it; the same core could back a web page or
//! a desktop shell.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders grid/list/preview output       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the store and the favorites/download collaborators  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, returns `CmdResult`                      │
//! │  - The query pipeline (query.rs) and reducer (state.rs)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog Layer (store/)                                     │
//! │  - `CatalogStore` trait, `InMemoryStore`                    │
//! │  - Built-in sample catalog, JSON catalog files              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Query State
//!
//! What the user is looking at (search text, category and type filters, sort
//! key, view mode, previewed resource) is a plain [`state::QueryState`] value.
//! It only changes through [`state::reduce`], and [`query::query`] turns a
//! catalog plus a state into the ordered list to display. Neither touches the
//! catalog.
//!
//! ## Side Effects Are Collaborators
//!
//! Toggling a favorite and starting a download are handed to
//! [`favorites::FavoritesRepository`] and [`download::DownloadInitiator`]
//! implementations owned by the API. The in-memory ones shipped here record
//! the request and nothing else.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`query`]: Filter and sort pipeline
//! - [`state`]: Query state and its reducer
//! - [`store`]: Catalog sources
//! - [`model`]: Core data types (`Resource`, `ResourceType`, `Scope`)
//! - [`favorites`], [`download`]: Action collaborators
//! - [`nav`]: Site navigation menus
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod download;
pub mod error;
pub mod favorites;
pub mod init;
pub mod model;
pub mod nav;
pub mod query;
pub mod state;
pub mod store;
