//! # StudentDB Architecture
//!
//! StudentDB is a single-table record store: students keyed by roll number, with
//! multi-level undo/redo and persistence to either a binary or a JSON file. The
//! library holds all of the behavior; the binary is a thin menu client over it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, colored output, exit codes           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns store + history, backend and data file path         │
//! │  - One method per menu command                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Snapshot ordering, user-facing messages                  │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────┐  ┌───────────────────────────┐
//! │  store.rs / history.rs       │  │  backend/                 │
//! │  - live records, snapshots   │  │  - binary, JSON, memory   │
//! └──────────────────────────────┘  └───────────────────────────┘
//! ```
//!
//! ## Undo Model
//!
//! History stores whole-store snapshots. A mutating command records a snapshot
//! and clears redo. Update and Delete check that the roll exists first; Add
//! records its snapshot before the duplicate check, so a rejected Add still
//! costs an undo step.
//!
//! ## Failure Model
//!
//! Loading never fails (bad data loads as empty or is dropped entry by entry).
//! Unknown or duplicate rolls are reported as messages. Only a failed save is
//! an error that ends the session.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each menu command
//! - [`store`]: The live roll → record mapping
//! - [`history`]: Undo/redo snapshot stacks
//! - [`backend`]: Persistence backends
//! - [`model`]: `Record` and its key types
//! - [`input`]: Validated console input
//! - [`config`]: Configuration file handling
//! - [`error`]: Error types

pub mod api;
pub mod backend;
pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod input;
pub mod model;
pub mod store;
