//! # Notes Architecture
//!
//! A small record store for personal notes. Each note has a title, a body and a
//! dense numeric id: with N notes the ids are always exactly `1..N`, so the id a
//! user sees in a listing is the id they type next.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Load, run one command, save if mutated                   │
//! │  - Parses id text into NoteIds                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns store outcomes into CmdResults with messages       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (store/)                                             │
//! │  - NoteStore: ids, compaction, lookup                       │
//! │  - StorageBackend: FsBackend (JSON file), MemBackend        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dense ids
//!
//! Adding a note gives it `max + 1`. Deleting note `k` shifts every later note
//! down by one (see [`compact`]). Because position `k - 1` always holds note `k`,
//! lookup is plain indexing (see [`lookup`]).
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. "Note not found" is an ordinary outcome, not an error.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`store`]: The in-memory note store and persistence backends
//! - [`compact`]: Id renumbering after deletion
//! - [`lookup`]: Id to position resolution
//! - [`model`]: The `Note` record
//! - [`index`]: Parsing of user-typed ids, ranges and `all`
//! - [`config`]: Per-invocation configuration
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod compact;
pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod lookup;
pub mod model;
pub mod store;
