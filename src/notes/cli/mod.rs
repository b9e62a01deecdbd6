//! # CLI Layer
//!
//! One possible UI client for the notes library. This is the only place that
//! parses arguments, prints to the terminal and decides exit codes.
//!
//! - `setup`: clap definitions
//! - `commands`: `run()`, context setup and per-command handlers
//! - `print`: rendering of `CmdResult`s

mod commands;
mod print;
mod setup;

pub use commands::run;
