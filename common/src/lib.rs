//! Shared building blocks for `cidrscope`.
//!
//! * [`config`]: runtime options collected by the CLI.
//! * [`network`]: byte-level mask arithmetic and binary rendering of addresses.

pub mod config;
pub mod network;
