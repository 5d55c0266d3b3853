//! # Mixtape Architecture
//!
//! Mixtape replays a list of changes against a document of users, songs and
//! playlists, and prints the resulting document. It is a single pass over
//! in-memory state: read the records, read the operations, replay, serialize.
//!
//! As with any of our CLI tools, the binary is a thin client of this library.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, sets up logging, loads config          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + wire format (codec.rs)                │
//! │  - Decodes operations and records, encodes the output       │
//! │  - Accumulates a structured `Report`                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Replay Layer (collector.rs, operations/*.rs)               │
//! │  - Ingests records through the registry                     │
//! │  - Applies validated operations in input order              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, model.rs, registry.rs)              │
//! │  - One ordered bucket per record scope                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Isolation
//!
//! A bad record or a failed operation never stops a run. Records are skipped,
//! operations keep their own error list, and both leave a line in the
//! [`report::Report`]. Only malformed input documents, unreadable files and
//! bad config are fatal ([`error::MixtapeError`]).
//!
//! ## Ordering
//!
//! Operations are applied strictly in input order, one at a time. Later
//! operations routinely depend on state produced by earlier ones (a playlist
//! created and then removed), so replay must never be reordered or split
//! across workers.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade used by UI clients
//! - [`codec`]: JSON decoding and encoding
//! - [`collector`]: Ingestion and replay driver
//! - [`operations`]: The operation variants and the operation queue
//! - [`registry`]: Collection tag to record scope resolution
//! - [`store`]: Scoped in-memory storage
//! - [`model`]: Record types
//! - [`report`]: Diagnostics and counters of a run
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod collector;
pub mod config;
pub mod error;
pub mod model;
pub mod operations;
pub mod registry;
pub mod report;
pub mod store;
