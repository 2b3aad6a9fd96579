//! # Tac Architecture
//!
//! Tac is a **UI-agnostic document library**: an in-memory model of structured
//! academic paragraphs plus a file-backed project store, with a CLI client on
//! top. The library never assumes a terminal; any front-end (the CLI here, a
//! desktop shell elsewhere) drives the same surface.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store Layer (store.rs)                                     │
//! │  - One JSON file per project under <data-dir>/projects/     │
//! │  - Read-through cache, backup-on-overwrite, trash on delete │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Document Model (model.rs)                                  │
//! │  - Ordered, typed paragraph sequence with sparse formatting │
//! │  - Invariant-preserving mutation, no I/O                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error policy
//!
//! The store deliberately swallows persistence failures into booleans and
//! `None`s (after logging): an interactive writing tool should degrade, not
//! crash. The single surfaced error is validation on project creation.
//!
//! ## Module Overview
//!
//! - [`model`]: Core data types (`Project`, `Paragraph`, formatting)
//! - [`store`]: `ProjectManager`, persistence and cache
//! - [`config`]: Explicit configuration struct and its JSON file
//! - [`export`]: TXT/HTML/ODT generators and the tar.gz archive
//! - [`logging`]: `flexi_logger` bootstrap for binaries
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod model;
pub mod store;
