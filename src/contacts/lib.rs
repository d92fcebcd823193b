//! # Contacts Architecture
//!
//! Contacts is a small contact book: add, list page by page, search on any combination
//! of fields, edit and delete, all kept in one CSV file. The library does the work;
//! the `contacts` binary is one client of it.
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
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (book.rs, query.rs)                                   │
//! │  - ContactBook: ids, mutations, save after every change     │
//! │  - query: pagination, search, sorting (read-only)           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (CSV, production), InMemoryStore (testing)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments and returns regular Rust
//! types. It never writes to stdout/stderr and never exits the process. Diagnostics go
//! through `tracing`; the binary decides whether and where they are shown.
//!
//! ## Single Writer
//!
//! The contact book is for one user at a time. There is no locking: the store reads the
//! whole file when opened and rewrites it (atomically) after every change, and holds no
//! file handle in between.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`book`]: The record store
//! - [`query`]: Pagination and search
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Contact`, `Field`, `ContactPatch`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod store;
