//! # Roster Architecture
//!
//! Roster is a **UI-agnostic user-management library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a terminal client.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads the input loop, renders screens, owns the form     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  Action in, Notices out
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Page Controller (app.rs)                                   │
//! │  - Single reducer over page/view/selection state            │
//! │  - Owns the authoritative record collection                 │
//! │  - Returns structured Notice queues, never prints           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core modules (model, validate, search, form)               │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `app.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Vec<Notice>`, `BTreeMap<Field, FieldError>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a TUI, a web frontend, or any other
//! UI. The record collection lives in memory for the process lifetime; there
//! is deliberately no storage boundary.
//!
//! ## Testing Strategy
//!
//! 1. **Core modules**: thorough unit tests of validation, filtering, merge
//!    and id-generation logic. This is where the lion's share of testing
//!    lives.
//! 2. **Controller** (`app.rs`): transition tests driving the reducer with
//!    actions and asserting the resulting state and notices.
//! 3. **CLI** (`cli/` + thin `main.rs`): input-parser unit tests, render
//!    output tests, and a scripted end-to-end session against the binary.
//!
//! ## Module Overview
//!
//! - [`app`]: the page controller—single entry point for all mutations
//! - [`model`]: core data types (`User`, `UserDraft`) and id generation
//! - [`validate`]: field-level draft validation
//! - [`search`]: the list filter
//! - [`form`]: the edit-buffer controller
//! - [`seed`]: the built-in example dataset
//! - [`settings`]: settings-page preferences
//! - [`config`]: application configuration
//! - [`error`]: error types
//! - `cli`: input parsing, screen rendering and the interactive loop for the
//!   binary (not part of the lib API)

pub mod app;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod search;
pub mod seed;
pub mod settings;
pub mod validate;
