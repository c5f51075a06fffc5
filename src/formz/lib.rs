//! # Formz Architecture
//!
//! Formz is a **UI-agnostic form builder engine**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over the engine                              │
//! │  - Normalizes inputs (positions → field ids)                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (model, registry, transition, validate, engine,       │
//! │        snapshot, templates)                                 │
//! │  - Pure types and total functions                           │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DocumentStore trait                             │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: One Mutation Surface
//!
//! The [`model::Document`] is only ever replaced, never mutated in place.
//! Every edit is a [`transition::Transition`] applied through
//! [`engine::FormEngine`], which yields a new consistent document. Readers
//! (renderers, exporters, the validation engine) observe complete snapshots;
//! prior snapshots remain valid, which is what makes diffing and testing
//! cheap.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for UI clients
//! - [`engine`]: The state container and submission seam
//! - [`model`]: Core data types (`Document`, `Field`, `FormSettings`)
//! - [`registry`]: Field type catalog and per-type defaults
//! - [`transition`]: The closed set of edit operations
//! - [`validate`]: Field-level validation, evaluated at submission time
//! - [`snapshot`]: The exchanged form-description format
//! - [`templates`]: Built-in template bundles
//! - [`store`]: Working-state persistence for the CLI
//! - [`error`]: Error types

pub mod api;
pub mod engine;
pub mod error;
pub mod model;
pub mod registry;
pub mod snapshot;
pub mod store;
pub mod templates;
pub mod transition;
pub mod validate;
