//! # Copiloto Architecture
//!
//! Copiloto is a **UI-agnostic catalog library**: curated courses and funding
//! resources for entrepreneurs, with filtering, favorites and a small command
//! layer. The CLI in `main.rs` is just one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Clients (main.rs CLI, adapter.rs request adapter)           │
//! │  - Parse arguments or request parameters, format output      │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                          │
//! │  - Thin facade over commands, returns structured results     │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                               │
//! │  - Business logic over Rust types, no I/O assumptions        │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Query Engine + Storage (query.rs, store/, favorites.rs)     │
//! │  - Pure filtering over store snapshots                       │
//! │  - FileCatalog (production), MemoryCatalog (testing)         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: the engine only reads
//!
//! [`query::query`] takes an immutable snapshot handed out by a
//! [`store::CatalogStore`] and returns a new sequence. It never mutates the
//! catalog, never performs I/O, and cannot fail; anything that can go wrong
//! (disk, malformed input) lives at the store or adapter boundary.
//!
//! ## Module Overview
//!
//! - [`api`]: the API facade, entry point for all operations
//! - [`adapter`]: request adapter mirroring the dashboard's REST endpoints
//! - [`commands`]: business logic for each operation
//! - [`query`]: the catalog query engine and axis schemas
//! - [`store`]: storage abstraction and implementations
//! - [`favorites`]: per-user favorite ids, persisted on every mutation
//! - [`model`]: core data types (`CatalogItem`, `NewItem`, `CatalogKind`)
//! - [`seed`]: the starter catalogs
//! - [`config`]: configuration management
//! - [`error`]: error types

pub mod adapter;
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod favorites;
pub mod model;
pub mod query;
pub mod seed;
pub mod store;
