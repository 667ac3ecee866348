//! Campus API - Student/course REST service
//!
//! This crate exposes two related entities, students and courses, with an
//! enrollment relationship between them. All state lives in the in-memory
//! entity store; the HTTP layer is a thin translation from verbs and paths
//! to store operations.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities
//! - **store**: The in-memory entity store (invariant enforcement lives here)
//! - **api**: HTTP handlers, routes, and OpenAPI documentation
//! - **types**: Shared types (pagination, responses)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Start with the seed fixture loaded
//! cargo run -- serve --seed
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod store;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Course, Student};
pub use errors::{AppError, AppResult, Entity};
pub use store::{EntityStore, SharedStore};
