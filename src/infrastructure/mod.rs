//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - Database connection and migrations (db)
//! - Pipeline execution (aggregation)
//! - HTTP server setup (server)
//! - Configuration loading (config)
//! - Repository implementations (repositories)
//! - Demo data (seed)
//! - Application state (state)

pub mod aggregation;
pub mod config;
pub mod db;
pub mod repositories;
pub mod seed;
pub mod server;
pub mod state;

pub use repositories::*;
pub use state::AppState;
