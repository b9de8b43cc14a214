//! Shared types, errors, and configuration for Duoledger.
//!
//! This crate provides common types used across all other crates:
//! - Calendar month and person value types
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management
//! - Bearer token claims and the authorized-user gate

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;
pub mod types;

pub use auth::{AccessGate, Claims};
pub use config::{AppConfig, AuthConfig};
pub use error::{AppError, AppResult};
pub use jwt::{JwtConfig, JwtError, JwtService};
