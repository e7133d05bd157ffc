//! # Mongo User API
//!
//! RESTful user-management service backed by MongoDB.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, types and traits
//! - **application**: Business logic and use cases
//! - **infrastructure**: External concerns (MongoDB storage)
//! - **interfaces**: HTTP REST API with Swagger documentation

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use config::Config;

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, MongoUserRepository};

// Re-export API router
pub use interfaces::http::create_api_router;
