//! Infrastructure layer - external concerns

pub mod database;

pub use database::repositories::MongoUserRepository;
pub use database::{init_database, DatabaseConfig};
