//! Business logic and use cases

pub mod users;

pub use users::UserService;
