//! BSON document shapes for the stored collections

pub mod user;

pub use user::UserDocument;
