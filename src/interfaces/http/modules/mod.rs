//! Resource modules for the REST API

pub mod root;
pub mod users;
