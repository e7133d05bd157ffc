//! Root module — service welcome endpoint

pub mod handlers;

pub use handlers::*;
