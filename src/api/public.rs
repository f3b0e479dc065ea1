//! Public API types

// Re-export public types from each route

pub mod webhook {
    pub use crate::api::routes::webhook::public::*;
}
