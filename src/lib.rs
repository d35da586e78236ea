//! Message Board - A minimal message board backend
//!
//! Create, list, fetch, update and delete short text messages over HTTP.

pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
