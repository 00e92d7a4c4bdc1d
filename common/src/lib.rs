//! Platform-independent core of the career toolkit web client.
//!
//! Everything here is pure Rust: wire models, the markup renderers, the
//! session caches and the tab controller. The `frontend` crate drives these
//! from the browser and performs the actual side effects.

pub mod api;
pub mod config;
pub mod download;
pub mod error;
pub mod model;
pub mod render;
pub mod requests;
pub mod session;
pub mod tabs;
