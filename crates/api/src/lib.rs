//! Loginbox API Library
//!
//! This crate contains the request pipeline and host adapters for serving
//! per-application login-box customizations.

pub mod adapters;
pub mod config;
pub mod cors;
pub mod error;
pub mod pipeline;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::ApiError;
pub use pipeline::{ApiRequest, ApiResponse};
pub use state::{build_registry, AppState};
