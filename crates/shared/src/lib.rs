//! Loginbox Shared Types
//!
//! This crate contains the customization registry and the built-in
//! customization documents served to the Frontegg login widget.

pub mod documents;
pub mod registry;

pub use documents::{alternative_customization, default_customization};
pub use registry::{CustomizationRegistry, RegistryBuilder, RegistryError};
