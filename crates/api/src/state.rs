//! Application state

use std::sync::Arc;

use loginbox_shared::{
    alternative_customization, default_customization, CustomizationRegistry, RegistryError,
};

use crate::config::Config;

/// Shared state for the local server: the read-only registry, built once at
/// startup and injected into the handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<CustomizationRegistry>,
}

impl AppState {
    pub fn new(registry: CustomizationRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}

/// Assemble the registry from configuration. With no default application ID
/// configured the registry is empty and every request gets `{}` back.
pub fn build_registry(config: &Config) -> Result<CustomizationRegistry, RegistryError> {
    let mut builder = CustomizationRegistry::builder();
    if let Some(app_id) = &config.default_app_id {
        builder = builder.document(
            app_id,
            default_customization(&config.logo_url, &config.background_image_url),
        )?;
    }
    if let Some(app_id) = &config.alt_app_id {
        builder = builder.document(app_id, alternative_customization(&config.alt_logo_url))?;
    }
    Ok(builder.build())
}
