//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::{api::MarketplaceApi, config::Config, identity::IdentityResolver};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Marketplace API client
    api: Arc<dyn MarketplaceApi>,

    /// Per-session identity cache
    identity: IdentityResolver,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(api: Arc<dyn MarketplaceApi>, config: Config) -> Self {
        let identity = IdentityResolver::new(Arc::clone(&api));
        Self {
            inner: Arc::new(AppStateInner {
                api,
                identity,
                config,
            }),
        }
    }

    /// Get a reference to the marketplace API client
    pub fn api(&self) -> &dyn MarketplaceApi {
        self.inner.api.as_ref()
    }

    /// Get a reference to the identity resolver
    pub fn identity(&self) -> &IdentityResolver {
        &self.inner.identity
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
