//! Factory for creating backend adapters from configuration.

use std::sync::Arc;

use crate::adapters::memory::{MemoryDocumentStore, MemoryIdentityProvider};
use crate::adapters::rest::{RestClient, RestDocumentStore, RestIdentityProvider};
use crate::config::{BackendTarget, RafiqConfig};
use crate::domain::{RafiqError, Result};

use super::traits::{DocumentStore, IdentityProvider};

/// Creates the identity provider and document store selected by the
/// configuration.
///
/// # Errors
///
/// Returns a configuration error when the selected backend is missing its
/// settings section or the HTTP client cannot be constructed.
pub fn create_backend(
    config: &RafiqConfig,
) -> Result<(Arc<dyn IdentityProvider>, Arc<dyn DocumentStore>)> {
    match config.backend {
        BackendTarget::Rest => {
            let rest = config.rest.as_ref().ok_or_else(|| {
                RafiqError::Configuration(
                    "backend is 'rest' but no [rest] section is configured".to_string(),
                )
            })?;

            tracing::info!(
                endpoint = %rest.base_url,
                "Using REST backend"
            );

            let client = RestClient::new(rest)?;
            let identity = Arc::new(RestIdentityProvider::new(client.clone()));
            let documents = Arc::new(RestDocumentStore::new(client));
            Ok((identity, documents))
        }
        BackendTarget::Memory => {
            tracing::info!("Using in-memory backend (state is lost on exit)");
            let identity = Arc::new(MemoryIdentityProvider::new());
            let documents = Arc::new(MemoryDocumentStore::new());
            Ok((identity, documents))
        }
    }
}
