//! Configured model sources and their connection parameters.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::{ModelportError, Result};

/// Connection parameters for one configured source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Base address of the inference server, e.g. `http://127.0.0.1:8080`.
    pub host: String,
}

impl SourceConfig {
    /// Check that the host is a well-formed http(s) URL.
    ///
    /// Callers run this before handing the host to the listing client; a bad
    /// address never reaches the network.
    pub fn validate_host(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.host).map_err(|e| {
            ModelportError::InvalidArgument(format!("invalid source host {:?}: {e}", self.host))
        })?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ModelportError::InvalidArgument(format!(
                "unsupported scheme {other:?} for source host {:?}",
                self.host
            ))),
        }
    }
}

/// Store of configured sources, keyed by source id.
///
/// Cheap to clone; clones share the same underlying storage.
#[derive(Debug, Clone, Default)]
pub struct SourceStore {
    sources: Arc<RwLock<HashMap<String, SourceConfig>>>,
}

impl SourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from environment variables (LOCALAI_BASE_URL etc.).
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let store = Self::new();

        let env_mappings = [
            ("LOCALAI_BASE_URL", "localai"),
            ("LMSTUDIO_BASE_URL", "lmstudio"),
            ("OLLAMA_BASE_URL", "ollama"),
        ];

        for (env_var, source) in &env_mappings {
            if let Ok(host) = std::env::var(env_var) {
                store.set_host(source, host);
            }
        }

        store
    }

    /// Set (or replace) the host for a source, creating it if needed.
    pub fn set_host(&self, source_id: &str, host: String) {
        self.sources
            .write()
            .unwrap()
            .insert(source_id.to_string(), SourceConfig { host });
    }

    pub fn get(&self, source_id: &str) -> Option<SourceConfig> {
        self.sources.read().unwrap().get(source_id).cloned()
    }

    /// Ids of all configured sources, unordered.
    pub fn source_ids(&self) -> Vec<String> {
        self.sources.read().unwrap().keys().cloned().collect()
    }
}
