//! Modelport — model discovery for local inference servers
//!
//! Talks to LocalAI-style servers over their OpenAI-compatible listing API,
//! normalizes whatever they report into display-ready model records, and
//! keeps those records in an in-process registry.
//!
//! # Quick Start
//!
//! ```no_run
//! use modelport::prelude::*;
//!
//! # async fn example() -> modelport::error::Result<()> {
//! let sources = SourceStore::new();
//! sources.set_host("localai", "http://127.0.0.1:8080".to_string());
//!
//! let registry = ModelRegistry::new();
//! let listing = HttpModelListing::new();
//! let added = refresh_source(&sources, &listing, &registry, "localai").await?;
//! println!("imported {added} models");
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod client;
pub mod error;
pub mod prelude;
pub mod refresh;
pub mod source;
