//! Sentinel Model
//!
//! Remote-model-backed implementation of the [`sentinel_core::Classifier`]
//! contract. When a credential is configured the classifier asks an
//! OpenAI-compatible chat-completions endpoint for a JSON audit report; on
//! any failure it silently falls back to the deterministic rule engine, so
//! the contract never surfaces an error to callers.

pub mod classifier;
pub mod client;
pub mod error;

pub use classifier::{ModelClassifier, API_KEY_ENV, AUDIT_SYSTEM_PROMPT};
pub use client::{ModelClient, ModelClientConfig};
pub use error::{ModelError, Result};
