//! TCGdex response cache engine
//!
//! Intercepts requests headed for the TCGdex asset and API origins, serves
//! cached copies from two named stores and refreshes API entries in the
//! background after a hit. Requests for any other origin pass through
//! untouched. A small message-based control channel clears the stores or
//! reports per-store entry counts.

pub mod classifier;
pub mod config;
pub mod control;
pub mod engine;
pub mod error;
pub mod lifecycle;
pub mod matcher;
pub mod models;
pub mod store;

// Re-export commonly used items
pub use classifier::{classify, StoreKind};
pub use config::EngineConfig;
pub use control::{handle_control, serve_control, ControlCommand, ControlMessage, ControlReply};
pub use engine::{CacheEngine, Intercept};
pub use error::{EngineError, Result};
pub use lifecycle::{CacheStats, StoreLifecycle};
pub use matcher::in_jurisdiction;
pub use models::{CachedResponse, ProxiedRequest};
pub use store::{CacheStorage, StoreHandle};
