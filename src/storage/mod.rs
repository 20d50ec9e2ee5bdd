//! Storage module for configuration and capture-session records.

pub mod config;
pub mod session_store;

pub use config::{CompositeSettings, ConfigError, EngineConfig, SessionSettings};
pub use session_store::{
    CaptureSessionService, InMemorySwingStore, StoreError, SwingAnalysisRepository,
};
