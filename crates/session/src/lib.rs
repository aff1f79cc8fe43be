//! Faqdesk session primitives
//!
//! Platform-neutral building blocks for the panel's authentication
//! session: capability traits for persistent storage, the current
//! location, and the embedding host, plus [`AuthSession`] which ties
//! them together. Browser implementations live in `faqdesk-frontend`;
//! the in-process backends here ([`MemoryStorage`], [`UrlLocation`])
//! cover tests and native embeddings.

pub mod config;
pub mod error;
pub mod host;
pub mod location;
pub mod session;
pub mod storage;

pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use host::HostBridge;
pub use location::{LocationBackend, UrlLocation};
pub use session::AuthSession;
pub use storage::{MemoryStorage, StorageBackend};
