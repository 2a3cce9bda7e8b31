#![forbid(unsafe_code)]

//! Typed adapter over the museum backend's REST contract.
//!
//! Services depend on the [`Backend`] trait; [`RestBackend`] speaks HTTP to
//! the real backend and [`InMemoryBackend`] stands in for it in tests.

pub mod backend;
pub mod config;
pub mod memory;
pub mod rest;
pub mod wire;

pub use backend::{ApiError, Backend};
pub use config::{ApiConfig, ConfigError};
pub use memory::InMemoryBackend;
pub use rest::RestBackend;
pub use wire::{ArtworkUpload, BackendStatus, ClassifyRequest, StatusReply};
