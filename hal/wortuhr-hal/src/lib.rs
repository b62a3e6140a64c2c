//! Wortuhr Platform Abstraction Layer
//!
//! This crate defines the traits and value types the watch face needs
//! from the host platform. Each watch platform provides its own
//! implementation; the face logic only sees these abstractions.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Face application (wortuhr-face)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  wortuhr-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  platform bindings (storage, vibes,     │
//! │  battery and connection services)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`storage::KeyValueStorage`] - Persistent settings storage
//! - [`vibes::Vibrator`] - Vibration motor
//!
//! # Types
//!
//! - [`status::BatteryState`], [`status::ConnectionState`] - Status
//!   service readings

#![no_std]
#![deny(unsafe_code)]

pub mod status;
pub mod storage;
pub mod vibes;

// Re-export key items at crate root for convenience
pub use status::{BatteryState, ConnectionState};
pub use storage::{KeyValueStorage, StorageError};
pub use vibes::Vibrator;
