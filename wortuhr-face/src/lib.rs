//! Wortuhr - German word clock watch face
//!
//! Application logic that sits between the platform and the phrase
//! engine. The platform feeds it minute ticks, status readings and bytes
//! from the companion app; it keeps the settings, persists them and
//! keeps the face model up to date.
//!
//! ```text
//! minute tick ─┐
//! battery ─────┤                ┌──────────────┐
//! bluetooth ───┼─► FaceSignals ─►│  WatchFace   ├─► FaceBackend
//! companion ───┘  (CompanionLink)└──────┬───────┘
//!                                       │ load / save
//!                                 SettingsStore ─► KeyValueStorage
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod channels;
pub mod face;
pub mod link;
pub mod persistence;
pub mod settings;

pub use channels::{FaceEvent, FaceSignals};
pub use face::WatchFace;
pub use link::CompanionLink;
pub use persistence::{SettingsError, SettingsStore};
pub use settings::{FaceSettings, SettingsChange};
