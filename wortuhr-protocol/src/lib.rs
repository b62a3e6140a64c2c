//! Companion Settings Protocol
//!
//! This crate defines the messages exchanged between the phone companion
//! app and the watch face. The phone pushes settings changes; the watch
//! acknowledges them.
//!
//! # Protocol Overview
//!
//! All messages use a simple binary frame format:
//! ```text
//! ┌───────┬────────┬──────┬─────────────┬──────────┐
//! │ START │ LENGTH │ TYPE │ PAYLOAD     │ CHECKSUM │
//! │ 1B    │ 1B     │ 1B   │ 0–250B      │ 1B       │
//! └───────┴────────┴──────┴─────────────┴──────────┘
//! ```
//!
//! Settings arrive as `"on"`/`"off"` strings and are decoded into typed
//! booleans here, so nothing past this crate ever compares strings.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod frame;
pub mod keys;
pub mod messages;

pub use frame::{Frame, FrameError, FrameParser, FRAME_START, MAX_PAYLOAD_SIZE};
pub use keys::SettingKey;
pub use messages::{PhoneMessage, SettingsUpdate, WatchMessage};
