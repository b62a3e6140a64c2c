//! Display abstraction and face model for the watch face
//!
//! This crate provides:
//! - `FaceLayer` ids for every region of the face
//! - `FaceBackend` trait implemented by the platform's window layer
//! - `FaceScreen`, a buffered model of what the face shows
//! - Battery and Bluetooth indicator policy
//!
//! # Architecture
//!
//! The face logic never paints pixels. It updates a `FaceScreen` from a
//! formatter result and status readings, then pushes the model to a
//! `FaceBackend`, which maps layers onto the platform's text and bitmap
//! layers.
//!
//! ## Minute containers
//!
//! The minute phrase has three containers, one per layout variant, each
//! with its own position and font. Exactly one is visible at a time.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod indicators;
pub mod layers;
pub mod screen;

// Re-export key types
pub use backend::{DisplayError, FaceBackend};
pub use indicators::{BatteryIndicator, BluetoothIndicator, IndicatorPolicy};
pub use layers::{BatteryIcon, BluetoothIcon, FaceLayer};
pub use screen::FaceScreen;
