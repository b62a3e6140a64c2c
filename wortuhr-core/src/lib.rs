//! Board-agnostic core logic for the word clock watch face
//!
//! This crate contains the time-to-phrase engine and the value types it
//! works on. Nothing here touches hardware, storage or the screen:
//!
//! - Clock readings supplied by the minute tick
//! - Display configuration flags (fuzzy mode, dialects, alignment)
//! - Fuzzy minute rounding
//! - Minute phrase and layout selection with dialect overrides
//! - Hour phrase selection with carry-over
//! - Weekday/date label formatting

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod clock;
pub mod config;
pub mod phrase;

pub use clock::ClockReading;
pub use config::{Configuration, TextAlignment};
pub use phrase::{FormatResult, LayoutVariant, PhraseFormatter};
