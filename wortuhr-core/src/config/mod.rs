//! Configuration types
//!
//! Display flags that steer phrase selection. The formatter reads an
//! immutable copy on every call; the owner of the mutable copy swaps it
//! between ticks.

pub mod types;

pub use types::*;
