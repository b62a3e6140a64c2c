//! Vibration motor

/// Vibration motor trait
pub trait Vibrator {
    /// Run one long vibration pulse
    fn long_pulse(&mut self);
}
