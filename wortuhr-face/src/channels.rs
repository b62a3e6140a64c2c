//! Communication between platform callbacks and the face
//!
//! Platform callbacks (minute tick, battery and connection services, the
//! companion link) only post into these primitives. The face controller
//! is the single consumer.

use embassy_futures::select::{select4, Either4};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use wortuhr_core::ClockReading;
use wortuhr_hal::{BatteryState, ConnectionState};
use wortuhr_protocol::SettingsUpdate;

/// Channel capacity for settings updates
const SETTINGS_CHANNEL_SIZE: usize = 4;

/// Something the face has to react to
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceEvent {
    /// Settings received from the companion app
    Settings(SettingsUpdate),
    /// New battery reading
    Battery(BatteryState),
    /// Phone connected or disconnected
    Connection(ConnectionState),
    /// A new minute started
    Tick(ClockReading),
}

/// Signals and channels feeding one watch face
///
/// Readings that only matter in their latest form use a `Signal`.
/// Settings updates are queued so partial updates are never lost.
pub struct FaceSignals {
    /// Latest clock reading (once per minute)
    pub tick: Signal<CriticalSectionRawMutex, ClockReading>,
    /// Settings updates from the companion link
    pub settings: Channel<CriticalSectionRawMutex, SettingsUpdate, SETTINGS_CHANNEL_SIZE>,
    /// Latest battery reading
    pub battery: Signal<CriticalSectionRawMutex, BatteryState>,
    /// Latest connection state
    pub connection: Signal<CriticalSectionRawMutex, ConnectionState>,
}

impl Default for FaceSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl FaceSignals {
    /// Create an idle set of signals
    pub const fn new() -> Self {
        Self {
            tick: Signal::new(),
            settings: Channel::new(),
            battery: Signal::new(),
            connection: Signal::new(),
        }
    }

    /// Wait for the next event
    ///
    /// Pending settings win over a pending tick, so a tick is always
    /// formatted with every update received before it.
    pub async fn next_event(&self) -> FaceEvent {
        match select4(
            self.settings.receive(),
            self.battery.wait(),
            self.connection.wait(),
            self.tick.wait(),
        )
        .await
        {
            Either4::First(update) => FaceEvent::Settings(update),
            Either4::Second(state) => FaceEvent::Battery(state),
            Either4::Third(state) => FaceEvent::Connection(state),
            Either4::Fourth(reading) => FaceEvent::Tick(reading),
        }
    }
}

/// Signals for the face on this watch
pub static FACE_SIGNALS: FaceSignals = FaceSignals::new();

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use wortuhr_protocol::SettingKey;

    #[test]
    fn test_settings_before_tick() {
        let signals = FaceSignals::new();
        signals.tick.signal(ClockReading::new(10, 0, 1, 1));
        let update = SettingsUpdate::new().with(SettingKey::Fuzzy, false);
        signals.settings.try_send(update.clone()).unwrap();

        assert_eq!(block_on(signals.next_event()), FaceEvent::Settings(update));
        assert!(matches!(block_on(signals.next_event()), FaceEvent::Tick(_)));
    }

    #[test]
    fn test_updates_are_queued() {
        let signals = FaceSignals::new();
        let first = SettingsUpdate::new().with(SettingKey::Date, false);
        let second = SettingsUpdate::new().with(SettingKey::Vibe, false);
        signals.settings.try_send(first.clone()).unwrap();
        signals.settings.try_send(second.clone()).unwrap();

        assert_eq!(block_on(signals.next_event()), FaceEvent::Settings(first));
        assert_eq!(block_on(signals.next_event()), FaceEvent::Settings(second));
    }

    #[test]
    fn test_tick_keeps_latest_reading() {
        let signals = FaceSignals::new();
        signals.tick.signal(ClockReading::new(10, 0, 1, 1));
        signals.tick.signal(ClockReading::new(10, 1, 1, 1));

        assert_eq!(
            block_on(signals.next_event()),
            FaceEvent::Tick(ClockReading::new(10, 1, 1, 1))
        );
    }

    #[test]
    fn test_global_signals_are_shared() {
        FACE_SIGNALS.battery.signal(BatteryState::new(7, false));
        assert_eq!(
            FACE_SIGNALS.battery.try_take(),
            Some(BatteryState::new(7, false))
        );
        assert_eq!(FACE_SIGNALS.battery.try_take(), None);
    }
}
