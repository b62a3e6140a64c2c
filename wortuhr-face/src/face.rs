//! Watch face controller
//!
//! Owns the live settings and the face model. Each handler updates the
//! model and renders whatever changed.

use wortuhr_core::{ClockReading, PhraseFormatter};
use wortuhr_display::{
    BatteryIndicator, BluetoothIndicator, DisplayError, FaceBackend, FaceScreen, IndicatorPolicy,
};
use wortuhr_hal::{BatteryState, ConnectionState, KeyValueStorage, Vibrator};
use wortuhr_protocol::SettingsUpdate;

use crate::channels::{FaceEvent, FaceSignals};
use crate::persistence::{SettingsError, SettingsStore};
use crate::settings::{FaceSettings, SettingsChange};

/// The word clock face
pub struct WatchFace<B, V> {
    backend: B,
    vibrator: V,
    settings: FaceSettings,
    policy: IndicatorPolicy,
    screen: FaceScreen,
    battery: Option<BatteryState>,
    connection: Option<ConnectionState>,
}

impl<B: FaceBackend, V: Vibrator> WatchFace<B, V> {
    /// Create a face with the given settings
    pub fn new(backend: B, vibrator: V, settings: FaceSettings) -> Self {
        let mut screen = FaceScreen::new();
        screen.set_alignment(settings.config.alignment());
        Self {
            backend,
            vibrator,
            settings,
            policy: IndicatorPolicy::default(),
            screen,
            battery: None,
            connection: None,
        }
    }

    /// Create a face with settings loaded from storage
    pub async fn load<S: KeyValueStorage>(
        backend: B,
        vibrator: V,
        store: &mut SettingsStore<S>,
    ) -> Self {
        let settings = store.load().await;
        Self::new(backend, vibrator, settings)
    }

    /// Override the indicator display modes
    pub fn with_policy(mut self, policy: IndicatorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Current settings
    pub fn settings(&self) -> &FaceSettings {
        &self.settings
    }

    /// Current face model
    pub fn screen(&self) -> &FaceScreen {
        &self.screen
    }

    /// Display backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Vibration motor
    pub fn vibrator(&self) -> &V {
        &self.vibrator
    }

    /// Show the time for a new minute
    pub fn on_tick(&mut self, reading: ClockReading) -> Result<(), DisplayError> {
        let formatter = PhraseFormatter::new(self.settings.config);
        let result = formatter.format(&reading);
        debug!(
            "{}:{} -> {} {}",
            reading.hour,
            reading.minute,
            result.minute_text,
            result.hour_text
        );

        self.screen.set_alignment(self.settings.config.alignment());
        self.screen.show_time(&result, self.settings.show_date);
        self.render()
    }

    /// Apply settings from the companion app
    ///
    /// Phrase flags are picked up by the next tick. Date and indicator
    /// visibility change right away.
    pub fn on_settings(&mut self, update: &SettingsUpdate) -> Result<SettingsChange, DisplayError> {
        let change = self.settings.apply(update);
        info!("Applied {} settings", change.applied);

        if change.date {
            self.screen.set_date_visible(self.settings.show_date);
        }
        if change.battery {
            self.refresh_battery();
        }
        if change.bluetooth {
            self.refresh_bluetooth();
            // Re-enabling resubscribes and re-checks the current state
            if self.settings.bluetooth {
                self.alert_if_disconnected();
            }
        }

        self.render()?;
        Ok(change)
    }

    /// Record the status readings available at start-up
    ///
    /// Unlike [`on_connection`](Self::on_connection) this never vibrates.
    pub fn init_status(
        &mut self,
        battery: BatteryState,
        connection: ConnectionState,
    ) -> Result<(), DisplayError> {
        self.battery = Some(battery);
        self.connection = Some(connection);
        self.refresh_battery();
        self.refresh_bluetooth();
        self.render()
    }

    /// New battery reading
    pub fn on_battery(&mut self, state: BatteryState) -> Result<(), DisplayError> {
        self.battery = Some(state);
        self.refresh_battery();
        self.render()
    }

    /// Phone connected or disconnected
    ///
    /// Only vibrates while the Bluetooth indicator is enabled.
    pub fn on_connection(&mut self, state: ConnectionState) -> Result<(), DisplayError> {
        self.connection = Some(state);
        self.refresh_bluetooth();

        if self.settings.bluetooth {
            self.alert_if_disconnected();
        }

        self.render()
    }

    /// Handle one event
    pub fn handle(&mut self, event: &FaceEvent) -> Result<(), DisplayError> {
        match event {
            FaceEvent::Settings(update) => self.on_settings(update).map(|_| ()),
            FaceEvent::Battery(state) => self.on_battery(*state),
            FaceEvent::Connection(state) => self.on_connection(*state),
            FaceEvent::Tick(reading) => self.on_tick(*reading),
        }
    }

    /// Wait for the next event and handle it
    pub async fn step(&mut self, signals: &FaceSignals) -> Result<FaceEvent, DisplayError> {
        let event = signals.next_event().await;
        self.handle(&event)?;
        Ok(event)
    }

    /// Handle events forever
    pub async fn run(&mut self, signals: &FaceSignals) -> ! {
        info!("Watch face running");
        loop {
            if let Err(e) = self.step(signals).await {
                warn!("Render failed: {}", e);
            }
        }
    }

    /// Persist the settings before the face is unloaded
    pub async fn shutdown<S: KeyValueStorage>(
        self,
        store: &mut SettingsStore<S>,
    ) -> Result<(), SettingsError> {
        store.save(&self.settings).await
    }

    fn refresh_battery(&mut self) {
        let indicator = match self.battery {
            Some(state) => {
                BatteryIndicator::from_state(state, self.settings.battery_image, &self.policy)
            }
            None => BatteryIndicator::hidden(),
        };
        self.screen.set_battery(indicator);
    }

    fn alert_if_disconnected(&mut self) {
        let disconnected = self.connection.is_some_and(|state| !state.is_connected());
        if self.settings.vibe && disconnected {
            info!("Phone disconnected, vibrating");
            self.vibrator.long_pulse();
        }
    }

    fn refresh_bluetooth(&mut self) {
        let state = self.connection.unwrap_or(ConnectionState::Connected);
        self.screen.set_bluetooth(BluetoothIndicator::from_state(
            state,
            self.settings.bluetooth,
            &self.policy,
        ));
    }

    fn render(&mut self) -> Result<(), DisplayError> {
        self.screen.render_if_dirty(&mut self.backend).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::tests::MemoryStorage;
    use embassy_futures::block_on;
    use wortuhr_core::LayoutVariant;
    use wortuhr_display::indicators::BatteryFill;
    use wortuhr_display::{BatteryIcon, BluetoothIcon, FaceLayer};
    use wortuhr_protocol::SettingKey;

    #[derive(Default)]
    struct TestBackend {
        renders: usize,
        fail: bool,
    }

    impl FaceBackend for TestBackend {
        fn set_hidden(&mut self, _layer: FaceLayer, _hidden: bool) -> Result<(), DisplayError> {
            Ok(())
        }

        fn set_text(&mut self, _layer: FaceLayer, _text: &str) -> Result<(), DisplayError> {
            if self.fail {
                return Err(DisplayError::NotInitialized);
            }
            Ok(())
        }

        fn set_alignment(
            &mut self,
            _alignment: wortuhr_core::TextAlignment,
        ) -> Result<(), DisplayError> {
            Ok(())
        }

        fn set_battery_icon(&mut self, _icon: BatteryIcon) -> Result<(), DisplayError> {
            Ok(())
        }

        fn set_battery_fill(&mut self, _fill: BatteryFill) -> Result<(), DisplayError> {
            Ok(())
        }

        fn set_bluetooth_icon(&mut self, _icon: BluetoothIcon) -> Result<(), DisplayError> {
            Ok(())
        }

        fn flush(&mut self) -> Result<(), DisplayError> {
            self.renders += 1;
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingVibrator {
        pulses: usize,
    }

    impl Vibrator for CountingVibrator {
        fn long_pulse(&mut self) {
            self.pulses += 1;
        }
    }

    fn new_face(settings: FaceSettings) -> WatchFace<TestBackend, CountingVibrator> {
        WatchFace::new(TestBackend::default(), CountingVibrator::default(), settings)
    }

    fn reading(hour: u8, minute: u8) -> ClockReading {
        ClockReading::new(hour, minute, 0, 3)
    }

    #[test]
    fn test_tick_shows_time() {
        let mut face = new_face(FaceSettings::default());
        face.on_tick(reading(15, 7)).unwrap();

        let screen = face.screen();
        assert_eq!(screen.text(FaceLayer::MinuteTwoLineBig), Some("fünf\nnach"));
        assert_eq!(screen.text(FaceLayer::Hour), Some("drei"));
        assert_eq!(screen.text(FaceLayer::Date), Some("so 3"));
        assert!(!screen.is_hidden(FaceLayer::MinuteTwoLineBig));
        assert_eq!(face.backend().renders, 1);
    }

    #[test]
    fn test_phrase_settings_apply_on_next_tick() {
        let mut face = new_face(FaceSettings::default());
        face.on_tick(reading(8, 15)).unwrap();
        assert_eq!(face.screen().text(FaceLayer::Hour), Some("acht"));

        let update = SettingsUpdate::new().with(SettingKey::DialectWien, true);
        let change = face.on_settings(&update).unwrap();
        assert!(change.phrase);
        // Still the old text until the minute ticks
        assert_eq!(face.screen().text(FaceLayer::Hour), Some("acht"));

        face.on_tick(reading(8, 15)).unwrap();
        assert_eq!(face.screen().text(FaceLayer::MinuteTwoLineBig), Some("\nviertel"));
        assert_eq!(face.screen().text(FaceLayer::Hour), Some("neun"));
    }

    #[test]
    fn test_date_setting_applies_immediately() {
        let mut face = new_face(FaceSettings::default());
        face.on_tick(reading(9, 0)).unwrap();
        assert!(!face.screen().is_hidden(FaceLayer::Date));

        face.on_settings(&SettingsUpdate::new().with(SettingKey::Date, false))
            .unwrap();
        assert!(face.screen().is_hidden(FaceLayer::Date));
    }

    #[test]
    fn test_disconnect_vibrates() {
        let mut face = new_face(FaceSettings::default());
        face.init_status(BatteryState::new(80, false), ConnectionState::Connected)
            .unwrap();
        assert!(face.screen().is_hidden(FaceLayer::Bluetooth));

        face.on_connection(ConnectionState::Disconnected).unwrap();
        assert_eq!(face.vibrator().pulses, 1);
        assert!(!face.screen().is_hidden(FaceLayer::Bluetooth));

        face.on_connection(ConnectionState::Connected).unwrap();
        assert_eq!(face.vibrator().pulses, 1);
        assert!(face.screen().is_hidden(FaceLayer::Bluetooth));
    }

    #[test]
    fn test_no_vibration_when_disabled() {
        let settings = FaceSettings {
            vibe: false,
            ..FaceSettings::default()
        };
        let mut face = new_face(settings);
        face.on_connection(ConnectionState::Disconnected).unwrap();
        assert_eq!(face.vibrator().pulses, 0);
    }

    #[test]
    fn test_no_vibration_with_bluetooth_indicator_off() {
        let settings = FaceSettings {
            bluetooth: false,
            ..FaceSettings::default()
        };
        let mut face = new_face(settings);
        face.on_connection(ConnectionState::Disconnected).unwrap();
        assert_eq!(face.vibrator().pulses, 0);
        assert!(face.screen().is_hidden(FaceLayer::Bluetooth));
    }

    #[test]
    fn test_enabling_bluetooth_rechecks_connection() {
        let settings = FaceSettings {
            bluetooth: false,
            ..FaceSettings::default()
        };
        let mut face = new_face(settings);
        face.on_connection(ConnectionState::Disconnected).unwrap();
        assert_eq!(face.vibrator().pulses, 0);

        face.on_settings(&SettingsUpdate::new().with(SettingKey::Bluetooth, true))
            .unwrap();
        assert_eq!(face.vibrator().pulses, 1);
        assert!(!face.screen().is_hidden(FaceLayer::Bluetooth));

        face.on_settings(&SettingsUpdate::new().with(SettingKey::Bluetooth, false))
            .unwrap();
        assert_eq!(face.vibrator().pulses, 1);
        assert!(face.screen().is_hidden(FaceLayer::Bluetooth));
    }

    #[test]
    fn test_enabling_bluetooth_while_connected_is_quiet() {
        let settings = FaceSettings {
            bluetooth: false,
            ..FaceSettings::default()
        };
        let mut face = new_face(settings);
        face.on_connection(ConnectionState::Connected).unwrap();
        face.on_settings(&SettingsUpdate::new().with(SettingKey::Bluetooth, true))
            .unwrap();
        assert_eq!(face.vibrator().pulses, 0);
    }

    #[test]
    fn test_policy_shows_connected_icon() {
        let policy = IndicatorPolicy {
            bluetooth_offline_only: false,
            ..IndicatorPolicy::default()
        };
        let mut face = new_face(FaceSettings::default()).with_policy(policy);
        face.on_connection(ConnectionState::Connected).unwrap();

        assert!(!face.screen().is_hidden(FaceLayer::Bluetooth));
        assert_eq!(face.screen().bluetooth().icon, BluetoothIcon::Connected);
    }

    #[test]
    fn test_policy_shows_battery_above_red_level() {
        let policy = IndicatorPolicy {
            battery_red_only: false,
            ..IndicatorPolicy::default()
        };
        let mut face = new_face(FaceSettings::default()).with_policy(policy);
        face.on_battery(BatteryState::new(80, false)).unwrap();

        assert!(!face.screen().is_hidden(FaceLayer::Battery));
        assert!(!face.screen().is_hidden(FaceLayer::BatteryFill));
    }

    #[test]
    fn test_init_status_never_vibrates() {
        let mut face = new_face(FaceSettings::default());
        face.init_status(BatteryState::new(50, false), ConnectionState::Disconnected)
            .unwrap();
        assert_eq!(face.vibrator().pulses, 0);
        assert!(!face.screen().is_hidden(FaceLayer::Bluetooth));
    }

    #[test]
    fn test_battery_indicator_toggle() {
        let mut face = new_face(FaceSettings::default());
        face.on_battery(BatteryState::new(6, false)).unwrap();
        assert!(!face.screen().is_hidden(FaceLayer::Battery));

        face.on_settings(&SettingsUpdate::new().with(SettingKey::BatteryImage, false))
            .unwrap();
        assert!(face.screen().is_hidden(FaceLayer::Battery));
        assert!(face.screen().is_hidden(FaceLayer::BatteryFill));
    }

    #[test]
    fn test_step_applies_settings_before_tick() {
        let signals = FaceSignals::new();
        let mut face = new_face(FaceSettings::default());

        signals.tick.signal(reading(23, 59));
        signals
            .settings
            .try_send(SettingsUpdate::new().with(SettingKey::Fuzzy, false))
            .unwrap();

        let first = block_on(face.step(&signals)).unwrap();
        assert!(matches!(first, FaceEvent::Settings(_)));
        let second = block_on(face.step(&signals)).unwrap();
        assert!(matches!(second, FaceEvent::Tick(_)));

        // Exact minute 59, not rounded to the top of the hour
        assert_eq!(face.screen().text(FaceLayer::MinuteTwoLineBig), Some("eins\nvor"));
        assert_eq!(face.screen().layout(), Some(LayoutVariant::TwoLineBig));
        assert_eq!(face.screen().text(FaceLayer::Hour), Some("zwölf"));
    }

    #[test]
    fn test_render_error_is_reported() {
        let mut face = WatchFace::new(
            TestBackend {
                fail: true,
                ..TestBackend::default()
            },
            CountingVibrator::default(),
            FaceSettings::default(),
        );
        assert_eq!(
            face.on_tick(reading(12, 0)),
            Err(DisplayError::NotInitialized)
        );
    }

    #[test]
    fn test_load_and_shutdown_roundtrip_settings() {
        let mut store = SettingsStore::new(MemoryStorage::default());
        let mut face = block_on(WatchFace::load(
            TestBackend::default(),
            CountingVibrator::default(),
            &mut store,
        ));
        assert_eq!(face.settings(), &FaceSettings::default());

        face.on_settings(&SettingsUpdate::new().with(SettingKey::DialectNrw, true))
            .unwrap();
        block_on(face.shutdown(&mut store)).unwrap();

        let reloaded = block_on(store.load());
        assert!(reloaded.config.dialect_nrw);
    }
}
