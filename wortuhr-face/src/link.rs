//! Companion app link
//!
//! Parses frames from the phone and queues the decoded settings for the
//! face. Runs in the platform's inbox callback and never blocks.

use heapless::Vec;

use wortuhr_protocol::frame::MAX_FRAME_SIZE;
use wortuhr_protocol::{Frame, FrameError, FrameParser, PhoneMessage, SettingsUpdate, WatchMessage};

use crate::channels::FaceSignals;

/// Decode a settings frame from the companion app
pub fn decode_settings_frame(frame: &Frame) -> Result<SettingsUpdate, FrameError> {
    match PhoneMessage::from_frame(frame)? {
        PhoneMessage::Settings(update) => Ok(update),
    }
}

/// Encoded acknowledgement for a settings update
pub fn settings_ack(applied: u8) -> Result<Vec<u8, MAX_FRAME_SIZE>, FrameError> {
    WatchMessage::SettingsAck { applied }
        .to_frame()?
        .encode_to_vec()
}

/// Receive side of the companion link
#[derive(Debug, Default)]
pub struct CompanionLink {
    parser: FrameParser,
}

impl CompanionLink {
    /// Create a link with an idle parser
    pub const fn new() -> Self {
        Self {
            parser: FrameParser::new(),
        }
    }

    /// Feed received bytes
    ///
    /// Every complete settings frame is queued on `signals.settings`.
    /// Malformed frames are dropped and parsing resumes at the next start
    /// byte. Returns the number of updates queued.
    pub fn receive(&mut self, bytes: &[u8], signals: &FaceSignals) -> usize {
        let mut queued = 0;

        for &byte in bytes {
            match self.parser.feed(byte) {
                Ok(Some(frame)) => match decode_settings_frame(&frame) {
                    Ok(update) => {
                        debug!("Settings frame with {} entries", update.len());
                        if signals.settings.try_send(update).is_err() {
                            warn!("Settings channel full, dropping update");
                        } else {
                            queued += 1;
                        }
                    }
                    Err(e) => {
                        warn!("Failed to decode companion message: {}", e);
                    }
                },
                Ok(None) => {}
                Err(e) => {
                    warn!("Frame parse error: {}", e);
                }
            }
        }

        queued
    }

    /// Drop any partially received frame
    pub fn reset(&mut self) {
        self.parser.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use wortuhr_protocol::SettingKey;

    fn settings_bytes(update: &SettingsUpdate) -> Vec<u8, MAX_FRAME_SIZE> {
        update.to_frame().unwrap().encode_to_vec().unwrap()
    }

    #[test]
    fn test_receive_queues_update() {
        let signals = FaceSignals::new();
        let mut link = CompanionLink::new();
        let update = SettingsUpdate::new()
            .with(SettingKey::Fuzzy, false)
            .with(SettingKey::DialectWien, true);

        assert_eq!(link.receive(&settings_bytes(&update), &signals), 1);
        assert_eq!(signals.settings.try_receive().unwrap(), update);
    }

    #[test]
    fn test_receive_split_across_calls() {
        let signals = FaceSignals::new();
        let mut link = CompanionLink::new();
        let update = SettingsUpdate::new().with(SettingKey::Date, false);
        let bytes = settings_bytes(&update);
        let (head, tail) = bytes.split_at(3);

        assert_eq!(link.receive(head, &signals), 0);
        assert_eq!(link.receive(tail, &signals), 1);
        assert_eq!(signals.settings.try_receive().unwrap(), update);
    }

    #[test]
    fn test_garbage_and_bad_values_are_dropped() {
        let signals = FaceSignals::new();
        let mut link = CompanionLink::new();

        let bad = Frame::new(0x10, &[0, 3, b'y', b'e', b's']).unwrap();
        let good = SettingsUpdate::new().with(SettingKey::Vibe, false);

        let mut bytes: std::vec::Vec<u8> = vec![0x00, 0x13, 0x37];
        bytes.extend_from_slice(&bad.encode_to_vec().unwrap());
        bytes.extend_from_slice(&settings_bytes(&good));

        assert_eq!(link.receive(&bytes, &signals), 1);
        assert_eq!(signals.settings.try_receive().unwrap(), good);
        assert!(signals.settings.try_receive().is_err());
    }

    #[test]
    fn test_full_channel_drops_update() {
        let signals = FaceSignals::new();
        let mut link = CompanionLink::new();
        let bytes = settings_bytes(&SettingsUpdate::new().with(SettingKey::Fuzzy, true));

        let mut queued = 0;
        for _ in 0..6 {
            queued += link.receive(&bytes, &signals);
        }
        assert_eq!(queued, 4);
    }

    #[test]
    fn test_decode_rejects_other_messages() {
        let frame = Frame::empty(0x11);
        assert_eq!(
            decode_settings_frame(&frame),
            Err(FrameError::UnknownMessage(0x11))
        );
    }

    #[test]
    fn test_settings_ack_bytes() {
        let bytes = settings_ack(3).unwrap();
        let mut parser = FrameParser::new();
        let (frame, used) = parser.feed_bytes(&bytes).unwrap();
        assert_eq!(used, bytes.len());
        assert_eq!(
            WatchMessage::from_frame(&frame.unwrap()).unwrap(),
            WatchMessage::SettingsAck { applied: 3 }
        );
    }

    proptest! {
        #[test]
        fn arbitrary_bytes_never_overfill(bytes in proptest::collection::vec(any::<u8>(), 0..1024)) {
            let signals = FaceSignals::new();
            let mut link = CompanionLink::new();

            let queued = link.receive(&bytes, &signals);

            prop_assert!(queued <= 4);
            let mut drained = 0;
            while signals.settings.try_receive().is_ok() {
                drained += 1;
            }
            prop_assert_eq!(drained, queued);
        }

        #[test]
        fn valid_frame_survives_leading_noise(
            noise in proptest::collection::vec(any::<u8>().prop_filter("not a start byte", |b| *b != 0xAA), 0..64),
            enabled in any::<bool>(),
        ) {
            let signals = FaceSignals::new();
            let mut link = CompanionLink::new();
            let update = SettingsUpdate::new().with(SettingKey::Fuzzy, enabled);

            let mut bytes = noise;
            bytes.extend_from_slice(&settings_bytes(&update));

            prop_assert_eq!(link.receive(&bytes, &signals), 1);
            prop_assert_eq!(signals.settings.try_receive().ok(), Some(update));
        }
    }
}
