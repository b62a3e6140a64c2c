//! Message types for the companion link
//!
//! Message types are divided into two directions:
//! - Phone → Watch: settings updates
//! - Watch → Phone: settings acknowledgements

use heapless::Vec;

use crate::frame::{Frame, FrameError, MAX_PAYLOAD_SIZE};
use crate::keys::{SettingKey, SETTING_COUNT};

// Message type IDs: Phone → Watch
pub const MSG_SETTINGS: u8 = 0x10;

// Message type IDs: Watch → Phone
pub const MSG_SETTINGS_ACK: u8 = 0x11;

/// Wire text for an enabled setting
pub const VALUE_ON: &[u8] = b"on";

/// Wire text for a disabled setting
pub const VALUE_OFF: &[u8] = b"off";

/// Decode an on/off switch value
///
/// Trailing NUL bytes are ignored, so C-string values decode too.
pub fn decode_switch(value: &[u8]) -> Result<bool, FrameError> {
    let end = value
        .iter()
        .rposition(|&b| b != 0)
        .map_or(0, |last| last + 1);
    match &value[..end] {
        VALUE_ON => Ok(true),
        VALUE_OFF => Ok(false),
        _ => Err(FrameError::InvalidValue),
    }
}

/// Wire text for a switch value
pub fn encode_switch(enabled: bool) -> &'static [u8] {
    if enabled {
        VALUE_ON
    } else {
        VALUE_OFF
    }
}

/// A batch of typed setting changes
///
/// Each key appears at most once; a later value for the same key
/// replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SettingsUpdate {
    entries: Vec<(SettingKey, bool), SETTING_COUNT>,
}

impl SettingsUpdate {
    /// Create an empty update
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set a value, replacing any earlier value for the same key
    pub fn set(&mut self, key: SettingKey, enabled: bool) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = enabled;
        } else {
            // One slot per key, so this cannot overflow
            let _ = self.entries.push((key, enabled));
        }
    }

    /// Builder-style [`set`](Self::set)
    pub fn with(mut self, key: SettingKey, enabled: bool) -> Self {
        self.set(key, enabled);
        self
    }

    /// Value for a key, if the update carries one
    pub fn get(&self, key: SettingKey) -> Option<bool> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|&(_, enabled)| enabled)
    }

    /// Iterate over the carried values
    pub fn iter(&self) -> impl Iterator<Item = (SettingKey, bool)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of settings carried
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the update carries no settings
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a settings payload
    ///
    /// Payload: repeated `[key][len][value...]` tuples.
    pub fn from_payload(payload: &[u8]) -> Result<Self, FrameError> {
        let mut update = Self::new();
        let mut rest = payload;

        while !rest.is_empty() {
            let [id, len, tail @ ..] = rest else {
                return Err(FrameError::InvalidFrame);
            };
            let len = *len as usize;
            if tail.len() < len {
                return Err(FrameError::InvalidFrame);
            }
            let key = SettingKey::from_u8(*id).ok_or(FrameError::UnknownKey(*id))?;
            let (value, next) = tail.split_at(len);
            update.set(key, decode_switch(value)?);
            rest = next;
        }

        Ok(update)
    }

    /// Encode this update into a frame
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        let mut payload = Vec::<u8, MAX_PAYLOAD_SIZE>::new();
        for (key, enabled) in self.iter() {
            let value = encode_switch(enabled);
            payload
                .extend_from_slice(&[key.as_u8(), value.len() as u8])
                .map_err(|_| FrameError::PayloadTooLarge)?;
            payload
                .extend_from_slice(value)
                .map_err(|_| FrameError::PayloadTooLarge)?;
        }
        Frame::new(MSG_SETTINGS, &payload)
    }
}

/// Messages from the phone to the watch
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhoneMessage {
    /// New values for one or more settings
    Settings(SettingsUpdate),
}

impl PhoneMessage {
    /// Parse a message from a frame
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        match frame.msg_type {
            MSG_SETTINGS => Ok(PhoneMessage::Settings(SettingsUpdate::from_payload(
                &frame.payload,
            )?)),
            other => Err(FrameError::UnknownMessage(other)),
        }
    }

    /// Encode this message into a frame
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match self {
            PhoneMessage::Settings(update) => update.to_frame(),
        }
    }
}

/// Messages from the watch to the phone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WatchMessage {
    /// Settings were applied
    SettingsAck { applied: u8 },
}

impl WatchMessage {
    /// Encode this message into a frame
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match self {
            WatchMessage::SettingsAck { applied } => Frame::new(MSG_SETTINGS_ACK, &[*applied]),
        }
    }

    /// Parse a message from a frame (companion side or tests)
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        match frame.msg_type {
            MSG_SETTINGS_ACK => {
                let applied = *frame.payload.first().ok_or(FrameError::InvalidFrame)?;
                Ok(WatchMessage::SettingsAck { applied })
            }
            other => Err(FrameError::UnknownMessage(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decode_switch() {
        assert_eq!(decode_switch(b"on"), Ok(true));
        assert_eq!(decode_switch(b"off"), Ok(false));
        assert_eq!(decode_switch(b"on\0"), Ok(true));
        assert_eq!(decode_switch(b"ON"), Err(FrameError::InvalidValue));
        assert_eq!(decode_switch(b"yes"), Err(FrameError::InvalidValue));
        assert_eq!(decode_switch(b""), Err(FrameError::InvalidValue));
    }

    #[test]
    fn test_parse_settings_payload() {
        let payload = [
            SettingKey::Fuzzy.as_u8(), 3, b'o', b'f', b'f',
            SettingKey::DialectWien.as_u8(), 3, b'o', b'n', 0,
        ];
        let update = SettingsUpdate::from_payload(&payload).unwrap();

        assert_eq!(update.len(), 2);
        assert_eq!(update.get(SettingKey::Fuzzy), Some(false));
        assert_eq!(update.get(SettingKey::DialectWien), Some(true));
        assert_eq!(update.get(SettingKey::DialectNrw), None);
    }

    #[test]
    fn test_empty_payload_is_empty_update() {
        let update = SettingsUpdate::from_payload(&[]).unwrap();
        assert!(update.is_empty());
    }

    #[test]
    fn test_truncated_tuple() {
        assert_eq!(
            SettingsUpdate::from_payload(&[0, 3, b'o', b'n']),
            Err(FrameError::InvalidFrame)
        );
        assert_eq!(SettingsUpdate::from_payload(&[0]), Err(FrameError::InvalidFrame));
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            SettingsUpdate::from_payload(&[9, 2, b'o', b'n']),
            Err(FrameError::UnknownKey(9))
        );
    }

    #[test]
    fn test_later_value_wins() {
        let update = SettingsUpdate::new()
            .with(SettingKey::Vibe, true)
            .with(SettingKey::Vibe, false);
        assert_eq!(update.len(), 1);
        assert_eq!(update.get(SettingKey::Vibe), Some(false));
    }

    #[test]
    fn test_settings_message_from_frame() {
        let update = SettingsUpdate::new()
            .with(SettingKey::DialectNrw, true)
            .with(SettingKey::Date, false);
        let frame = update.to_frame().unwrap();
        assert_eq!(frame.msg_type, MSG_SETTINGS);

        let message = PhoneMessage::from_frame(&frame).unwrap();
        assert_eq!(message, PhoneMessage::Settings(update));
    }

    #[test]
    fn test_unknown_message_type() {
        let frame = Frame::empty(0x7F);
        assert_eq!(
            PhoneMessage::from_frame(&frame),
            Err(FrameError::UnknownMessage(0x7F))
        );
    }

    #[test]
    fn test_settings_ack() {
        let frame = WatchMessage::SettingsAck { applied: 3 }.to_frame().unwrap();
        assert_eq!(frame.msg_type, MSG_SETTINGS_ACK);
        assert_eq!(frame.payload.as_slice(), &[3]);
        assert_eq!(
            WatchMessage::from_frame(&frame),
            Ok(WatchMessage::SettingsAck { applied: 3 })
        );
    }

    proptest! {
        #[test]
        fn arbitrary_payload_never_panics(payload in proptest::collection::vec(any::<u8>(), 0..64)) {
            let _ = SettingsUpdate::from_payload(&payload);
        }
    }
}
