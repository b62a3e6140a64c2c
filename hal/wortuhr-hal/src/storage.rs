//! Persistent storage abstractions
//!
//! Small key-value store that survives restarts of the watch face.
//! Keys are the one-byte setting ids shared with the companion protocol.

/// Errors from storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// Storage operation failed
    Storage,
    /// Key not found
    NotFound,
    /// Buffer too small for the data
    BufferTooSmall,
    /// Data corrupted or invalid
    Corrupted,
    /// Storage is full
    Full,
}

/// Key-value storage trait
///
/// Values are opaque byte strings. Implementations decide how and where
/// they are kept.
pub trait KeyValueStorage {
    /// Read a value by key into the provided buffer
    ///
    /// # Returns
    /// The number of bytes read, or [`StorageError::NotFound`] if the key
    /// was never written.
    fn read(
        &mut self,
        key: u8,
        buffer: &mut [u8],
    ) -> impl core::future::Future<Output = Result<usize, StorageError>>;

    /// Write a value by key, replacing any previous value
    fn write(
        &mut self,
        key: u8,
        data: &[u8],
    ) -> impl core::future::Future<Output = Result<(), StorageError>>;

    /// Check if a key exists in storage
    fn exists(&mut self, key: u8) -> impl core::future::Future<Output = bool>;

    /// Erase all stored values
    fn erase_all(&mut self) -> impl core::future::Future<Output = Result<(), StorageError>>;
}
