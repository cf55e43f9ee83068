//! Engine Module
//!
//! The command dispatcher: maps parsed commands onto scanner, codec, and
//! byte store operations.
//!
//! ## Responsibilities
//! - Enforce key uniqueness on WRITE
//! - Route each command through one linear scan
//! - Reclaim forgotten records cell by cell
//! - Produce typed responses for the session layer

use bytes::Bytes;

use crate::error::{Result, StoreError};
use crate::protocol::{Command, Response};
use crate::storage::{
    decode_at, encode_at, encoded_len, find, find_free_run, hex_dump, ByteStore, EMPTY,
};

/// The command dispatcher, owning the byte store
///
/// Stateless per command: every operation is a function of the current
/// store contents, serialized by `&mut self`. There is no other locking;
/// one session, one thread.
pub struct Engine<S: ByteStore> {
    store: S,
}

impl<S: ByteStore> Engine<S> {
    /// Wrap a byte store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Execute a parsed command
    ///
    /// Successes become responses here; store rejections surface as `Err`
    /// for the caller to fold into its own reporting.
    pub fn execute(&mut self, command: Command) -> Result<Response> {
        tracing::debug!("dispatch {}", command.name());
        match command {
            Command::Read { key } => self.read(&key).map(Response::Value),
            Command::Write { key, value } => self
                .write(&key, &value)
                .map(|addr| Response::Written { addr }),
            Command::Forget { key } => self.forget(&key).map(|()| Response::Forgotten),
            Command::Print => self.dump().map(Response::Dump),
        }
    }

    /// Look up `key` and return its value
    pub fn read(&self, key: &[u8]) -> Result<Bytes> {
        let addr = find(&self.store, key)?.ok_or(StoreError::KeyNotFound)?;
        let (record, _) = decode_at(&self.store, addr)?;
        Ok(record.value)
    }

    /// Store a new pair, returning the record's address
    ///
    /// Never overwrites: an existing key fails with `KeyExists` and its
    /// stored value stays untouched.
    pub fn write(&mut self, key: &[u8], value: &[u8]) -> Result<usize> {
        if find(&self.store, key)?.is_some() {
            return Err(StoreError::KeyExists.into());
        }

        let needed = encoded_len(key, value);
        let addr = find_free_run(&self.store, needed)?.ok_or(StoreError::NoSpace)?;
        encode_at(&mut self.store, addr, key, value)?;

        tracing::debug!("wrote {} bytes at {:#06X}", needed, addr);
        Ok(addr)
    }

    /// Delete `key`'s record
    ///
    /// Rewrites the whole record to EMPTY, start through END sentinel, so
    /// the span is immediately free for reuse.
    pub fn forget(&mut self, key: &[u8]) -> Result<()> {
        let addr = find(&self.store, key)?.ok_or(StoreError::KeyNotFound)?;
        let (_, end) = decode_at(&self.store, addr)?;

        for pos in addr..end {
            self.store.write(pos, EMPTY)?;
        }

        tracing::debug!("reclaimed {:#06X}..{:#06X}", addr, end);
        Ok(())
    }

    /// Render the diagnostic dump; mutates nothing
    pub fn dump(&self) -> Result<String> {
        hex_dump(&self.store)
    }

    /// Reset every cell to EMPTY
    pub fn wipe(&mut self) -> Result<()> {
        self.store.wipe()
    }

    // =========================================================================
    // Accessors (for testing and benchmarks)
    // =========================================================================

    /// Capacity of the underlying store
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Borrow the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }
}
