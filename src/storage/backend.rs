//! Byte store backends
//!
//! Blocking, byte-granular access to the storage region. `read` returns the
//! last written value, or EMPTY for cells never written. `write` returns
//! only once the byte is durable at the backend's level, so a caller never
//! observes a half-finished write.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::error::{NvError, Result};
use super::EMPTY;

/// Byte-addressable non-volatile storage
pub trait ByteStore {
    /// Capacity in bytes; valid addresses are `0..capacity()`
    fn capacity(&self) -> usize;

    /// Read one byte
    fn read(&self, addr: usize) -> Result<u8>;

    /// Write one byte, blocking until the write has completed
    fn write(&mut self, addr: usize, byte: u8) -> Result<()>;

    /// Rewrite every non-EMPTY cell to EMPTY
    ///
    /// Cells already holding EMPTY are skipped rather than rewritten.
    fn wipe(&mut self) -> Result<()> {
        for addr in 0..self.capacity() {
            if self.read(addr)? != EMPTY {
                self.write(addr, EMPTY)?;
            }
        }
        Ok(())
    }
}

fn check_addr(addr: usize, capacity: usize) -> Result<()> {
    if addr >= capacity {
        return Err(NvError::OutOfRange { addr, capacity });
    }
    Ok(())
}

/// Volatile in-memory store, for tests and benchmarks
pub struct MemStore {
    cells: Vec<u8>,
}

impl MemStore {
    /// Create a store of `capacity` virgin (EMPTY) cells
    pub fn new(capacity: usize) -> Self {
        Self {
            cells: vec![EMPTY; capacity],
        }
    }
}

impl ByteStore for MemStore {
    fn capacity(&self) -> usize {
        self.cells.len()
    }

    fn read(&self, addr: usize) -> Result<u8> {
        check_addr(addr, self.cells.len())?;
        Ok(self.cells[addr])
    }

    fn write(&mut self, addr: usize, byte: u8) -> Result<()> {
        check_addr(addr, self.cells.len())?;
        self.cells[addr] = byte;
        Ok(())
    }
}

/// File-backed store: the persistent production backend
///
/// The whole region is cached in memory for reads; every write goes through
/// to the file and is synced before returning.
pub struct FileStore {
    file: File,
    cells: Vec<u8>,
}

impl FileStore {
    /// Open or create a backing file of `capacity` bytes
    ///
    /// A missing or short file is extended with EMPTY cells, so a fresh
    /// store always reads as one whole free span.
    pub fn open(path: &Path, capacity: usize) -> Result<Self> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(path)?;

        let mut cells = Vec::with_capacity(capacity);
        file.read_to_end(&mut cells)?;
        cells.truncate(capacity);

        if cells.len() < capacity {
            let start = cells.len();
            cells.resize(capacity, EMPTY);
            file.seek(SeekFrom::Start(start as u64))?;
            file.write_all(&cells[start..])?;
            file.sync_data()?;
        }

        Ok(Self { file, cells })
    }
}

impl ByteStore for FileStore {
    fn capacity(&self) -> usize {
        self.cells.len()
    }

    fn read(&self, addr: usize) -> Result<u8> {
        check_addr(addr, self.cells.len())?;
        Ok(self.cells[addr])
    }

    fn write(&mut self, addr: usize, byte: u8) -> Result<()> {
        check_addr(addr, self.cells.len())?;
        self.cells[addr] = byte;
        self.file.seek(SeekFrom::Start(addr as u64))?;
        self.file.write_all(&[byte])?;
        self.file.sync_data()?;
        Ok(())
    }
}
