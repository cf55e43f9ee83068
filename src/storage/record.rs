//! Record codec
//!
//! Encoding and decoding of key/value records in their on-store framing.
//! The format carries no lengths: the key runs to the VAL sentinel and the
//! value to the END sentinel, so neither may contain a sentinel byte.
//! ASCII payloads (the only ones the protocol admits) never do.

use bytes::Bytes;

use crate::error::{NvError, Result};
use super::{ByteStore, END, OCCUPIED, VAL};

/// Smallest possible record: one key byte and one value byte plus framing
pub const MIN_RECORD_LEN: usize = 5;

/// A decoded key/value record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub key: Bytes,
    pub value: Bytes,
}

/// Total on-store length of a record holding `key` and `value`
pub fn encoded_len(key: &[u8], value: &[u8]) -> usize {
    key.len() + value.len() + 3
}

/// Decode the record anchored at `addr`
///
/// Returns the record and the address immediately after its END sentinel.
/// A missing sentinel fails with `Malformed` once the scan reaches
/// capacity, so a corrupt store can never make the decoder loop.
pub fn decode_at<S: ByteStore>(store: &S, addr: usize) -> Result<(Record, usize)> {
    if addr >= store.capacity() || store.read(addr)? != OCCUPIED {
        return Err(NvError::Malformed { addr });
    }

    let mut pos = addr + 1;
    let key = read_until(store, &mut pos, VAL, addr)?;
    let value = read_until(store, &mut pos, END, addr)?;

    Ok((Record { key, value }, pos))
}

/// Write a record at `addr`, returning the starting address
///
/// The allocator guarantees the target span is free; encoding itself never
/// checks.
pub fn encode_at<S: ByteStore>(
    store: &mut S,
    addr: usize,
    key: &[u8],
    value: &[u8],
) -> Result<usize> {
    let mut pos = addr;

    store.write(pos, OCCUPIED)?;
    pos += 1;

    for &byte in key {
        store.write(pos, byte)?;
        pos += 1;
    }
    store.write(pos, VAL)?;
    pos += 1;

    for &byte in value {
        store.write(pos, byte)?;
        pos += 1;
    }
    store.write(pos, END)?;

    Ok(addr)
}

/// Collect bytes until `sentinel`, leaving `pos` just past it
fn read_until<S: ByteStore>(
    store: &S,
    pos: &mut usize,
    sentinel: u8,
    record_addr: usize,
) -> Result<Bytes> {
    let mut out = Vec::new();
    while *pos < store.capacity() {
        let byte = store.read(*pos)?;
        *pos += 1;
        if byte == sentinel {
            return Ok(Bytes::from(out));
        }
        out.push(byte);
    }
    Err(NvError::Malformed { addr: record_addr })
}
