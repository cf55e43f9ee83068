//! Linear scanner / allocator
//!
//! Walks the store from address 0 with no index or free list: an OCCUPIED
//! cell is decoded and skipped as a whole record, anything else advances
//! one cell. Every lookup and allocation is O(capacity), and the fixed
//! capacity is also the hard bound on scan length.

use crate::error::Result;
use super::{decode_at, ByteStore, EMPTY, OCCUPIED};

/// Find the record holding `key`, returning its start address
pub fn find<S: ByteStore>(store: &S, key: &[u8]) -> Result<Option<usize>> {
    let mut pos = 0;
    while pos < store.capacity() {
        if store.read(pos)? == OCCUPIED {
            let (record, end) = decode_at(store, pos)?;
            if record.key.as_ref() == key {
                return Ok(Some(pos));
            }
            pos = end;
        } else {
            pos += 1;
        }
    }
    Ok(None)
}

/// Find a contiguous run of `needed_len` EMPTY cells, returning its start
///
/// A run never extends across an occupied record: with enough total free
/// space but no single large-enough run the allocation still fails.
/// Fragmentation is permanent; there is no compaction.
pub fn find_free_run<S: ByteStore>(store: &S, needed_len: usize) -> Result<Option<usize>> {
    let mut pos = 0;
    let mut run_start = None;

    while pos < store.capacity() {
        let byte = store.read(pos)?;
        if byte == OCCUPIED {
            let (_, end) = decode_at(store, pos)?;
            run_start = None;
            pos = end;
        } else if byte == EMPTY {
            let start = *run_start.get_or_insert(pos);
            pos += 1;
            if pos - start >= needed_len {
                return Ok(Some(start));
            }
        } else {
            // stray non-sentinel byte: not free, not a record
            run_start = None;
            pos += 1;
        }
    }
    Ok(None)
}
