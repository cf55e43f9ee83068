//! Engine tests: command dispatch over an in-memory store

use nvkv::error::{NvError, StoreError};
use nvkv::protocol::{Command, Response};
use nvkv::storage::{ByteStore, FileStore, MemStore, OCCUPIED};
use nvkv::Engine;

use bytes::Bytes;

fn engine() -> Engine<MemStore> {
    Engine::new(MemStore::new(1024))
}

// =============================================================================
// READ / WRITE Tests
// =============================================================================

#[test]
fn write_then_read_roundtrip() {
    let mut engine = engine();
    engine.write(b"name", b"arthur").unwrap();
    assert_eq!(engine.read(b"name").unwrap().as_ref(), &b"arthur"[..]);
}

#[test]
fn read_missing_key_fails_not_found() {
    let engine = engine();
    assert!(matches!(
        engine.read(b"ghost"),
        Err(NvError::Store(StoreError::KeyNotFound))
    ));
}

#[test]
fn duplicate_write_keeps_first_value() {
    let mut engine = engine();
    engine.write(b"k", b"first").unwrap();
    assert!(matches!(
        engine.write(b"k", b"second"),
        Err(NvError::Store(StoreError::KeyExists))
    ));
    assert_eq!(engine.read(b"k").unwrap().as_ref(), &b"first"[..]);
}

#[test]
fn values_may_hold_spaces() {
    let mut engine = engine();
    engine.write(b"greeting", b"hello world").unwrap();
    assert_eq!(
        engine.read(b"greeting").unwrap().as_ref(),
        &b"hello world"[..]
    );
}

#[test]
fn writes_pack_back_to_back() {
    let mut engine = engine();
    assert_eq!(engine.write(b"a", b"1").unwrap(), 0);
    assert_eq!(engine.write(b"b", b"2").unwrap(), 5);
    assert_eq!(engine.write(b"c", b"3").unwrap(), 10);
}

// =============================================================================
// FORGET / Reuse Tests
// =============================================================================

#[test]
fn forget_then_read_fails_not_found() {
    let mut engine = engine();
    engine.write(b"k", b"v").unwrap();
    engine.forget(b"k").unwrap();
    assert!(matches!(
        engine.read(b"k"),
        Err(NvError::Store(StoreError::KeyNotFound))
    ));
}

#[test]
fn forget_missing_key_fails_not_found() {
    let mut engine = engine();
    assert!(matches!(
        engine.forget(b"ghost"),
        Err(NvError::Store(StoreError::KeyNotFound))
    ));
}

#[test]
fn forget_leaves_neighbors_intact() {
    let mut engine = engine();
    engine.write(b"a", b"1").unwrap();
    engine.write(b"b", b"2").unwrap();
    engine.write(b"c", b"3").unwrap();
    engine.forget(b"b").unwrap();
    assert_eq!(engine.read(b"a").unwrap().as_ref(), &b"1"[..]);
    assert_eq!(engine.read(b"c").unwrap().as_ref(), &b"3"[..]);
}

#[test]
fn literal_scenario_reuses_reclaimed_address() {
    let mut engine = engine();

    assert_eq!(engine.write(b"a", b"1").unwrap(), 0);
    assert_eq!(engine.read(b"a").unwrap().as_ref(), &b"1"[..]);
    assert!(matches!(
        engine.write(b"a", b"2"),
        Err(NvError::Store(StoreError::KeyExists))
    ));
    engine.forget(b"a").unwrap();
    assert!(matches!(
        engine.read(b"a"),
        Err(NvError::Store(StoreError::KeyNotFound))
    ));
    assert_eq!(engine.write(b"a", b"2").unwrap(), 0);
}

#[test]
fn smaller_record_fits_reclaimed_span() {
    let mut engine = engine();
    engine.write(b"long", b"0123456789").unwrap(); // 17 bytes at 0
    engine.write(b"next", b"x").unwrap(); // pins the tail
    engine.forget(b"long").unwrap();
    assert_eq!(engine.write(b"s", b"1").unwrap(), 0);
}

// =============================================================================
// Space Exhaustion Tests
// =============================================================================

#[test]
fn fragmented_store_fails_despite_total_free_space() {
    // records at [0,18) and [25,40) leave a single 7-cell run; a write
    // needing 8 cells must fail even though 8 cells are free in total
    let mut engine = Engine::new(MemStore::new(40));
    engine.write(b"k1", b"aaaaaaaaaaaaa").unwrap(); // 18 bytes at 0
    engine.write(b"gap", b"x").unwrap(); // 7 bytes at 18
    engine.write(b"k2", b"bbbbbbbbbb").unwrap(); // 15 bytes at 25
    engine.forget(b"gap").unwrap();

    assert!(matches!(
        engine.write(b"n", b"wxyz"), // needs 8
        Err(NvError::Store(StoreError::NoSpace))
    ));
    assert_eq!(engine.write(b"z", b"abc").unwrap(), 18); // needs 7, fits
}

#[test]
fn full_store_rejects_any_write() {
    let mut engine = Engine::new(MemStore::new(5));
    engine.write(b"k", b"v").unwrap();
    assert!(matches!(
        engine.write(b"x", b"y"),
        Err(NvError::Store(StoreError::NoSpace))
    ));
}

// =============================================================================
// PRINT / Dispatch Tests
// =============================================================================

#[test]
fn dump_does_not_mutate_the_store() {
    let mut engine = engine();
    engine.write(b"a", b"1").unwrap();
    let before = engine.dump().unwrap();
    let _ = engine.dump().unwrap();
    let after = engine.dump().unwrap();
    assert_eq!(before, after);
    assert_eq!(engine.read(b"a").unwrap().as_ref(), &b"1"[..]);
}

#[test]
fn execute_routes_commands() {
    let mut engine = engine();

    let written = engine
        .execute(Command::Write {
            key: Bytes::from_static(b"a"),
            value: Bytes::from_static(b"1"),
        })
        .unwrap();
    assert_eq!(written, Response::Written { addr: 0 });

    let value = engine
        .execute(Command::Read {
            key: Bytes::from_static(b"a"),
        })
        .unwrap();
    assert_eq!(value, Response::Value(Bytes::from_static(b"1")));

    let forgotten = engine
        .execute(Command::Forget {
            key: Bytes::from_static(b"a"),
        })
        .unwrap();
    assert_eq!(forgotten, Response::Forgotten);

    assert!(matches!(
        engine.execute(Command::Print).unwrap(),
        Response::Dump(_)
    ));
}

#[test]
fn corrupted_store_reports_malformed() {
    // an OCCUPIED sentinel with no terminators behind it
    let mut store = MemStore::new(16);
    store.write(0, OCCUPIED).unwrap();
    let engine = Engine::new(store);
    assert!(matches!(
        engine.read(b"k"),
        Err(NvError::Malformed { addr: 0 })
    ));
}

#[test]
fn wipe_forgets_everything() {
    let mut engine = engine();
    engine.write(b"a", b"1").unwrap();
    engine.write(b"b", b"2").unwrap();
    engine.wipe().unwrap();
    assert!(matches!(
        engine.read(b"a"),
        Err(NvError::Store(StoreError::KeyNotFound))
    ));
    assert_eq!(engine.write(b"c", b"3").unwrap(), 0);
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[test]
fn records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kv.img");

    {
        let store = FileStore::open(&path, 1024).unwrap();
        let mut engine = Engine::new(store);
        engine.write(b"boot", b"count").unwrap();
    }

    let store = FileStore::open(&path, 1024).unwrap();
    let engine = Engine::new(store);
    assert_eq!(engine.read(b"boot").unwrap().as_ref(), &b"count"[..]);
}
