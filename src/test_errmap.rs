//! Result-code mapping and status checks, including against a live engine.

use std::os::raw::c_int;
use std::ptr;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::cffi::{
    // Objects
    sqlite3,
    sqlite3_stmt,

    // Functions
    sqlite3_close,
    sqlite3_extended_result_codes,
    sqlite3_finalize,
    sqlite3_open,
    sqlite3_prepare_v2,
    sqlite3_step,

    // Constants
    SQLITE_BUSY,
    SQLITE_CANTOPEN,
    SQLITE_CONSTRAINT_PRIMARYKEY,
    SQLITE_DONE,
    SQLITE_ERROR,
    SQLITE_IOERR_NOMEM,
    SQLITE_OK,
    SQLITE_ROW,
};

use crate::config::set_error_callback;
use crate::err::{
    describe_code,
    to_return_status,
    to_return_status_db_err,
    to_return_status_err,
    ReturnStatus,
};
use crate::errmap::{get_rows, ExtendedRC, PrimaryRC};
use crate::fns::to_cstr;

// Place outside src so that file writes do not trigger `cargo watch`.
static TEST_OUTPUT_DIR: &str = "/tmp";

fn get_test_file() -> String {
    let now: DateTime<Utc> = Utc::now();
    format!("{}/del-test-{:?}.sqlite3", TEST_OUTPUT_DIR, now)
}

fn init() {
    if let Some(r) = set_error_callback() {
        assert!(r.is_ok(), "installing the log hook failed: {:?}", r);
    }
}

fn open_db(path: &str) -> *mut sqlite3 {
    init();

    let c_path = to_cstr(path);
    let mut db: *mut sqlite3 = ptr::null_mut();

    let r = unsafe { sqlite3_open(c_path.as_ptr(), &mut db) };
    assert!(to_return_status(r).is_ok, "could not open {}", path);
    db
}

fn prepare(db: *mut sqlite3, q: &str) -> Result<*mut sqlite3_stmt, ReturnStatus> {
    let q_c = to_cstr(q);
    let mut stmt: *mut sqlite3_stmt = ptr::null_mut();

    let r = unsafe {
        sqlite3_prepare_v2(
            db,
            q_c.as_ptr(),
            q_c.to_bytes_with_nul().len() as c_int,
            &mut stmt,
            ptr::null_mut(),
        )
    };

    // On error `stmt` is null; finalize on null is a harmless no-op.
    unsafe { to_return_status_db_err(r, db) }?;
    Ok(stmt)
}

fn run(db: *mut sqlite3, q: &str) -> Result<ReturnStatus, ReturnStatus> {
    let stmt = prepare(db, q)?;

    let mut last;
    loop {
        let r = unsafe { sqlite3_step(stmt) };
        last = unsafe { to_return_status_db_err(r, db) };

        match &last {
            Ok(status) if status.primary.id == PrimaryRC::SQLITE_ROW => continue,
            _ => break,
        }
    }

    unsafe { sqlite3_finalize(stmt) };
    last
}

#[test]
fn primary_codes_map() {
    let ok = to_return_status(SQLITE_OK);
    assert!(ok.is_ok);
    assert!(!ok.is_err);
    assert_eq!(ok.primary.id, PrimaryRC::SQLITE_OK);
    assert_eq!(ok.extended, None);

    // ROW/DONE are neither ok nor errors.
    for code in &[SQLITE_ROW, SQLITE_DONE] {
        let r = to_return_status(*code);
        assert!(!r.is_ok);
        assert!(!r.is_err);
    }

    let busy = to_return_status(SQLITE_BUSY);
    assert!(busy.is_err);
    assert_eq!(busy.primary.id, PrimaryRC::SQLITE_BUSY);
}

#[test]
fn extended_code_splits_into_primary_and_extended() {
    let (primary, extended) = get_rows(SQLITE_IOERR_NOMEM);

    assert_eq!(primary.id, PrimaryRC::SQLITE_IOERR);
    assert_eq!(extended.expect("should be extended").id, ExtendedRC::SQLITE_IOERR_NOMEM);
}

#[test]
fn unknown_extended_code_degrades_to_primary() {
    // High byte 200 is unassigned; a newer engine could emit it. The primary
    // code in the low byte must still resolve.
    let code = (200 << 8) | SQLITE_ERROR;
    let r = to_return_status(code);

    assert_eq!(r.primary.id, PrimaryRC::SQLITE_ERROR);
    assert_eq!(r.extended, None);
    assert!(r.is_err);
}

#[test]
fn return_status_from_primary_enum() {
    let r = ReturnStatus::from(PrimaryRC::SQLITE_BUSY);

    assert!(r.is_err);
    assert_eq!(r.primary.code, SQLITE_BUSY);
    assert_eq!(r, to_return_status(SQLITE_BUSY));
}

#[test]
fn to_return_status_err_forces_handling() {
    assert!(to_return_status_err(SQLITE_OK).is_ok());
    assert!(to_return_status_err(SQLITE_BUSY).is_err());

    // ROW is not ok, so the Result form treats it as Err; callers stepping
    // through rows should use the raw status instead.
    assert!(to_return_status_err(SQLITE_ROW).is_err());
}

#[test]
fn status_serializes_with_stable_shape() {
    let r = ReturnStatus::from(PrimaryRC::SQLITE_OK);
    let v = serde_json::to_value(&r).expect("serializes");

    assert_eq!(
        v,
        json!({
            "is_ok": true,
            "is_err": false,
            "primary": { "id": "SQLITE_OK", "code": 0 },
            "extended": null,
            "err_msg": null,
        })
    );

    let r2: ReturnStatus = serde_json::from_value(v).expect("deserializes");
    assert_eq!(r, r2);
}

#[test]
fn describe_code_is_nonempty() {
    assert!(!describe_code(SQLITE_BUSY).is_empty());
    assert!(!describe_code(SQLITE_CANTOPEN).is_empty());
}

#[test]
fn live_open_missing_dir_is_cantopen() {
    init();

    let c_path = to_cstr("/tmp/del-test-no-such-dir/db.sqlite3");
    let mut db: *mut sqlite3 = ptr::null_mut();

    let r = unsafe { sqlite3_open(c_path.as_ptr(), &mut db) };
    let status = to_return_status(r);
    assert!(status.is_err);
    assert_eq!(status.primary.id, PrimaryRC::SQLITE_CANTOPEN);

    // A handle is allocated even when open fails; it must still be closed.
    unsafe { sqlite3_close(db) };
}

#[test]
fn live_syntax_error_carries_db_message() {
    let db = open_db(&get_test_file());

    let e = run(db, "SELEC 1").expect_err("invalid SQL must fail");
    assert_eq!(e.primary.id, PrimaryRC::SQLITE_ERROR);

    let msg = e.err_msg.expect("prepare errors carry the connection message");
    assert!(msg.contains("syntax"), "unexpected message: {}", msg);

    unsafe { sqlite3_close(db) };
}

#[test]
fn live_constraint_violation_has_extended_code() {
    let db = open_db(&get_test_file());

    let r = unsafe { sqlite3_extended_result_codes(db, 1) };
    assert!(to_return_status(r).is_ok);

    run(db, "CREATE TABLE t1(a INTEGER PRIMARY KEY, b);").expect("create");
    run(db, "INSERT INTO t1 (a, b) VALUES (1, 2)").expect("first insert");

    let e = run(db, "INSERT INTO t1 (a, b) VALUES (1, 3)").expect_err("duplicate key must fail");
    assert_eq!(e.primary.id, PrimaryRC::SQLITE_CONSTRAINT);
    assert_eq!(
        e.extended.expect("extended codes are on").code,
        SQLITE_CONSTRAINT_PRIMARYKEY
    );
    assert!(e.err_msg.is_some());

    unsafe { sqlite3_close(db) };
}

#[test]
fn error_callback_installs_once() {
    init();

    // The `Once` has fired by now (here or in another test); later calls
    // must be no-ops.
    assert!(set_error_callback().is_none());
}
