//! Return-status handling for raw SQLite calls.
//!
//! Every `sqlite3_*` function reports through a `c_int` result code; the
//! helpers here lift those codes into [`ReturnStatus`] and into `Result`s so
//! callers cannot silently ignore failures.

use std::ffi::CStr;
use std::os::raw::c_int;

use serde::{Deserialize, Serialize};

use crate::cffi::{
    // Objects
    sqlite3,

    // Functions
    sqlite3_errmsg,
    sqlite3_errstr,
};

use crate::errmap::{
    get_primary_row_by_enum,
    get_rows,
    ExtendedRow,
    PrimaryRC,
    PrimaryRow,
};

#[derive(Debug)]
#[derive(PartialEq)]
#[derive(Serialize, Deserialize)]
#[derive(Clone)]
pub struct ReturnStatus {
    // = SQLITE_OK
    pub is_ok: bool,

    // NOT (SQLITE_OK, SQLITE_ROW, SQLITE_DONE)
    pub is_err: bool,

    pub primary: PrimaryRow,
    pub extended: Option<ExtendedRow>,

    pub err_msg: Option<String>,
}

impl From<PrimaryRC> for ReturnStatus {
    fn from(prc: PrimaryRC) -> Self {
        // Example use: generate an expected `ReturnStatus` during testing.
        to_return_status(get_primary_row_by_enum(&prc).code)
    }
}

fn get_is_error(id: &PrimaryRC) -> bool {
    match id {
        PrimaryRC::SQLITE_OK => false,
        PrimaryRC::SQLITE_ROW => false,
        PrimaryRC::SQLITE_DONE => false,
        _ => true,
    }
}

pub fn to_return_status(code: c_int) -> ReturnStatus {
    let (primary, extended) = get_rows(code);

    let is_ok = primary.id == PrimaryRC::SQLITE_OK;
    let is_err = get_is_error(&primary.id);

    ReturnStatus {
        is_ok,
        is_err,
        primary,
        extended,
        err_msg: None,
    }
}

// Force client code to deal with the error.
pub fn to_return_status_err(code: c_int) -> Result<ReturnStatus, ReturnStatus> {
    let r = to_return_status(code);

    match r.is_ok {
        true => Ok(r),
        false => Err(r),
    }
}

/// Like [`to_return_status_err`], but attaches the connection's last error
/// message on failure.
///
/// # Safety
/// `db` must be a valid SQLite connection handle or `NULL`. Passing a
/// non-null invalid pointer is undefined behaviour.
pub unsafe fn to_return_status_db_err(code: c_int, db: *mut sqlite3) -> Result<ReturnStatus, ReturnStatus> {
    let mut r = to_return_status(code);

    if r.is_err {
        r.err_msg = Some(get_error_from_db(db));
        return Err(r);
    }

    Ok(r)
}

/// The most recent error message on `db`.
///
/// Falls back to `sqlite3_errstr`'s generic description of the connection's
/// error code when no handle is available.
///
/// # Safety
/// `db` must be a valid SQLite connection handle or `NULL`.
// Note: `sqlite3_errmsg` only returns the most recent error on the
// connection; interleaved calls from other threads can overwrite it.
pub unsafe fn get_error_from_db(db: *mut sqlite3) -> String {
    if db.is_null() {
        return "Unknown (no database handle)".to_string();
    }

    // `sqlite3_errmsg` memory is managed by SQLite, no need to free.
    CStr::from_ptr(sqlite3_errmsg(db)).to_string_lossy().into_owned()
}

/// The generic English description for a result code, independent of any
/// connection.
pub fn describe_code(code: c_int) -> String {
    let msg = unsafe { sqlite3_errstr(code) };
    match msg.is_null() {
        true => "Unknown".to_string(),
        false => unsafe { CStr::from_ptr(msg).to_string_lossy().into_owned() },
    }
}
