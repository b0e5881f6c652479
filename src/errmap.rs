//! Maps raw SQLite result codes onto Rust enums.
//!
//! (enum, intCode) pairs are kept in constant tables so the mapping is
//! defined in one place: the enum gives exhaustive `match` checking, the
//! integer code is what the FFI returns.
//!
//! @see https://www.sqlite.org/rescode.html

use std::os::raw::c_int;

use serde::{Deserialize, Serialize};

use crate::cffi::{
    // Primary
    SQLITE_OK,
    SQLITE_ERROR,
    SQLITE_INTERNAL,
    SQLITE_PERM,
    SQLITE_ABORT,
    SQLITE_BUSY,
    SQLITE_LOCKED,
    SQLITE_NOMEM,
    SQLITE_READONLY,
    SQLITE_INTERRUPT,
    SQLITE_IOERR,
    SQLITE_CORRUPT,
    SQLITE_NOTFOUND,
    SQLITE_FULL,
    SQLITE_CANTOPEN,
    SQLITE_PROTOCOL,
    SQLITE_EMPTY,
    SQLITE_SCHEMA,
    SQLITE_TOOBIG,
    SQLITE_CONSTRAINT,
    SQLITE_MISMATCH,
    SQLITE_MISUSE,
    SQLITE_NOLFS,
    SQLITE_AUTH,
    SQLITE_FORMAT,
    SQLITE_RANGE,
    SQLITE_NOTADB,
    SQLITE_NOTICE,
    SQLITE_WARNING,
    SQLITE_ROW,
    SQLITE_DONE,

    // Extended
    SQLITE_ERROR_MISSING_COLLSEQ,
    SQLITE_ERROR_RETRY,
    SQLITE_ERROR_SNAPSHOT,
    SQLITE_IOERR_READ,
    SQLITE_IOERR_SHORT_READ,
    SQLITE_IOERR_WRITE,
    SQLITE_IOERR_FSYNC,
    SQLITE_IOERR_DIR_FSYNC,
    SQLITE_IOERR_TRUNCATE,
    SQLITE_IOERR_FSTAT,
    SQLITE_IOERR_UNLOCK,
    SQLITE_IOERR_RDLOCK,
    SQLITE_IOERR_DELETE,
    SQLITE_IOERR_BLOCKED,
    SQLITE_IOERR_NOMEM,
    SQLITE_IOERR_ACCESS,
    SQLITE_IOERR_CHECKRESERVEDLOCK,
    SQLITE_IOERR_LOCK,
    SQLITE_IOERR_CLOSE,
    SQLITE_IOERR_DIR_CLOSE,
    SQLITE_IOERR_SHMOPEN,
    SQLITE_IOERR_SHMSIZE,
    SQLITE_IOERR_SHMLOCK,
    SQLITE_IOERR_SHMMAP,
    SQLITE_IOERR_SEEK,
    SQLITE_IOERR_DELETE_NOENT,
    SQLITE_IOERR_MMAP,
    SQLITE_IOERR_GETTEMPPATH,
    SQLITE_IOERR_CONVPATH,
    SQLITE_IOERR_VNODE,
    SQLITE_IOERR_AUTH,
    SQLITE_IOERR_BEGIN_ATOMIC,
    SQLITE_IOERR_COMMIT_ATOMIC,
    SQLITE_IOERR_ROLLBACK_ATOMIC,
    SQLITE_IOERR_DATA,
    SQLITE_IOERR_CORRUPTFS,
    SQLITE_LOCKED_SHAREDCACHE,
    SQLITE_LOCKED_VTAB,
    SQLITE_BUSY_RECOVERY,
    SQLITE_BUSY_SNAPSHOT,
    SQLITE_BUSY_TIMEOUT,
    SQLITE_CANTOPEN_NOTEMPDIR,
    SQLITE_CANTOPEN_ISDIR,
    SQLITE_CANTOPEN_FULLPATH,
    SQLITE_CANTOPEN_CONVPATH,
    SQLITE_CANTOPEN_DIRTYWAL,
    SQLITE_CANTOPEN_SYMLINK,
    SQLITE_CORRUPT_VTAB,
    SQLITE_CORRUPT_SEQUENCE,
    SQLITE_CORRUPT_INDEX,
    SQLITE_READONLY_RECOVERY,
    SQLITE_READONLY_CANTLOCK,
    SQLITE_READONLY_ROLLBACK,
    SQLITE_READONLY_DBMOVED,
    SQLITE_READONLY_CANTINIT,
    SQLITE_READONLY_DIRECTORY,
    SQLITE_ABORT_ROLLBACK,
    SQLITE_CONSTRAINT_CHECK,
    SQLITE_CONSTRAINT_COMMITHOOK,
    SQLITE_CONSTRAINT_FOREIGNKEY,
    SQLITE_CONSTRAINT_FUNCTION,
    SQLITE_CONSTRAINT_NOTNULL,
    SQLITE_CONSTRAINT_PRIMARYKEY,
    SQLITE_CONSTRAINT_TRIGGER,
    SQLITE_CONSTRAINT_UNIQUE,
    SQLITE_CONSTRAINT_VTAB,
    SQLITE_CONSTRAINT_ROWID,
    SQLITE_CONSTRAINT_PINNED,
    SQLITE_CONSTRAINT_DATATYPE,
    SQLITE_NOTICE_RECOVER_WAL,
    SQLITE_NOTICE_RECOVER_ROLLBACK,
    SQLITE_WARNING_AUTOINDEX,
    SQLITE_AUTH_USER,
    SQLITE_OK_LOAD_PERMANENTLY,
};

// RC = Return Code.
// @see https://www.sqlite.org/c3ref/c_abort.html
#[derive(Debug)]
#[derive(PartialEq)]
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize)]
#[derive(Clone)]
pub enum PrimaryRC {
    SQLITE_OK,
    SQLITE_ERROR,
    SQLITE_INTERNAL,
    SQLITE_PERM,
    SQLITE_ABORT,
    SQLITE_BUSY,
    SQLITE_LOCKED,
    SQLITE_NOMEM,
    SQLITE_READONLY,
    SQLITE_INTERRUPT,
    SQLITE_IOERR,
    SQLITE_CORRUPT,
    SQLITE_NOTFOUND,
    SQLITE_FULL,
    SQLITE_CANTOPEN,
    SQLITE_PROTOCOL,
    SQLITE_EMPTY,
    SQLITE_SCHEMA,
    SQLITE_TOOBIG,
    SQLITE_CONSTRAINT,
    SQLITE_MISMATCH,
    SQLITE_MISUSE,
    SQLITE_NOLFS,
    SQLITE_AUTH,
    SQLITE_FORMAT,
    SQLITE_RANGE,
    SQLITE_NOTADB,
    SQLITE_NOTICE,
    SQLITE_WARNING,
    SQLITE_ROW,
    SQLITE_DONE,
}

// @see https://www.sqlite.org/c3ref/c_abort_rollback.html
#[derive(Debug)]
#[derive(PartialEq)]
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize)]
#[derive(Clone)]
pub enum ExtendedRC {
    SQLITE_ERROR_MISSING_COLLSEQ,
    SQLITE_ERROR_RETRY,
    SQLITE_ERROR_SNAPSHOT,
    SQLITE_IOERR_READ,
    SQLITE_IOERR_SHORT_READ,
    SQLITE_IOERR_WRITE,
    SQLITE_IOERR_FSYNC,
    SQLITE_IOERR_DIR_FSYNC,
    SQLITE_IOERR_TRUNCATE,
    SQLITE_IOERR_FSTAT,
    SQLITE_IOERR_UNLOCK,
    SQLITE_IOERR_RDLOCK,
    SQLITE_IOERR_DELETE,
    SQLITE_IOERR_BLOCKED,
    SQLITE_IOERR_NOMEM,
    SQLITE_IOERR_ACCESS,
    SQLITE_IOERR_CHECKRESERVEDLOCK,
    SQLITE_IOERR_LOCK,
    SQLITE_IOERR_CLOSE,
    SQLITE_IOERR_DIR_CLOSE,
    SQLITE_IOERR_SHMOPEN,
    SQLITE_IOERR_SHMSIZE,
    SQLITE_IOERR_SHMLOCK,
    SQLITE_IOERR_SHMMAP,
    SQLITE_IOERR_SEEK,
    SQLITE_IOERR_DELETE_NOENT,
    SQLITE_IOERR_MMAP,
    SQLITE_IOERR_GETTEMPPATH,
    SQLITE_IOERR_CONVPATH,
    SQLITE_IOERR_VNODE,
    SQLITE_IOERR_AUTH,
    SQLITE_IOERR_BEGIN_ATOMIC,
    SQLITE_IOERR_COMMIT_ATOMIC,
    SQLITE_IOERR_ROLLBACK_ATOMIC,
    SQLITE_IOERR_DATA,
    SQLITE_IOERR_CORRUPTFS,
    SQLITE_LOCKED_SHAREDCACHE,
    SQLITE_LOCKED_VTAB,
    SQLITE_BUSY_RECOVERY,
    SQLITE_BUSY_SNAPSHOT,
    SQLITE_BUSY_TIMEOUT,
    SQLITE_CANTOPEN_NOTEMPDIR,
    SQLITE_CANTOPEN_ISDIR,
    SQLITE_CANTOPEN_FULLPATH,
    SQLITE_CANTOPEN_CONVPATH,
    SQLITE_CANTOPEN_DIRTYWAL,
    SQLITE_CANTOPEN_SYMLINK,
    SQLITE_CORRUPT_VTAB,
    SQLITE_CORRUPT_SEQUENCE,
    SQLITE_CORRUPT_INDEX,
    SQLITE_READONLY_RECOVERY,
    SQLITE_READONLY_CANTLOCK,
    SQLITE_READONLY_ROLLBACK,
    SQLITE_READONLY_DBMOVED,
    SQLITE_READONLY_CANTINIT,
    SQLITE_READONLY_DIRECTORY,
    SQLITE_ABORT_ROLLBACK,
    SQLITE_CONSTRAINT_CHECK,
    SQLITE_CONSTRAINT_COMMITHOOK,
    SQLITE_CONSTRAINT_FOREIGNKEY,
    SQLITE_CONSTRAINT_FUNCTION,
    SQLITE_CONSTRAINT_NOTNULL,
    SQLITE_CONSTRAINT_PRIMARYKEY,
    SQLITE_CONSTRAINT_TRIGGER,
    SQLITE_CONSTRAINT_UNIQUE,
    SQLITE_CONSTRAINT_VTAB,
    SQLITE_CONSTRAINT_ROWID,
    SQLITE_CONSTRAINT_PINNED,
    SQLITE_CONSTRAINT_DATATYPE,
    SQLITE_NOTICE_RECOVER_WAL,
    SQLITE_NOTICE_RECOVER_ROLLBACK,
    SQLITE_WARNING_AUTOINDEX,
    SQLITE_AUTH_USER,
    SQLITE_OK_LOAD_PERMANENTLY,
}

#[derive(Debug)]
#[derive(PartialEq)]
#[derive(Serialize, Deserialize)]
#[derive(Clone)]
pub struct PrimaryRow {
    pub id: PrimaryRC,
    pub code: c_int,
}

#[derive(Debug)]
#[derive(PartialEq)]
#[derive(Serialize, Deserialize)]
#[derive(Clone)]
pub struct ExtendedRow {
    pub id: ExtendedRC,
    pub code: c_int,
}

const PRIMARYTBL: &[PrimaryRow] = &[
    PrimaryRow { id: PrimaryRC::SQLITE_OK, code: SQLITE_OK },
    PrimaryRow { id: PrimaryRC::SQLITE_ERROR, code: SQLITE_ERROR },
    PrimaryRow { id: PrimaryRC::SQLITE_INTERNAL, code: SQLITE_INTERNAL },
    PrimaryRow { id: PrimaryRC::SQLITE_PERM, code: SQLITE_PERM },
    PrimaryRow { id: PrimaryRC::SQLITE_ABORT, code: SQLITE_ABORT },
    PrimaryRow { id: PrimaryRC::SQLITE_BUSY, code: SQLITE_BUSY },
    PrimaryRow { id: PrimaryRC::SQLITE_LOCKED, code: SQLITE_LOCKED },
    PrimaryRow { id: PrimaryRC::SQLITE_NOMEM, code: SQLITE_NOMEM },
    PrimaryRow { id: PrimaryRC::SQLITE_READONLY, code: SQLITE_READONLY },
    PrimaryRow { id: PrimaryRC::SQLITE_INTERRUPT, code: SQLITE_INTERRUPT },
    PrimaryRow { id: PrimaryRC::SQLITE_IOERR, code: SQLITE_IOERR },
    PrimaryRow { id: PrimaryRC::SQLITE_CORRUPT, code: SQLITE_CORRUPT },
    PrimaryRow { id: PrimaryRC::SQLITE_NOTFOUND, code: SQLITE_NOTFOUND },
    PrimaryRow { id: PrimaryRC::SQLITE_FULL, code: SQLITE_FULL },
    PrimaryRow { id: PrimaryRC::SQLITE_CANTOPEN, code: SQLITE_CANTOPEN },
    PrimaryRow { id: PrimaryRC::SQLITE_PROTOCOL, code: SQLITE_PROTOCOL },
    PrimaryRow { id: PrimaryRC::SQLITE_EMPTY, code: SQLITE_EMPTY },
    PrimaryRow { id: PrimaryRC::SQLITE_SCHEMA, code: SQLITE_SCHEMA },
    PrimaryRow { id: PrimaryRC::SQLITE_TOOBIG, code: SQLITE_TOOBIG },
    PrimaryRow { id: PrimaryRC::SQLITE_CONSTRAINT, code: SQLITE_CONSTRAINT },
    PrimaryRow { id: PrimaryRC::SQLITE_MISMATCH, code: SQLITE_MISMATCH },
    PrimaryRow { id: PrimaryRC::SQLITE_MISUSE, code: SQLITE_MISUSE },
    PrimaryRow { id: PrimaryRC::SQLITE_NOLFS, code: SQLITE_NOLFS },
    PrimaryRow { id: PrimaryRC::SQLITE_AUTH, code: SQLITE_AUTH },
    PrimaryRow { id: PrimaryRC::SQLITE_FORMAT, code: SQLITE_FORMAT },
    PrimaryRow { id: PrimaryRC::SQLITE_RANGE, code: SQLITE_RANGE },
    PrimaryRow { id: PrimaryRC::SQLITE_NOTADB, code: SQLITE_NOTADB },
    PrimaryRow { id: PrimaryRC::SQLITE_NOTICE, code: SQLITE_NOTICE },
    PrimaryRow { id: PrimaryRC::SQLITE_WARNING, code: SQLITE_WARNING },
    PrimaryRow { id: PrimaryRC::SQLITE_ROW, code: SQLITE_ROW },
    PrimaryRow { id: PrimaryRC::SQLITE_DONE, code: SQLITE_DONE },
];

const EXTENDEDTBL: &[ExtendedRow] = &[
    ExtendedRow { id: ExtendedRC::SQLITE_ERROR_MISSING_COLLSEQ, code: SQLITE_ERROR_MISSING_COLLSEQ },
    ExtendedRow { id: ExtendedRC::SQLITE_ERROR_RETRY, code: SQLITE_ERROR_RETRY },
    ExtendedRow { id: ExtendedRC::SQLITE_ERROR_SNAPSHOT, code: SQLITE_ERROR_SNAPSHOT },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_READ, code: SQLITE_IOERR_READ },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_SHORT_READ, code: SQLITE_IOERR_SHORT_READ },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_WRITE, code: SQLITE_IOERR_WRITE },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_FSYNC, code: SQLITE_IOERR_FSYNC },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_DIR_FSYNC, code: SQLITE_IOERR_DIR_FSYNC },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_TRUNCATE, code: SQLITE_IOERR_TRUNCATE },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_FSTAT, code: SQLITE_IOERR_FSTAT },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_UNLOCK, code: SQLITE_IOERR_UNLOCK },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_RDLOCK, code: SQLITE_IOERR_RDLOCK },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_DELETE, code: SQLITE_IOERR_DELETE },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_BLOCKED, code: SQLITE_IOERR_BLOCKED },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_NOMEM, code: SQLITE_IOERR_NOMEM },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_ACCESS, code: SQLITE_IOERR_ACCESS },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_CHECKRESERVEDLOCK, code: SQLITE_IOERR_CHECKRESERVEDLOCK },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_LOCK, code: SQLITE_IOERR_LOCK },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_CLOSE, code: SQLITE_IOERR_CLOSE },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_DIR_CLOSE, code: SQLITE_IOERR_DIR_CLOSE },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_SHMOPEN, code: SQLITE_IOERR_SHMOPEN },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_SHMSIZE, code: SQLITE_IOERR_SHMSIZE },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_SHMLOCK, code: SQLITE_IOERR_SHMLOCK },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_SHMMAP, code: SQLITE_IOERR_SHMMAP },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_SEEK, code: SQLITE_IOERR_SEEK },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_DELETE_NOENT, code: SQLITE_IOERR_DELETE_NOENT },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_MMAP, code: SQLITE_IOERR_MMAP },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_GETTEMPPATH, code: SQLITE_IOERR_GETTEMPPATH },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_CONVPATH, code: SQLITE_IOERR_CONVPATH },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_VNODE, code: SQLITE_IOERR_VNODE },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_AUTH, code: SQLITE_IOERR_AUTH },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_BEGIN_ATOMIC, code: SQLITE_IOERR_BEGIN_ATOMIC },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_COMMIT_ATOMIC, code: SQLITE_IOERR_COMMIT_ATOMIC },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_ROLLBACK_ATOMIC, code: SQLITE_IOERR_ROLLBACK_ATOMIC },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_DATA, code: SQLITE_IOERR_DATA },
    ExtendedRow { id: ExtendedRC::SQLITE_IOERR_CORRUPTFS, code: SQLITE_IOERR_CORRUPTFS },
    ExtendedRow { id: ExtendedRC::SQLITE_LOCKED_SHAREDCACHE, code: SQLITE_LOCKED_SHAREDCACHE },
    ExtendedRow { id: ExtendedRC::SQLITE_LOCKED_VTAB, code: SQLITE_LOCKED_VTAB },
    ExtendedRow { id: ExtendedRC::SQLITE_BUSY_RECOVERY, code: SQLITE_BUSY_RECOVERY },
    ExtendedRow { id: ExtendedRC::SQLITE_BUSY_SNAPSHOT, code: SQLITE_BUSY_SNAPSHOT },
    ExtendedRow { id: ExtendedRC::SQLITE_BUSY_TIMEOUT, code: SQLITE_BUSY_TIMEOUT },
    ExtendedRow { id: ExtendedRC::SQLITE_CANTOPEN_NOTEMPDIR, code: SQLITE_CANTOPEN_NOTEMPDIR },
    ExtendedRow { id: ExtendedRC::SQLITE_CANTOPEN_ISDIR, code: SQLITE_CANTOPEN_ISDIR },
    ExtendedRow { id: ExtendedRC::SQLITE_CANTOPEN_FULLPATH, code: SQLITE_CANTOPEN_FULLPATH },
    ExtendedRow { id: ExtendedRC::SQLITE_CANTOPEN_CONVPATH, code: SQLITE_CANTOPEN_CONVPATH },
    ExtendedRow { id: ExtendedRC::SQLITE_CANTOPEN_DIRTYWAL, code: SQLITE_CANTOPEN_DIRTYWAL },
    ExtendedRow { id: ExtendedRC::SQLITE_CANTOPEN_SYMLINK, code: SQLITE_CANTOPEN_SYMLINK },
    ExtendedRow { id: ExtendedRC::SQLITE_CORRUPT_VTAB, code: SQLITE_CORRUPT_VTAB },
    ExtendedRow { id: ExtendedRC::SQLITE_CORRUPT_SEQUENCE, code: SQLITE_CORRUPT_SEQUENCE },
    ExtendedRow { id: ExtendedRC::SQLITE_CORRUPT_INDEX, code: SQLITE_CORRUPT_INDEX },
    ExtendedRow { id: ExtendedRC::SQLITE_READONLY_RECOVERY, code: SQLITE_READONLY_RECOVERY },
    ExtendedRow { id: ExtendedRC::SQLITE_READONLY_CANTLOCK, code: SQLITE_READONLY_CANTLOCK },
    ExtendedRow { id: ExtendedRC::SQLITE_READONLY_ROLLBACK, code: SQLITE_READONLY_ROLLBACK },
    ExtendedRow { id: ExtendedRC::SQLITE_READONLY_DBMOVED, code: SQLITE_READONLY_DBMOVED },
    ExtendedRow { id: ExtendedRC::SQLITE_READONLY_CANTINIT, code: SQLITE_READONLY_CANTINIT },
    ExtendedRow { id: ExtendedRC::SQLITE_READONLY_DIRECTORY, code: SQLITE_READONLY_DIRECTORY },
    ExtendedRow { id: ExtendedRC::SQLITE_ABORT_ROLLBACK, code: SQLITE_ABORT_ROLLBACK },
    ExtendedRow { id: ExtendedRC::SQLITE_CONSTRAINT_CHECK, code: SQLITE_CONSTRAINT_CHECK },
    ExtendedRow { id: ExtendedRC::SQLITE_CONSTRAINT_COMMITHOOK, code: SQLITE_CONSTRAINT_COMMITHOOK },
    ExtendedRow { id: ExtendedRC::SQLITE_CONSTRAINT_FOREIGNKEY, code: SQLITE_CONSTRAINT_FOREIGNKEY },
    ExtendedRow { id: ExtendedRC::SQLITE_CONSTRAINT_FUNCTION, code: SQLITE_CONSTRAINT_FUNCTION },
    ExtendedRow { id: ExtendedRC::SQLITE_CONSTRAINT_NOTNULL, code: SQLITE_CONSTRAINT_NOTNULL },
    ExtendedRow { id: ExtendedRC::SQLITE_CONSTRAINT_PRIMARYKEY, code: SQLITE_CONSTRAINT_PRIMARYKEY },
    ExtendedRow { id: ExtendedRC::SQLITE_CONSTRAINT_TRIGGER, code: SQLITE_CONSTRAINT_TRIGGER },
    ExtendedRow { id: ExtendedRC::SQLITE_CONSTRAINT_UNIQUE, code: SQLITE_CONSTRAINT_UNIQUE },
    ExtendedRow { id: ExtendedRC::SQLITE_CONSTRAINT_VTAB, code: SQLITE_CONSTRAINT_VTAB },
    ExtendedRow { id: ExtendedRC::SQLITE_CONSTRAINT_ROWID, code: SQLITE_CONSTRAINT_ROWID },
    ExtendedRow { id: ExtendedRC::SQLITE_CONSTRAINT_PINNED, code: SQLITE_CONSTRAINT_PINNED },
    ExtendedRow { id: ExtendedRC::SQLITE_CONSTRAINT_DATATYPE, code: SQLITE_CONSTRAINT_DATATYPE },
    ExtendedRow { id: ExtendedRC::SQLITE_NOTICE_RECOVER_WAL, code: SQLITE_NOTICE_RECOVER_WAL },
    ExtendedRow { id: ExtendedRC::SQLITE_NOTICE_RECOVER_ROLLBACK, code: SQLITE_NOTICE_RECOVER_ROLLBACK },
    ExtendedRow { id: ExtendedRC::SQLITE_WARNING_AUTOINDEX, code: SQLITE_WARNING_AUTOINDEX },
    ExtendedRow { id: ExtendedRC::SQLITE_AUTH_USER, code: SQLITE_AUTH_USER },
    ExtendedRow { id: ExtendedRC::SQLITE_OK_LOAD_PERMANENTLY, code: SQLITE_OK_LOAD_PERMANENTLY },
];

// The least significant byte of an extended result code is always the
// primary result code.
fn is_extended(code: c_int) -> bool {
    code.to_le_bytes()[1] > 0
}

fn get_primary(code: c_int) -> c_int {
    code.to_le_bytes()[0] as c_int
}

fn get_primary_row(primary_code: c_int) -> PrimaryRow {
    match PRIMARYTBL.iter().find(|row| row.code == primary_code) {
        Some(row) => row.clone(),
        None => panic!("Could not find enum for SQLite primary result code {}. The primary code set is closed; this conversion should never fail.", primary_code)
    }
}

pub fn get_primary_row_by_enum(e: &PrimaryRC) -> PrimaryRow {
    match PRIMARYTBL.iter().find(|row| &row.id == e) {
        Some(row) => row.clone(),
        None => panic!("Could not find primary row via enum {:?}. Every enum variant has a table row; this lookup should never fail.", e)
    }
}

// `None` for codes this crate does not know about (a newer engine can add
// extended codes; they still carry a valid primary code in the low byte).
fn get_extended_row(extended_code: c_int) -> Option<ExtendedRow> {
    EXTENDEDTBL.iter().find(|row| row.code == extended_code).cloned()
}

/// Splits a raw result code into its primary row and, when present and
/// known, its extended row.
pub fn get_rows(code: c_int) -> (PrimaryRow, Option<ExtendedRow>) {
    let primary_code = get_primary(code);
    let primary_row = get_primary_row(primary_code);

    let mut extended_row = None;
    if is_extended(code) {
        extended_row = get_extended_row(code);
    }

    (primary_row, extended_row)
}
