//! Process-global SQLite configuration.
//!
//! @see https://www.sqlite.org/c3ref/config.html
//! - `sqlite3_config` makes global changes to the library and must run
//!   before `sqlite3_initialize` (i.e. before the first connection opens).
//!   It is not thread safe on its own; the `Once` guard serialises it.

use std::ffi::CStr;
use std::os::raw::{c_char, c_int, c_void};
use std::ptr;
use std::sync::Once;

use crate::cffi::{
    // Functions
    sqlite3_config,

    // Constants
    SQLITE_CONFIG_LOG,
};

use crate::err::{
    to_return_status,
    to_return_status_err,
    ReturnStatus,
};

// @see https://doc.rust-lang.org/nomicon/ffi.html#callbacks-from-c-code-to-rust-functions
// The engine may invoke this from any thread that hits an error; it must not
// unwind into C.
extern "C" fn log_cb(_data: *mut c_void, code: c_int, msg_c: *const c_char) {
    let r = to_return_status(code);

    let msg = unsafe { CStr::from_ptr(msg_c).to_string_lossy().into_owned() };

    match r.extended {
        Some(ex) => eprintln!("sqlite[{:?}]: {}", ex.id, msg),
        None => eprintln!("sqlite[{:?}]: {}", r.primary.id, msg),
    }
}

static ONCE_ONLY: Once = Once::new();

/// Installs the engine's error-log callback.
///
/// Returns `Some` with the config result on the first call, `None` on every
/// later call (the callback stays installed for the life of the process).
pub fn set_error_callback() -> Option<Result<ReturnStatus, ReturnStatus>> {
    let mut opt_r = None;

    ONCE_ONLY.call_once(|| {
        // SQLITE_CONFIG_LOG takes (callback, context) varargs.
        let r = unsafe {
            sqlite3_config(
                SQLITE_CONFIG_LOG,
                log_cb as extern "C" fn(*mut c_void, c_int, *const c_char),
                ptr::null_mut::<c_void>(),
            )
        };

        opt_r = Some(to_return_status_err(r));
    });

    opt_r
}
