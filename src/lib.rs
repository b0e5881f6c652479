//! Low-level glue between Rust and the bundled SQLite C API.
//!
//! The centrepiece is the pair of destructor sentinels
//! ([`cffi::SQLITE_TRANSIENT`], [`cffi::SQLITE_STATIC`]): preprocessor
//! macros in C, so binding generators cannot surface them, and intentionally
//! invalid pointer values, so a memory-safe language needs a deliberate
//! escape hatch to represent them. A C compilation unit exports
//! `sqlite3_transient()` for generated bindings; the Rust accessors produce
//! the identical bit patterns natively.
//!
//! Around that sits the plumbing a binding layer builds on: result-code
//! mapping ([`errmap`]), `Result`-shaped status checks ([`err`]), and the
//! process-global engine log hook ([`config`]). No safe connection or
//! statement wrapper lives here; that belongs to the consumer crate.

pub mod cffi;
pub mod config;
pub mod err;
pub mod errmap;
pub mod fns;

#[cfg(test)]
mod test_errmap;

/// The linked SQLite version as a `(major, minor, patch)` tuple.
pub fn version() -> (i32, i32, i32) {
    let version = unsafe { cffi::sqlite3_libversion_number() };

    let major = (version / 1_000_000) % 1000;
    let minor = (version / 1_000) % 1000;
    let patch = version % 1000;
    (major, minor, patch)
}

/// Whether SQLite was compiled with `SQLITE_THREADSAFE`.
///
/// Note: this only checks the compile-time flag, not start-time or run-time
/// overrides.
pub fn is_threadsafe() -> bool {
    unsafe { cffi::sqlite3_threadsafe() != 0 }
}
