use std::env::var;

// Note: Actual file has `lib` and `.a` prepended/appended (e.g. `libsqlite3gluec.a`).
static FILE_GLUE: &str = "src/glue.c";
static FILE_GLUE_COMPILED: &str = "sqlite3gluec";

/*
Compiles the C glue file against the SQLite amalgamation header.

The amalgamation itself is compiled and linked by `libsqlite3-sys` (feature
`bundled`). Because that crate declares `links = "sqlite3"`, cargo exposes its
build script outputs to ours; `cargo:include=<dir>` becomes the
`DEP_SQLITE3_INCLUDE` env var, pointing at the directory holding `sqlite3.h`.

@see https://doc.rust-lang.org/cargo/reference/build-scripts.html#the-links-manifest-key
*/
fn main() {
    println!("cargo:rerun-if-changed={}", FILE_GLUE);

    let include_dir = var("DEP_SQLITE3_INCLUDE")
        .expect("DEP_SQLITE3_INCLUDE is not set; `libsqlite3-sys` must be a direct dependency");

    let mut cfg = cc::Build::new();
    cfg.file(FILE_GLUE);
    cfg.include(&include_dir);
    // The glue only reads macros/types from sqlite3.h; it calls no SQLite
    // functions, so link order against the amalgamation does not matter.
    cfg.compile(FILE_GLUE_COMPILED);
}
