// src/debug/helpers.rs

//! Temporary file helpers for tests.

use crate::common::FPath;

use std::io::Write;

#[doc(hidden)]
pub use ::tempfile::NamedTempFile;

/// Prefix of every temporary file created by tests, for easier cleanup of
/// files left behind.
pub const STR_TEMPFILE_PREFIX: &str = "tmp-ldp-test-";

/// The path of `ntf` as a `FPath`.
pub fn ntf_fpath(ntf: &NamedTempFile) -> FPath {
    ntf.path().to_string_lossy().into_owned()
}

/// Create a temporary file holding `data`.
///
/// BUG: a `NamedTempFile` held in a `lazy_static` is never dropped so the
///      file is not removed, <https://github.com/Stebalien/tempfile/issues/183>.
pub fn create_temp_file(data: &str) -> NamedTempFile {
    let mut ntf = ::tempfile::Builder::new()
        .prefix(STR_TEMPFILE_PREFIX)
        .tempfile()
        .unwrap_or_else(|err| panic!("tempfile() returned Err {}", err));
    ntf.write_all(data.as_bytes())
        .unwrap_or_else(|err| panic!("write_all() returned Err {}", err));

    ntf
}
