//! Reading report files in their fixed character encoding.

use std::fs;
use std::path::Path;

use crate::ReportFormat;
use crate::error::{ReportError, Result};

/// Reads `path` and decodes it with the encoding `format` is exported in.
///
/// No byte-order-mark sniffing and no lossy replacement: bytes that are not
/// valid in the declared encoding fail with [`ReportError::Decode`].
pub fn read_report(path: &Path, format: ReportFormat) -> Result<String> {
    let bytes = fs::read(path).map_err(|err| ReportError::io(path, err))?;
    decode_report(&bytes, format).ok_or_else(|| ReportError::Decode {
        path: path.to_path_buf(),
        encoding: format.encoding().name(),
    })
}

/// Decodes raw report bytes, returning `None` on malformed input.
pub fn decode_report(bytes: &[u8], format: ReportFormat) -> Option<String> {
    format
        .encoding()
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
}
