use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::AppError;

/// Build an in-memory deflate archive from `(entry_name, payload)` pairs.
/// Entries with an empty payload are skipped. Returns `None` when nothing
/// was written, so callers can distinguish "archive of zero resumes" from
/// a valid download.
pub fn build_zip(
    entries: impl IntoIterator<Item = (String, Vec<u8>)>,
) -> Result<Option<Vec<u8>>, AppError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut written = 0usize;
    for (name, data) in entries {
        if data.is_empty() {
            continue;
        }
        writer
            .start_file(&name, options)
            .map_err(|e| AppError::Internal(format!("Failed to add archive entry {name}: {e}")))?;
        writer
            .write_all(&data)
            .map_err(|e| AppError::Internal(format!("Failed to write archive entry {name}: {e}")))?;
        written += 1;
    }

    if written == 0 {
        return Ok(None);
    }

    let cursor = writer
        .finish()
        .map_err(|e| AppError::Internal(format!("Failed to finalize archive: {e}")))?;
    Ok(Some(cursor.into_inner()))
}
