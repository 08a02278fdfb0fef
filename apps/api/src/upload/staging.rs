use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use uuid::Uuid;

/// Writes an uploaded document into `dir` under a generated name.
///
/// The name never derives from client input. The returned file is removed
/// when dropped, so every return path of the caller cleans it up.
pub fn stage_upload(dir: &Path, data: &[u8]) -> std::io::Result<NamedTempFile> {
    let prefix = format!("cv-{}-", Uuid::new_v4());
    let mut file = tempfile::Builder::new()
        .prefix(&prefix)
        .tempfile_in(dir)?;
    file.write_all(data)?;
    file.flush()?;
    Ok(file)
}
