//! File naming and saving for exported images.

use super::types::{ExportError, ExportFormat, ExportedImage};
use chrono::Utc;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Current time as milliseconds since the Unix epoch.
pub fn current_timestamp_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Generate the export file name `<millis>.<ext>`.
pub fn generate_filename(timestamp_millis: i64, format: ExportFormat) -> String {
    format!("{}.{}", timestamp_millis, format.extension())
}

/// Ensure the export directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Save an exported image into `directory`.
///
/// Never replaces an existing file: when `<millis>.<ext>` is taken (two exports
/// within the same millisecond), `<millis>-1.<ext>`, `<millis>-2.<ext>`, ... are
/// tried in turn.
///
/// # Returns
/// Path of the file actually written
pub fn save_export(image: &ExportedImage, directory: &Path) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(directory)?;
    let (stem, extension) = split_file_name(&image.file_name);

    let mut attempt = 0u32;
    loop {
        let file_name = if attempt == 0 {
            image.file_name.clone()
        } else {
            match extension {
                Some(ext) => format!("{stem}-{attempt}.{ext}"),
                None => format!("{stem}-{attempt}"),
            }
        };
        let file_path = directory.join(&file_name);

        match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&file_path)
        {
            Ok(mut file) => {
                log::info!(
                    "Saving {} export to: {} ({} bytes)",
                    image.format,
                    file_path.display(),
                    image.bytes.len()
                );
                file.write_all(&image.bytes)?;
                return Ok(file_path);
            }
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                log::debug!("{} already exists, trying next name", file_path.display());
                attempt += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }
}

fn split_file_name(file_name: &str) -> (&str, Option<&str>) {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (file_name, None),
    }
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
