use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use advisor_core::{SelectedFile, MAX_UPLOAD_BYTES, PDF_MEDIA_TYPE};
use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileError {
    #[error("cannot read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("{0} is not a file")]
    NotAFile(String),
}

/// Reads a local file into a selection candidate.
///
/// The media type is declared from the extension, the way a browser file
/// picker would; validation is left to the ingestion controller.
///
/// Files over [`MAX_UPLOAD_BYTES`] are not read at all: the candidate carries
/// the on-disk size and no content, which the controller rejects.
pub fn load_candidate(path: &Path) -> Result<SelectedFile, FileError> {
    let read_error = |source| FileError::Read {
        path: path.display().to_string(),
        source,
    };
    let display = path.display().to_string();
    let metadata = fs::metadata(path).map_err(read_error)?;
    if !metadata.is_file() {
        return Err(FileError::NotAFile(display));
    }
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or(display);
    let media_type = media_type_for(path);

    if metadata.len() > MAX_UPLOAD_BYTES {
        return Ok(SelectedFile {
            name,
            media_type: media_type.to_owned(),
            size_bytes: metadata.len(),
            content: Bytes::new(),
        });
    }

    // The file may grow after the metadata check; one byte past the limit is
    // enough for the controller to reject it.
    let mut content = Vec::with_capacity(metadata.len() as usize);
    File::open(path)
        .and_then(|file| file.take(MAX_UPLOAD_BYTES + 1).read_to_end(&mut content))
        .map_err(read_error)?;

    Ok(SelectedFile::new(name, media_type, Bytes::from(content)))
}

fn media_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("pdf") => PDF_MEDIA_TYPE,
        Some("txt") | Some("md") => "text/plain",
        Some("csv") => "text/csv",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}
