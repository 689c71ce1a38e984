use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FileReadError {
    #[error("failed to read file: {0}")]
    Read(String),
    #[error("file produced an empty base64 payload")]
    MissingPayload,
    #[error("file was not encoded as a base64 data url")]
    Malformed,
}

/// A locally selected file, read fully into memory and base64 encoded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePayload {
    pub file_name: String,
    pub mime_type: String,
    pub base64: String,
}

impl FilePayload {
    pub fn from_bytes(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: &[u8],
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            base64: STANDARD.encode(bytes),
        }
    }

    pub fn from_data_url(
        file_name: impl Into<String>,
        data_url: &str,
    ) -> Result<Self, FileReadError> {
        let (mime_type, base64) = split_data_url(data_url)?;
        Ok(Self {
            file_name: file_name.into(),
            mime_type: mime_type.to_string(),
            base64: base64.to_string(),
        })
    }

    /// Inline url usable as `src` for previews.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64)
    }
}

/// Splits `data:<mime>;base64,<payload>` into mime type and payload.
pub fn split_data_url(data_url: &str) -> Result<(&str, &str), FileReadError> {
    let rest = data_url
        .strip_prefix("data:")
        .ok_or(FileReadError::Malformed)?;
    let (header, payload) = rest.split_once(',').ok_or(FileReadError::Malformed)?;
    let mime_type = header
        .strip_suffix(";base64")
        .ok_or(FileReadError::Malformed)?;
    if payload.is_empty() {
        return Err(FileReadError::MissingPayload);
    }
    let mime_type = if mime_type.is_empty() {
        "application/octet-stream"
    } else {
        mime_type
    };
    Ok((mime_type, payload))
}

/// Reads a browser file into a [`FilePayload`].
#[cfg(feature = "hydrate")]
pub async fn read_file_payload(file: web_sys::File) -> Result<FilePayload, FileReadError> {
    let file_name = file.name();
    let file = gloo::file::File::from(file);
    let data_url = gloo::file::futures::read_as_data_url(&file)
        .await
        .map_err(|e| FileReadError::Read(e.to_string()))?;
    FilePayload::from_data_url(file_name, &data_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_mime_and_payload() {
        let (mime, payload) = split_data_url("data:image/png;base64,iVBORw0KGgo=").unwrap();
        assert_eq!(mime, "image/png");
        assert_eq!(payload, "iVBORw0KGgo=");
    }

    #[test]
    fn missing_mime_falls_back_to_octet_stream() {
        let (mime, _) = split_data_url("data:;base64,AAAA").unwrap();
        assert_eq!(mime, "application/octet-stream");
    }

    #[test]
    fn empty_payload_is_rejected() {
        assert_eq!(
            split_data_url("data:video/mp4;base64,"),
            Err(FileReadError::MissingPayload)
        );
    }

    #[test]
    fn non_base64_urls_are_rejected() {
        assert_eq!(
            split_data_url("data:text/plain,hello"),
            Err(FileReadError::Malformed)
        );
        assert_eq!(
            split_data_url("https://example.com/a.png"),
            Err(FileReadError::Malformed)
        );
        assert_eq!(split_data_url("data:image/png;base64"), Err(FileReadError::Malformed));
    }

    #[test]
    fn data_url_is_readable_again() {
        let payload = FilePayload::from_bytes("box.jpg", "image/jpeg", b"\xff\xd8\xff\xe0");
        let parsed = FilePayload::from_data_url("box.jpg", &payload.data_url()).unwrap();
        assert_eq!(parsed, payload);
    }
}
