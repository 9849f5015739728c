use crate::{Error, Result};
use base64::{Engine, engine::general_purpose::STANDARD};
use std::path::Path;
use tracing::debug;

pub const DEFAULT_FILE_NAME: &str = "image.jpg";
pub const DEFAULT_CONTENT_TYPE: &str = "image/jpeg";

/// Image bytes plus the metadata needed to upload them.
///
/// The bytes are owned by the source; handing it to
/// [`PredictionService::predict`](crate::prediction::PredictionService::predict)
/// moves them into the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    bytes: Vec<u8>,
    content_type: String,
    name: Option<String>,
}

impl ImageSource {
    pub fn from_bytes(
        bytes: impl Into<Vec<u8>>,
        content_type: impl Into<String>,
        name: Option<String>,
    ) -> Self {
        Self {
            bytes: bytes.into(),
            content_type: content_type.into(),
            name,
        }
    }

    /// Reads a local file, inferring the MIME type from its extension.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading image from: {}", path.display());

        let bytes = tokio::fs::read(path).await?;
        let content_type = content_type_for(path);

        Ok(Self {
            bytes,
            content_type: content_type.to_string(),
            name: Some(path.to_string_lossy().into_owned()),
        })
    }

    /// Decodes a `data:<mime>;base64,<payload>` URI.
    pub fn from_data_uri(uri: &str) -> Result<Self> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| Error::invalid_image("data URI must start with 'data:'"))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| Error::invalid_image("data URI has no payload"))?;
        let content_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| Error::invalid_image("only base64 data URIs are supported"))?;

        let bytes = STANDARD
            .decode(payload.trim())
            .map_err(|e| Error::invalid_image(format!("invalid base64 payload: {}", e)))?;

        let content_type = if content_type.is_empty() {
            DEFAULT_CONTENT_TYPE
        } else {
            content_type
        };

        Ok(Self::from_bytes(bytes, content_type, None))
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }

    /// Last path segment of the name, or [`DEFAULT_FILE_NAME`].
    pub fn file_name(&self) -> String {
        self.name
            .as_deref()
            .and_then(|name| name.rsplit(['/', '\\']).next())
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .unwrap_or(DEFAULT_FILE_NAME)
            .to_string()
    }

    pub fn into_parts(self) -> (Vec<u8>, String) {
        (self.bytes, self.content_type)
    }
}

fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("heic") => "image/heic",
        _ => DEFAULT_CONTENT_TYPE,
    }
}
