use base64::{engine::general_purpose::STANDARD, Engine as _};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageError {
    #[error("Image is empty")]
    Empty,

    #[error("File too large: {actual_bytes} bytes (max {max_bytes})")]
    FileTooLarge { max_bytes: u64, actual_bytes: u64 },

    #[error("Unsupported image type: {0}")]
    InvalidMimeType(String),
}

/// What the section image picker accepts. Accepted images are inlined
/// into the page as `data:` URIs, there is no upload endpoint.
#[derive(Debug, Clone)]
pub struct ImagePolicy {
    pub max_file_size_bytes: u64,
    pub allowed_mime_types: &'static [&'static str],
}

impl Default for ImagePolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: Self::DEFAULT_MAX_FILE_SIZE_BYTES,
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
        }
    }
}

impl ImagePolicy {
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024; // 5MB
    pub const DEFAULT_ALLOWED_MIME_TYPES: &'static [&'static str] = &[
        "image/jpeg",
        "image/png",
        "image/webp",
        "image/gif",
        "image/svg+xml",
    ];

    pub fn new(max_file_size_bytes: u64) -> Self {
        Self {
            max_file_size_bytes,
            ..Self::default()
        }
    }

    pub fn check(&self, mime_type: &str, size_bytes: u64) -> Result<(), ImageError> {
        if size_bytes == 0 {
            return Err(ImageError::Empty);
        }

        let mime = mime_type.trim().to_ascii_lowercase();
        if !self.allowed_mime_types.contains(&mime.as_str()) {
            return Err(ImageError::InvalidMimeType(mime_type.to_string()));
        }

        if size_bytes > self.max_file_size_bytes {
            return Err(ImageError::FileTooLarge {
                max_bytes: self.max_file_size_bytes,
                actual_bytes: size_bytes,
            });
        }

        Ok(())
    }

    /// Checks the image and encodes it as `data:<mime>;base64,<payload>`.
    pub fn to_data_uri(&self, mime_type: &str, bytes: &[u8]) -> Result<String, ImageError> {
        self.check(mime_type, bytes.len() as u64)?;

        let mime = mime_type.trim().to_ascii_lowercase();
        Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
    }
}
