use serde::{Deserialize, Serialize};

/// Metadata for an image served from the public asset path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: String,
    /// Relative to the public asset path.
    pub filename: String,
    pub alt_text: String,
}

impl GalleryImage {
    pub fn new(
        id: impl Into<String>,
        filename: impl Into<String>,
        alt_text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            filename: filename.into(),
            alt_text: alt_text.into(),
        }
    }
}

/// Payload for creating a gallery image.
#[derive(Debug, Clone)]
pub struct ImageCreate {
    pub filename: String,
    pub alt_text: String,
}

/// Payload for updating a gallery image.
#[derive(Debug, Clone, Default)]
pub struct ImageUpdate {
    pub filename: Option<String>,
    pub alt_text: Option<String>,
}

impl From<GalleryImage> for ImageCreate {
    fn from(image: GalleryImage) -> Self {
        Self {
            filename: image.filename,
            alt_text: image.alt_text,
        }
    }
}

impl From<GalleryImage> for ImageUpdate {
    fn from(image: GalleryImage) -> Self {
        Self {
            filename: Some(image.filename),
            alt_text: Some(image.alt_text),
        }
    }
}
