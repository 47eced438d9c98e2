//! Photo selection
//!
//! Choosing a binary image and getting something displayable for it is kept
//! apart from uploading it. The editor only ever sees a [`SelectedPhoto`].

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// An image chosen by the operator, held in memory until submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedPhoto {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// What the page shows for a selected photo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoPreview {
    pub file_name: String,
    pub mime_type: String,
    pub size_label: String,
}

impl SelectedPhoto {
    /// Obtain the display handle for this photo
    pub fn preview(&self) -> PhotoPreview {
        PhotoPreview {
            file_name: self.file_name.clone(),
            mime_type: self.mime_type.clone(),
            size_label: format_size(self.bytes.len()),
        }
    }
}

/// Capability for selecting a binary image resource
#[cfg_attr(test, mockall::automock)]
pub trait PhotoSource: Send + Sync {
    /// Select the image found at `location`
    fn select(&self, location: &str) -> Result<SelectedPhoto>;
}

/// Reads photos from the local filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct FsPhotoSource;

impl PhotoSource for FsPhotoSource {
    fn select(&self, location: &str) -> Result<SelectedPhoto> {
        let location = location.trim();
        if location.is_empty() {
            bail!("No file chosen");
        }

        let path = Path::new(location);
        let Some(mime_type) = image_mime_type(path) else {
            bail!("Not an image: {location}");
        };
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .with_context(|| format!("No file name in {location}"))?;
        let bytes = fs::read(path).with_context(|| format!("Failed to read {location}"))?;

        Ok(SelectedPhoto {
            file_name,
            mime_type: mime_type.to_string(),
            bytes,
        })
    }
}

/// Map an image file extension to its MIME type
fn image_mime_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "svg" => Some("image/svg+xml"),
        "avif" => Some("image/avif"),
        _ => None,
    }
}

fn format_size(bytes: usize) -> String {
    const KIB: f64 = 1024.0;
    let size = bytes as f64;
    if size < KIB {
        format!("{bytes} B")
    } else if size < KIB * KIB {
        format!("{:.1} KiB", size / KIB)
    } else {
        format!("{:.1} MiB", size / (KIB * KIB))
    }
}
