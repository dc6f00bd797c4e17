//! Image validation
//!
//! Uploads are validated before the OCR capability ever sees them, so a
//! garbage upload surfaces as a sentinel decision instead of a recognizer
//! crash.

use crate::error::{Error, Result};
use std::path::Path;

/// Supported image extensions
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "bmp"];

/// Check if a path is a supported image file
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Validate an image file exists, looks like an image, and decodes.
pub fn validate_image(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }

    if !path.is_file() {
        return Err(Error::InvalidImageFormat(format!(
            "{} is not a file",
            path.display()
        )));
    }

    if !is_supported_image(path) {
        return Err(Error::InvalidImageFormat(format!(
            "Unsupported image format: {}",
            path.display()
        )));
    }

    // Try to open the image to validate it
    image::open(path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_image(&PathBuf::from("car.jpg")));
        assert!(is_supported_image(&PathBuf::from("CAR.PNG")));
        assert!(!is_supported_image(&PathBuf::from("car.txt")));
        assert!(!is_supported_image(&PathBuf::from("car")));
    }

    #[test]
    fn test_missing_file() {
        let result = validate_image(&PathBuf::from("/nonexistent/car.jpg"));
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }

    #[test]
    fn test_undecodable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.jpg");
        std::fs::write(&path, b"not really a jpeg").unwrap();
        let result = validate_image(&path);
        assert!(matches!(result, Err(Error::Image(_))));
    }
}
