use crate::error::AppError;
use crate::models::fs_types::ImageFile;
use std::path::Path;

const IMAGE_EXTENSIONS: &[&str] = &["tif", "tiff", "jpg", "jpeg", "png", "dng"];

pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Parse the trailing `_NN` frame number from a file's stem.
pub fn frame_number(path: &Path) -> Option<i64> {
    let stem = path.file_stem()?.to_str()?;
    let bytes = stem.as_bytes();
    let n = bytes.len();
    if n < 3 || bytes[n - 3] != b'_' || !bytes[n - 2].is_ascii_digit() || !bytes[n - 1].is_ascii_digit() {
        return None;
    }
    stem[n - 2..].parse().ok()
}

/// List the scans in a folder, sorted ascending by frame number.
///
/// Only image files whose stem ends in `_NN` qualify; anything else in the
/// folder (the JSON export itself, sidecars) is skipped.
pub fn discover_images(folder: &Path) -> Result<Vec<ImageFile>, AppError> {
    let mut images = Vec::new();

    for entry in std::fs::read_dir(folder)? {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let ft = match entry.file_type() {
            Ok(ft) => ft,
            Err(_) => continue,
        };

        if !ft.is_file() {
            continue;
        }

        let path = entry.path();
        if !is_image_file(&path) {
            continue;
        }

        if let Some(number) = frame_number(&path) {
            images.push(ImageFile { number, path });
        }
    }

    images.sort_by(|a, b| {
        a.number
            .cmp(&b.number)
            .then_with(|| a.path.file_name().cmp(&b.path.file_name()))
    });

    Ok(images)
}
