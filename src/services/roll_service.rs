use crate::error::AppError;
use crate::models::roll_types::RollMetadata;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read and parse an Exif Notes JSON export.
pub fn load_roll(path: &Path) -> Result<RollMetadata, AppError> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AppError::InputNotFound {
                path: path.display().to_string(),
            }
        } else {
            AppError::Io(e)
        }
    })?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| AppError::InputMalformed {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
