use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Error: '{path}' not found")]
    InputNotFound { path: String },

    #[error("Error reading '{path}', please check the formatting or re-export from Exif Notes: {message}")]
    InputMalformed { path: String, message: String },

    #[error("Error: Image {image} doesn't have a corresponding json entry!")]
    UnresolvedFrame { image: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
