use std::path::PathBuf;

/// One scanned image on disk, keyed by the two-digit frame number at the end
/// of its file stem (e.g. `r001_05.tif` is frame 5).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub number: i64,
    pub path: PathBuf,
}
