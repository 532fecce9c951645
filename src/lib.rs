pub mod error;
pub mod models;
pub mod services;

use error::AppError;
use services::frame_resolver::FrameResolver;
use services::{exiftool, fs_service, roll_service, tag_builder};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Process one roll: read the JSON export, find the scans next to it, and
/// print one exiftool invocation per image.
pub fn run(path: &Path) -> Result<(), AppError> {
    let stdout = std::io::stdout();
    run_with_output(path, &mut stdout.lock())
}

/// Same as [`run`], writing to the given sink.
///
/// Resolution streams: commands already written stay valid even when a later
/// image turns out to have no matching frame note.
pub fn run_with_output(path: &Path, out: &mut impl Write) -> Result<(), AppError> {
    let roll = roll_service::load_roll(path)?;
    writeln!(
        out,
        "# Finished reading '{}', found {} frame notes.",
        path.display(),
        roll.frames.len()
    )?;

    let folder = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    // Canonicalized so the emitted commands carry absolute image paths.
    let folder = std::fs::canonicalize(&folder)?;

    let images = fs_service::discover_images(&folder)?;
    writeln!(out, "# Found {} images in the same folder.", images.len())?;

    let common = tag_builder::CommonFields::from_roll(&roll);
    let mut resolver = FrameResolver::new(&roll.frames);

    for image in &images {
        let assignment = resolver.resolve(image)?;
        let tags = tag_builder::build_tags(&common, &assignment.record, assignment.offset);
        writeln!(out, "{}", exiftool::format_invocation(&tags, &assignment.image.path))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write as _;
    use tempfile::TempDir;

    fn roll_fixture() -> (TempDir, PathBuf) {
        let folder = TempDir::new().unwrap();
        let json_path = folder.path().join("roll_01.json");
        let mut json = File::create(&json_path).unwrap();
        json.write_all(
            br#"{
                "camera": {"make": "Nikon", "model": "FM2"},
                "iso": 400,
                "filmStock": {"make": "Kodak", "model": "Portra 400"},
                "frames": [
                    {"count": 1, "date": "2020-01-01T10:00", "note": "sunny"}
                ]
            }"#,
        )
        .unwrap();
        for name in ["r001_01.tif", "r001_02.tif"] {
            File::create(folder.path().join(name)).unwrap();
        }
        (folder, json_path)
    }

    #[test]
    fn writes_summaries_then_one_invocation_per_image() {
        let (folder, json_path) = roll_fixture();
        let canonical = std::fs::canonicalize(folder.path()).unwrap();

        let mut output = Vec::new();
        run_with_output(&json_path, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            format!(
                "# Finished reading '{}', found 1 frame notes.",
                json_path.display()
            )
        );
        assert_eq!(lines[1], "# Found 2 images in the same folder.");

        // Exact match: timestamp as logged, note in the comment.
        assert_eq!(
            lines[2],
            format!(
                "exiftool -m -Make=\"Nikon\" -Model=\"FM2\" -ISO=\"400\" \
                 -DateTime=\"2020-01-01 10:00\" -DateTimeOriginal=\"2020-01-01 10:00\" \
                 -UserComment=\"Kodak Portra 400, sunny\" -ImageDescription=\"Kodak Portra 400, sunny\" {}",
                canonical.join("r001_01.tif").display()
            )
        );
        // Carried forward: timestamp nudged a minute, note dropped.
        assert_eq!(
            lines[3],
            format!(
                "exiftool -m -Make=\"Nikon\" -Model=\"FM2\" -ISO=\"400\" \
                 -DateTime=\"2020-01-01 10:01\" -DateTimeOriginal=\"2020-01-01 10:01\" \
                 -UserComment=\"Kodak Portra 400\" -ImageDescription=\"Kodak Portra 400\" {}",
                canonical.join("r001_02.tif").display()
            )
        );
    }

    #[test]
    fn repeated_runs_produce_identical_output() {
        let (_folder, json_path) = roll_fixture();

        let mut first = Vec::new();
        run_with_output(&json_path, &mut first).unwrap();
        let mut second = Vec::new();
        run_with_output(&json_path, &mut second).unwrap();

        assert!(!first.is_empty());
        assert_eq!(first, second);
    }
}
