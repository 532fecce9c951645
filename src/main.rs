use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Generates exiftool commands given a json export of the Exif Notes app.
///
/// Images to modify are assumed to be in the same folder as the json file.
/// Their names should end in _NN before the extension, where NN is the frame
/// number matching the count field in the export.
#[derive(Parser, Debug)]
#[clap(name = "film-tagger", version)]
struct Args {
    /// The json file to process, stored in the same folder as the scans
    #[clap(value_name = "PATH")]
    path: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match film_tagger::run(&args.path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Diagnostics share stdout with the command lines but are
            // #-prefixed so redirected output stays replayable.
            println!("# {}", e);
            ExitCode::FAILURE
        }
    }
}
