use std::path::PathBuf;
use clap::Parser;
use chanmap_lib::ChanmapError;
use chanmap_lib::io_npy::export_chanmap;

/// Convert a MATLAB channel map file to a series of NPY files
#[derive(Parser)]
struct Args {
    /// MAT-file containing probe information
    mat_file: PathBuf,
}

fn main() -> Result<(), ChanmapError> {
    env_logger::init();
    let args = Args::parse();
    let written = export_chanmap(&args.mat_file)?;
    for path in &written {
        println!("{}", path.display());
    }
    Ok(())
}
