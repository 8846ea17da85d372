use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use ndarray::{arr0, aview1};
use ndarray_npy::WriteNpyExt;
use crate::ChanmapError;
use crate::io_mat::read_mat_chanmap;

/// output arrays, one NPY file per record field, in write order
pub const EXPORT_FIELDS: [&str; 4] = ["chanMap", "xc", "yc", "NchanTOT"];


/// convert a MATLAB channel map file to a series of NPY files written beside
/// it, returning the paths in field order.
///
/// Existing output files are overwritten. If a write fails partway the files
/// already written stay in place.
pub fn export_chanmap(mat_file: impl AsRef<Path>) -> Result<Vec<PathBuf>, ChanmapError> {
    let mat_file = mat_file.as_ref();
    let probe = read_mat_chanmap(mat_file)?;
    let dir = mat_file.parent().unwrap_or_else(|| Path::new(""));

    let [chan_map, xc, yc, nchan_tot] = EXPORT_FIELDS;
    let written = vec![
        write_field(dir, chan_map, &aview1(probe.channel_map()))?,
        write_field(dir, xc, &aview1(probe.x_coordinates()))?,
        write_field(dir, yc, &aview1(probe.y_coordinates()))?,
        write_field(dir, nchan_tot, &arr0(probe.total_channel_count() as i64))?,
    ];
    log::info!(
        "exported {} arrays beside {}",
        written.len(),
        mat_file.display()
    );
    Ok(written)
}

/// write one record field as `<name>.npy` in `dir`
fn write_field(dir: &Path, name: &str, array: &impl WriteNpyExt) -> Result<PathBuf, ChanmapError> {
    let path = dir.join(format!("{name}.npy"));
    let file = File::create(&path).map_err(|e| ChanmapError::Write {
        path: path.clone(),
        source: e.into(),
    })?;
    array
        .write_npy(BufWriter::new(file))
        .map_err(|source| ChanmapError::Write {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}
