use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use matfile::{MatFile, NumericData};
use num_traits::ToPrimitive;
use crate::{ChanmapError, Probe};

//* MAT-file arrays a channel map must provide *//
/// 1-indexed channel numbers, usually a double column vector
const CHAN_MAP: &str = "chanMap";
/// site x positions
const X_COORDS: &str = "xcoords";
/// site y positions
const Y_COORDS: &str = "ycoords";


/// read a probe channel map from a MATLAB MAT-file on disk
pub fn read_mat_chanmap(file: impl AsRef<Path>) -> Result<Probe, ChanmapError> {
    let f = File::open(file.as_ref()).map_err(ChanmapError::Open)?;
    parse_chanmap(BufReader::new(f))
}

/// parse a probe channel map from an open MAT-file reader
pub fn parse_chanmap(reader: impl Read) -> Result<Probe, ChanmapError> {
    let mat = MatFile::parse(reader).map_err(ChanmapError::Format)?;
    let chan_map = require_array(&mat, CHAN_MAP)?;
    let xcoords = require_array(&mat, X_COORDS)?;
    let ycoords = require_array(&mat, Y_COORDS)?;

    // rebase the 1-indexed MATLAB channel numbers to 0
    let channel_map: Vec<i64> = chan_map.iter().map(|&c| c as i64 - 1).collect();
    let x_coordinates: Vec<f32> = xcoords.iter().map(|&x| x as f32).collect();
    let y_coordinates: Vec<f32> = ycoords.iter().map(|&y| y as f32).collect();

    log::debug!("channel map holds {} channels", channel_map.len());
    Ok(Probe::new(channel_map, x_coordinates, y_coordinates))
}

/// pull a named array out of the container, squeezed to one flat dimension
fn require_array(mat: &MatFile, name: &'static str) -> Result<Vec<f64>, ChanmapError> {
    let array = mat
        .find_by_name(name)
        .ok_or(ChanmapError::MissingField(name))?;
    Ok(squeeze_to_f64(array.data()))
}

/// flatten any numeric storage class to f64, keeping storage order
fn squeeze_to_f64(data: &NumericData) -> Vec<f64> {
    match data {
        NumericData::Double { real, .. } => real.clone(),
        NumericData::Single { real, .. } => widen(real),
        NumericData::Int8 { real, .. } => widen(real),
        NumericData::UInt8 { real, .. } => widen(real),
        NumericData::Int16 { real, .. } => widen(real),
        NumericData::UInt16 { real, .. } => widen(real),
        NumericData::Int32 { real, .. } => widen(real),
        NumericData::UInt32 { real, .. } => widen(real),
        NumericData::Int64 { real, .. } => widen(real),
        NumericData::UInt64 { real, .. } => widen(real),
    }
}

fn widen<T: ToPrimitive>(values: &[T]) -> Vec<f64> {
    values
        .iter()
        .map(|v| v.to_f64().unwrap_or(f64::NAN))
        .collect()
}
