/*
    Minimal library for working with MATLAB channel map files
    The probe record carries the four fields a spike-sorting pipeline expects
    (chanMap, xc, yc, NchanTOT) with the channel numbering rebased to 0
 */
pub mod io_mat;

pub mod io_npy;

#[cfg(test)]
mod test_utils;

use std::path::PathBuf;
use thiserror::Error;


/// Probe geometry loaded from a channel map file.
///
/// One entry per recording channel: `channel_map` holds 0-indexed channel
/// numbers, the coordinate vectors the site positions on the physical probe.
/// The record is read-only once constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct Probe {
    channel_map: Vec<i64>,
    x_coordinates: Vec<f32>,
    y_coordinates: Vec<f32>,
}

impl Probe {
    pub fn new(
        channel_map: Vec<i64>,
        x_coordinates: Vec<f32>,
        y_coordinates: Vec<f32>,
    ) -> Probe {
        Probe {
            channel_map,
            x_coordinates,
            y_coordinates,
        }
    }

    /// 0-indexed channel numbers, one per recording channel
    pub fn channel_map(&self) -> &[i64] {
        &self.channel_map
    }

    /// site x positions on the probe
    pub fn x_coordinates(&self) -> &[f32] {
        &self.x_coordinates
    }

    /// site y positions on the probe
    pub fn y_coordinates(&self) -> &[f32] {
        &self.y_coordinates
    }

    /// number of recording channels in the map
    pub fn total_channel_count(&self) -> usize {
        self.channel_map.len()
    }
}

/// Errors raised while importing or exporting a channel map.
#[derive(Debug, Error)]
pub enum ChanmapError {
    /// the channel map file could not be opened
    #[error("failed to open channel map file: {0}")]
    Open(#[source] std::io::Error),
    /// the input is not a readable level 5 MAT-file
    #[error("failed to parse MAT-file: {0}")]
    Format(#[source] matfile::Error),
    /// the container parsed but a required array is absent
    #[error("MAT-file has no array named '{0}'")]
    MissingField(&'static str),
    /// an output array file could not be created or written
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: ndarray_npy::WriteNpyError,
    },
}
