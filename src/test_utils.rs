/*
    Hand-rolled MAT v5 writer for the tests: a 128-byte preamble followed by
    uncompressed miMATRIX elements holding real numeric vectors. Covers the
    subset of the format the loader consumes, nothing more.
 */
use bytemuck::cast_slice;

// data element types and array classes used by the fixtures
const MI_INT8: u32 = 1;
const MI_INT16: u32 = 3;
const MI_INT32: u32 = 5;
const MI_UINT32: u32 = 6;
const MI_DOUBLE: u32 = 9;
const MI_MATRIX: u32 = 14;
const MX_DOUBLE_CLASS: u32 = 6;
const MX_INT32_CLASS: u32 = 12;

/// numeric payload for one named MAT array
pub enum MatData {
    Double(Vec<f64>),
    Int32(Vec<i32>),
}

impl MatData {
    fn len(&self) -> usize {
        match self {
            MatData::Double(values) => values.len(),
            MatData::Int32(values) => values.len(),
        }
    }

    /// (array class, storage type, element bytes)
    fn encode(&self) -> (u32, u32, Vec<u8>) {
        match self {
            MatData::Double(values) => (MX_DOUBLE_CLASS, MI_DOUBLE, cast_slice(values).to_vec()),
            // MATLAB compresses integer storage, an i16 payload under the
            // int32 class
            MatData::Int32(values) => {
                let narrowed: Vec<i16> =
                    values.iter().map(|&v| i16::try_from(v).unwrap()).collect();
                (MX_INT32_CLASS, MI_INT16, cast_slice(&narrowed).to_vec())
            }
        }
    }
}

/// a MAT v5 byte stream holding the given arrays as column vectors
pub fn mat_file_bytes(arrays: &[(&str, MatData)]) -> Vec<u8> {
    let mut out = mat_header();
    for (name, data) in arrays {
        write_matrix(&mut out, name, data, [data.len(), 1]);
    }
    out
}

/// the 128-byte preamble: descriptive text, subsystem offset, version, endian tag
pub fn mat_header() -> Vec<u8> {
    let mut out = vec![b' '; 116];
    let text = b"MATLAB 5.0 MAT-file, written by chanmap-lib tests";
    out[..text.len()].copy_from_slice(text);
    out.extend_from_slice(&[0u8; 8]); // no subsystem data
    out.extend_from_slice(&0x0100u16.to_le_bytes());
    out.extend_from_slice(b"IM");
    out
}

/// append one miMATRIX element with the given dimensions
pub fn write_matrix(out: &mut Vec<u8>, name: &str, data: &MatData, dims: [usize; 2]) {
    let (class, storage, payload) = data.encode();

    let mut body = Vec::new();
    // array flags: class in the low byte, no complex/global/logical bits
    write_element(&mut body, MI_UINT32, &[class.to_le_bytes(), [0u8; 4]].concat());
    let dim_bytes: Vec<u8> = dims.iter().flat_map(|&d| (d as i32).to_le_bytes()).collect();
    write_element(&mut body, MI_INT32, &dim_bytes);
    write_element(&mut body, MI_INT8, name.as_bytes());
    write_element(&mut body, storage, &payload);

    out.extend_from_slice(&MI_MATRIX.to_le_bytes());
    out.extend_from_slice(&(body.len() as u32).to_le_bytes());
    out.extend_from_slice(&body);
}

/// append one data element in the long tag format, padded to 8 bytes
fn write_element(out: &mut Vec<u8>, element_type: u32, bytes: &[u8]) {
    out.extend_from_slice(&element_type.to_le_bytes());
    out.extend_from_slice(&(bytes.len() as u32).to_le_bytes());
    out.extend_from_slice(bytes);
    out.resize(out.len() + (8 - bytes.len() % 8) % 8, 0);
}
