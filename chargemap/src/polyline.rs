//! Decoder for route paths in the encoded polyline format (precision 5).

use chargemap_types::GeoLatLng;
use thiserror::Error;

const PRECISION: f64 = 1e5;

/// Error decoding an encoded path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolylineError {
    /// A byte outside the `?`..=`~` range.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// Offending character.
        character: char,
        /// Byte offset in the input.
        position: usize,
    },
    /// The input ended in the middle of a value, or a latitude had no longitude.
    #[error("encoded path is truncated at position {0}")]
    Truncated(usize),
    /// A value has more chunks than fit into 64 bits, or the running coordinate overflows.
    #[error("value starting at position {0} is too long")]
    Overflow(usize),
}

/// Decodes an encoded path into its vertices.
pub fn decode(encoded: &str) -> Result<Vec<GeoLatLng>, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut position = 0;
    let mut lat = 0i64;
    let mut lng = 0i64;
    let mut points = Vec::new();

    while position < bytes.len() {
        lat = accumulate(lat, bytes, &mut position)?;
        lng = accumulate(lng, bytes, &mut position)?;
        points.push(GeoLatLng::new(lat as f64 / PRECISION, lng as f64 / PRECISION));
    }

    Ok(points)
}

fn accumulate(total: i64, bytes: &[u8], position: &mut usize) -> Result<i64, PolylineError> {
    let start = *position;
    let delta = next_value(bytes, position)?;
    total
        .checked_add(delta)
        .ok_or(PolylineError::Overflow(start))
}

fn next_value(bytes: &[u8], position: &mut usize) -> Result<i64, PolylineError> {
    let start = *position;
    let mut result = 0i64;
    let mut shift = 0u32;

    loop {
        let Some(&byte) = bytes.get(*position) else {
            return Err(PolylineError::Truncated(*position));
        };
        if !(63..=126).contains(&byte) {
            return Err(PolylineError::InvalidCharacter {
                character: char::from(byte),
                position: *position,
            });
        }
        if shift > 60 {
            return Err(PolylineError::Overflow(start));
        }

        let chunk = i64::from(byte - 63);
        result |= (chunk & 0x1f) << shift;
        shift += 5;
        *position += 1;

        if chunk < 0x20 {
            break;
        }
    }

    Ok(if result & 1 == 1 {
        !(result >> 1)
    } else {
        result >> 1
    })
}
