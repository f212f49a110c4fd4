//! Framed stdio channel: 4-byte native-endian length prefix + raw payload.
//!
//! Both directions use the same framing. Inbound payloads are raw UTF-8
//! command strings; outbound payloads are the JSON envelope produced by
//! [`crate::response::ResponsePool`].

use std::io::{self, Read, Write};

use crate::error::BridgeError;

/// Inbound cap, matching Chrome's documented browser -> host limit. The
/// protocol itself only bounds messages to what a `u32` can express; this is
/// a defensive ceiling, not an observable behavior change for any real host.
pub const MAX_MESSAGE: usize = 64 * 1_048_576;

#[inline]
fn read_exact_u32_len<R: Read>(r: &mut R) -> io::Result<u32> {
    let mut len_buf = [0u8; 4];
    r.read_exact(&mut len_buf)?;
    Ok(u32::from_ne_bytes(len_buf))
}

/// Read one framed message and decode it as UTF-8.
///
/// A failure to read the 4-byte prefix means the host closed the channel:
/// that is reported as [`BridgeError::Disconnected`] and callers must treat
/// it as a normal shutdown signal, never as an error to report back.
pub fn read_frame<R: Read>(reader: &mut R) -> Result<String, BridgeError> {
    let len = match read_exact_u32_len(reader) {
        Ok(len) => len as usize,
        Err(_) => return Err(BridgeError::Disconnected),
    };
    if len > MAX_MESSAGE {
        return Err(BridgeError::Oversized {
            size: len,
            max: MAX_MESSAGE,
        });
    }
    let mut buf = vec![0u8; len];
    reader.read_exact(&mut buf)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Encode a payload into a frame: 4-byte native-endian length + the bytes.
pub fn encode_frame(payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(4 + payload.len());
    out.extend_from_slice(&(payload.len() as u32).to_ne_bytes());
    out.extend_from_slice(payload);
    out
}

/// Write one framed message and flush, so the host receives it promptly.
pub fn write_frame<W: Write>(writer: &mut W, payload: &[u8]) -> io::Result<()> {
    writer.write_all(&encode_frame(payload))?;
    writer.flush()
}
