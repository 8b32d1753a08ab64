//! Reading the raw sentence from a line-oriented source

use crate::error::Result;
use crate::processing::sentence::Sentence;
use log::debug;
use std::io::BufRead;

/// Read the first line of `reader` as a [`Sentence`].
///
/// The line terminator (`\n` or `\r\n`) is discarded. A source that is
/// already exhausted yields an empty sentence. Invalid UTF-8 is replaced
/// lossily since only ASCII letters matter downstream.
pub fn read_sentence<R: BufRead>(reader: &mut R) -> Result<Sentence> {
    let mut buf = Vec::new();
    let read = reader.read_until(b'\n', &mut buf)?;

    if read == 0 {
        debug!("Input exhausted before a line was read; treating it as empty");
        return Ok(Sentence::default());
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }

    let raw = String::from_utf8_lossy(&buf).into_owned();
    debug!("Read {} bytes of input", raw.len());
    Ok(Sentence::new(raw))
}
