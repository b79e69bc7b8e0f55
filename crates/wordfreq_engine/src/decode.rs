use std::io;

use encoding_rs::{Decoder, DecoderResult, UTF_8};

/// Incremental strict UTF-8 decoder for fixed-size read chunks.
///
/// A multi-byte sequence split across two chunks is held back until the
/// next chunk completes it. Malformed input is reported as
/// `io::ErrorKind::InvalidData`, the same kind `BufRead::lines` uses.
pub struct Utf8ChunkDecoder {
    decoder: Decoder,
    text: String,
}

impl Utf8ChunkDecoder {
    pub fn new() -> Self {
        Self {
            decoder: UTF_8.new_decoder_without_bom_handling(),
            text: String::new(),
        }
    }

    /// Decodes `bytes` and returns the characters completed so far.
    /// Pass `last = true` with the final chunk (possibly empty) to flush.
    pub fn decode(&mut self, bytes: &[u8], last: bool) -> io::Result<&str> {
        self.text.clear();
        let mut input = bytes;
        loop {
            let needed = self
                .decoder
                .max_utf8_buffer_length_without_replacement(input.len())
                .ok_or_else(|| invalid_data("chunk too large to decode"))?;
            self.text.reserve(needed);
            let (result, read) = self
                .decoder
                .decode_to_string_without_replacement(input, &mut self.text, last);
            input = &input[read..];
            match result {
                DecoderResult::InputEmpty => return Ok(&self.text),
                DecoderResult::OutputFull => continue,
                DecoderResult::Malformed(_, _) => {
                    return Err(invalid_data("stream did not contain valid UTF-8"))
                }
            }
        }
    }
}

impl Default for Utf8ChunkDecoder {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid_data(message: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message.to_string())
}
