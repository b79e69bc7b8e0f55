use std::io::{self, Read};
use std::num::NonZeroUsize;

use engine_logging::{engine_debug, engine_trace};
use wordfreq_core::{rank, FrequencyTable, RankOrder, RankedEntry, WordScanner};

use crate::counter::{require, WordCounter};
use crate::decode::Utf8ChunkDecoder;
use crate::CountError;

pub const DEFAULT_BUFFER_SIZE: NonZeroUsize = match NonZeroUsize::new(512) {
    Some(size) => size,
    None => panic!("buffer size must be non-zero"),
};

/// Reads fixed-size chunks and runs the streaming word scanner over them.
///
/// Scanner and decoder state carry over chunk boundaries, so the chunk size
/// only changes how often the stream is read, never the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferedWordCounter {
    buffer_size: NonZeroUsize,
}

impl BufferedWordCounter {
    pub fn new(buffer_size: NonZeroUsize) -> Self {
        Self { buffer_size }
    }
}

impl Default for BufferedWordCounter {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_SIZE)
    }
}

impl WordCounter for BufferedWordCounter {
    fn count(
        &self,
        input: Option<&mut (dyn Read + Send)>,
        order: Option<&dyn RankOrder>,
    ) -> Result<Vec<RankedEntry>, CountError> {
        let (input, order) = require(input, order)?;

        let mut buffer = vec![0u8; self.buffer_size.get()];
        let mut decoder = Utf8ChunkDecoder::new();
        let mut scanner = WordScanner::new();
        let mut table = FrequencyTable::new();
        let mut bytes_read: u64 = 0;

        loop {
            let read = match input.read(&mut buffer) {
                Ok(0) => break,
                Ok(read) => read,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            };
            bytes_read += read as u64;
            engine_trace!("buffered counter: read chunk of {} bytes", read);
            let text = decoder.decode(&buffer[..read], false)?;
            table.extend(scanner.feed(text));
        }
        let tail = decoder.decode(&[], true)?;
        table.extend(scanner.feed(tail));
        table.extend(scanner.finish());

        engine_debug!(
            "buffered counter: {} bytes in chunks of {}, {} words, {} distinct",
            bytes_read,
            self.buffer_size,
            table.total(),
            table.len()
        );
        Ok(rank(table, order))
    }
}
