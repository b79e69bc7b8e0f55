use std::fmt;
use std::io::Read;
use std::num::NonZeroUsize;

use wordfreq_core::{RankOrder, RankedEntry};

use crate::buffered::{BufferedWordCounter, DEFAULT_BUFFER_SIZE};
use crate::parallel::ParallelWordCounter;
use crate::sequential::SequentialWordCounter;
use crate::{CountError, SetupError};

/// Shared contract of the counting strategies.
///
/// Every call is isolated: implementations keep no per-call state on
/// `self`, so one counter can serve many threads with independent streams.
pub trait WordCounter: Send + Sync {
    /// Tokenizes and aggregates `input`, then returns every distinct word
    /// ranked by `order`.
    ///
    /// Fails with [`CountError::InvalidArgument`] when either argument is
    /// `None`, before reading anything, and with [`CountError::Io`] when the
    /// stream cannot be read or is not valid UTF-8. The stream belongs to
    /// the caller and is released by whoever opened it.
    fn count(
        &self,
        input: Option<&mut (dyn Read + Send)>,
        order: Option<&dyn RankOrder>,
    ) -> Result<Vec<RankedEntry>, CountError>;
}

/// Rejects absent arguments before any I/O happens.
pub(crate) fn require<'i, 'o>(
    input: Option<&'i mut (dyn Read + Send + 'i)>,
    order: Option<&'o dyn RankOrder>,
) -> Result<(&'i mut (dyn Read + Send + 'i), &'o dyn RankOrder), CountError> {
    let input = input.ok_or(CountError::InvalidArgument("input stream cannot be absent"))?;
    let order = order.ok_or(CountError::InvalidArgument("comparator cannot be absent"))?;
    Ok((input, order))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSettings {
    /// Read chunk size for [`Strategy::Buffered`].
    pub buffer_size: NonZeroUsize,
    /// Dedicated worker count for [`Strategy::Parallel`]; `None` uses the global pool.
    pub workers: Option<usize>,
}

impl Default for CounterSettings {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            workers: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Fixed-size chunks decoded and scanned char by char.
    #[default]
    Buffered,
    /// Lines split by regex on the calling thread.
    Sequential,
    /// Lines split by regex across a worker pool, partial tables merged.
    Parallel,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Buffered, Strategy::Sequential, Strategy::Parallel];

    pub fn build(self, settings: &CounterSettings) -> Result<Box<dyn WordCounter>, SetupError> {
        let counter: Box<dyn WordCounter> = match self {
            Strategy::Buffered => Box::new(BufferedWordCounter::new(settings.buffer_size)),
            Strategy::Sequential => Box::new(SequentialWordCounter::new()),
            Strategy::Parallel => match settings.workers {
                Some(workers) => Box::new(ParallelWordCounter::with_workers(workers)?),
                None => Box::new(ParallelWordCounter::new()),
            },
        };
        Ok(counter)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Buffered => write!(f, "buffered"),
            Strategy::Sequential => write!(f, "sequential"),
            Strategy::Parallel => write!(f, "parallel"),
        }
    }
}
