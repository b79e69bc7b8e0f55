//! Wordfreq engine: stream reading and the three counting strategies.
mod buffered;
mod counter;
mod decode;
mod error;
mod parallel;
mod sequential;
mod source;

pub use buffered::{BufferedWordCounter, DEFAULT_BUFFER_SIZE};
pub use counter::{CounterSettings, Strategy, WordCounter};
pub use decode::Utf8ChunkDecoder;
pub use error::{CountError, SetupError};
pub use parallel::ParallelWordCounter;
pub use sequential::SequentialWordCounter;
pub use source::count_path;
