use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CountError {
    /// A required argument was absent; raised before the stream is touched.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// Read or UTF-8 decode failure from the underlying stream.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to start worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}
