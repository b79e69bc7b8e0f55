use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use engine_logging::LogDestination;
use wordfreq_core::{CountThenAlpha, Direction};
use wordfreq_engine::{CounterSettings, Strategy, DEFAULT_BUFFER_SIZE};

use crate::report::OutputFormat;

/// Count word frequencies in a UTF-8 text file
#[derive(Parser, Debug)]
#[command(name = "wordfreq", author, version, about, long_about = None)]
pub struct Args {
    /// Text file to analyze
    pub file: PathBuf,

    /// Counting strategy
    #[arg(short, long, value_enum, default_value_t = StrategyArg::Buffered)]
    pub strategy: StrategyArg,

    /// Read chunk size in bytes for the buffered strategy
    #[arg(long, default_value_t = DEFAULT_BUFFER_SIZE)]
    pub buffer_size: NonZeroUsize,

    /// Worker threads for the parallel strategy [default: one per core]
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// List the least frequent words first
    #[arg(short, long)]
    pub ascending: bool,

    /// Print only the first N entries
    #[arg(short = 'n', long)]
    pub top: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write log output to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Verbose logging and full error reports
    #[arg(long)]
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Buffered,
    Sequential,
    Parallel,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Buffered => Strategy::Buffered,
            StrategyArg::Sequential => Strategy::Sequential,
            StrategyArg::Parallel => Strategy::Parallel,
        }
    }
}

impl Args {
    pub fn settings(&self) -> CounterSettings {
        CounterSettings {
            buffer_size: self.buffer_size,
            workers: self.workers,
        }
    }

    pub fn order(&self) -> CountThenAlpha {
        if self.ascending {
            CountThenAlpha::new(Direction::Ascending)
        } else {
            CountThenAlpha::new(Direction::Descending)
        }
    }

    pub fn log_destination(&self) -> LogDestination<'_> {
        match &self.log_file {
            Some(path) => LogDestination::Both(path),
            None => LogDestination::Terminal,
        }
    }
}
