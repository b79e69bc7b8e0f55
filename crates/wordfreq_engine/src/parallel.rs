use std::io::{self, BufRead, BufReader, Read};

use engine_logging::engine_debug;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use wordfreq_core::{rank, split_line, FrequencyTable, RankOrder, RankedEntry};

use crate::counter::{require, WordCounter};
use crate::{CountError, SetupError};

/// Line-based counting spread over a rayon worker pool.
///
/// Lines are handed to workers as they are read. Each worker folds its
/// lines into a private partial table; once every worker is done the
/// partial tables are summed on the calling thread.
pub struct ParallelWordCounter {
    pool: Option<ThreadPool>,
}

impl ParallelWordCounter {
    /// Uses rayon's global pool.
    pub fn new() -> Self {
        Self { pool: None }
    }

    /// Uses a dedicated pool of `workers` threads (`0` lets rayon pick).
    pub fn with_workers(workers: usize) -> Result<Self, SetupError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("wordfreq-worker-{index}"))
            .build()?;
        Ok(Self { pool: Some(pool) })
    }

    pub fn workers(&self) -> usize {
        self.pool
            .as_ref()
            .map_or_else(rayon::current_num_threads, ThreadPool::current_num_threads)
    }
}

impl Default for ParallelWordCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl WordCounter for ParallelWordCounter {
    fn count(
        &self,
        input: Option<&mut (dyn Read + Send)>,
        order: Option<&dyn RankOrder>,
    ) -> Result<Vec<RankedEntry>, CountError> {
        let (input, order) = require(input, order)?;

        let partials = match &self.pool {
            Some(pool) => pool.install(|| count_partitions(input))?,
            None => count_partitions(input)?,
        };
        let partition_count = partials.len();
        let table = partials
            .into_iter()
            .fold(FrequencyTable::new(), FrequencyTable::merge);

        engine_debug!(
            "parallel counter: {} workers, {} partial tables, {} words, {} distinct",
            self.workers(),
            partition_count,
            table.total(),
            table.len()
        );
        Ok(rank(table, order))
    }
}

fn count_partitions(input: &mut (dyn Read + Send)) -> io::Result<Vec<FrequencyTable>> {
    // Stop pulling lines after the first read error.
    let mut failed = false;
    let lines = BufReader::new(input).lines().take_while(move |line| {
        let keep = !failed;
        failed |= line.is_err();
        keep
    });

    lines
        .par_bridge()
        .try_fold(FrequencyTable::new, |mut partial, line| {
            partial.extend(split_line(&line?));
            Ok::<_, io::Error>(partial)
        })
        .collect()
}
