use std::io::{BufRead, BufReader, Read};

use engine_logging::engine_debug;
use wordfreq_core::{rank, split_line, FrequencyTable, RankOrder, RankedEntry};

use crate::counter::{require, WordCounter};
use crate::CountError;

/// Splits each line on whitespace and strips punctuation, on the calling thread.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SequentialWordCounter;

impl SequentialWordCounter {
    pub fn new() -> Self {
        Self
    }
}

impl WordCounter for SequentialWordCounter {
    fn count(
        &self,
        input: Option<&mut (dyn Read + Send)>,
        order: Option<&dyn RankOrder>,
    ) -> Result<Vec<RankedEntry>, CountError> {
        let (input, order) = require(input, order)?;

        let mut table = FrequencyTable::new();
        let mut lines: u64 = 0;
        for line in BufReader::new(input).lines() {
            table.extend(split_line(&line?));
            lines += 1;
        }

        engine_debug!(
            "sequential counter: {} lines, {} words, {} distinct",
            lines,
            table.total(),
            table.len()
        );
        Ok(rank(table, order))
    }
}
