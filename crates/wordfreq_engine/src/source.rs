use std::fs::File;
use std::path::Path;

use engine_logging::{engine_info, engine_warn};
use wordfreq_core::{RankOrder, RankedEntry};

use crate::{CountError, WordCounter};

/// Opens `path`, counts it with `counter`, and closes the file on every exit path.
pub fn count_path(
    counter: &dyn WordCounter,
    path: &Path,
    order: &dyn RankOrder,
) -> Result<Vec<RankedEntry>, CountError> {
    let mut file = File::open(path).map_err(|err| {
        engine_warn!("Failed to open {:?}: {}", path, err);
        CountError::Io(err)
    })?;
    engine_info!("Counting words in {:?}", path);
    counter.count(Some(&mut file), Some(order))
}
