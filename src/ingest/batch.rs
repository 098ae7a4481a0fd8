//! Fixed-size partitioning of a record sequence

use crate::utils::error::{IngestError, Result};

/// 1-based number of the batch starting at `start_index`
pub fn batch_number(start_index: usize, batch_size: usize) -> usize {
    start_index / batch_size + 1
}

/// Split `items` into contiguous batches of at most `batch_size`, in order.
///
/// Yields `(batch_number, batch)`. Only the last batch may be short.
pub fn batches<T>(
    items: &[T],
    batch_size: usize,
) -> Result<impl Iterator<Item = (usize, &[T])> + '_> {
    if batch_size == 0 {
        return Err(IngestError::InvalidBatchSize(batch_size));
    }

    let total = items.len();
    Ok((0..total).step_by(batch_size).map(move |start| {
        let end = (start + batch_size).min(total);
        (batch_number(start, batch_size), &items[start..end])
    }))
}
