//! Batch ingestion
//!
//! Loads record files, partitions them into fixed-size batches and submits the
//! batches one after another, keeping a running count of accepted records.
//! Products and prices share the same routine and fail independently.

mod batch;
mod ingestor;
mod source;
mod submitter;
mod types;


// Re-export all public types
pub use batch::{batch_number, batches};
pub use ingestor::{ingest_all, ingest_batches, ingest_kind, run};
pub use source::load_records;
pub use submitter::{BatchSubmitter, KindSubmitter};
pub use types::{BatchReport, IngestionKind, RunReport, RunSummary};

#[cfg(test)]
pub(crate) use submitter::MockBatchSubmitter;
