//! Sequential batch ingestion with per-kind failure boundaries

use super::batch::batches;
use super::source::load_records;
use super::submitter::{BatchSubmitter, KindSubmitter};
use super::types::{IngestionKind, RunReport, RunSummary};
use crate::config::IngestConfig;
use crate::sdk::{CatalogClient, Record};
use crate::utils::error::{IngestError, Result};
use std::path::Path;
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

/// Submit `records` in batches of `batch_size`, one at a time.
///
/// Each batch is awaited before the next is sent. The first failing batch
/// ends the run for these records; the error carries its number and the
/// count accepted before it.
pub async fn ingest_batches<S>(
    records: &[Record],
    batch_size: usize,
    label: &str,
    submitter: &S,
) -> Result<RunSummary>
where
    S: BatchSubmitter + ?Sized,
{
    let total = records.len();
    let mut summary = RunSummary::new(total);

    for (batch_number, batch) in batches(records, batch_size)? {
        info!(
            batch = batch_number,
            size = batch.len(),
            "Ingesting {} batch {} containing {} {}",
            label,
            batch_number,
            batch.len(),
            label
        );

        let response =
            submitter
                .submit(batch)
                .await
                .map_err(|source| IngestError::Submission {
                    label: label.to_string(),
                    batch_number,
                    accepted_so_far: summary.accepted,
                    source,
                })?;

        let accepted = response.accepted_count();
        summary.record(batch_number, batch.len(), accepted);

        info!(
            batch = batch_number,
            accepted,
            status = response.status().unwrap_or("unknown"),
            "{} batch {} response: {}",
            capitalize(label),
            batch_number,
            response
        );
    }

    info!(
        accepted = summary.accepted,
        total,
        "Successfully ingested {} out of {} {}",
        summary.accepted,
        total,
        label
    );

    Ok(summary)
}

/// Load one kind's file and ingest it. Errors are logged and returned, never
/// raised past the kind.
pub async fn ingest_kind<S>(
    kind: IngestionKind,
    data_dir: &Path,
    batch_size: usize,
    submitter: &S,
) -> Result<RunSummary>
where
    S: BatchSubmitter + ?Sized,
{
    let outcome = load_and_ingest(kind, data_dir, batch_size, submitter).await;

    if let Err(e) = &outcome {
        error!(kind = %kind, "Error ingesting {}: {}", kind, e);
    }
    outcome
}

async fn load_and_ingest<S>(
    kind: IngestionKind,
    data_dir: &Path,
    batch_size: usize,
    submitter: &S,
) -> Result<RunSummary>
where
    S: BatchSubmitter + ?Sized,
{
    let records = load_records(&data_dir.join(kind.file_name())).await?;
    ingest_batches(&records, batch_size, kind.label(), submitter).await
}

/// Products first, then prices. A failed kind never stops the other.
pub async fn ingest_all<P, Q>(
    data_dir: &Path,
    batch_size: usize,
    products: &P,
    prices: &Q,
) -> (Result<RunSummary>, Result<RunSummary>)
where
    P: BatchSubmitter + ?Sized,
    Q: BatchSubmitter + ?Sized,
{
    let products = ingest_kind(IngestionKind::Products, data_dir, batch_size, products).await;
    let prices = ingest_kind(IngestionKind::Prices, data_dir, batch_size, prices).await;
    (products, prices)
}

/// Run both ingestion kinds against the catalog service.
///
/// Only setup failures (data directory, client construction) are returned as
/// `Err`; per-kind failures live in the report.
pub async fn run(config: &IngestConfig) -> Result<RunReport> {
    config.validate()?;
    let data_dir = config.resolve_data_dir()?;
    let client = CatalogClient::new(config.client.clone())?;

    let run_id = Uuid::new_v4();
    let span = info_span!("ingest_run", run_id = %run_id);

    let (products, prices) = async {
        info!(
            data_dir = %data_dir.display(),
            batch_size = config.batch_size,
            "Starting catalog ingestion"
        );
        ingest_all(
            &data_dir,
            config.batch_size,
            &KindSubmitter::new(&client, IngestionKind::Products),
            &KindSubmitter::new(&client, IngestionKind::Prices),
        )
        .await
    }
    .instrument(span)
    .await;

    Ok(RunReport {
        run_id,
        products,
        prices,
    })
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
