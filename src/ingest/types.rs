//! Ingestion types

use crate::utils::error::Result;
use std::fmt;
use uuid::Uuid;

/// Record category, each with its own file and endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IngestionKind {
    Products,
    Prices,
}

impl IngestionKind {
    /// Kinds in the order a run processes them
    pub const ALL: [IngestionKind; 2] = [IngestionKind::Products, IngestionKind::Prices];

    /// Label used in log lines
    pub fn label(&self) -> &'static str {
        match self {
            IngestionKind::Products => "products",
            IngestionKind::Prices => "prices",
        }
    }

    /// Source file inside the data directory
    pub fn file_name(&self) -> &'static str {
        match self {
            IngestionKind::Products => "products.json",
            IngestionKind::Prices => "prices.json",
        }
    }
}

impl fmt::Display for IngestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One submitted batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    /// 1-based batch number
    pub number: usize,
    /// Records in the batch
    pub size: usize,
    /// Records the service accepted
    pub accepted: u64,
}

/// Totals for one kind after every batch completed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub accepted: u64,
    pub total: usize,
    pub batches: Vec<BatchReport>,
}

impl RunSummary {
    pub(crate) fn new(total: usize) -> Self {
        Self {
            accepted: 0,
            total,
            batches: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, number: usize, size: usize, accepted: u64) {
        self.accepted += accepted;
        self.batches.push(BatchReport {
            number,
            size,
            accepted,
        });
    }

    /// Records handed to the service
    pub fn submitted(&self) -> usize {
        self.batches.iter().map(|b| b.size).sum()
    }
}

/// Per-kind outcome of one run
#[derive(Debug)]
pub struct RunReport {
    /// Correlates log lines of one run
    pub run_id: Uuid,
    pub products: Result<RunSummary>,
    pub prices: Result<RunSummary>,
}

impl RunReport {
    pub fn outcome(&self, kind: IngestionKind) -> &Result<RunSummary> {
        match kind {
            IngestionKind::Products => &self.products,
            IngestionKind::Prices => &self.prices,
        }
    }

    /// True when both kinds finished without error
    pub fn is_success(&self) -> bool {
        self.products.is_ok() && self.prices.is_ok()
    }
}
