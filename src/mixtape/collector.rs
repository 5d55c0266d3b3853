//! # Collector
//!
//! The collector owns the [`Storage`] and the [`OperationQueue`] of one run.
//! It is filled in two phases:
//!
//! 1. **Ingestion**: raw record collections are resolved through the
//!    [`RecordRegistry`], decoded, validated and appended to their bucket.
//!    Records are walked in batches of bounded size; batches never reorder
//!    records.
//! 2. **Replay**: [`Collector::run`] applies every queued operation once, in
//!    order, to the shared storage.
//!
//! Neither phase stops on a bad record or a failed operation. Each such event
//! is counted and described in the returned [`Report`].

use crate::model::Record;
use crate::operations::{Operation, OperationQueue};
use crate::registry::RecordRegistry;
use crate::report::{Diagnostic, Report};
use crate::store::Storage;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Default number of records handled per ingestion batch.
pub const DEFAULT_BATCH_SIZE: usize = 500;

pub struct Collector {
    registry: RecordRegistry,
    storage: Storage,
    queue: OperationQueue,
    replayed: bool,
}

impl Collector {
    pub fn new(queue: OperationQueue, registry: RecordRegistry) -> Self {
        Self {
            storage: Storage::with_scopes(registry.scopes()),
            registry,
            queue,
            replayed: false,
        }
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// The queued operations, carrying their errors once replayed.
    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.queue.iter()
    }

    /// Ingests the records of one collection.
    ///
    /// An unknown `tag` skips every record in the collection with one
    /// diagnostic each. A record that fails to decode or validate is skipped
    /// on its own.
    pub fn ingest(&mut self, tag: &str, records: &[Value], batch_size: usize) -> Report {
        let mut report = Report::default();

        let Some(scope) = self.registry.resolve(tag) else {
            for _ in records {
                report.records_skipped += 1;
                report.add(Diagnostic::warning(format!(
                    "Unprocessable collection type '{}'.",
                    tag
                )));
            }
            return report;
        };

        for (number, batch) in records.chunks(batch_size.max(1)).enumerate() {
            for raw in batch {
                match Record::from_raw(scope, raw) {
                    Ok(record) => {
                        self.storage.push(record);
                        report.records_ingested += 1;
                    }
                    Err(err) => {
                        report.records_skipped += 1;
                        report.add(Diagnostic::warning(err.to_string()));
                    }
                }
            }
            debug!(%scope, batch = number + 1, size = batch.len(), "Ingested batch");
        }

        report
    }

    /// Replays the queue against storage. The queue is replayed at most once;
    /// later calls return an empty report.
    pub fn run(&mut self) -> Report {
        let mut report = Report::default();
        if self.replayed {
            warn!("Operation queue was already replayed");
            return report;
        }
        self.replayed = true;

        for operation in self.queue.iter_mut() {
            if operation.apply(&mut self.storage) {
                report.operations_applied += 1;
                continue;
            }
            report.operations_failed += 1;
            if let Some(err) = operation.errors().last() {
                report.add(Diagnostic::error(operation.describe(err)));
            }
        }

        info!(
            applied = report.operations_applied,
            failed = report.operations_failed,
            "Replay finished"
        );
        report
    }
}
