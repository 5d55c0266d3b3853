//! # API Facade
//!
//! [`MixtapeApi`] is the single entry point for a run, whatever the UI. It
//! wires the codec, the registry, the operation queue and the collector
//! together, and accumulates one [`Report`] across all phases.
//!
//! A run is always the same sequence:
//!
//! 1. [`MixtapeApi::load_operations`]: decode and validate the operations
//! 2. [`MixtapeApi::ingest`]: decode and ingest the record document
//! 3. [`MixtapeApi::run`]: replay the operations
//! 4. [`MixtapeApi::write_output`]: encode the final storage
//!
//! Like the layers below it, the facade takes readers and writers but never
//! touches stdout, stderr or the process exit code.

use crate::codec;
use crate::collector::Collector;
use crate::config::MixtapeConfig;
use crate::error::Result;
use crate::operations::{Operation, OperationQueue};
use crate::registry::RecordRegistry;
use crate::report::{Diagnostic, Report};
use crate::store::Storage;
use serde_json::Value;
use std::io::{Read, Write};
use tracing::info;

pub struct MixtapeApi {
    collector: Collector,
    config: MixtapeConfig,
    report: Report,
}

impl MixtapeApi {
    pub fn new(operations: Vec<Operation>, config: MixtapeConfig) -> Self {
        Self::with_registry(operations, RecordRegistry::default(), config)
    }

    /// Builds the operation queue. Rejected operations are reported right
    /// away and never reach replay.
    pub fn with_registry(
        operations: Vec<Operation>,
        registry: RecordRegistry,
        config: MixtapeConfig,
    ) -> Self {
        let (queue, rejected) = OperationQueue::build(operations);
        let mut report = Report::default();
        for operation in &rejected {
            report.operations_rejected += 1;
            for err in operation.errors() {
                report.add(Diagnostic::error(operation.describe(err)));
            }
        }
        info!(
            queued = queue.len(),
            rejected = rejected.len(),
            "Loaded operations"
        );

        Self {
            collector: Collector::new(queue, registry),
            config,
            report,
        }
    }

    pub fn load_operations<R: Read>(reader: R, config: MixtapeConfig) -> Result<Self> {
        let operations = codec::decode_operations(reader)?;
        Ok(Self::new(operations, config))
    }

    /// Decodes a record document and ingests every collection in document
    /// order.
    pub fn ingest<R: Read>(&mut self, reader: R) -> Result<()> {
        for (tag, records) in codec::decode_records(reader)? {
            self.ingest_collection(&tag, &records);
        }
        info!(
            ingested = self.report.records_ingested,
            skipped = self.report.records_skipped,
            "Ingested records"
        );
        Ok(())
    }

    pub fn ingest_collection(&mut self, tag: &str, records: &[Value]) {
        let report = self
            .collector
            .ingest(tag, records, self.config.batch_size);
        self.report.merge(report);
    }

    pub fn run(&mut self) -> &Report {
        let report = self.collector.run();
        self.report.merge(report);
        &self.report
    }

    pub fn write_output<W: Write>(&self, writer: W) -> Result<()> {
        codec::encode_storage(writer, self.collector.storage(), self.config.pretty)
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn storage(&self) -> &Storage {
        self.collector.storage()
    }

    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.collector.operations()
    }

    /// Whether the run counts as a success under the configured policy.
    pub fn succeeded(&self) -> bool {
        !self.config.strict || self.report.is_clean()
    }
}
