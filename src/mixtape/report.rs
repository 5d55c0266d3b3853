//! Structured outcome of a run.
//!
//! Nothing in the library prints. Skipped records, rejected operations and
//! failed operations each leave one [`Diagnostic`] here, and the UI decides
//! where those lines go.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    pub content: String,
}

impl Diagnostic {
    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: Level::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub diagnostics: Vec<Diagnostic>,
    pub records_ingested: usize,
    pub records_skipped: usize,
    pub operations_rejected: usize,
    pub operations_applied: usize,
    pub operations_failed: usize,
}

impl Report {
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn merge(&mut self, other: Report) {
        self.diagnostics.extend(other.diagnostics);
        self.records_ingested += other.records_ingested;
        self.records_skipped += other.records_skipped;
        self.operations_rejected += other.operations_rejected;
        self.operations_applied += other.operations_applied;
        self.operations_failed += other.operations_failed;
    }

    /// True when every record was ingested and every operation applied.
    pub fn is_clean(&self) -> bool {
        self.records_skipped == 0 && self.operations_rejected == 0 && self.operations_failed == 0
    }
}
