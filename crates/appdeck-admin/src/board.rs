use crate::error::{BoardError, Result};
use appdeck_core::{AppRecord, AppStatus};
use serde::Serialize;

/// In-memory kanban document over a copy of the directory.
///
/// Transitions mutate only this document; persisting is a separate step
/// via `export`, whose output the operator commits by hand. Statuses are
/// unordered: any record can move to any column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Board {
    records: Vec<AppRecord>,
}

impl Board {
    pub fn new(records: Vec<AppRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[AppRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, slug: &str) -> Option<&AppRecord> {
        self.records.iter().find(|r| r.slug == slug)
    }

    /// Add a record at the end of the collection. The board is the one
    /// place records are created, so it refuses a slug that is already
    /// taken instead of shipping a directory with a broken invariant.
    pub fn add(&mut self, record: AppRecord) -> Result<()> {
        if self.find(&record.slug).is_some() {
            return Err(BoardError::duplicate_slug(record.slug));
        }
        self.records.push(record);
        Ok(())
    }

    /// Replace the record with the same slug, keeping its position.
    pub fn update(&mut self, record: AppRecord) -> Result<()> {
        match self.records.iter_mut().find(|r| r.slug == record.slug) {
            Some(existing) => {
                *existing = record;
                Ok(())
            }
            None => Err(BoardError::unknown_slug(record.slug)),
        }
    }

    /// Move a record to another column (the drag-and-drop transition).
    pub fn set_status(&mut self, slug: &str, status: AppStatus) -> Result<()> {
        match self.records.iter_mut().find(|r| r.slug == slug) {
            Some(record) => {
                record.status = status;
                Ok(())
            }
            None => Err(BoardError::unknown_slug(slug)),
        }
    }

    /// Remove a record from the collection entirely. No soft-delete, no
    /// audit trail: once removed it is gone from the persisted output.
    pub fn remove(&mut self, slug: &str) -> Result<AppRecord> {
        match self.records.iter().position(|r| r.slug == slug) {
            Some(idx) => Ok(self.records.remove(idx)),
            None => Err(BoardError::unknown_slug(slug)),
        }
    }

    /// Records grouped per status column, preserving stored order within
    /// each column.
    pub fn columns(&self) -> Vec<(AppStatus, Vec<&AppRecord>)> {
        AppStatus::ALL
            .into_iter()
            .map(|status| {
                let column = self.records.iter().filter(|r| r.status == status).collect();
                (status, column)
            })
            .collect()
    }

    /// Render the persisted module text for the operator to paste over
    /// the config file and commit.
    pub fn export(&self) -> String {
        appdeck_manifest::render_module(&self.records)
    }

    pub fn into_records(self) -> Vec<AppRecord> {
        self.records
    }
}
