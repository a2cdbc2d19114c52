//! Issue report collection
//!
//! Reports have no tenant key; duplicates are detected by the issue text.

use crate::collection::Collection;
use crate::error::Result;
use crate::index::UniqueIndex;
use types::Report;

#[derive(Debug)]
pub struct ReportStore {
    docs: Collection<Report>,
    issue_idx: UniqueIndex<String>,
}

impl ReportStore {
    pub fn new() -> Self {
        Self {
            docs: Collection::new("reports"),
            issue_idx: UniqueIndex::new("reports", "issue"),
        }
    }

    pub fn insert(&self, report: Report) -> Result<Report> {
        self.issue_idx.claim(report.issue.clone(), report.id)?;
        self.docs.insert(report.id, report.clone());
        Ok(report)
    }

    pub fn by_issue(&self, issue: &str) -> Option<Report> {
        let id = self.issue_idx.get(&issue.to_string())?;
        self.docs.get(&id)
    }

    pub fn all(&self) -> Vec<Report> {
        self.docs.find(|_| true)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }
}

impl Default for ReportStore {
    fn default() -> Self {
        Self::new()
    }
}
