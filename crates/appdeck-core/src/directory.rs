use crate::record::AppRecord;

/// Order-preserving visibility filter over the record collection.
///
/// `show_all` is the operator escape hatch (an external query flag, not
/// authentication): it returns every record in stored order. Otherwise
/// records whose status is not visible in the static status config are
/// dropped, keeping the relative order of the rest.
pub fn visible_records(records: &[AppRecord], show_all: bool) -> Vec<&AppRecord> {
    if show_all {
        return records.iter().collect();
    }
    records.iter().filter(|r| r.status.is_visible()).collect()
}

/// Linear-scan slug lookup; `None` when the slug is absent.
pub fn find_by_slug<'a>(records: &'a [AppRecord], slug: &str) -> Option<&'a AppRecord> {
    records.iter().find(|r| r.slug == slug)
}

/// The directory: the canonical ordered record collection, loaded once
/// per process and immutable while reading components run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    records: Vec<AppRecord>,
}

impl Directory {
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

    pub fn visible(&self, show_all: bool) -> Vec<&AppRecord> {
        visible_records(&self.records, show_all)
    }

    pub fn find(&self, slug: &str) -> Option<&AppRecord> {
        find_by_slug(&self.records, slug)
    }

    pub fn into_records(self) -> Vec<AppRecord> {
        self.records
    }
}
