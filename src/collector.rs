//! Thread-safe aggregation of per-sheet differences

use crate::scanner::Difference;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Differences keyed by sheet, in a deterministic sheet order
pub type DifferenceReport = IndexMap<String, Vec<Difference>>;

/// Shared sink that scan units write into.
///
/// A single mutex guards the map; each call holds it for one insertion or
/// extension, so distinct sheets never lose updates.
#[derive(Debug, Default)]
pub struct DifferenceCollector {
    inner: Mutex<HashMap<String, Vec<Difference>>>,
}

impl DifferenceCollector {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<Difference>>> {
        // A panicking scan thread must not hide the other sheets' results
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn append(&self, sheet: &str, difference: Difference) {
        self.lock()
            .entry(sheet.to_string())
            .or_default()
            .push(difference);
    }

    /// Append a batch for one sheet under a single lock; empty batches are ignored
    pub fn extend(&self, sheet: &str, differences: Vec<Difference>) {
        if differences.is_empty() {
            return;
        }
        self.lock()
            .entry(sheet.to_string())
            .or_default()
            .extend(differences);
    }

    pub fn sheet_count(&self) -> usize {
        self.lock().len()
    }

    /// Take everything collected so far.
    ///
    /// Sheets named in `order` come first in that order; any others follow
    /// sorted by name.
    pub fn drain(&self, order: &[String]) -> DifferenceReport {
        let mut collected = std::mem::take(&mut *self.lock());
        let mut report = DifferenceReport::with_capacity(collected.len());

        for sheet in order {
            if let Some(differences) = collected.remove(sheet) {
                report.insert(sheet.clone(), differences);
            }
        }

        let mut rest: Vec<_> = collected.into_iter().collect();
        rest.sort_by(|a, b| a.0.cmp(&b.0));
        report.extend(rest);

        report
    }
}
