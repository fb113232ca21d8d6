//! Sheet-set reconciliation between two workbooks

use indexmap::IndexSet;
use serde::Serialize;

/// Which sheets can be compared and which exist on one side only
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SheetSets {
    /// Present in both workbooks, in the first workbook's order
    pub comparable: Vec<String>,
    /// Present only in the first workbook
    pub only_in_a: Vec<String>,
    /// Present only in the second workbook
    pub only_in_b: Vec<String>,
}

impl SheetSets {
    pub fn has_mismatches(&self) -> bool {
        !self.only_in_a.is_empty() || !self.only_in_b.is_empty()
    }
}

/// Build the ordered, de-duplicated name set for one workbook
pub fn sheet_name_set<I, S>(names: I) -> IndexSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Into::into).collect()
}

/// Split two sheet name sets into comparable and one-sided sheets.
///
/// Names are case-sensitive. Output order follows each input's order, so the
/// result is deterministic.
pub fn reconcile(names_a: &IndexSet<String>, names_b: &IndexSet<String>) -> SheetSets {
    let comparable = names_a
        .iter()
        .filter(|name| names_b.contains(*name))
        .cloned()
        .collect();
    let only_in_a = names_a.difference(names_b).cloned().collect();
    let only_in_b = names_b.difference(names_a).cloned().collect();

    SheetSets {
        comparable,
        only_in_a,
        only_in_b,
    }
}
