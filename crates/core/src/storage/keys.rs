//! Storage document identifiers.

use crate::calendar::Scope;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Returns the document id for a month, e.g. `dec_2025`.
pub fn schedule_doc_id(scope: Scope) -> String {
    let index = scope.month().saturating_sub(1) as usize;
    let month = MONTH_ABBREVIATIONS.get(index).copied().unwrap_or("dec");
    format!("{}_{}", month, scope.year())
}
