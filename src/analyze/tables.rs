//! Table strategy resolution and cell normalization.

use crate::error::Extraction;
use crate::model::TableData;
use crate::source::{RawRows, TableStrategy};

/// Resolve tables for a page across the primary and alternate strategies.
///
/// With `prefer_alternate` set, the alternate strategy runs first and the
/// primary serves as fallback whenever the alternate yields nothing — which
/// covers failure, an empty result, and no alternate strategy being
/// configured at all. Without the flag only the primary runs. Strategy
/// failures are logged and count as zero tables, never propagated.
pub fn resolve_tables(
    page: u32,
    primary: &dyn TableStrategy,
    alternate: Option<&dyn TableStrategy>,
    prefer_alternate: bool,
) -> Vec<TableData> {
    if prefer_alternate {
        if let Some(alt) = alternate {
            let tables = run_strategy(alt, page);
            if !tables.is_empty() {
                return tables;
            }
            log::debug!(
                "strategy '{}' produced no tables on page {}, falling back to '{}'",
                alt.name(),
                page,
                primary.name()
            );
        }
    }

    run_strategy(primary, page)
}

fn run_strategy(strategy: &dyn TableStrategy, page: u32) -> Vec<TableData> {
    match strategy.extract(page) {
        Extraction::Complete(raw) => raw.into_iter().map(normalize).collect(),
        Extraction::Failed(reason) => {
            log::warn!(
                "table strategy '{}' failed on page {}: {}",
                strategy.name(),
                page,
                reason
            );
            Vec::new()
        }
    }
}

/// Normalize raw rows into table data: cells are trimmed, missing cells
/// become empty strings.
fn normalize(raw: RawRows) -> TableData {
    let rows = raw
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| cell.map(|c| c.trim().to_owned()).unwrap_or_default())
                .collect()
        })
        .collect();
    TableData::from_rows(rows)
}
