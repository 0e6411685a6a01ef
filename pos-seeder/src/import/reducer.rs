//! Rebuilds transactions from the flat row stream of an export

use super::classify::RowRole;
use super::grid::{CellGrid, is_blank_row};
use super::types::{DocumentMeta, LineItem, TransactionDocument, TransactionEntry};
use super::values::non_empty;

/// Row layout of one export kind
pub trait DocumentSchema {
    type Header;
    type Item: LineItem;
    type Summary;

    /// Name used in log messages
    const KIND: &'static str;

    fn classify(row: &[String]) -> RowRole;
    fn header(row: &[String]) -> Self::Header;
    fn item(row: &[String]) -> Self::Item;
    fn summary(row: &[String]) -> Self::Summary;
}

enum ReducerState<H, I, S> {
    NoCurrent,
    InTransaction(TransactionEntry<H, I, S>),
}

/// Walk the grid top to bottom and assemble transaction entries.
///
/// Row 0 only ever carries report metadata. Item and summary rows seen
/// before the first header are dropped; the open entry is flushed when the
/// next header arrives or the grid ends.
pub fn reduce<S: DocumentSchema>(
    grid: &CellGrid,
) -> TransactionDocument<S::Header, S::Item, S::Summary> {
    let mut document = TransactionDocument {
        meta: grid.row(0).and_then(read_meta),
        entries: Vec::new(),
    };
    let mut state = ReducerState::NoCurrent;

    for (row_idx, row) in grid.rows().iter().enumerate().skip(1) {
        if is_blank_row(row) {
            continue;
        }
        let row_num = row_idx + 1;

        state = match (S::classify(row), state) {
            (RowRole::Header, current) => {
                if let ReducerState::InTransaction(entry) = current {
                    document.entries.push(entry);
                }
                ReducerState::InTransaction(TransactionEntry::new(S::header(row)))
            }
            (RowRole::Summary, ReducerState::InTransaction(mut entry)) => {
                entry.summary = Some(S::summary(row));
                ReducerState::InTransaction(entry)
            }
            (RowRole::Item, ReducerState::InTransaction(mut entry)) => {
                let item = S::item(row);
                if item.is_structural() {
                    entry.items.push(item);
                } else {
                    log::debug!(
                        "{} row {}: item without code or name dropped",
                        S::KIND,
                        row_num
                    );
                }
                ReducerState::InTransaction(entry)
            }
            (role @ (RowRole::Summary | RowRole::Item), ReducerState::NoCurrent) => {
                log::debug!(
                    "{} row {}: {} row before any header discarded",
                    S::KIND,
                    row_num,
                    role
                );
                ReducerState::NoCurrent
            }
            (RowRole::Noise, current) => {
                log::trace!("{} row {}: noise", S::KIND, row_num);
                current
            }
        };
    }

    if let ReducerState::InTransaction(entry) = state {
        document.entries.push(entry);
    }

    log::debug!(
        "{} export: {} transactions",
        S::KIND,
        document.entries.len()
    );
    document
}

/// Non-empty cells of row 0, in order: title, address, phone
fn read_meta(row: &[String]) -> Option<DocumentMeta> {
    let mut values = row.iter().filter_map(|c| non_empty(c));
    let title = values.next()?;
    Some(DocumentMeta {
        title: Some(title),
        address: values.next(),
        phone: values.next(),
    })
}
