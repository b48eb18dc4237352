//! The merge engine.
//!
//! Documents are folded left to right into an accumulator that starts empty.
//! Each step applies [`combine`]:
//!
//! - Table + Table: merge key by key (recursive)
//! - anything else: the later value replaces the earlier one whole. Arrays
//!   are never concatenated or merged by index.
//!
//! The fold direction is fixed. `combine` happens to be associative, so a
//! right fold would give the same answer today, but nothing here relies on
//! that.

use crate::error::{MergeError, Result};
use crate::types::{Table, Value};
use indexmap::map::Entry;
use tracing::debug;

/// Combine two tables; `overlay` wins on conflict.
///
/// Keys from `base` keep their position; keys that only `overlay` has are
/// appended in `overlay`'s order. Both inputs are consumed, so the result
/// never shares structure with anything the caller still holds.
pub fn combine(mut base: Table, overlay: Table) -> Table {
    for (key, overlay_value) in overlay {
        match base.entry(key) {
            Entry::Occupied(mut slot) => {
                let merged = match (slot.get_mut(), overlay_value) {
                    (Value::Table(base_table), Value::Table(overlay_table)) => {
                        Value::Table(combine(std::mem::take(base_table), overlay_table))
                    }
                    (_, replacement) => replacement,
                };
                slot.insert(merged);
            }
            Entry::Vacant(slot) => {
                slot.insert(overlay_value);
            }
        }
    }
    base
}

/// Fold parsed documents into one table, later documents taking precedence.
///
/// Fails with [`MergeError::EmptyInput`] when there are no documents and with
/// [`MergeError::InvalidRootShape`] when a document is not a table.
pub fn merge_documents<I>(documents: I) -> Result<Table>
where
    I: IntoIterator<Item = Value>,
{
    let mut documents = documents.into_iter().enumerate().peekable();
    if documents.peek().is_none() {
        return Err(MergeError::EmptyInput);
    }

    documents.try_fold(Table::new(), |merged, (index, document)| match document {
        Value::Table(table) => {
            debug!(index, keys = table.len(), "merging document");
            Ok(combine(merged, table))
        }
        other => Err(MergeError::InvalidRootShape {
            index,
            found: other.type_name(),
        }),
    })
}
