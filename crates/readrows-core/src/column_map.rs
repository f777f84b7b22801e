use crate::{FieldDescriptor, Record};

use indexmap::IndexMap;
use std::collections::HashSet;

/// Maps result column names to flattened field indices.
///
/// Built once per scan, before any row is read.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    columns: IndexMap<String, usize>,
}

impl ColumnMap {
    /// Builds the map for a record type.
    pub fn build<R: Record>() -> ColumnMap {
        ColumnMap::from_fields(&R::fields())
    }

    /// Builds the map from a flattened field list.
    ///
    /// When two fields claim the same column, the one registered last
    /// replaces the earlier one.
    pub fn from_fields(fields: &[FieldDescriptor]) -> ColumnMap {
        let mut columns = IndexMap::with_capacity(fields.len());

        for (index, field) in fields.iter().enumerate() {
            let column = field.column_name().into_owned();

            if let Some(prev) = columns.insert(column, index) {
                log::debug!(
                    "field `{}` replaces field `{}` as target of column `{}`",
                    field.name,
                    fields[prev].name,
                    field.column_name(),
                );
            }
        }

        ColumnMap { columns }
    }

    /// Returns the field index bound to `column`.
    pub fn get(&self, column: &str) -> Option<usize> {
        self.columns.get(column).copied()
    }

    /// Number of distinct mapped columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if no column is mapped.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterates `(column, field index)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.columns
            .iter()
            .map(|(column, index)| (column.as_str(), *index))
    }

    /// Resolves a result's column list into one binding per position.
    ///
    /// `None` marks a column that is absorbed. A field is bound at most once
    /// per row; if the result repeats a column, the last occurrence is bound
    /// and the earlier ones are absorbed.
    pub fn bindings(&self, columns: &[String]) -> Vec<Option<usize>> {
        let mut bindings: Vec<_> = columns.iter().map(|column| self.get(column)).collect();
        let mut bound = HashSet::new();

        for binding in bindings.iter_mut().rev() {
            if let Some(index) = *binding {
                if !bound.insert(index) {
                    *binding = None;
                }
            }
        }

        bindings
    }
}
