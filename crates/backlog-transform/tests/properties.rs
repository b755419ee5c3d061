//! Property tests for the rename-then-project contract.

use std::collections::BTreeSet;
use std::sync::Arc;

use backlog_transform::{BacklogExport, ColumnMapping, ExportError};
use polars::prelude::{Column, DataFrame};
use proptest::prelude::*;

/// Builds a frame whose column `i` holds `i * 100 + row`.
fn frame(names: &[String], rows: usize) -> DataFrame {
    let columns = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let values: Vec<i64> = (0..rows).map(|row| (i * 100 + row) as i64).collect();
            Column::new(name.as_str().into(), values)
        })
        .collect();
    DataFrame::new(columns).expect("frame")
}

fn values(df: &DataFrame, name: &str) -> Vec<Option<i64>> {
    df.column(name)
        .expect("column")
        .i64()
        .expect("i64 column")
        .into_iter()
        .collect()
}

/// Column names, a per-column "is mapped" flag and a row count.
fn layout() -> impl Strategy<Value = (Vec<String>, Vec<bool>, usize)> {
    (
        prop::collection::btree_set("[A-Z][a-z]{1,6}", 1..8),
        0usize..5,
    )
        .prop_flat_map(|(names, rows): (BTreeSet<String>, usize)| {
            let names: Vec<String> = names.into_iter().collect();
            let len = names.len();
            (
                Just(names),
                prop::collection::vec(any::<bool>(), len),
                Just(rows),
            )
        })
}

/// Maps flagged columns, in reverse table order, to `Report <name>`.
fn mapping_for(names: &[String], mapped: &[bool]) -> ColumnMapping {
    ColumnMapping::from_pairs(
        names
            .iter()
            .zip(mapped)
            .rev()
            .filter(|(_, keep)| **keep)
            .map(|(name, _)| (name.clone(), format!("Report {name}"))),
    )
}

proptest! {
    #[test]
    fn complete_mapping_yields_exactly_targets((names, mapped, rows) in layout()) {
        let original = frame(&names, rows);
        let mapping = mapping_for(&names, &mapped);
        let mut export = BacklogExport::new(original.clone(), Arc::new(mapping.clone()));

        export.generate().expect("generate");

        prop_assert_eq!(export.column_names(), mapping.target_names().to_vec());
        for (source, target) in mapping.pairs() {
            prop_assert_eq!(values(export.table(), target), values(&original, source));
        }
    }

    #[test]
    fn absent_source_leaves_table_unchanged((names, mapped, rows) in layout()) {
        let mut pairs: Vec<(String, String)> = mapping_for(&names, &mapped)
            .pairs()
            .map(|(source, target)| (source.to_string(), target.to_string()))
            .collect();
        pairs.push(("Absent Column".to_string(), "Report Absent".to_string()));
        let mut export = BacklogExport::new(frame(&names, rows), Arc::new(ColumnMapping::from_pairs(pairs)));
        let before = export.column_names();

        let err = export.generate().expect_err("absent source");

        prop_assert_eq!(
            err,
            ExportError::MissingSourceColumn { missing: vec!["Absent Column".to_string()] }
        );
        prop_assert_eq!(export.column_names(), before);
        prop_assert!(!export.is_generated());
    }
}
