use ndarray::{ArrayBase, Data, Ix1};
use tracing::debug;

use super::{Table, Value};
use crate::error::{Error, Result};

/// Name of the categorical field holding the cluster label of each row
pub const CLUSTER_FIELD: &str = "cluster";

/// Writes a cluster assignment back onto the rows of `table`.
///
/// Row `i` gets its [`CLUSTER_FIELD`] set to the decimal rendering of `labels[i]`, replacing any
/// previous label. The assignment has to line up with the rows exactly: a length mismatch means
/// rows were dropped or duplicated between selection and clustering, so the table is left
/// untouched and `Error::LabelLengthMismatch` is returned.
pub fn write_labels(
    table: &mut Table,
    labels: &ArrayBase<impl Data<Elem = usize>, Ix1>,
) -> Result<()> {
    if labels.len() != table.nrows() {
        return Err(Error::LabelLengthMismatch {
            labels: labels.len(),
            rows: table.nrows(),
        });
    }

    for (record, label) in table.records_mut().iter_mut().zip(labels.iter()) {
        record.insert(CLUSTER_FIELD, Value::Text(label.to_string()));
    }
    debug!(rows = labels.len(), "wrote cluster labels");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Record;
    use ndarray::array;

    fn table(n: usize) -> Table {
        (0..n)
            .map(|i| Record::new().with("x", i as f64))
            .collect()
    }

    #[test]
    fn labels_are_decimal_strings() {
        let mut table = table(3);
        write_labels(&mut table, &array![0, 10, 2]).unwrap();

        let labels: Vec<_> = table
            .iter()
            .map(|r| r.get(CLUSTER_FIELD).and_then(Value::as_text))
            .collect();
        assert_eq!(labels, vec![Some("0"), Some("10"), Some("2")]);
    }

    #[test]
    fn writing_twice_is_idempotent() {
        let labels = array![1, 0, 1, 1];
        let mut once = table(4);
        write_labels(&mut once, &labels).unwrap();
        let mut twice = once.clone();
        write_labels(&mut twice, &labels).unwrap();

        assert_eq!(once, twice);
        assert_eq!(twice[0].len(), 2);
    }

    #[test]
    fn previous_labels_are_overwritten() {
        let mut table = table(2);
        write_labels(&mut table, &array![0, 0]).unwrap();
        write_labels(&mut table, &array![1, 0]).unwrap();

        assert_eq!(table[0].get(CLUSTER_FIELD), Some(&Value::from("1")));
        assert_eq!(table.field_names(), vec!["x", CLUSTER_FIELD]);
    }

    #[test]
    fn mismatched_lengths_leave_table_untouched() {
        let mut table = table(3);
        let before = table.clone();

        let err = write_labels(&mut table, &array![0, 1]).unwrap_err();
        assert!(matches!(
            err,
            Error::LabelLengthMismatch { labels: 2, rows: 3 }
        ));
        assert_eq!(table, before);
    }
}
