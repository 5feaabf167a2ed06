use ndarray::Array2;
use tracing::debug;

use super::Table;
use crate::error::{Error, FieldValueError, Result};

/// Returns `variables` with duplicates removed, keeping the first occurrence of each name.
///
/// This is the column order of the matrix produced by [`select_fields`].
pub fn unique_fields<S: AsRef<str>>(variables: &[S]) -> Vec<String> {
    let mut fields: Vec<String> = Vec::with_capacity(variables.len());
    for name in variables {
        let name = name.as_ref();
        if !fields.iter().any(|known| known == name) {
            fields.push(name.to_string());
        }
    }
    fields
}

/// Extracts the numeric matrix used for clustering from a table.
///
/// The result has shape `(nrows, nvariables)`, with row `i` holding the values of record `i` for
/// each of `variables`, in the order given by [`unique_fields`]. Every requested field must be
/// present in every row and convertible to a finite number; the first offending cell is reported
/// as `Error::InvalidFieldValue`.
///
/// ```
/// use clusterviz::{select_fields, Record, Table};
/// use ndarray::array;
///
/// let table: Table = vec![
///     Record::new().with("x", 1.).with("label", "a").with("y", "2"),
///     Record::new().with("x", 3.).with("label", "b").with("y", 4.),
/// ]
/// .into();
///
/// let records = select_fields(&table, &["y", "x"]).unwrap();
/// assert_eq!(records, array![[2., 1.], [4., 3.]]);
/// ```
pub fn select_fields<S: AsRef<str>>(table: &Table, variables: &[S]) -> Result<Array2<f64>> {
    let fields = unique_fields(variables);
    if fields.is_empty() {
        return Err(Error::Parameters(
            "at least one variable has to be selected".to_string(),
        ));
    }

    let mut values = Vec::with_capacity(table.nrows() * fields.len());
    for (row, record) in table.iter().enumerate() {
        for field in &fields {
            let value = record
                .get(field)
                .ok_or(FieldValueError::Missing)
                .and_then(|value| value.to_number())
                .map_err(|reason| Error::InvalidFieldValue {
                    row,
                    field: field.clone(),
                    reason,
                })?;
            values.push(value);
        }
    }

    debug!(
        rows = table.nrows(),
        fields = ?fields,
        "selected numeric fields"
    );

    Ok(Array2::from_shape_vec((table.nrows(), fields.len()), values)?)
}
