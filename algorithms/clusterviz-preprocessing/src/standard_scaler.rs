//! Standard (z-score) scaling

use crate::error::{Error, Result};
use approx::abs_diff_eq;
use clusterviz::dataset::{select_fields, unique_fields, Table, Value};
use clusterviz::traits::{Fit, Transformer};
use clusterviz::Float;
use ndarray::{Array1, Array2, ArrayBase, Axis, Data, Ix2, Zip};
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Standard scaler: learns the per-feature mean and standard deviation of a dataset, producing a
/// [fitted scaler](FittedStandardScaler) which rescales features to zero mean and unit variance.
///
/// Means and standard deviations are computed independently for every feature (column), with the
/// population formula (no degrees-of-freedom correction). Constant features are centered but not
/// scaled.
///
/// ### Example
///
/// ```rust
/// use clusterviz::traits::{Fit, Transformer};
/// use clusterviz_preprocessing::StandardScaler;
/// use ndarray::array;
///
/// let records = array![[1., -1., 2.], [2., 0., 0.], [0., 1., -1.]];
/// // Learn scaling parameters
/// let scaler = StandardScaler::standard().fit(&records).unwrap();
/// // scale records according to parameters
/// let scaled = scaler.transform(records);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct StandardScaler {
    with_mean: bool,
    with_std: bool,
}

impl Default for StandardScaler {
    fn default() -> Self {
        Self::standard()
    }
}

impl StandardScaler {
    /// Subtracts the mean of each feature and scales it by the inverse of its standard deviation
    pub fn standard() -> Self {
        Self {
            with_mean: true,
            with_std: true,
        }
    }

    /// Scales each feature by the inverse of its standard deviation, without centering
    pub fn standard_no_mean() -> Self {
        Self {
            with_mean: false,
            with_std: true,
        }
    }

    /// Subtracts the mean of each feature without scaling it
    pub fn standard_no_std() -> Self {
        Self {
            with_mean: true,
            with_std: false,
        }
    }

    /// Learns scaling parameters for the named numeric fields of a table.
    ///
    /// Fails with the field selection error if any of `fields` is missing from a row or not
    /// numeric, and with `Error::NotEnoughSamples` for an empty table.
    pub fn fit_fields<S: AsRef<str>>(
        &self,
        table: &Table,
        fields: &[S],
    ) -> Result<FittedTableScaler> {
        let fields = unique_fields(fields);
        let records = select_fields(table, &fields)?;
        let scaler: FittedStandardScaler<f64> = self.fit(&records)?;

        Ok(FittedTableScaler { fields, scaler })
    }
}

impl<F: Float, D: Data<Elem = F>> Fit<ArrayBase<D, Ix2>, Error> for StandardScaler {
    type Object = FittedStandardScaler<F>;

    /// Fits the scaler on `records`. Returns an error if there are no samples.
    fn fit(&self, records: &ArrayBase<D, Ix2>) -> Result<Self::Object> {
        FittedStandardScaler::new(records, self.with_mean, self.with_std)
    }
}

/// The result of fitting a [standard scaler](StandardScaler).
/// Scales datasets with the parameters learned during fitting.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct FittedStandardScaler<F: Float> {
    offsets: Array1<F>,
    scales: Array1<F>,
}

impl<F: Float> FittedStandardScaler<F> {
    pub(crate) fn new<D: Data<Elem = F>>(
        records: &ArrayBase<D, Ix2>,
        with_mean: bool,
        with_std: bool,
    ) -> Result<Self> {
        let means = records.mean_axis(Axis(0)).ok_or(Error::NotEnoughSamples)?;
        let offsets = if with_mean {
            means
        } else {
            Array1::zeros(records.ncols())
        };

        let scales = if with_std {
            let mut scales = records.std_axis(Axis(0), F::zero());
            for (feature, scale) in scales.iter_mut().enumerate() {
                if abs_diff_eq!(*scale, F::zero()) {
                    // if feature is constant then don't scale
                    warn!(feature, "constant feature is left unscaled");
                    *scale = F::one();
                } else {
                    *scale = F::one() / *scale;
                }
            }
            scales
        } else {
            Array1::ones(records.ncols())
        };

        debug!(
            nsamples = records.nrows(),
            nfeatures = records.ncols(),
            "fitted standard scaler"
        );

        Ok(Self { offsets, scales })
    }

    /// Array of size `n_features` that contains the offset that will be subtracted to each feature
    pub fn offsets(&self) -> &Array1<F> {
        &self.offsets
    }

    /// Array of size `n_features` that contains the scale that will be applied to each feature
    pub fn scales(&self) -> &Array1<F> {
        &self.scales
    }
}

impl<F: Float> Transformer<Array2<F>, Array2<F>> for FittedStandardScaler<F> {
    /// Scales an array of size (nsamples, nfeatures) according to the scaler's `offsets` and `scales`.
    /// Panics if the shape of the input array is not compatible with the shape of the dataset used for fitting.
    fn transform(&self, x: Array2<F>) -> Array2<F> {
        if x.is_empty() {
            return x;
        }
        let mut x = x;
        Zip::from(x.columns_mut())
            .and(self.offsets())
            .and(self.scales())
            .for_each(|mut col, &offset, &scale| {
                col.mapv_inplace(|el| (el - offset) * scale);
            });
        x
    }
}

/// A standard scaler fitted on named fields of a [`Table`].
///
/// Transforming a table returns a new table in which the fitted fields are replaced by their
/// scaled values; every other field, and the input table, is left as it was.
#[derive(Clone, Debug, PartialEq)]
pub struct FittedTableScaler {
    fields: Vec<String>,
    scaler: FittedStandardScaler<f64>,
}

impl FittedTableScaler {
    /// The scaled fields, in column order of [`scaler`](FittedTableScaler::scaler)
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn scaler(&self) -> &FittedStandardScaler<f64> {
        &self.scaler
    }
}

impl<'a> Transformer<&'a Table, Result<Table>> for FittedTableScaler {
    fn transform(&self, table: &'a Table) -> Result<Table> {
        let records = select_fields(table, &self.fields)?;
        let scaled = self.scaler.transform(records);

        let mut scaled_table = table.clone();
        for (record, row) in scaled_table.records_mut().iter_mut().zip(scaled.rows()) {
            for (field, &value) in self.fields.iter().zip(row.iter()) {
                record.insert(field.as_str(), Value::Number(value));
            }
        }
        Ok(scaled_table)
    }
}

/// Returns a copy of `table` with `fields` rescaled to zero mean and unit variance.
///
/// ```rust
/// use clusterviz::{Record, Table, Value};
/// use clusterviz_preprocessing::standardize;
///
/// let table: Table = vec![
///     Record::new().with("x", 1.).with("name", "a"),
///     Record::new().with("x", 3.).with("name", "b"),
/// ]
/// .into();
///
/// let scaled = standardize(&table, &["x"]).unwrap();
/// assert_eq!(scaled[0].get("x"), Some(&Value::Number(-1.)));
/// assert_eq!(scaled[1].get("name"), Some(&Value::from("b")));
/// assert_eq!(table[0].get("x"), Some(&Value::Number(1.)));
/// ```
pub fn standardize<S: AsRef<str>>(table: &Table, fields: &[S]) -> Result<Table> {
    StandardScaler::standard()
        .fit_fields(table, fields)?
        .transform(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use clusterviz::error::{Error as CoreError, FieldValueError};
    use clusterviz::Record;
    use ndarray::{array, Array2};

    #[test]
    fn test_standard_scaler() {
        let records = array![[1., -1., 2.], [2., 0., 0.], [0., 1., -1.]];
        let scaler = StandardScaler::standard().fit(&records).unwrap();
        assert_abs_diff_eq!(*scaler.offsets(), array![1., 0., 1. / 3.]);
        assert_abs_diff_eq!(
            *scaler.scales(),
            array![1. / 0.81, 1. / 0.81, 1. / 1.24],
            epsilon = 1e-2
        );
        let transformed = scaler.transform(records);
        let means = transformed.mean_axis(Axis(0)).unwrap();
        let std_devs = transformed.std_axis(Axis(0), 0.);
        assert_abs_diff_eq!(means, array![0., 0., 0.], epsilon = 1e-12);
        assert_abs_diff_eq!(std_devs, array![1., 1., 1.], epsilon = 1e-12);
    }

    #[test]
    fn test_standard_scaler_no_mean() {
        let records = array![[1., -1., 2.], [2., 0., 0.], [0., 1., -1.]];
        let scaler = StandardScaler::standard_no_mean().fit(&records).unwrap();
        assert_abs_diff_eq!(*scaler.offsets(), array![0., 0., 0.]);
        let transformed = scaler.transform(records);
        let std_devs = transformed.std_axis(Axis(0), 0.);
        assert_abs_diff_eq!(std_devs, array![1., 1., 1.], epsilon = 1e-12);
    }

    #[test]
    fn test_standard_scaler_no_std() {
        let records = array![[1., -1., 2.], [2., 0., 0.], [0., 1., -1.]];
        let scaler = StandardScaler::standard_no_std().fit(&records).unwrap();
        assert_abs_diff_eq!(*scaler.scales(), array![1., 1., 1.]);
        let transformed = scaler.transform(records);
        let means = transformed.mean_axis(Axis(0)).unwrap();
        let std_devs = transformed.std_axis(Axis(0), 0.);
        assert_abs_diff_eq!(means, array![0., 0., 0.], epsilon = 1e-12);
        assert_abs_diff_eq!(std_devs, array![0.81, 0.81, 1.24], epsilon = 1e-2);
    }

    #[test]
    fn constant_feature_is_only_centered() {
        let records = array![[4., 1.], [4., 3.]];
        let scaler = StandardScaler::standard().fit(&records).unwrap();
        let transformed = scaler.transform(records);
        assert_abs_diff_eq!(transformed, array![[0., -1.], [0., 1.]]);
    }

    #[test]
    fn empty_records_cannot_be_fitted() {
        let records: Array2<f64> = Array2::zeros((0, 3));
        let res = StandardScaler::standard().fit(&records);
        assert!(matches!(res, Err(Error::NotEnoughSamples)));
    }

    fn table() -> Table {
        vec![
            Record::new().with("a", 1.).with("b", 10.).with("kind", "x"),
            Record::new().with("a", 2.).with("b", 30.).with("kind", "y"),
            Record::new().with("a", 6.).with("b", 20.).with("kind", "x"),
            Record::new().with("a", "3").with("b", 60.).with("kind", "z"),
        ]
        .into()
    }

    fn column(table: &Table, field: &str) -> Array1<f64> {
        table
            .iter()
            .map(|r| r.get(field).unwrap().to_number().unwrap())
            .collect()
    }

    #[test]
    fn standardized_fields_have_zero_mean_unit_variance() {
        let scaled = standardize(&table(), &["a", "b"]).unwrap();

        for field in &["a", "b"] {
            let col = column(&scaled, field);
            assert_abs_diff_eq!(col.mean().unwrap(), 0., epsilon = 1e-12);
            assert_abs_diff_eq!(col.var(0.), 1., epsilon = 1e-12);
        }
    }

    #[test]
    fn table_keeps_shape_and_untouched_fields() {
        let input = table();
        let before = input.clone();
        let scaled = standardize(&input, &["a"]).unwrap();

        assert_eq!(input, before);
        assert_eq!(scaled.nrows(), input.nrows());
        assert_eq!(scaled.field_names(), input.field_names());
        assert_eq!(column(&scaled, "b"), column(&input, "b"));
        assert_eq!(scaled[3].get("kind"), Some(&Value::from("z")));
    }

    #[test]
    fn fitted_table_scaler_applies_to_other_tables() {
        let scaler = StandardScaler::standard()
            .fit_fields(&table(), &["b", "b"])
            .unwrap();
        assert_eq!(scaler.fields(), &["b".to_string()]);

        let other: Table = vec![Record::new().with("b", 30.)].into();
        let scaled = scaler.transform(&other).unwrap();
        let expected = (30. - 30.) * scaler.scaler().scales()[0];
        assert_eq!(scaled[0].get("b"), Some(&Value::Number(expected)));
    }

    #[test]
    fn non_numeric_field_is_reported() {
        let res = standardize(&table(), &["a", "kind"]);
        assert!(matches!(
            res,
            Err(Error::ClustervizError(CoreError::InvalidFieldValue {
                reason: FieldValueError::NotNumeric(_),
                ..
            }))
        ));
    }
}
