//! Utility functions for randomly generating datasets

use clusterviz::{Record, Table, Value};
use ndarray::{s, Array, Array2, ArrayBase, Data, Ix1, Ix2};
use ndarray_rand::{
    rand::Rng,
    rand_distr::{Distribution, StandardNormal},
    RandomExt,
};

/// Name of the categorical field written by [`blobs_table`]
pub const ORIGIN_FIELD: &str = "origin";

/// Special case of `blobs_with_distribution` with a standard normal distribution.
pub fn blobs(
    blob_size: usize,
    blob_centroids: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    rng: &mut impl Rng,
) -> Array2<f64> {
    blobs_with_distribution(blob_size, blob_centroids, StandardNormal, rng)
}

/// Given an input matrix `blob_centroids`, with shape `(n_blobs, n_features)`,
/// generate `blob_size` data points (a "blob") around each of the blob centroids.
///
/// More specifically, each blob is formed by `blob_size` points sampled from a distribution
/// centered in the blob centroid. Rows are grouped by blob, in centroid order.
///
/// `blobs` can be used to quickly assemble a synthetic dataset to test or
/// benchmark clustering on a best-case scenario input.
pub fn blobs_with_distribution(
    blob_size: usize,
    blob_centroids: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    distribution: impl Distribution<f64> + Clone,
    rng: &mut impl Rng,
) -> Array2<f64> {
    let (n_centroids, n_features) = blob_centroids.dim();
    let mut blobs: Array2<f64> = Array2::zeros((n_centroids * blob_size, n_features));

    for (blob_index, blob_centroid) in blob_centroids.rows().into_iter().enumerate() {
        let blob = make_blob(blob_size, &blob_centroid, distribution.clone(), rng);

        let indexes = s![blob_index * blob_size..(blob_index + 1) * blob_size, ..];
        blobs.slice_mut(indexes).assign(&blob);
    }
    blobs
}

/// Generate `blob_size` data points (a "blob") around `blob_centroid` using the given distribution.
fn make_blob(
    blob_size: usize,
    blob_centroid: &ArrayBase<impl Data<Elem = f64>, Ix1>,
    distribution: impl Distribution<f64>,
    rng: &mut impl Rng,
) -> Array2<f64> {
    let shape = (blob_size, blob_centroid.len());
    let origin_blob: Array2<f64> = Array::random_using(shape, distribution, rng);
    origin_blob + blob_centroid
}

/// Gaussian blobs as a [`Table`]
///
/// Every row holds one numeric field per entry of `field_names`, in that order, followed by an
/// [`ORIGIN_FIELD`] text field with the index of the blob the row was sampled from.
///
/// # Panics
///
/// If `field_names` does not have one name per column of `blob_centroids`.
///
/// ```
/// use clusterviz_datasets::generate::blobs_table;
/// use ndarray::array;
/// use ndarray_rand::rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256Plus;
///
/// let mut rng = Xoshiro256Plus::seed_from_u64(7);
/// let table = blobs_table(5, &array![[0., 0.], [10., 10.]], &["x", "y"], &mut rng);
/// assert_eq!(table.nrows(), 10);
/// assert_eq!(table.field_names(), vec!["x", "y", "origin"]);
/// ```
pub fn blobs_table(
    blob_size: usize,
    blob_centroids: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    field_names: &[&str],
    rng: &mut impl Rng,
) -> Table {
    assert_eq!(
        field_names.len(),
        blob_centroids.ncols(),
        "one field name is needed per feature"
    );
    let points = blobs(blob_size, blob_centroids, rng);

    points
        .rows()
        .into_iter()
        .enumerate()
        .map(|(idx, row)| {
            let mut record: Record = field_names
                .iter()
                .zip(row.iter())
                .map(|(&name, &value)| (name, Value::Number(value)))
                .collect();
            let origin = if blob_size == 0 { 0 } else { idx / blob_size };
            record.insert(ORIGIN_FIELD, Value::Text(origin.to_string()));
            record
        })
        .collect()
}
