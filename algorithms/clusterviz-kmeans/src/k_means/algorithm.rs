use crate::distance::{Distance, L2Dist};
use crate::k_means::{KMeansParams, KMeansValidParams};
use crate::{k_means::errors::KMeansError, KMeansInit};
use clusterviz::{prelude::*, Float};
use ndarray::{Array1, Array2, ArrayBase, Axis, Data, DataMut, Ix1, Ix2, Zip};
use ndarray_rand::rand::{self, Rng, SeedableRng};
use rand_xoshiro::Xoshiro256Plus;
use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
/// K-means clustering aims to partition a set of unlabeled observations into clusters,
/// where each observation belongs to the cluster with the nearest mean.
///
/// The mean of the points within a cluster is called *centroid*.
///
/// Given the set of centroids, you can assign an observation to a cluster
/// choosing the nearest centroid.
///
/// ## Standard algorithm
///
/// K-means is an iterative algorithm: it progressively refines the choice of centroids.
///
/// It's guaranteed to converge, even though it might not find the optimal set of centroids
/// (unfortunately it can get stuck in a local minimum, finding the optimal minimum if NP-hard!).
///
/// There are three steps in the standard algorithm:
/// - initialisation step: select initial centroids using one of the [`KMeansInit`] strategies;
/// - assignment step: assign each observation to the nearest cluster
///                    (minimum distance between the observation and the cluster's centroid);
/// - update step: recompute the centroid of each cluster as the mean of its members. A cluster
///                that lost all of its members keeps its previous centroid.
///
/// The initialisation step is a one-off, done at the very beginning.
/// Assignment and update are repeated in a loop until convergence is reached (no centroid
/// moved by more than `tolerance`, measured in reduced distance) or we exceed the
/// `max_n_iterations`. Running out of iterations is not an error: the model reports
/// [`converged`](KMeans::converged) as `false` and keeps the last centroids.
///
/// ## Parallelisation
///
/// The work performed by the assignment step does not require any coordination:
/// the closest centroid for each point can be computed independently from the
/// closest centroid for any of the remaining points, so `fit` runs it in parallel thanks
/// to the `rayon` feature in `ndarray`.
///
/// ## Tutorial
///
/// ```
/// use clusterviz::traits::{Fit, Predict};
/// use clusterviz_kmeans::{KMeans, KMeansInit};
/// use clusterviz_datasets::generate;
/// use ndarray::{array, Axis};
/// use ndarray_rand::rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256Plus;
/// use approx::assert_abs_diff_eq;
///
/// let mut rng = Xoshiro256Plus::seed_from_u64(42);
///
/// // three blobs of 100 points each, centered around `expected_centroids`
/// let expected_centroids = array![[0., 1.], [-10., 20.], [-1., 10.]];
/// let observations = generate::blobs(100, &expected_centroids, &mut rng);
///
/// let model = KMeans::params(3)
///     .seed(42)
///     .init_method(KMeansInit::MostDistant)
///     .tolerance(1e-4)
///     .fit(&observations)
///     .expect("KMeans fitted");
///
/// let memberships = model.memberships();
/// assert_eq!(memberships.len(), 300);
/// assert!(memberships.iter().all(|&c| c < 3));
///
/// // new points are assigned to the nearest centroid
/// let closest: usize = model.predict(&array![-9., 20.5]);
/// let centroid = model.centroids().index_axis(Axis(0), closest);
/// assert_abs_diff_eq!(centroid.to_owned(), array![-10., 20.], epsilon = 0.5);
/// ```
pub struct KMeans<F: Float, D: Distance<F>> {
    centroids: Array2<F>,
    memberships: Array1<usize>,
    errors: Array1<F>,
    cluster_sizes: Array1<usize>,
    inertia: F,
    n_iterations: u64,
    converged: bool,
    dist_fn: D,
}

impl<F: Float> KMeans<F, L2Dist> {
    pub fn params(nclusters: usize) -> KMeansParams<F, L2Dist> {
        KMeansParams::new(nclusters, L2Dist)
    }
}

impl<F: Float, D: Distance<F>> KMeans<F, D> {
    pub fn params_with(nclusters: usize, dist_fn: D) -> KMeansParams<F, D> {
        KMeansParams::new(nclusters, dist_fn)
    }

    /// Return the set of centroids as a 2-dimensional matrix with shape
    /// `(n_centroids, n_features)`.
    pub fn centroids(&self) -> &Array2<F> {
        &self.centroids
    }

    /// Cluster index of every training observation, in training order
    pub fn memberships(&self) -> &Array1<usize> {
        &self.memberships
    }

    /// Sum of the reduced distances between each centroid and its members. With the default
    /// [`L2Dist`] this is the sum of squared distances.
    pub fn errors(&self) -> &Array1<F> {
        &self.errors
    }

    /// Return the number of training points belonging to each cluster
    pub fn cluster_sizes(&self) -> &Array1<usize> {
        &self.cluster_sizes
    }

    /// Return the sum of reduced distances between each training point and its closest
    /// centroid, averaged across all training points.
    pub fn inertia(&self) -> F {
        self.inertia
    }

    /// Number of assignment/update iterations performed
    pub fn n_iterations(&self) -> u64 {
        self.n_iterations
    }

    /// Whether the centroids settled before `max_n_iterations` was reached
    pub fn converged(&self) -> bool {
        self.converged
    }

    pub fn dist_fn(&self) -> &D {
        &self.dist_fn
    }

    /// Consumes the model, returning the training memberships
    pub fn into_memberships(self) -> Array1<usize> {
        self.memberships
    }
}

impl<F: Float, DA: Data<Elem = F>, D: Distance<F>> Fit<ArrayBase<DA, Ix2>, KMeansError>
    for KMeansValidParams<F, D>
{
    type Object = KMeans<F, D>;

    /// Given an input matrix `observations`, with shape `(n_observations, n_features)`,
    /// `fit` identifies `n_clusters` centroids based on the training data distribution.
    ///
    /// An instance of `KMeans` is returned.
    fn fit(&self, observations: &ArrayBase<DA, Ix2>) -> Result<Self::Object, KMeansError> {
        let observations = observations.view();
        let (n_samples, n_features) = observations.dim();
        let n_clusters = self.n_clusters();

        if n_samples < n_clusters {
            return Err(KMeansError::InsufficientData {
                n_samples,
                n_clusters,
            });
        }
        if n_features == 0 {
            return Err(KMeansError::Empty);
        }
        if let KMeansInit::Precomputed(centroids) = self.init_method() {
            if centroids.dim() != (n_clusters, n_features) {
                return Err(KMeansError::InvalidInitialCentroids {
                    expected: (n_clusters, n_features),
                    actual: centroids.dim(),
                });
            }
        }

        let mut rng = match self.seed() {
            Some(seed) => Xoshiro256Plus::seed_from_u64(seed),
            None => Xoshiro256Plus::seed_from_u64(rand::thread_rng().gen()),
        };

        let mut centroids =
            self.init_method()
                .run(self.dist_fn(), n_clusters, observations, &mut rng);
        let mut memberships = Array1::zeros(n_samples);
        let mut dists = Array1::zeros(n_samples);
        let mut n_iterations = 0;
        let mut converged = false;

        while n_iterations < self.max_n_iterations() {
            n_iterations += 1;
            update_memberships_and_dists(
                self.dist_fn(),
                &centroids,
                &observations,
                &mut memberships,
                &mut dists,
            );
            let new_centroids = compute_centroids(&centroids, &observations, &memberships);
            let shift = max_shift(self.dist_fn(), &centroids, &new_centroids);
            centroids = new_centroids;

            debug!(iteration = n_iterations, shift = %shift, "k-means step");
            if shift <= self.tolerance() {
                converged = true;
                break;
            }
        }
        if !converged {
            warn!(
                max_n_iterations = self.max_n_iterations(),
                "k-means stopped before the centroids settled"
            );
        }

        // memberships must describe the returned centroids
        update_memberships_and_dists(
            self.dist_fn(),
            &centroids,
            &observations,
            &mut memberships,
            &mut dists,
        );

        let mut errors = Array1::zeros(n_clusters);
        let mut cluster_sizes = Array1::zeros(n_clusters);
        Zip::from(&memberships)
            .and(&dists)
            .for_each(|&cluster, &dist| {
                errors[cluster] += dist;
                cluster_sizes[cluster] += 1;
            });

        Ok(KMeans {
            centroids,
            memberships,
            errors,
            cluster_sizes,
            inertia: dists.sum() / F::cast(n_samples),
            n_iterations,
            converged,
            dist_fn: self.dist_fn().clone(),
        })
    }
}

impl<F: Float, DA: Data<Elem = F>, D: Distance<F>> Transformer<&ArrayBase<DA, Ix2>, Array1<F>>
    for KMeans<F, D>
{
    /// Given an input matrix `observations`, with shape `(n_observations, n_features)`,
    /// `transform` returns, for each observation, its reduced distance to its centroid.
    fn transform(&self, observations: &ArrayBase<DA, Ix2>) -> Array1<F> {
        let mut dists = Array1::zeros(observations.nrows());
        update_min_dists(
            &self.dist_fn,
            &self.centroids,
            &observations.view(),
            &mut dists,
        );
        dists
    }
}

impl<F: Float, DA: Data<Elem = F>, D: Distance<F>> PredictInplace<ArrayBase<DA, Ix2>, Array1<usize>>
    for KMeans<F, D>
{
    /// Given an input matrix `observations`, with shape `(n_observations, n_features)`,
    /// `predict` returns, for each observation, the index of the closest cluster/centroid.
    ///
    /// You can retrieve the centroid associated to an index using the
    /// [`centroids` method](#method.centroids).
    fn predict_inplace(&self, observations: &ArrayBase<DA, Ix2>, memberships: &mut Array1<usize>) {
        assert_eq!(
            observations.nrows(),
            memberships.len(),
            "The number of data points must match the number of memberships."
        );

        update_cluster_memberships(
            &self.dist_fn,
            &self.centroids,
            &observations.view(),
            memberships,
        );
    }

    fn default_target(&self, x: &ArrayBase<DA, Ix2>) -> Array1<usize> {
        Array1::zeros(x.nrows())
    }
}

impl<F: Float, DA: Data<Elem = F>, D: Distance<F>> PredictInplace<ArrayBase<DA, Ix1>, usize>
    for KMeans<F, D>
{
    /// Given one input observation, return the index of its closest cluster
    fn predict_inplace(&self, observation: &ArrayBase<DA, Ix1>, membership: &mut usize) {
        *membership = closest_centroid(&self.dist_fn, &self.centroids, observation).0;
    }

    fn default_target(&self, _x: &ArrayBase<DA, Ix1>) -> usize {
        0
    }
}

/// `compute_centroids` returns a 2-dimensional array,
/// where the i-th row is the mean of the observations assigned to the i-th cluster.
/// Empty clusters keep their old centroid.
fn compute_centroids<F: Float>(
    old_centroids: &Array2<F>,
    // (n_observations, n_features)
    observations: &ArrayBase<impl Data<Elem = F>, Ix2>,
    // (n_observations,)
    cluster_memberships: &ArrayBase<impl Data<Elem = usize>, Ix1>,
) -> Array2<F> {
    let n_clusters = old_centroids.nrows();
    let mut counts: Array1<usize> = Array1::zeros(n_clusters);
    let mut centroids = Array2::zeros((n_clusters, observations.ncols()));

    Zip::from(observations.rows())
        .and(cluster_memberships)
        .for_each(|observation, &cluster_membership| {
            let mut centroid = centroids.row_mut(cluster_membership);
            centroid += &observation;
            counts[cluster_membership] += 1;
        });

    Zip::from(centroids.rows_mut())
        .and(old_centroids.rows())
        .and(&counts)
        .for_each(|mut centroid, old_centroid, &cnt| {
            if cnt == 0 {
                centroid.assign(&old_centroid);
            } else {
                centroid /= F::cast(cnt);
            }
        });
    centroids
}

/// Largest reduced distance any centroid moved by
fn max_shift<F: Float, D: Distance<F>>(
    dist_fn: &D,
    old_centroids: &Array2<F>,
    new_centroids: &Array2<F>,
) -> F {
    old_centroids
        .rows()
        .into_iter()
        .zip(new_centroids.rows())
        .map(|(old, new)| dist_fn.rdistance(old, new))
        .fold(F::zero(), |acc, shift| if shift > acc { shift } else { acc })
}

// Update `cluster_memberships` with the index of the cluster each observation belongs to.
pub(crate) fn update_cluster_memberships<F: Float, D: Distance<F>>(
    dist_fn: &D,
    centroids: &ArrayBase<impl Data<Elem = F> + Sync, Ix2>,
    observations: &ArrayBase<impl Data<Elem = F> + Sync, Ix2>,
    cluster_memberships: &mut ArrayBase<impl DataMut<Elem = usize>, Ix1>,
) {
    Zip::from(observations.axis_iter(Axis(0)))
        .and(cluster_memberships)
        .par_for_each(|observation, cluster_membership| {
            *cluster_membership = closest_centroid(dist_fn, centroids, &observation).0
        });
}

// Updates `dists` with the distance of each observation from its closest centroid.
pub(crate) fn update_min_dists<F: Float, D: Distance<F>>(
    dist_fn: &D,
    centroids: &ArrayBase<impl Data<Elem = F> + Sync, Ix2>,
    observations: &ArrayBase<impl Data<Elem = F> + Sync, Ix2>,
    dists: &mut ArrayBase<impl DataMut<Elem = F>, Ix1>,
) {
    Zip::from(observations.axis_iter(Axis(0)))
        .and(dists)
        .par_for_each(|observation, dist| {
            *dist = closest_centroid(dist_fn, centroids, &observation).1
        });
}

// Efficient combination of `update_cluster_memberships` and `update_min_dists`.
pub(crate) fn update_memberships_and_dists<F: Float, D: Distance<F>>(
    dist_fn: &D,
    centroids: &ArrayBase<impl Data<Elem = F> + Sync, Ix2>,
    observations: &ArrayBase<impl Data<Elem = F> + Sync, Ix2>,
    cluster_memberships: &mut ArrayBase<impl DataMut<Elem = usize>, Ix1>,
    dists: &mut ArrayBase<impl DataMut<Elem = F>, Ix1>,
) {
    Zip::from(observations.axis_iter(Axis(0)))
        .and(cluster_memberships)
        .and(dists)
        .par_for_each(|observation, cluster_membership, dist| {
            let (m, d) = closest_centroid(dist_fn, centroids, &observation);
            *cluster_membership = m;
            *dist = d;
        });
}

/// Given a matrix of centroids with shape (n_centroids, n_features) and an observation,
/// return the index of the closest centroid (the index of the corresponding row in `centroids`)
/// together with its reduced distance. Ties go to the lowest index.
pub(crate) fn closest_centroid<F: Float, D: Distance<F>>(
    dist_fn: &D,
    // (n_centroids, n_features)
    centroids: &ArrayBase<impl Data<Elem = F>, Ix2>,
    // (n_features)
    observation: &ArrayBase<impl Data<Elem = F>, Ix1>,
) -> (usize, F) {
    let mut iterator = centroids.rows().into_iter().enumerate();

    let (mut closest_index, mut minimum_distance) = match iterator.next() {
        Some((idx, centroid)) => (idx, dist_fn.rdistance(centroid, observation.view())),
        None => return (0, F::infinity()),
    };

    for (centroid_index, centroid) in iterator {
        let distance = dist_fn.rdistance(centroid, observation.view());
        if distance < minimum_distance {
            closest_index = centroid_index;
            minimum_distance = distance;
        }
    }
    (closest_index, minimum_distance)
}

#[cfg(test)]
mod tests {
    use super::super::KMeansInit;
    use super::*;
    use crate::distance::L1Dist;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, concatenate, Array, Array1, Array2, Axis};
    use ndarray_rand::rand_distr::Uniform;
    use ndarray_rand::RandomExt;

    fn function_test_1d(x: &Array2<f64>) -> Array2<f64> {
        let mut y = Array2::zeros(x.dim());
        Zip::from(&mut y).and(x).for_each(|yi, &xi| {
            if xi < 0.4 {
                *yi = xi * xi;
            } else if (0.4..0.8).contains(&xi) {
                *yi = 3. * xi + 1.;
            } else {
                *yi = f64::sin(10. * xi);
            }
        });
        y
    }

    macro_rules! calc_memberships {
        ($dist:expr, $centroids:expr, $obs:expr) => {{
            let mut memberships = Array1::zeros($obs.nrows());
            update_cluster_memberships(&$dist, &$centroids, &$obs, &mut memberships);
            memberships
        }};
    }

    #[test]
    fn test_min_dists() {
        let centroids = array![[0.0, 1.0], [40.0, 10.0]];
        let observations = array![[3.0, 4.0], [1.0, 3.0], [25.0, 15.0]];
        let mut dists = Array1::zeros(observations.nrows());

        update_min_dists(&L2Dist, &centroids, &observations, &mut dists);
        assert_abs_diff_eq!(dists, array![18.0, 5.0, 250.0]);
        update_min_dists(&L1Dist, &centroids, &observations, &mut dists);
        assert_abs_diff_eq!(dists, array![6.0, 3.0, 20.0]);
    }

    fn test_diagnostics<D: Distance<f64>>(dist_fn: D) {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let xt = Array::random_using(100, Uniform::new(0., 1.0), &mut rng).insert_axis(Axis(1));
        let yt = function_test_1d(&xt);
        let data = concatenate(Axis(1), &[xt.view(), yt.view()]).unwrap();

        for init in &[
            KMeansInit::Random,
            KMeansInit::KMeansPlusPlus,
            KMeansInit::MostDistant,
        ] {
            let model = KMeans::params_with(3, dist_fn.clone())
                .seed(42)
                .init_method(init.clone())
                .fit(&data)
                .expect("KMeans fitted");

            // the stored memberships are those of the returned centroids
            let predicted = model.predict(&data);
            assert_eq!(&predicted, model.memberships());

            // per-cluster errors add up to the total reduced distance
            let total_dist = model.transform(&data).sum();
            assert_abs_diff_eq!(model.errors().sum(), total_dist, epsilon = 1e-8);
            assert_abs_diff_eq!(model.inertia(), total_dist / 100., epsilon = 1e-8);

            assert_eq!(model.cluster_sizes().sum(), 100);
            let single_cluster: usize = model.predict(&data.row(0));
            assert_eq!(single_cluster, predicted[0]);
        }
    }

    #[test]
    fn test_diagnostics_l2dist() {
        test_diagnostics(L2Dist);
    }

    #[test]
    fn test_diagnostics_l1dist() {
        test_diagnostics(L1Dist);
    }

    #[test]
    fn compute_centroids_works() {
        let cluster_size = 100;
        let n_features = 4;
        let mut rng = Xoshiro256Plus::seed_from_u64(3);

        // Let's setup a synthetic set of observations, composed of two clusters with known means
        let cluster_1: Array2<f64> = Array::random_using(
            (cluster_size, n_features),
            Uniform::new(-100., 100.),
            &mut rng,
        );
        let memberships_1 = Array1::zeros(cluster_size);
        let expected_centroid_1 = cluster_1.mean_axis(Axis(0)).unwrap();

        let cluster_2: Array2<f64> = Array::random_using(
            (cluster_size, n_features),
            Uniform::new(-100., 100.),
            &mut rng,
        );
        let memberships_2 = Array1::ones(cluster_size);
        let expected_centroid_2 = cluster_2.mean_axis(Axis(0)).unwrap();

        let observations = concatenate(Axis(0), &[cluster_1.view(), cluster_2.view()]).unwrap();
        let memberships =
            concatenate(Axis(0), &[memberships_1.view(), memberships_2.view()]).unwrap();

        let old_centroids = Array2::zeros((2, n_features));
        let centroids = compute_centroids(&old_centroids, &observations, &memberships);
        assert_abs_diff_eq!(
            centroids.index_axis(Axis(0), 0),
            expected_centroid_1,
            epsilon = 1e-5
        );
        assert_abs_diff_eq!(
            centroids.index_axis(Axis(0), 1),
            expected_centroid_2,
            epsilon = 1e-5
        );

        assert_eq!(centroids.len_of(Axis(0)), 2);
    }

    #[test]
    fn empty_cluster_keeps_its_centroid() {
        let observations = array![[1.0, 2.0]];
        let memberships = array![0];
        let old_centroids = array![[0.0, 0.0], [5.0, 5.0]];
        let centroids = compute_centroids(&old_centroids, &observations, &memberships);
        assert_abs_diff_eq!(centroids, array![[1.0, 2.0], [5.0, 5.0]]);
    }

    #[test]
    // An observation is closest to itself.
    fn nothing_is_closer_than_self() {
        let n_centroids = 20;
        let n_features = 5;
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let centroids: Array2<f64> = Array::random_using(
            (n_centroids, n_features),
            Uniform::new(-100., 100.),
            &mut rng,
        );

        let expected_memberships = (0..n_centroids).into_iter().collect::<Array1<_>>();
        assert_eq!(
            calc_memberships!(L2Dist, centroids, centroids),
            expected_memberships
        );
        assert_eq!(
            calc_memberships!(L1Dist, centroids, centroids),
            expected_memberships
        );
    }

    #[test]
    fn oracle_test_for_closest_centroid() {
        let centroids = array![[0., 0.], [1., 2.], [20., 0.], [0., 20.],];
        let observations = array![[1., 0.6], [20., 2.], [20., 0.], [7., 20.],];
        let l2_memberships = array![0, 2, 2, 3];
        let l1_memberships = array![1, 2, 2, 3];

        assert_eq!(
            calc_memberships!(L2Dist, centroids, observations),
            l2_memberships
        );
        assert_eq!(
            calc_memberships!(L1Dist, centroids, observations),
            l1_memberships
        );
    }

    #[test]
    fn lloyd_iterations_by_hand() {
        let observations = array![[0.], [1.], [10.], [11.]];
        let model = KMeans::params(2)
            .init_method(KMeansInit::Precomputed(array![[0.], [1.]]))
            .fit(&observations)
            .unwrap();

        // [0] | [7.33] -> [0.5] | [10.5] -> unchanged
        assert!(model.converged());
        assert_eq!(model.n_iterations(), 3);
        assert_abs_diff_eq!(model.centroids(), &array![[0.5], [10.5]]);
        assert_eq!(model.memberships(), &array![0, 0, 1, 1]);
        assert_abs_diff_eq!(model.errors(), &array![0.5, 0.5]);
        assert_eq!(model.cluster_sizes(), &array![2, 2]);
        assert_abs_diff_eq!(model.inertia(), 0.25);
    }

    #[test]
    fn running_out_of_iterations_is_not_an_error() {
        let observations = array![[0.], [1.], [10.], [11.]];
        let model = KMeans::params(2)
            .max_n_iterations(1)
            .init_method(KMeansInit::Precomputed(array![[0.], [1.]]))
            .fit(&observations)
            .unwrap();

        assert!(!model.converged());
        assert_eq!(model.n_iterations(), 1);
        assert_abs_diff_eq!(model.centroids(), &array![[0.], [22. / 3.]], epsilon = 1e-12);
        // memberships follow the returned centroids, not the initial ones
        assert_eq!(model.memberships(), &array![0, 0, 1, 1]);
    }

    #[test]
    fn fewer_rows_than_clusters() {
        let observations = array![[0., 1.], [2., 3.], [4., 5.]];
        let res = KMeans::params(5).fit(&observations);
        assert!(matches!(
            res,
            Err(KMeansError::InsufficientData {
                n_samples: 3,
                n_clusters: 5
            })
        ));
    }

    #[test]
    fn as_many_rows_as_clusters() {
        let observations = array![[0., 1.], [2., 3.], [4., 5.]];
        let model = KMeans::params(3).seed(1).fit(&observations).unwrap();
        let mut memberships = model.memberships().to_vec();
        memberships.sort_unstable();
        assert_eq!(memberships, vec![0, 1, 2]);
        assert_abs_diff_eq!(model.inertia(), 0.);
    }

    #[test]
    fn precomputed_centroids_must_match_shape() {
        let observations = array![[0., 1.], [2., 3.], [4., 5.]];
        let res = KMeans::params(2)
            .init_method(KMeansInit::Precomputed(array![[0.], [1.]]))
            .fit(&observations);
        assert!(matches!(
            res,
            Err(KMeansError::InvalidInitialCentroids {
                expected: (2, 2),
                actual: (2, 1)
            })
        ));
    }

    #[test]
    fn invalid_params_surface_through_fit() {
        let observations = array![[0., 1.], [2., 3.]];
        let res = KMeans::params(0).fit(&observations);
        assert!(matches!(
            res,
            Err(KMeansError::InvalidParams(crate::KMeansParamsError::NClusters))
        ));
    }
}
