//! `clusterviz-kmeans` is the partitioning engine of the `clusterviz` workspace.
//!
//! ## The big picture
//!
//! Given an `n × d` numeric matrix and a number of clusters `k`, the engine returns the cluster
//! index of every row, the `k` centroids, a per-centroid error and size, and the number of
//! iterations it took. The `clusterviz-sync` crate feeds its output into the linked chart views.
//!
//! ## Current state
//!
//! * [K-Means](KMeans), Lloyd's algorithm with parallel assignment
//! * initialization by [precomputed centroids, k-means++, random picks or the farthest-point
//!   heuristic](KMeansInit)
//! * [distance functions](Distance): [`L2Dist`] (default), [`L1Dist`], [`LInfDist`] and
//!   user-supplied closures through [`FnDistance`]
//!
//! Runs are reproducible: the same input, parameters and [`seed`](KMeansParams::seed) always
//! yield the same memberships and centroids.
mod distance;
#[allow(clippy::new_ret_no_self)]
mod k_means;

pub use distance::*;
pub use k_means::*;
