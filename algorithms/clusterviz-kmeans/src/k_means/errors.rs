use thiserror::Error;

/// An error when fitting with an invalid hyperparameter
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KMeansParamsError {
    #[error("n_clusters cannot be 0")]
    NClusters,
    #[error("tolerance must be greater than 0")]
    Tolerance,
    #[error("max_n_iterations cannot be 0")]
    MaxIterations,
}

/// An error when modeling a KMeans algorithm
#[derive(Error, Debug, Clone)]
pub enum KMeansError {
    /// When any of the hyperparameters are set the wrong value
    #[error("Invalid hyperparameter: {0}")]
    InvalidParams(#[from] KMeansParamsError),
    /// When there are fewer observations than requested clusters
    #[error("cannot find {n_clusters} clusters in {n_samples} observations")]
    InsufficientData { n_samples: usize, n_clusters: usize },
    /// When the precomputed centroids do not match the number of clusters and features
    #[error("initial centroids have shape {actual:?}, expected {expected:?}")]
    InvalidInitialCentroids {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    /// When the observations have no features
    #[error("observations have no features")]
    Empty,
}
