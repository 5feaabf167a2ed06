//! The clustering entry point
use std::collections::BTreeSet;

use clusterviz::dataset::{select_fields, unique_fields, write_labels, Table, CLUSTER_FIELD};
use clusterviz::prelude::*;
use clusterviz_kmeans::{Distance, KMeans, KMeansError, KMeansInit, KMeansParams, L2Dist};
use clusterviz_preprocessing::{standardize, Error as PreprocessingError};
use ndarray::{Array1, Array2};
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::SyncError;
use crate::palette::Palette;
use crate::partition::PartitionMap;
use crate::synchronizer::{Synchronizer, ViewState};
use crate::view::{ViewId, ViewRegistry};

/// The shared state a clustering run reads and updates
///
/// A run needs exclusive access for its whole duration: callers that share a context between
/// threads must serialize runs themselves, e.g. behind a `Mutex`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClusterContext {
    /// Rows shown by every view. Runs add or overwrite their `cluster` field and leave every
    /// other field as it was: a table whose rows share one set of fields keeps that property,
    /// while fields missing from some rows (outside the clustered variables) stay missing.
    pub dataset: Table,
    /// Fields clustered when a run does not name its own
    pub variables: Vec<String>,
    /// Fields hidden from the axes of each view
    pub partition: PartitionMap,
}

impl ClusterContext {
    pub fn new<S: Into<String>>(dataset: Table, variables: impl IntoIterator<Item = S>) -> Self {
        ClusterContext {
            dataset,
            variables: variables.into_iter().map(Into::into).collect(),
            partition: PartitionMap::new(),
        }
    }

    pub fn with_partition(mut self, partition: PartitionMap) -> Self {
        self.partition = partition;
        self
    }
}

/// Validated parameters of a clustering run
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterValidParams<D: Distance<f64>> {
    n_clusters: usize,
    kmeans: KMeansParams<f64, D>,
    color_targets: BTreeSet<ViewId>,
    variables: Option<Vec<String>>,
    palette: Palette,
    standardize: bool,
    hide_cluster_axis: bool,
}

/// Builder for the parameters of a clustering run
///
/// Only the number of clusters is required. The defaults are:
/// * no color targets
/// * the variables of the [`ClusterContext`]
/// * the `Category10` palette
/// * at most 100 iterations, tolerance `1e-6`, k-means++ initialization, no seed, [`L2Dist`]
/// * standardized fields
/// * the `cluster` axis hidden on every view
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterParams<D: Distance<f64> = L2Dist>(ClusterValidParams<D>);

impl ClusterParams<L2Dist> {
    pub fn new(n_clusters: usize) -> Self {
        ClusterParams(ClusterValidParams {
            n_clusters,
            kmeans: KMeans::params(n_clusters),
            color_targets: BTreeSet::new(),
            variables: None,
            palette: Palette::default(),
            standardize: true,
            hide_cluster_axis: true,
        })
    }
}

impl<D: Distance<f64>> ClusterParams<D> {
    /// Views recolored by cluster. The other views keep their coloring.
    pub fn color_targets(mut self, targets: impl IntoIterator<Item = ViewId>) -> Self {
        self.0.color_targets = targets.into_iter().collect();
        self
    }

    /// Fields to cluster on, instead of the context's variables
    pub fn variables<S: Into<String>>(mut self, variables: impl IntoIterator<Item = S>) -> Self {
        self.0.variables = Some(variables.into_iter().map(Into::into).collect());
        self
    }

    pub fn palette<P: Into<Palette>>(mut self, palette: P) -> Self {
        self.0.palette = palette.into();
        self
    }

    pub fn max_n_iterations(mut self, max_n_iterations: u64) -> Self {
        self.0.kmeans = self.0.kmeans.max_n_iterations(max_n_iterations);
        self
    }

    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.0.kmeans = self.0.kmeans.tolerance(tolerance);
        self
    }

    pub fn init_method(mut self, init: KMeansInit<f64>) -> Self {
        self.0.kmeans = self.0.kmeans.init_method(init);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.0.kmeans = self.0.kmeans.seed(seed);
        self
    }

    /// Distance used to assign rows to centroids
    pub fn distance<D2: Distance<f64>>(self, dist_fn: D2) -> ClusterParams<D2> {
        let ClusterValidParams {
            n_clusters,
            kmeans,
            color_targets,
            variables,
            palette,
            standardize,
            hide_cluster_axis,
        } = self.0;
        ClusterParams(ClusterValidParams {
            n_clusters,
            kmeans: kmeans.dist_fn(dist_fn),
            color_targets,
            variables,
            palette,
            standardize,
            hide_cluster_axis,
        })
    }

    /// Whether fields are brought to zero mean and unit variance before clustering
    pub fn standardize(mut self, standardize: bool) -> Self {
        self.0.standardize = standardize;
        self
    }

    /// Whether the `cluster` field is added to the hidden axes of every view
    pub fn hide_cluster_axis(mut self, hide: bool) -> Self {
        self.0.hide_cluster_axis = hide;
        self
    }

    /// Validates the parameters and runs the clustering
    pub fn run(
        &self,
        ctx: &mut ClusterContext,
        views: &mut ViewRegistry,
    ) -> Result<ClusterReport, SyncError> {
        self.check_ref()?.run(ctx, views)
    }
}

impl<D: Distance<f64>> ParamGuard for ClusterParams<D> {
    type Checked = ClusterValidParams<D>;
    type Error = SyncError;

    fn check_ref(&self) -> Result<&Self::Checked, Self::Error> {
        self.0
            .kmeans
            .check_ref()
            .map_err(|err| SyncError::InvalidParams(err.to_string()))?;
        self.0.palette.check()?;
        match &self.0.variables {
            Some(variables) if variables.is_empty() => Err(SyncError::InvalidParams(
                "no variables to cluster on".into(),
            )),
            _ => Ok(&self.0),
        }
    }

    fn check(self) -> Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}

impl<D: Distance<f64>> ClusterValidParams<D> {
    pub fn n_clusters(&self) -> usize {
        self.n_clusters
    }

    pub fn color_targets(&self) -> &BTreeSet<ViewId> {
        &self.color_targets
    }

    pub fn variables(&self) -> Option<&[String]> {
        self.variables.as_deref()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn standardize(&self) -> bool {
        self.standardize
    }

    pub fn hide_cluster_axis(&self) -> bool {
        self.hide_cluster_axis
    }

    /// Partitions the context's dataset and synchronizes the views with the result.
    ///
    /// Runs in this order:
    /// 1. select the variables (the context's unless overridden), failing on any value that is
    ///    not a number
    /// 2. standardize a copy of the dataset, when enabled
    /// 3. run k-means on the selected fields
    /// 4. write the labels into the `cluster` field of the original rows
    /// 5. hide the `cluster` axis on every view, when enabled
    /// 6. synchronize every view
    ///
    /// Errors raised up to step 3 leave the context and the views untouched. A view failure
    /// leaves the labels written and the earlier views updated.
    pub fn run(
        &self,
        ctx: &mut ClusterContext,
        views: &mut ViewRegistry,
    ) -> Result<ClusterReport, SyncError> {
        if let Some(unknown) = self.color_targets.iter().find(|&&id| !views.contains(id)) {
            return Err(SyncError::InvalidParams(format!(
                "color target {} is not registered",
                unknown
            )));
        }
        let color = self.palette.resolve()?;

        let variables = unique_fields(self.variables.as_ref().unwrap_or(&ctx.variables));
        if variables.is_empty() {
            return Err(SyncError::InvalidParams(
                "no variables to cluster on".into(),
            ));
        }

        let n_clusters = self.n_clusters();
        let records = self.records(&ctx.dataset, &variables, n_clusters)?;
        debug!(
            rows = records.nrows(),
            ?variables,
            standardized = self.standardize,
            "clustering"
        );

        let model = self
            .kmeans
            .fit(&records)
            .map_err(|err: KMeansError| SyncError::from(err))?;
        info!(
            n_clusters,
            iterations = model.n_iterations(),
            converged = model.converged(),
            errors = ?model.errors().to_vec(),
            centroids = ?model.centroids().outer_iter().map(|c| c.to_vec()).collect::<Vec<_>>(),
            "k-means finished"
        );

        write_labels(&mut ctx.dataset, model.memberships())?;

        for view in views.ids() {
            let hidden = ctx.partition.entry(view);
            if self.hide_cluster_axis {
                hidden.insert(CLUSTER_FIELD.to_string());
            }
        }

        let view_states = Synchronizer::new(
            &ctx.dataset,
            &ctx.partition,
            &self.color_targets,
            color.point_color_fn(),
        )
        .run(views)?;

        Ok(ClusterReport {
            centroids: model.centroids().clone(),
            errors: model.errors().clone(),
            sizes: model.cluster_sizes().clone(),
            n_iterations: model.n_iterations(),
            converged: model.converged(),
            assignment: model.into_memberships(),
            variables,
            standardized: self.standardize,
            view_states,
        })
    }

    /// The matrix handed to k-means
    fn records(
        &self,
        dataset: &Table,
        variables: &[String],
        n_clusters: usize,
    ) -> Result<Array2<f64>, SyncError> {
        if !self.standardize {
            return Ok(select_fields(dataset, variables)?);
        }
        let scaled = standardize(dataset, variables).map_err(|err| match err {
            PreprocessingError::NotEnoughSamples => SyncError::InsufficientData {
                n_samples: dataset.nrows(),
                n_clusters,
            },
            PreprocessingError::ClustervizError(err) => err.into(),
        })?;
        Ok(select_fields(&scaled, variables)?)
    }
}

/// What a clustering run produced
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterReport {
    /// Cluster index of every row, in dataset order
    pub assignment: Array1<usize>,
    /// Centroids with shape `(k, variables.len())`, in the clustered space: standardized units
    /// when `standardized` is set
    pub centroids: Array2<f64>,
    /// Sum of squared distances between each centroid and its rows
    pub errors: Array1<f64>,
    /// Number of rows in each cluster
    pub sizes: Array1<usize>,
    pub n_iterations: u64,
    /// False when k-means stopped at the iteration limit
    pub converged: bool,
    /// The fields clustered on, in column order of `centroids`
    pub variables: Vec<String>,
    pub standardized: bool,
    /// Final state of every view, in registry order
    pub view_states: Vec<(ViewId, ViewState)>,
}

impl ClusterReport {
    pub fn n_clusters(&self) -> usize {
        self.centroids.nrows()
    }
}
