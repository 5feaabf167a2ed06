//! `clusterviz` partitions a table of row-records into `k` clusters and keeps a set of linked
//! chart views in sync with the resulting labels.
//!
//! ## The big picture
//!
//! The workspace is split the same way a classical ML toolkit is:
//!
//! * this crate holds the shared vocabulary: the row-record [table](dataset::Table), the
//!   [field selector](dataset::select_fields) turning a table into a numeric matrix, the
//!   [label writer](dataset::write_labels), the error type and the `Fit`/`Transformer`
//!   traits every algorithm implements;
//! * `clusterviz-preprocessing` provides the z-score standardizer;
//! * `clusterviz-kmeans` provides the k-means engine;
//! * `clusterviz-sync` glues everything together: it runs the clustering pipeline against a
//!   [`ClusterContext`] and drives the registered chart views through their update sequence;
//! * `clusterviz-datasets` generates synthetic tables for tests and demos.
//!
//! [`ClusterContext`]: ../clusterviz_sync/struct.ClusterContext.html

pub mod dataset;
pub mod error;
mod param_guard;
pub mod prelude;
pub mod traits;

pub use dataset::{
    select_fields, unique_fields, write_labels, Float, Record, Table, Value, CLUSTER_FIELD,
};
pub use param_guard::ParamGuard;
