//! # Cluster view synchronization
//!
//! `clusterviz-sync` partitions a shared tabular dataset with k-means and propagates the labels
//! into a set of linked chart views.
//!
//! ## The big picture
//!
//! A run, started from [`ClusterParams::run`], goes through:
//! * field selection: the clustered fields become a numeric matrix, and any value that is not a
//!   number aborts the run before anything is touched
//! * optional standardization of those fields
//! * k-means partitioning
//! * label writing: every row gets a `cluster` field holding its cluster index as text
//! * view synchronization: every registered [`ChartView`] loads the labelled rows and rebuilds
//!   its axes, the coloring targets are recolored by cluster, and all views re-render
//!
//! ## Example
//!
//! ```
//! use std::collections::BTreeSet;
//! use clusterviz::{Record, Table};
//! use clusterviz_sync::{
//!     AxisTransition, ChartView, ClusterContext, ClusterParams, PointColorFn, ViewError,
//!     ViewRegistry,
//! };
//!
//! struct Silent;
//!
//! impl ChartView for Silent {
//!     fn set_data(&mut self, _: &Table) -> Result<(), ViewError> { Ok(()) }
//!     fn render(&mut self, _: AxisTransition) -> Result<(), ViewError> { Ok(()) }
//!     fn create_axes(&mut self) -> Result<(), ViewError> { Ok(()) }
//!     fn set_color(&mut self, _: PointColorFn) -> Result<(), ViewError> { Ok(()) }
//!     fn hide_axis(&mut self, _: &BTreeSet<String>) -> Result<(), ViewError> { Ok(()) }
//! }
//!
//! let dataset: Table = vec![
//!     Record::new().with("x", 0.).with("y", 0.),
//!     Record::new().with("x", 0.5).with("y", 0.2),
//!     Record::new().with("x", 9.).with("y", 10.),
//!     Record::new().with("x", 10.).with("y", 9.5),
//! ]
//! .into();
//! let mut ctx = ClusterContext::new(dataset, vec!["x", "y"]);
//! let mut views = ViewRegistry::new();
//! let chart = views.register(Silent);
//!
//! let report = ClusterParams::new(2)
//!     .seed(42)
//!     .color_targets(vec![chart])
//!     .run(&mut ctx, &mut views)
//!     .unwrap();
//!
//! assert_eq!(report.assignment[0], report.assignment[1]);
//! assert_ne!(report.assignment[0], report.assignment[2]);
//! assert!(ctx.dataset[0].get("cluster").is_some());
//! assert!(ctx.partition.is_hidden(chart, "cluster"));
//! ```
pub mod error;
pub mod palette;
pub mod partition;
pub mod pipeline;
pub mod synchronizer;
pub mod view;

pub use error::{Capability, Result, SyncError, ViewError};
pub use palette::{Color, ColorMapper, NamedScheme, Palette, PointColorFn};
pub use partition::PartitionMap;
pub use pipeline::{ClusterContext, ClusterParams, ClusterReport, ClusterValidParams};
pub use synchronizer::{Synchronizer, ViewState};
pub use view::{AxisTransition, ChartView, ViewId, ViewRegistry};
