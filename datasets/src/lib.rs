//! `clusterviz-datasets` provides synthetic datasets ready to be used in tests, benchmarks and
//! examples of the `clusterviz` workspace.
//!
//! ## Current State
//!
//! * [`generate::blobs`]: gaussian blobs around given centroids, as a matrix
//! * [`generate::blobs_table`]: the same blobs as a [`Table`](clusterviz::Table) with named
//!   numeric fields and a categorical field naming the blob of origin

pub mod generate;
