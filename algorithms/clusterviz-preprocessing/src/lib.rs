//! # Preprocessing
//! ## The Big Picture
//!
//! `clusterviz-preprocessing` is a crate in the `clusterviz` workspace. It provides the feature
//! standardization step of the clustering pipeline: fields measured on very different scales are
//! brought to zero mean and unit variance before distances between rows are computed, so that no
//! single field dominates the partitioning.
//!
//! ## Current state
//! `clusterviz-preprocessing` provides the following transformations:
//! - [Standard scaling](StandardScaler) of numeric matrices
//! - [Standard scaling](standardize) of named fields of a [`Table`](clusterviz::Table)

pub mod error;
mod standard_scaler;

pub use error::{Error, Result};
pub use standard_scaler::{standardize, FittedStandardScaler, FittedTableScaler, StandardScaler};
