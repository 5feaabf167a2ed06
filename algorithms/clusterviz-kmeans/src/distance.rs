//! Distance functions used in the assignment step of k-means
use std::marker::PhantomData;

use clusterviz::Float;
use ndarray::{ArrayView1, Zip};
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// A distance function between two observations of equal dimension
///
/// `rdistance` is a cheaper "reduced" distance that keeps the order of `distance`. It is what
/// k-means works with: observations are assigned by reduced distance, convergence is measured in
/// reduced distance, and the per-cluster error is the sum of reduced distances of its members.
pub trait Distance<F: Float>: Clone + Send + Sync {
    // Panics if a and b are not of equal dimension
    fn distance(&self, a: ArrayView1<F>, b: ArrayView1<F>) -> F;

    // Fast distance metric that keeps the order of the distance function
    fn rdistance(&self, a: ArrayView1<F>, b: ArrayView1<F>) -> F {
        self.distance(a, b)
    }
}

/// Manhattan distance
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct L1Dist;
impl<F: Float> Distance<F> for L1Dist {
    fn distance(&self, a: ArrayView1<F>, b: ArrayView1<F>) -> F {
        Zip::from(&a)
            .and(&b)
            .fold(F::zero(), |acc, &a, &b| acc + (a - b).abs())
    }
}

/// Euclidean distance, with the squared Euclidean distance as reduced distance
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct L2Dist;
impl<F: Float> Distance<F> for L2Dist {
    fn distance(&self, a: ArrayView1<F>, b: ArrayView1<F>) -> F {
        self.rdistance(a, b).sqrt()
    }

    fn rdistance(&self, a: ArrayView1<F>, b: ArrayView1<F>) -> F {
        Zip::from(&a).and(&b).fold(F::zero(), |acc, &a, &b| {
            let diff = a - b;
            acc + diff * diff
        })
    }
}

/// Chebyshev distance
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LInfDist;
impl<F: Float> Distance<F> for LInfDist {
    fn distance(&self, a: ArrayView1<F>, b: ArrayView1<F>) -> F {
        Zip::from(&a).and(&b).fold(F::zero(), |acc, &a, &b| {
            let diff = (a - b).abs();
            if diff > acc {
                diff
            } else {
                acc
            }
        })
    }
}

/// A user supplied distance function
///
/// The function is used both as distance and as reduced distance.
///
/// ```
/// use clusterviz_kmeans::{Distance, FnDistance};
/// use ndarray::{array, ArrayView1};
///
/// let cosine = FnDistance::new(|a: ArrayView1<f64>, b: ArrayView1<f64>| {
///     1. - a.dot(&b) / (a.dot(&a).sqrt() * b.dot(&b).sqrt())
/// });
/// let d = cosine.distance(array![1., 0.].view(), array![0., 2.].view());
/// assert_eq!(d, 1.);
/// ```
pub struct FnDistance<F, Func> {
    func: Func,
    phantom: PhantomData<fn() -> F>,
}

impl<F: Float, Func> FnDistance<F, Func>
where
    Func: Fn(ArrayView1<F>, ArrayView1<F>) -> F + Clone + Send + Sync,
{
    pub fn new(func: Func) -> Self {
        FnDistance {
            func,
            phantom: PhantomData,
        }
    }
}

impl<F, Func: Clone> Clone for FnDistance<F, Func> {
    fn clone(&self) -> Self {
        FnDistance {
            func: self.func.clone(),
            phantom: PhantomData,
        }
    }
}

impl<F, Func> std::fmt::Debug for FnDistance<F, Func> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnDistance")
    }
}

impl<F: Float, Func> Distance<F> for FnDistance<F, Func>
where
    Func: Fn(ArrayView1<F>, ArrayView1<F>) -> F + Clone + Send + Sync,
{
    fn distance(&self, a: ArrayView1<F>, b: ArrayView1<F>) -> F {
        (self.func)(a, b)
    }
}
