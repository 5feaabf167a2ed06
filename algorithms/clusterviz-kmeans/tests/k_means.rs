use approx::assert_abs_diff_eq;
use clusterviz::traits::{Fit, Predict};
use clusterviz_datasets::generate;
use clusterviz_kmeans::{FnDistance, KMeans, KMeansError, KMeansInit, L1Dist, LInfDist};
use ndarray::{array, s, Array1, ArrayView1, Axis};
use ndarray_rand::rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

#[test]
fn recovers_well_separated_blobs() {
    let mut rng = Xoshiro256Plus::seed_from_u64(42);
    let expected_centroids = array![[0., 1.], [-10., 20.], [-1., 10.]];
    let observations = generate::blobs(100, &expected_centroids, &mut rng);

    let model = KMeans::params(3)
        .seed(7)
        .init_method(KMeansInit::MostDistant)
        .fit(&observations)
        .unwrap();
    assert!(model.converged());

    // every blob ends up in a single cluster, centered on its centroid
    for (blob, expected) in expected_centroids.rows().into_iter().enumerate() {
        let memberships = model.memberships().slice(s![blob * 100..(blob + 1) * 100]);
        let cluster = memberships[0];
        assert!(memberships.iter().all(|&c| c == cluster));
        assert_abs_diff_eq!(
            model.centroids().index_axis(Axis(0), cluster),
            expected,
            epsilon = 0.5
        );
        assert_eq!(model.cluster_sizes()[cluster], 100);
    }
}

#[test]
fn indices_lie_within_k() {
    let mut rng = Xoshiro256Plus::seed_from_u64(1);
    let centroids = array![[0., 0., 0.], [5., 5., 5.]];
    let observations = generate::blobs(20, &centroids, &mut rng);

    for k in 1..=8 {
        let model = KMeans::params(k).seed(k as u64).fit(&observations).unwrap();
        assert_eq!(model.memberships().len(), observations.nrows());
        assert!(model.memberships().iter().all(|&c| c < k));
        assert_eq!(model.centroids().dim(), (k, 3));
        assert_eq!(model.errors().len(), k);
    }
}

#[test]
fn same_seed_same_partition() {
    let mut rng = Xoshiro256Plus::seed_from_u64(5);
    let centroids = array![[0., 0.], [3., 3.], [6., 0.]];
    let observations = generate::blobs(30, &centroids, &mut rng);

    for init in &[
        KMeansInit::Random,
        KMeansInit::KMeansPlusPlus,
        KMeansInit::MostDistant,
        KMeansInit::Precomputed(array![[1., 1.], [2., 2.], [3., 3.]]),
    ] {
        let fit = || {
            KMeans::params(3)
                .seed(99)
                .init_method(init.clone())
                .fit(&observations)
                .unwrap()
        };
        let (first, second) = (fit(), fit());
        assert_eq!(first.memberships(), second.memberships());
        assert_eq!(first.centroids(), second.centroids());
        assert_eq!(first.n_iterations(), second.n_iterations());
    }
}

#[test]
fn insufficient_data() {
    let observations = array![[1., 2.], [3., 4.], [5., 6.]];
    let err = KMeans::params(5).fit(&observations).unwrap_err();
    assert!(matches!(
        err,
        KMeansError::InsufficientData {
            n_samples: 3,
            n_clusters: 5
        }
    ));
    assert_eq!(err.to_string(), "cannot find 5 clusters in 3 observations");
}

#[test]
fn empty_input() {
    let observations = ndarray::Array2::<f64>::zeros((0, 2));
    let res = KMeans::params(1).fit(&observations);
    assert!(matches!(res, Err(KMeansError::InsufficientData { .. })));
}

#[test]
fn alternative_distances() {
    let observations = array![[0., 0.], [0., 1.], [1., 0.], [20., 20.], [20., 21.], [21., 20.]];
    let expected = |memberships: &Array1<usize>| {
        assert_eq!(memberships[0], memberships[1]);
        assert_eq!(memberships[0], memberships[2]);
        assert_eq!(memberships[3], memberships[4]);
        assert_eq!(memberships[3], memberships[5]);
        assert_ne!(memberships[0], memberships[3]);
    };

    let l1 = KMeans::params_with(2, L1Dist)
        .seed(3)
        .init_method(KMeansInit::MostDistant)
        .fit(&observations)
        .unwrap();
    expected(l1.memberships());
    let linf = KMeans::params_with(2, LInfDist)
        .seed(3)
        .init_method(KMeansInit::MostDistant)
        .fit(&observations)
        .unwrap();
    expected(linf.memberships());

    let squared = FnDistance::new(|a: ArrayView1<f64>, b: ArrayView1<f64>| {
        let diff = &a - &b;
        diff.dot(&diff)
    });
    let custom = KMeans::params_with(2, squared)
        .seed(3)
        .init_method(KMeansInit::MostDistant)
        .fit(&observations)
        .unwrap();
    expected(custom.memberships());
}

#[test]
fn predicts_new_observations() {
    let observations = array![[0., 0.], [1., 1.], [10., 10.], [11., 11.]];
    let model = KMeans::params(2)
        .init_method(KMeansInit::Precomputed(array![[0., 0.], [10., 10.]]))
        .fit(&observations)
        .unwrap();

    let predicted = model.predict(&array![[0.2, 0.1], [12., 9.]]);
    assert_eq!(predicted, array![0, 1]);
}
