// Copyright 2018 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use core::f64::consts::TAU;

use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_secure::rngs::mock::ReplaySource;
use rand_secure::variates::*;
use rand_secure::{CryptoSource, Error, Generator, SecureRng};

fn rng(seed: u64) -> CryptoSource<ChaCha8Rng> {
    CryptoSource::new(ChaCha8Rng::seed_from_u64(seed))
}

fn mean(xs: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = xs.fold((0.0, 0usize), |(s, n), x| (s + x, n + 1));
    sum / n as f64
}

#[test]
fn uniform_unit_range_and_mean() {
    let mut rng = rng(1);
    let m = mean((0..100_000).map(|_| {
        let x = rng.uniform_unit();
        assert!((0.0..1.0).contains(&x));
        x
    }));
    assert!((m - 0.5).abs() < 0.02, "mean {}", m);
}

#[test]
fn exponential_mean() {
    let mut rng = rng(2);
    let m = mean((0..100_000).map(|_| expo_variate(&mut rng, 2.0).unwrap()));
    assert!((m - 0.5).abs() < 0.5 * 0.05, "mean {}", m);
}

#[test]
fn gamma_shape_one_mean() {
    let mut rng = rng(3);
    let m = mean((0..10_000).map(|_| gamma_variate(&mut rng, 1.0, 1.0).unwrap()));
    assert!((m - 1.0).abs() < 0.05, "mean {}", m);
}

#[test]
fn gamma_and_beta_ranges() {
    let mut rng = rng(4);
    for &(a, b) in &[(0.01, 1.0), (0.5, 2.0), (1.0, 1.0), (3.0, 0.25), (50.0, 50.0)] {
        for _ in 0..2000 {
            assert!(gamma_variate(&mut rng, a, b).unwrap() >= 0.0);
            let x = beta_variate(&mut rng, a, b).unwrap();
            assert!((0.0..=1.0).contains(&x), "beta({}, {}) = {}", a, b, x);
        }
    }
    for &(a, b) in &[(0.0, 1.0), (1.0, 0.0), (-1.0, 1.0), (1.0, -2.0)] {
        assert!(matches!(gamma_variate(&mut rng, a, b), Err(Error::InvalidParameter(_))));
    }
}

#[test]
fn binomial_bounds() {
    let mut rng = rng(5);
    for &n in &[0u64, 1, 2, 9, 30, 500, 1_000_000] {
        for &p in &[0.0, 0.001, 0.2, 0.5, 0.8, 0.999, 1.0] {
            for _ in 0..200 {
                assert!(binomial_variate(&mut rng, n, p).unwrap() <= n);
            }
        }
    }
    for _ in 0..100 {
        assert_eq!(binomial_variate(&mut rng, 0, 0.5).unwrap(), 0);
        assert_eq!(binomial_variate(&mut rng, 10, 0.0).unwrap(), 0);
        assert_eq!(binomial_variate(&mut rng, 10, 1.0).unwrap(), 10);
    }
}

#[test]
fn triangular_bounds() {
    let mut rng = rng(6);
    for &(low, high, mode) in &[(0.0, 1.0, None), (-3.0, 5.0, Some(4.5)), (2.0, 2.5, Some(2.0))] {
        for _ in 0..5000 {
            let x = triangular(&mut rng, low, high, mode).unwrap();
            assert!(low <= x && x <= high, "{}", x);
        }
    }
    for &c in &[0.0, -7.5, 1e300] {
        assert_eq!(triangular(&mut rng, c, c, Some(c)).unwrap(), c);
    }
}

#[test]
fn von_mises_range() {
    let mut rng = rng(7);
    for &kappa in &[0.0, 1e-7, 0.5, 4.0, 700.0] {
        for &mu in &[0.0, 3.0, -10.0, 100.0] {
            for _ in 0..1000 {
                let theta = von_mises_variate(&mut rng, mu, kappa).unwrap();
                assert!((0.0..TAU).contains(&theta), "{}", theta);
            }
        }
    }
    // kappa = 0 is the uniform angle
    let m = mean((0..10_000).map(|_| von_mises_variate(&mut rng, 1.0, 0.0).unwrap()));
    assert!((m - TAU / 2.0).abs() < 0.1, "mean {}", m);
}

#[test]
fn gauss_returns_paired_deviate() {
    let mut rng = Generator::with_source(ReplaySource::from_units(&[0.125, 0.5]));
    let x_tau = 0.125 * TAU;
    let g2rad = (-2.0 * (1.0f64 - 0.5).ln()).sqrt();

    assert_eq!(rng.gauss(0.0, 1.0).unwrap(), x_tau.cos() * g2rad);
    assert_eq!(rng.pending_gauss(), Some(x_tau.sin() * g2rad));
    // answered from the slot, with this call's parameters
    assert_eq!(rng.gauss(1.0, 2.0).unwrap(), 1.0 + x_tau.sin() * g2rad * 2.0);
    assert_eq!(rng.into_source().overdrawn(), 0);
}
