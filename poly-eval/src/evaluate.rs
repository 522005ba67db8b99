//! Evaluation of a polynomial at a set of points, serially or on a worker
//! pool.
//!
//! Coefficients are ordered from highest degree to constant term, so
//! `[2.0, 1.0]` is the polynomial `2x + 1`. Every strategy computes each
//! point with [`eval_point`], and workers in the threaded strategy write
//! disjoint ranges of the output, so the threaded results are bit-for-bit
//! identical to the serial ones.

use anyhow::{bail, Error};
use log::info;
use rayon::prelude::*;
use std::str::FromStr;

/// Evaluate a polynomial at a single point by direct power summation.
///
/// Each descending integer power of `x` is raised explicitly and the
/// weighted terms are accumulated in coefficient order. Not Horner's rule:
/// the term-by-term order fixes the low bits of the sum, and every
/// execution strategy must share it. An empty coefficient slice evaluates
/// to zero. Non-finite inputs propagate per IEEE-754.
#[inline]
pub fn eval_point(coeffs: &[f64], x: f64) -> f64 {
    let degree = coeffs.len() as i32 - 1;
    coeffs
        .iter()
        .enumerate()
        .fold(0.0_f64, |acc, (j, &c)| acc + c * x.powi(degree - j as i32))
}

/// Evaluate a polynomial over a set of points, producing one result per
/// point in input order. The output always has the same length as `xs`.
pub trait Evaluate {
    /// Evaluate `coeffs` (highest degree first) at every point of `xs`
    fn evaluate(&self, coeffs: &[f64], xs: &[f64]) -> Vec<f64>;
}

/// Single-threaded evaluation, points visited in index order
pub struct Serial;

impl Evaluate for Serial {
    fn evaluate(&self, coeffs: &[f64], xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| eval_point(coeffs, x)).collect()
    }
}

/// Settings for threaded evaluation
pub struct Threaded {
    /// Number of worker threads, 0 lets rayon size the pool
    pub num_threads: usize,

    /// Lower bound on the number of points handed to a single worker
    pub min_chunk: usize,
}

impl Threaded {
    /// Create a new Threaded with default settings.
    pub fn new() -> Threaded {
        Threaded {
            num_threads: 0,
            min_chunk: 1,
        }
    }
}

impl Default for Threaded {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluate for Threaded {
    fn evaluate(&self, coeffs: &[f64], xs: &[f64]) -> Vec<f64> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.num_threads)
            .build()
            .unwrap();

        // one contiguous chunk of points per worker; each worker writes
        // only its own range of the output
        let chunk_size = (xs.len() as f64 / thread_pool.current_num_threads() as f64).ceil() as usize;
        let chunk_size = std::cmp::max(self.min_chunk.max(1), chunk_size);

        info!(
            "evaluating {} points in chunks of {} on {} threads",
            xs.len(),
            chunk_size,
            thread_pool.current_num_threads()
        );

        let mut ys = vec![0.0; xs.len()];
        thread_pool.install(|| {
            xs.par_chunks(chunk_size)
                .zip(ys.par_chunks_mut(chunk_size))
                .for_each(|(xs, ys)| {
                    for (&x, y) in xs.iter().zip(ys) {
                        *y = eval_point(coeffs, x);
                    }
                });
        });
        ys
    }
}

/// Execution strategy for a polynomial evaluation
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Strategy {
    /// One point at a time on the calling thread
    Serial,
    /// Points partitioned across a rayon worker pool
    Threaded,
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "serial" => Ok(Strategy::Serial),
            "threaded" => Ok(Strategy::Threaded),
            _ => bail!("strategy not recognized: {}", s),
        }
    }
}

/// Evaluate `coeffs` at `xs` with the chosen strategy. `num_threads` only
/// applies to [`Strategy::Threaded`], where 0 lets rayon size the pool.
pub fn evaluate(coeffs: &[f64], xs: &[f64], strategy: Strategy, num_threads: usize) -> Vec<f64> {
    match strategy {
        Strategy::Serial => Serial.evaluate(coeffs, xs),
        Strategy::Threaded => Threaded {
            num_threads,
            ..Threaded::new()
        }
        .evaluate(coeffs, xs),
    }
}
