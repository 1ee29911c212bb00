//! Parallel bootstrap bands for replicate sweeps.
//!
//! ## Purpose
//!
//! A sweep with many x-values and thousands of resamples per group spends
//! almost all of its time drawing resamples. Groups are independent, so each
//! one is estimated on its own thread.
//!
//! ## Design notes
//!
//! * **Parallelism**: Uses `rayon` over the groups of replicates.
//! * **Reproducibility**: Each group reseeds its own generator, so the band
//!   equals the one from `BootstrapInterval::band` bit for bit.
//! * **Fallback**: Without the `cpu` feature the groups run in order.
//!
//! ## Invariants
//!
//! * The band has one entry per distinct x, ascending.
//!
//! ## Non-goals
//!
//! * This module does not choose the level, resamples or seed.

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use num_traits::Float;

// Export dependencies from zerocross crate
use zerocross::internals::evaluation::bootstrap::{
    check_replicates, group_replicates, BootstrapInterval, MeanBand, MeanInterval,
};
use zerocross::internals::primitives::errors::ZeroCrossError;

/// Per-x means and bootstrap intervals of replicate `values` observed at `x`.
pub fn bootstrap_band<T>(
    method: &BootstrapInterval<T>,
    x: &[T],
    values: &[T],
) -> Result<MeanBand<T>, ZeroCrossError>
where
    T: Float + Send + Sync,
{
    method.validate()?;
    check_replicates(x, values)?;

    let groups = group_replicates(x, values);
    let estimates = estimate_groups(method, &groups);

    log::debug!(
        "parallel bootstrap band: {} value(s) over {} x-value(s), {} resamples",
        values.len(),
        estimates.len(),
        method.resamples
    );

    Ok(MeanBand::from_estimates(estimates))
}

#[cfg(feature = "cpu")]
fn estimate_groups<T>(
    method: &BootstrapInterval<T>,
    groups: &[(T, Vec<T>)],
) -> Vec<(T, MeanInterval<T>)>
where
    T: Float + Send + Sync,
{
    groups
        .par_iter()
        .map(|(xg, vals)| (*xg, method.estimate_unchecked(vals)))
        .collect()
}

#[cfg(not(feature = "cpu"))]
fn estimate_groups<T>(
    method: &BootstrapInterval<T>,
    groups: &[(T, Vec<T>)],
) -> Vec<(T, MeanInterval<T>)>
where
    T: Float + Send + Sync,
{
    groups
        .iter()
        .map(|(xg, vals)| (*xg, method.estimate_unchecked(vals)))
        .collect()
}
