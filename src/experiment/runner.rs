//! Sweep execution.

use super::config::{instance_seed, ExperimentConfig};
use super::report::ReportRow;
use crate::error::{IsingError, IsingResult};
use crate::model::generate_symmetric;
use std::time::Instant;
use tracing::{debug, info};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Runs every configured algorithm over the instance sweep.
pub struct ExperimentRunner;

impl ExperimentRunner {
    /// Runs the full sweep and returns the rows in (size, instance,
    /// algorithm) order.
    pub fn run(config: &ExperimentConfig) -> IsingResult<Vec<ReportRow>> {
        config.validate().map_err(IsingError::InvalidConfig)?;

        let jobs: Vec<(usize, usize)> = config
            .sizes()
            .into_iter()
            .flat_map(|n| (0..config.instances_per_size).map(move |i| (n, i)))
            .collect();
        info!(
            jobs = jobs.len(),
            algorithms = config.algorithms.len(),
            "starting sweep"
        );

        let per_job = Self::run_jobs(config, &jobs)?;
        Ok(per_job.into_iter().flatten().collect())
    }

    #[cfg(feature = "parallel")]
    fn run_jobs(
        config: &ExperimentConfig,
        jobs: &[(usize, usize)],
    ) -> IsingResult<Vec<Vec<ReportRow>>> {
        if config.parallel {
            jobs.par_iter()
                .map(|&(n, instance)| Self::run_instance(config, n, instance))
                .collect()
        } else {
            jobs.iter()
                .map(|&(n, instance)| Self::run_instance(config, n, instance))
                .collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn run_jobs(
        config: &ExperimentConfig,
        jobs: &[(usize, usize)],
    ) -> IsingResult<Vec<Vec<ReportRow>>> {
        if config.parallel {
            tracing::warn!(
                "parallel sweep requested without the `parallel` feature; running sequentially"
            );
        }
        jobs.iter()
            .map(|&(n, instance)| Self::run_instance(config, n, instance))
            .collect()
    }

    /// Generates instance `instance` of size `n` and runs each configured
    /// algorithm on it.
    pub fn run_instance(
        config: &ExperimentConfig,
        n: usize,
        instance: usize,
    ) -> IsingResult<Vec<ReportRow>> {
        let seed = instance_seed(n, instance);
        let matrix = generate_symmetric(n, seed);
        let mut rows = Vec::with_capacity(config.algorithms.len());

        for &algorithm in &config.algorithms {
            if !config.runs(algorithm, n) {
                continue;
            }

            let solver_seed = algorithm.is_stochastic().then_some(seed);
            let start = Instant::now();
            let result = algorithm.solve(
                &matrix,
                solver_seed,
                &config.local_search,
                &config.sa,
                &config.grasp,
            )?;
            let time_ms = start.elapsed().as_secs_f64() * 1000.0;

            debug!(n, instance, %algorithm, value = result.value, time_ms, "solved");
            rows.push(ReportRow {
                n,
                instance,
                algorithm,
                value: result.value,
                time_ms,
            });
        }

        info!("Completed n={n} instance={instance}");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiment::Algorithm;
    use crate::grasp::GraspConfig;

    fn small() -> ExperimentConfig {
        ExperimentConfig::default()
            .with_sizes(4, 8, 2)
            .with_instances_per_size(2)
            .with_exhaustive_limit(6)
            .with_grasp(GraspConfig::default().with_max_iterations(5))
    }

    #[test]
    fn test_row_layout() {
        let rows = ExperimentRunner::run(&small()).unwrap();
        // sizes 4 and 6 run all five, size 8 skips exhaustive
        assert_eq!(rows.len(), 2 * 5 + 2 * 5 + 2 * 4);
        assert!(rows
            .iter()
            .filter(|r| r.algorithm == Algorithm::Exhaustive)
            .all(|r| r.n <= 6));
        assert_eq!((rows[0].n, rows[0].instance), (4, 0));
        assert_eq!(rows[0].algorithm, Algorithm::Exhaustive);
        let last = rows.last().unwrap();
        assert_eq!((last.n, last.instance, last.algorithm), (8, 1, Algorithm::Grasp));
    }

    #[test]
    fn test_exhaustive_is_lower_bound() {
        let rows = ExperimentRunner::run(&small()).unwrap();
        for chunk in rows.chunk_by(|a, b| a.n == b.n && a.instance == b.instance) {
            if let Some(exact) = chunk.iter().find(|r| r.algorithm == Algorithm::Exhaustive) {
                assert!(chunk.iter().all(|r| exact.value <= r.value));
            }
        }
    }

    #[test]
    fn test_values_reproducible() {
        let a = ExperimentRunner::run(&small()).unwrap();
        let b = ExperimentRunner::run(&small()).unwrap();
        let values = |rows: &[ReportRow]| rows.iter().map(|r| r.value).collect::<Vec<_>>();
        assert_eq!(values(&a), values(&b));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let seq = ExperimentRunner::run(&small()).unwrap();
        let par = ExperimentRunner::run(&small().with_parallel(true)).unwrap();
        let key = |rows: &[ReportRow]| {
            rows.iter()
                .map(|r| (r.n, r.instance, r.algorithm, r.value))
                .collect::<Vec<_>>()
        };
        assert_eq!(key(&seq), key(&par));
    }

    #[test]
    fn test_stochastic_rows_use_instance_seed() {
        let config = small().with_algorithms(vec![Algorithm::SimulatedAnnealing]);
        let rows = ExperimentRunner::run_instance(&config, 6, 1).unwrap();
        let matrix = generate_symmetric(6, instance_seed(6, 1));
        let sa = config.sa.clone().with_seed(instance_seed(6, 1));
        let expected = crate::sa::SaRunner::run(&matrix, &sa).unwrap().solution;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].value, expected.value);
    }

    #[test]
    fn test_invalid_config() {
        let config = small().with_sizes(4, 8, 0);
        assert!(matches!(
            ExperimentRunner::run(&config),
            Err(IsingError::InvalidConfig(_))
        ));
    }
}
