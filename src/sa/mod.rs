//! Simulated Annealing (SA).
//!
//! A stochastic single-flip walk over spin assignments. Improving flips
//! are always taken; a non-improving flip of cost `delta` is taken with
//! probability `exp(-delta / T)`. The temperature `T` is multiplied by a
//! fixed cooling rate after every proposal, so the walk drifts from
//! exploration toward pure descent.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::{SaConfig, MIN_TEMPERATURE};
pub use runner::{SaResult, SaRunner};
