//! Utility functions shared by the analysis components.

pub mod stats;

pub use stats::{mean, population_std_dev, population_variance};
