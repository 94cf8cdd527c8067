// Pipelines: end-to-end workflows built on the dataset and skill counter.

pub mod analyze;
