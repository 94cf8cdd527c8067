// skillscan: find the most in-demand skills for a job title.
//
// This is the library root. The skill counter is the core; the dataset,
// pipeline and output modules are the CLI's plumbing around it.

pub mod config;
pub mod dataset;
pub mod output;
pub mod pipeline;
pub mod skills;
