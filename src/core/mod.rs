//! Sampling core: command pipelines and the statistics built on them

pub mod pipeline;
pub mod sampler;
