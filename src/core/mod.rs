pub mod config;
pub mod generator;
pub mod punctuation;
pub mod registry;
pub mod sampler;
pub mod stress;
pub mod synth;
pub mod tables;
pub mod validate;
