//! Random transaction sets and words for exercising trace analysis.

pub mod generator;
