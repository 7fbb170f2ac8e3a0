pub mod context_builder;
pub mod explanation;
pub mod math;
pub mod scoring;
pub mod scoring_service;
