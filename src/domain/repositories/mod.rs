pub mod candidate_store;
pub mod context_provider;
