pub mod scoring_config;
