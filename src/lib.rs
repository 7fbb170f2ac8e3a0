//! A&R Radar Library
//!
//! Breakout-potential scoring for emerging artists: context assembly from
//! upstream providers, seven dimension scorers, a risk-adjusted composite
//! and persisted score snapshots.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod persistence;
