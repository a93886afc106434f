//! Test utilities and helpers for the concordance project.
//!
//! This crate provides:
//! - Directory and path management for the sample texts under `test/samples`
//! - Generation of synthetic texts with known word counts
//!
//! # Usage
//!
//! This crate is intended for use within the project's test suites and is not
//! published.

pub mod data_gen;
pub mod dirs;
