//! Test Module
//!
//! Aggregated test suite for the companion backend.
//!
//! ## Test Categories
//! - `guide_tests`: concern classification, resource selection, sympathy scoring
//! - `integration_tests`: full pipeline scenarios through `Companion`

pub mod guide_tests;
