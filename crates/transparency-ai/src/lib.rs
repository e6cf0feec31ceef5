//! Core library for the product transparency service.
//!
//! Holds the product data model, the transparency scoring rubric with its
//! recommendation engine, and the follow-up question generator backed by a
//! generative-language provider with a deterministic template fallback.

pub mod config;
pub mod error;
pub mod product;
pub mod questions;
pub mod scoring;
pub mod telemetry;
