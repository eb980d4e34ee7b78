//! Core trait abstractions.
//!
//! Each external source sits behind a trait so the pipeline can be exercised
//! with mocks (see [`crate::testing`]).

pub mod cross_reference;
pub mod model;
pub mod processor;
pub mod searcher;
