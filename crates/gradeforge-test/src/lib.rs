//! Shared test fixtures for GradeForge crates.
//!
//! This crate provides achievement builders and sample transcripts for
//! testing. It depends only on `gradeforge-core`.
//!
//! - [`builder`] - Fluent [`AchievementBuilder`] with sensible defaults
//! - [`transcript`] - A realistic sample transcript and a few small pools
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! gradeforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use gradeforge_test::{sample_transcript, AchievementBuilder};
//! ```

pub mod builder;
pub mod transcript;

pub use builder::AchievementBuilder;
pub use transcript::{ids, sample_transcript, subfield_pair};
