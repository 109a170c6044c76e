//! Random-walk jigsaw generation on a 2-D grid.
//!
//! Main components:
//! - [`types`] — shared aliases, piece ids and diagonal directions.
//! - [`cell`] — a single grid position and its bonds.
//! - [`grid`] — cell storage, border masks and the active frontier.
//! - [`config`] — parameters for seeding, growth and full runs.
//! - [`error`] — seeding and configuration errors.
//! - [`seeder`] — initial seed placement.
//! - [`growth`] — simultaneous growth steps and the convergence loop.
//! - [`completer`] — fills the gaps left after growth stalls.
//! - [`boundary`] — quarter-arc outlines for renderers.
//! - [`pipeline`] — seed, grow and complete in one call.

pub mod boundary;
pub mod cell;
pub mod completer;
pub mod config;
pub mod error;
pub mod grid;
pub mod growth;
pub mod pipeline;
pub mod seeder;
pub mod types;
